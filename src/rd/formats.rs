//! Output format implementations for tree serialization
//!
//! Parse trees and trace trees are serialized through their [`TreeSnapshot`](crate::rd::snapshot::TreeSnapshot):
//! - treeviz: the box-drawing diagram used for inspection and as test oracle
//! - json, yaml: structured dumps of the snapshot

pub mod json;
pub mod registry;
pub mod treeviz;
pub mod yaml;

pub use json::JsonFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
pub use yaml::YamlFormatter;
