//! Terminal and JSON rendering of the assembled catalog tree

mod config;
mod json;
mod tree;
mod utils;

pub use config::OutputConfig;
pub use json::print_json;
pub use tree::TreeFormatter;
pub use utils::{format_row_estimate, format_size};
