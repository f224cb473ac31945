//! Helper functions for page rendering
//!
//! Dates, HTML fragments and URLs shared by the page templates and the
//! rich-text renderer.

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
