//! HTML renderer for element trees
//!
//! This module walks a tree of [`Node`](crate::Node)s, lowers components
//! through the variant tables and produces an HTML string.

pub mod config;
pub mod html;

pub use config::HtmlConfig;
pub use html::{render_html, HtmlBuilder};
