//! # Rendering
//!
//! Turns parsed articles into static HTML. The parsers never produce markup
//! themselves; escaping happens here, once, at the output boundary.

pub mod html;

pub use html::{render_article, render_blocks, render_paired};
