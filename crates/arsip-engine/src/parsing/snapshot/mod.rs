//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts parsed blocks to a stable one-line-per-block
//!   `Snap` for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for parser correctness (levels in
//!   range, parents point back at the right list item, no empty or adjacent
//!   text spans)
//!
//! Parsing behavior is pinned by snapshot tests over fixture articles
//! rather than a separate formal grammar.

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
