//! # Block Parsing
//!
//! Two-phase, line-oriented block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each trimmed line is matched
//!    against the prefix table and becomes a `LineClass`
//! 2. **Block Construction** (`builder`): a `BlockBuilder` keeps the open
//!    list contexts and emits `BlockNode`s
//!
//! ## Modules
//!
//! - **`types`**: `BlockNode`, `BlockKind`
//! - **`kinds`**: block kinds with owned prefixes (Heading, ListItem, Image)
//! - **`open`**: `open_line` prefix dispatch in precedence order
//! - **`classify`**: `LinePrefixClassifier` producing `LineClass`
//! - **`open_lists`**: `OpenLists`, the level-1/level-2 nesting context
//! - **`builder`**: `BlockBuilder` state machine
//!
//! ## Key Invariants
//!
//! - Nesting depth is at most 3
//! - A level-N list item only attaches under an open level-(N-1) item;
//!   otherwise the line is dropped
//! - Headings, images and paragraphs close every open list context
//! - One block per kept line, blank lines included

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod open;
pub mod open_lists;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LinePrefixClassifier};
pub use types::{BlockKind, BlockNode};
