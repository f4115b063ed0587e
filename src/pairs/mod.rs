//! The editable pair list backing the input table.
//!
//! Rows are addressed positionally; operations follow copy-then-replace
//! semantics so the caller always works against the latest list.

mod list;

pub use list::{PairField, PairList, PairsError, TextPair};
