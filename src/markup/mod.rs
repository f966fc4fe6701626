//! Fragment model shared by every pass.

mod fragment;
mod tag;

pub use fragment::Fragment;
pub use tag::{CellKind, SpanKind, Tag};
