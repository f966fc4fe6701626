//! # pandoc-tablespan
//!
//! Pandoc filter that rewrites HTML tables carried in raw blocks so they
//! survive typeset output: colspan/rowspan cells are flattened into plain
//! cells, and every table gets a `<colgroup>` splitting the page width evenly
//! across its columns.
//!
//! ## Example
//!
//! ```no_run
//! use pandoc_tablespan::TableFilter;
//!
//! let input = std::fs::read_to_string("document.json").unwrap();
//! let filter = TableFilter::with_defaults();
//! let output = filter.filter_json(&input, "latex").unwrap();
//! println!("{}", output);
//! ```
//!
//! The passes also work on plain fragment lists:
//!
//! ```
//! use pandoc_tablespan::{Fragment, TableFilter};
//!
//! let fragments: Vec<Fragment> = ["<table>", "<tr>", "<td colspan=\"2\">", "A", "</td>", "</tr>"]
//!     .into_iter()
//!     .map(Fragment::html)
//!     .collect();
//! let html: String = TableFilter::with_defaults()
//!     .run(&fragments)
//!     .iter()
//!     .map(|f| f.content.as_str())
//!     .collect();
//! assert_eq!(
//!     html,
//!     "<table><colgroup><col width=\"50%\"><col width=\"50%\"></colgroup><tr><td>A</td><td></td></tr>"
//! );
//! ```

pub mod adapters;
pub mod error;
pub mod filter;
pub mod markup;

pub use crate::adapters::pandoc::{Layout, PandocDocument};
pub use crate::markup::{CellKind, Fragment, SpanKind, Tag};
pub use error::{Error, Result};
pub use filter::{
    annotate_widths, apply_pass, count_widths, normalize_spans, Pass, SpanNormalizer, SpanState,
    TableFilter, WidthAnnotator, WidthCounter,
};

/// Options for the table filter.
#[derive(Debug, Clone)]
pub struct FilterOptions {
    /// Percentage of the page width shared out between a table's columns.
    pub page_width_percent: u32,
    /// Raw format label for fragments the passes emit.
    pub fragment_format: String,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            page_width_percent: 100,
            fragment_format: "html".to_string(),
        }
    }
}
