//! Table passes and the pipeline that runs them over a pandoc document.

mod context;
mod span;
mod width;

use crate::adapters::pandoc::PandocDocument;
use crate::markup::Fragment;
use crate::{FilterOptions, Result};
use std::collections::VecDeque;
use std::io::{BufWriter, Read, Write};
use tracing::debug;

pub use self::context::SpanState;
pub use self::span::SpanNormalizer;
pub use self::width::{WidthAnnotator, WidthCounter};

/// A single sweep over the fragments of a document, in document order.
pub trait Pass {
    /// Returns the replacement for `fragment`, or `None` to leave it as is.
    fn rewrite(&mut self, fragment: &Fragment) -> Option<Vec<Fragment>>;
}

/// Runs `pass` over a flat fragment list.
pub fn apply_pass<P: Pass + ?Sized>(pass: &mut P, fragments: &[Fragment]) -> Vec<Fragment> {
    let mut out = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        match pass.rewrite(fragment) {
            Some(replacement) => out.extend(replacement),
            None => out.push(fragment.clone()),
        }
    }
    out
}

/// Replaces every colspan/rowspan cell with plain cells.
pub fn normalize_spans(fragments: &[Fragment]) -> Vec<Fragment> {
    apply_pass(&mut SpanNormalizer::default(), fragments)
}

/// First-row cell count of each table, in document order.
pub fn count_widths(fragments: &[Fragment]) -> VecDeque<usize> {
    let mut counter = WidthCounter::new();
    apply_pass(&mut counter, fragments);
    counter.into_widths()
}

/// Adds a column group to each table using the counted `widths`.
pub fn annotate_widths(fragments: &[Fragment], widths: VecDeque<usize>) -> Vec<Fragment> {
    apply_pass(
        &mut WidthAnnotator::new(widths, &FilterOptions::default()),
        fragments,
    )
}

/// Runs span normalization, width counting and width annotation in order.
pub struct TableFilter {
    options: FilterOptions,
}

impl TableFilter {
    /// Creates a new filter with the given options.
    pub fn new(options: FilterOptions) -> Self {
        Self { options }
    }

    /// Creates a new filter with default options.
    pub fn with_defaults() -> Self {
        Self::new(FilterOptions::default())
    }

    /// Applies all three passes to a flat fragment list.
    pub fn run(&self, fragments: &[Fragment]) -> Vec<Fragment> {
        let normalized = apply_pass(&mut SpanNormalizer::new(&self.options), fragments);
        let widths = count_widths(&normalized);
        let mut annotator = WidthAnnotator::new(widths, &self.options);
        apply_pass(&mut annotator, &normalized)
    }

    /// Applies all three passes to every raw block of `document`.
    ///
    /// `format` is the target format pandoc hands to filters; the passes do not
    /// depend on it.
    pub fn filter_document(&self, document: &mut PandocDocument, format: &str) {
        debug!(format, "filtering document");

        let mut normalizer = SpanNormalizer::new(&self.options);
        let rewritten = document.apply(&mut normalizer);
        debug!(rewritten, "normalized spans");

        let mut counter = WidthCounter::new();
        document.apply(&mut counter);
        let widths = counter.into_widths();
        debug!(tables = widths.len(), "counted table widths");

        let mut annotator = WidthAnnotator::new(widths, &self.options);
        let rewritten = document.apply(&mut annotator);
        debug!(rewritten, "annotated table widths");
    }

    /// Filters a pandoc JSON document held in a string.
    pub fn filter_json(&self, input: &str, format: &str) -> Result<String> {
        let mut document = PandocDocument::parse(input)?;
        self.filter_document(&mut document, format);
        document.to_json()
    }

    /// Reads a whole pandoc JSON document from `reader` and writes the
    /// filtered document to `writer`.
    pub fn filter_reader<R: Read, W: Write>(
        &self,
        mut reader: R,
        writer: W,
        format: &str,
    ) -> Result<()> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        let mut document = PandocDocument::parse(&input)?;
        self.filter_document(&mut document, format);

        let mut writer = BufWriter::new(writer);
        document.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl Default for TableFilter {
    fn default() -> Self {
        Self::with_defaults()
    }
}
