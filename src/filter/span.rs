//! Span normalizer - flattens colspan/rowspan cells into plain cells.

use super::context::SpanState;
use super::Pass;
use crate::markup::{CellKind, Fragment, SpanKind, Tag};
use crate::FilterOptions;
use tracing::trace;

/// Rewrites spanning cell tags into plain cells plus empty filler cells, so
/// the renderer never sees a span attribute.
///
/// Span counts are not capped: `colspan="N"` expands into `N-1` filler cells.
#[derive(Debug, Clone)]
pub struct SpanNormalizer {
    state: SpanState,
    format: String,
}

impl SpanNormalizer {
    pub fn new(options: &FilterOptions) -> Self {
        Self {
            state: SpanState::new(),
            format: options.fragment_format.clone(),
        }
    }

    pub fn state(&self) -> &SpanState {
        &self.state
    }

    fn fragment(&self, content: &str) -> Fragment {
        Fragment::new(self.format.as_str(), content)
    }

    fn push_cell(&self, out: &mut Vec<Fragment>, cell: CellKind) {
        out.push(self.fragment(cell.open_tag()));
        out.push(self.fragment(cell.close_tag()));
    }

    /// Empty `<td></td>` owed to a row span at the current column, if any.
    fn row_filler(&mut self) -> Vec<Fragment> {
        let mut out = Vec::new();
        if self.state.take_row_filler() {
            trace!(column = self.state.position(), "row span filler");
            self.push_cell(&mut out, CellKind::Td);
        }
        out
    }
}

impl Default for SpanNormalizer {
    fn default() -> Self {
        Self::new(&FilterOptions::default())
    }
}

impl Pass for SpanNormalizer {
    fn rewrite(&mut self, fragment: &Fragment) -> Option<Vec<Fragment>> {
        match fragment.tag() {
            Tag::RowClose => {
                self.state.reset_row();
                None
            }
            Tag::CellClose(_) => {
                self.state.advance(1);
                let (cell, count) = self.state.take_column_filler()?;
                trace!(cell = cell.name(), count, "column span fillers");
                let mut out = vec![fragment.clone()];
                for _ in 0..count {
                    self.push_cell(&mut out, cell);
                }
                Some(out)
            }
            Tag::SpanOpen {
                cell,
                span: SpanKind::Row,
                count,
            } => {
                self.state.owe_rows(count.saturating_sub(1));
                Some(vec![self.fragment(cell.open_tag())])
            }
            Tag::SpanOpen {
                cell,
                span: SpanKind::Col,
                count,
            } => {
                let mut out = self.row_filler();
                let extra = count.saturating_sub(1);
                self.state.owe_columns(cell, extra);
                self.state.advance(extra);
                out.push(self.fragment(cell.open_tag()));
                Some(out)
            }
            Tag::CellOpen(_) => {
                let mut out = self.row_filler();
                if out.is_empty() {
                    return None;
                }
                out.push(fragment.clone());
                Some(out)
            }
            Tag::TableOpen | Tag::Other => None,
        }
    }
}
