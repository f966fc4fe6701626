use crate::markup::CellKind;
use std::collections::BTreeMap;

/// Positional state of the span normalizer for one document.
#[derive(Debug, Default, Clone)]
pub struct SpanState {
    /// column -> filler rows still owed; values stay positive.
    row_amount: BTreeMap<usize, usize>,
    pos: usize,
    col_to_add: usize,
    col_tag: Option<CellKind>,
}

impl SpanState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current column within the row.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Filler rows still owed at `column`, if any.
    pub fn pending_rows(&self, column: usize) -> Option<usize> {
        self.row_amount.get(&column).copied()
    }

    /// Filler cells owed to the currently open column span.
    pub fn pending_columns(&self) -> usize {
        self.col_to_add
    }

    pub(crate) fn reset_row(&mut self) {
        self.pos = 0;
    }

    pub(crate) fn advance(&mut self, columns: usize) {
        self.pos = self.pos.saturating_add(columns);
    }

    /// Adds `rows` owed fillers to the current column.
    pub(crate) fn owe_rows(&mut self, rows: usize) {
        if rows > 0 {
            let owed = self.row_amount.entry(self.pos).or_insert(0);
            *owed = owed.saturating_add(rows);
        }
    }

    /// Consumes one owed filler at the current column.
    pub(crate) fn take_row_filler(&mut self) -> bool {
        let Some(remaining) = self.row_amount.get_mut(&self.pos) else {
            return false;
        };
        *remaining -= 1;
        if *remaining == 0 {
            self.row_amount.remove(&self.pos);
        }
        true
    }

    pub(crate) fn owe_columns(&mut self, cell: CellKind, columns: usize) {
        self.col_to_add = columns;
        self.col_tag = Some(cell);
    }

    pub(crate) fn take_column_filler(&mut self) -> Option<(CellKind, usize)> {
        let count = std::mem::take(&mut self.col_to_add);
        let cell = self.col_tag.take()?;
        (count > 0).then_some((cell, count))
    }
}
