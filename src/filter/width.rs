//! Column width passes - count each table's columns, then declare widths.

use super::Pass;
use crate::markup::{Fragment, Tag};
use crate::FilterOptions;
use std::collections::VecDeque;
use tracing::{trace, warn};

/// Counts the cells in the first row of every table.
///
/// Never rewrites a fragment; the counts come out of [`WidthCounter::into_widths`]
/// in document order.
#[derive(Debug, Default, Clone)]
pub struct WidthCounter {
    counting: bool,
    columns: usize,
    widths: VecDeque<usize>,
}

impl WidthCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn widths(&self) -> &VecDeque<usize> {
        &self.widths
    }

    pub fn into_widths(self) -> VecDeque<usize> {
        self.widths
    }
}

impl Pass for WidthCounter {
    fn rewrite(&mut self, fragment: &Fragment) -> Option<Vec<Fragment>> {
        match fragment.tag() {
            Tag::TableOpen => {
                self.counting = true;
                self.columns = 0;
            }
            Tag::CellClose(_) if self.counting => self.columns += 1,
            Tag::RowClose if self.counting => {
                self.counting = false;
                trace!(columns = self.columns, "counted table");
                self.widths.push_back(std::mem::take(&mut self.columns));
            }
            _ => {}
        }
        None
    }
}

/// Injects a `<colgroup>` after every `<table>`, consuming one counted width
/// per table.
#[derive(Debug, Clone)]
pub struct WidthAnnotator {
    widths: VecDeque<usize>,
    format: String,
    page_width_percent: u32,
}

impl WidthAnnotator {
    pub fn new(widths: VecDeque<usize>, options: &FilterOptions) -> Self {
        Self {
            widths,
            format: options.fragment_format.clone(),
            page_width_percent: options.page_width_percent,
        }
    }

    /// Widths not yet consumed.
    pub fn remaining(&self) -> &VecDeque<usize> {
        &self.widths
    }

    fn fragment(&self, content: impl Into<String>) -> Fragment {
        Fragment::new(self.format.as_str(), content)
    }
}

impl Pass for WidthAnnotator {
    fn rewrite(&mut self, fragment: &Fragment) -> Option<Vec<Fragment>> {
        if fragment.tag() != Tag::TableOpen {
            return None;
        }
        let Some(columns) = self.widths.pop_front() else {
            warn!("more tables than counted widths, leaving table without column widths");
            return None;
        };
        if columns == 0 {
            return None;
        }

        let percent = self.page_width_percent as usize / columns;
        let mut out = Vec::with_capacity(columns + 3);
        out.push(self.fragment(fragment.content.as_str()));
        out.push(self.fragment("<colgroup>"));
        for _ in 0..columns {
            out.push(self.fragment(format!("<col width=\"{}%\">", percent)));
        }
        out.push(self.fragment("</colgroup>"));
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::apply_pass;
    use pretty_assertions::assert_eq;

    fn fragments(contents: &[&str]) -> Vec<Fragment> {
        contents.iter().map(|c| Fragment::html(*c)).collect()
    }

    fn contents(fragments: &[Fragment]) -> Vec<&str> {
        fragments.iter().map(|f| f.content.as_str()).collect()
    }

    fn count(contents: &[&str]) -> VecDeque<usize> {
        let mut counter = WidthCounter::new();
        let input = fragments(contents);
        assert_eq!(apply_pass(&mut counter, &input), input);
        counter.into_widths()
    }

    #[test]
    fn test_counter_counts_first_row_only() {
        let widths = count(&[
            "<table>", "<tr>", "<th>", "</th>", "<th>", "</th>", "<th>", "</th>", "</tr>",
            "<tr>", "<td>", "</td>", "</tr>", "</table>",
        ]);
        assert_eq!(widths, VecDeque::from([3]));
    }

    #[test]
    fn test_counter_ignores_cells_outside_tables() {
        let widths = count(&["<td>", "</td>", "</tr>", "<table>", "<tr>", "</tr>"]);
        assert_eq!(widths, VecDeque::from([0]));
    }

    #[test]
    fn test_counter_keeps_table_order() {
        let widths = count(&[
            "<table>", "</td>", "</td>", "</tr>", "</table>",
            "<table>", "</td>", "</td>", "</td>", "</td>", "</tr>", "</table>",
        ]);
        assert_eq!(widths, VecDeque::from([2, 4]));
    }

    #[test]
    fn test_annotator_injects_colgroup() {
        let mut annotator = WidthAnnotator::new(VecDeque::from([3]), &FilterOptions::default());
        let out = apply_pass(&mut annotator, &fragments(&["<table>", "<tr>"]));
        assert_eq!(
            contents(&out),
            vec![
                "<table>",
                "<colgroup>",
                "<col width=\"33%\">",
                "<col width=\"33%\">",
                "<col width=\"33%\">",
                "</colgroup>",
                "<tr>",
            ]
        );
        assert!(annotator.remaining().is_empty());
    }

    #[test]
    fn test_annotator_consumes_widths_in_order() {
        let mut annotator = WidthAnnotator::new(VecDeque::from([2, 4]), &FilterOptions::default());
        let out = apply_pass(&mut annotator, &fragments(&["<table>", "</table>", "<table>"]));
        let rendered = contents(&out).concat();
        assert_eq!(
            rendered,
            "<table><colgroup><col width=\"50%\"><col width=\"50%\"></colgroup></table>\
             <table><colgroup><col width=\"25%\"><col width=\"25%\"><col width=\"25%\">\
             <col width=\"25%\"></colgroup>"
        );
    }

    #[test]
    fn test_annotator_skips_zero_width_tables() {
        let input = fragments(&["<table>", "</table>"]);
        let mut annotator = WidthAnnotator::new(VecDeque::from([0]), &FilterOptions::default());
        assert_eq!(apply_pass(&mut annotator, &input), input);
    }

    #[test]
    fn test_annotator_tolerates_exhausted_queue() {
        let input = fragments(&["<table>", "<table>"]);
        let mut annotator = WidthAnnotator::new(VecDeque::from([1]), &FilterOptions::default());
        let out = apply_pass(&mut annotator, &input);
        assert_eq!(
            contents(&out),
            vec!["<table>", "<colgroup>", "<col width=\"100%\">", "</colgroup>", "<table>"]
        );
    }

    #[test]
    fn test_annotator_splits_configured_page_width() {
        let options = FilterOptions {
            page_width_percent: 90,
            ..Default::default()
        };
        let mut annotator = WidthAnnotator::new(VecDeque::from([4]), &options);
        let out = apply_pass(&mut annotator, &fragments(&["<table>"]));
        assert_eq!(out[2], Fragment::html("<col width=\"22%\">"));
    }
}
