//! Tokenizer for the fixed set of table tags the filter understands.
//!
//! Matching is exact and case-sensitive. Anything outside the vocabulary is
//! [`Tag::Other`] and is never touched by the passes.

/// Table cell element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Td,
    Th,
}

impl CellKind {
    pub fn name(self) -> &'static str {
        match self {
            CellKind::Td => "td",
            CellKind::Th => "th",
        }
    }

    pub fn open_tag(self) -> &'static str {
        match self {
            CellKind::Td => "<td>",
            CellKind::Th => "<th>",
        }
    }

    pub fn close_tag(self) -> &'static str {
        match self {
            CellKind::Td => "</td>",
            CellKind::Th => "</th>",
        }
    }
}

/// Direction of a spanning cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Col,
    Row,
}

/// Classification of one fragment's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// `<table>`
    TableOpen,
    /// `</tr>`
    RowClose,
    /// `<td>` or `<th>`
    CellOpen(CellKind),
    /// `</td>` or `</th>`
    CellClose(CellKind),
    /// `<td colspan="N">`, `<th rowspan="N">` and friends.
    SpanOpen {
        cell: CellKind,
        span: SpanKind,
        count: usize,
    },
    Other,
}

impl Tag {
    pub fn parse(content: &str) -> Self {
        match content {
            "<table>" => Tag::TableOpen,
            "</tr>" => Tag::RowClose,
            "<td>" => Tag::CellOpen(CellKind::Td),
            "<th>" => Tag::CellOpen(CellKind::Th),
            "</td>" => Tag::CellClose(CellKind::Td),
            "</th>" => Tag::CellClose(CellKind::Th),
            _ => Self::parse_span(content).unwrap_or(Tag::Other),
        }
    }

    fn parse_span(content: &str) -> Option<Self> {
        let rest = content.strip_prefix('<')?;
        let (cell, rest) = if let Some(rest) = rest.strip_prefix("td ") {
            (CellKind::Td, rest)
        } else {
            (CellKind::Th, rest.strip_prefix("th ")?)
        };
        let (span, rest) = if let Some(rest) = rest.strip_prefix("colspan=\"") {
            (SpanKind::Col, rest)
        } else {
            (SpanKind::Row, rest.strip_prefix("rowspan=\"")?)
        };
        let digits = rest.strip_suffix("\">")?;
        // `usize::from_str` also accepts a leading `+`.
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let count = digits.parse().ok()?;
        Some(Tag::SpanOpen { cell, span, count })
    }
}
