use super::Tag;

/// One raw markup unit (a pandoc `RawBlock`) carried through the passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Raw format label, e.g. `html`.
    pub format: String,
    /// Raw markup text.
    pub content: String,
}

impl Fragment {
    pub fn new(format: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            content: content.into(),
        }
    }

    /// Creates a fragment labelled `html`.
    pub fn html(content: impl Into<String>) -> Self {
        Self::new("html", content)
    }

    /// Classifies the fragment's content against the table tag vocabulary.
    pub fn tag(&self) -> Tag {
        Tag::parse(&self.content)
    }
}
