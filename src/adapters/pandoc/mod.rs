//! Pandoc JSON document boundary.
//!
//! Pandoc hands filters its AST as JSON on stdin and reads the filtered AST
//! back from stdout. Two layouts exist in the wild:
//!
//! - `{"pandoc-api-version": [..], "meta": {..}, "blocks": [..]}` (pandoc >= 1.18)
//! - `[{"unMeta": {..}}, [..]]` (older releases)

mod walk;

use crate::error::Error;
use crate::filter::Pass;
use crate::markup::Fragment;
use crate::Result;
use serde_json::Value;
use std::io::Write;

/// Which top-level JSON shape a document uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Modern,
    Legacy,
}

/// A parsed pandoc JSON document.
#[derive(Debug, Clone)]
pub struct PandocDocument {
    root: Value,
    layout: Layout,
}

impl PandocDocument {
    pub fn parse(input: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(input)?)
    }

    pub fn from_value(root: Value) -> Result<Self> {
        let layout = detect_layout(&root)?;
        Ok(Self { root, layout })
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Document metadata, for either layout.
    pub fn meta(&self) -> Option<&Value> {
        match self.layout {
            Layout::Modern => self.root.get("meta"),
            Layout::Legacy => self.root.get(0).and_then(|head| head.get("unMeta")),
        }
    }

    /// Runs `pass` over every raw block in document order. Returns how many
    /// raw blocks were replaced.
    pub fn apply<P: Pass + ?Sized>(&mut self, pass: &mut P) -> usize {
        walk::walk(&mut self.root, pass)
    }

    /// All raw blocks, in the order the passes see them.
    pub fn raw_fragments(&self) -> Vec<Fragment> {
        let mut fragments = Vec::new();
        collect(&self.root, &mut fragments);
        fragments
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.root)?)
    }

    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer(writer, &self.root)?;
        Ok(())
    }

    pub fn into_value(self) -> Value {
        self.root
    }
}

fn detect_layout(root: &Value) -> Result<Layout> {
    match root {
        Value::Object(map) => match map.get("blocks") {
            Some(Value::Array(_)) => Ok(Layout::Modern),
            _ => Err(Error::UnsupportedDocument(
                "expected a \"blocks\" array".to_string(),
            )),
        },
        Value::Array(items) => match items.as_slice() {
            [head, Value::Array(_)] if head.get("unMeta").is_some() => Ok(Layout::Legacy),
            _ => Err(Error::UnsupportedDocument(
                "expected [{\"unMeta\": ..}, [blocks]]".to_string(),
            )),
        },
        _ => Err(Error::UnsupportedDocument(
            "top level must be an object or an array".to_string(),
        )),
    }
}

fn collect(value: &Value, out: &mut Vec<Fragment>) {
    if let Some(fragment) = walk::raw_block(value) {
        out.push(fragment);
        return;
    }
    match value {
        Value::Array(items) => items.iter().for_each(|item| collect(item, out)),
        Value::Object(map) => map.values().for_each(|child| collect(child, out)),
        _ => {}
    }
}
