use crate::filter::Pass;
use crate::markup::Fragment;
use serde_json::{json, Value};
use tracing::warn;

/// Offers every `RawBlock` under `value` to `pass`, splicing replacements in
/// place. Returns the number of raw blocks that were replaced.
///
/// Replacement nodes are descended into but never offered to the same pass
/// again.
pub(crate) fn walk<P: Pass + ?Sized>(value: &mut Value, pass: &mut P) -> usize {
    match value {
        Value::Array(items) => {
            let mut replaced = 0;
            let original = std::mem::take(items);
            let mut rewritten = Vec::with_capacity(original.len());
            for mut item in original {
                match offer(&item, pass) {
                    Some(nodes) => {
                        replaced += 1;
                        for mut node in nodes {
                            replaced += walk(&mut node, pass);
                            rewritten.push(node);
                        }
                    }
                    None => {
                        replaced += walk(&mut item, pass);
                        rewritten.push(item);
                    }
                }
            }
            *items = rewritten;
            replaced
        }
        Value::Object(map) => map.values_mut().map(|child| walk(child, pass)).sum(),
        _ => 0,
    }
}

fn offer<P: Pass + ?Sized>(node: &Value, pass: &mut P) -> Option<Vec<Value>> {
    let fragment = raw_block(node)?;
    let replacement = pass.rewrite(&fragment)?;
    Some(replacement.iter().map(raw_block_node).collect())
}

/// Reads `{"t": "RawBlock", "c": [format, text]}` as a fragment.
pub(crate) fn raw_block(node: &Value) -> Option<Fragment> {
    let object = node.as_object()?;
    if object.get("t")?.as_str()? != "RawBlock" {
        return None;
    }
    match object.get("c").and_then(Value::as_array).map(Vec::as_slice) {
        Some([Value::String(format), Value::String(text)]) => {
            Some(Fragment::new(format.as_str(), text.as_str()))
        }
        _ => {
            warn!("skipping RawBlock with unexpected payload");
            None
        }
    }
}

pub(crate) fn raw_block_node(fragment: &Fragment) -> Value {
    json!({
        "t": "RawBlock",
        "c": [fragment.format, fragment.content],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Duplicate;

    impl Pass for Duplicate {
        fn rewrite(&mut self, fragment: &Fragment) -> Option<Vec<Fragment>> {
            Some(vec![fragment.clone(), fragment.clone()])
        }
    }

    #[test]
    fn test_replacements_are_not_offered_again() {
        let mut doc = json!([{"t": "RawBlock", "c": ["html", "<td>"]}]);
        assert_eq!(walk(&mut doc, &mut Duplicate), 1);
        assert_eq!(
            doc,
            json!([
                {"t": "RawBlock", "c": ["html", "<td>"]},
                {"t": "RawBlock", "c": ["html", "<td>"]}
            ])
        );
    }

    #[test]
    fn test_nested_raw_blocks_are_visited() {
        let mut doc = json!({
            "blocks": [{
                "t": "Div",
                "c": [["", [], []], [{"t": "RawBlock", "c": ["tex", "x"]}]]
            }]
        });
        assert_eq!(walk(&mut doc, &mut Duplicate), 1);
        assert_eq!(doc["blocks"][0]["c"][1].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_raw_block_rejects_other_nodes() {
        assert_eq!(raw_block(&json!({"t": "Para", "c": []})), None);
        assert_eq!(raw_block(&json!({"t": "RawBlock", "c": ["html"]})), None);
        assert_eq!(raw_block(&json!({"t": "RawBlock", "c": ["html", 3]})), None);
        assert_eq!(
            raw_block(&json!({"t": "RawBlock", "c": ["html", "<th>"]})),
            Some(Fragment::html("<th>"))
        );
    }

    #[test]
    fn test_raw_inline_is_not_a_fragment() {
        let mut doc = json!([{"t": "RawInline", "c": ["html", "<td>"]}]);
        assert_eq!(walk(&mut doc, &mut Duplicate), 0);
    }
}
