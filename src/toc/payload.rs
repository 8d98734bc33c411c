//! The serialized TOC a rendered page embeds on its table-of-contents
//! container: `{"list":[...]}`. Parsing never fails; anything unreadable
//! yields an empty tree and the tracker runs degraded.

use serde::{Deserialize, Serialize};

use crate::types::Heading;

#[derive(Serialize)]
struct PayloadRef<'a> {
    list: &'a [Heading],
}

#[derive(Deserialize)]
struct Payload {
    list: Vec<Heading>,
}

/// Serialize a tree into the embedded payload string.
pub fn encode(tree: &[Heading]) -> serde_json::Result<String> {
    serde_json::to_string(&PayloadRef { list: tree })
}

/// Parse an embedded payload. `None` means the container carried no payload.
pub fn decode(raw: Option<&str>) -> Vec<Heading> {
    let Some(raw) = raw else {
        tracing::debug!("no toc payload, tracker inactive");
        return Vec::new();
    };
    match serde_json::from_str::<Payload>(raw) {
        Ok(p) => p.list,
        Err(e) => {
            tracing::debug!(error = %e, "malformed toc payload, tracker inactive");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_nested_list() {
        let raw = r#"{"list":[{"depth":2,"slug":"a","text":"A","children":[{"depth":3,"slug":"b","text":"B","children":[]}]}]}"#;
        let tree = decode(Some(raw));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].children[0].slug, "b");
    }

    #[test]
    fn encode_wraps_in_list() {
        let tree = vec![Heading {
            depth: 2,
            slug: "a".into(),
            text: "A".into(),
            children: vec![],
        }];
        let s = encode(&tree).unwrap();
        assert_eq!(s, r#"{"list":[{"depth":2,"slug":"a","text":"A","children":[]}]}"#);
        assert_eq!(decode(Some(s.as_str())), tree);
    }

    #[test]
    fn missing_payload_is_empty() {
        assert!(decode(None).is_empty());
    }

    #[test]
    fn malformed_payload_is_empty() {
        assert!(decode(Some("not json")).is_empty());
        // A bare array is what the page falls back to when the attribute is absent.
        assert!(decode(Some("[]")).is_empty());
        assert!(decode(Some(r#"{"list":"nope"}"#)).is_empty());
    }
}
