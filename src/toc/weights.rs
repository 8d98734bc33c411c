use std::collections::HashMap;

use crate::types::Heading;

/// Document-order position of each slug, assigned by pre-order walk of the
/// TOC tree. Built once per page view; read-only afterwards.
#[derive(Debug, Default, Clone)]
pub struct WeightMap {
    weights: HashMap<String, u32>,
}

impl WeightMap {
    #[must_use]
    pub fn from_tree(tree: &[Heading]) -> Self {
        let mut weights = HashMap::new();
        let mut next = 0u32;
        let mut stack: Vec<&Heading> = tree.iter().rev().collect();
        while let Some(h) = stack.pop() {
            // A repeated slug keeps the later position.
            weights.insert(h.slug.clone(), next);
            next += 1;
            stack.extend(h.children.iter().rev());
        }
        Self { weights }
    }

    #[must_use]
    pub fn get(&self, slug: &str) -> Option<u32> {
        self.weights.get(slug).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(slug: &str, children: Vec<Heading>) -> Heading {
        Heading {
            depth: 2,
            slug: slug.to_string(),
            text: String::new(),
            children,
        }
    }

    #[test]
    fn preorder_positions() {
        let tree = vec![
            h("a", vec![h("a1", vec![h("a1x", vec![])]), h("a2", vec![])]),
            h("b", vec![h("b1", vec![])]),
        ];
        let w = WeightMap::from_tree(&tree);
        let order: Vec<u32> = ["a", "a1", "a1x", "a2", "b", "b1"]
            .iter()
            .map(|s| w.get(s).unwrap())
            .collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(w.len(), 6);
    }

    #[test]
    fn unknown_slug() {
        let w = WeightMap::from_tree(&[h("a", vec![])]);
        assert_eq!(w.get("zzz"), None);
    }

    #[test]
    fn empty_tree() {
        assert!(WeightMap::from_tree(&[]).is_empty());
    }
}
