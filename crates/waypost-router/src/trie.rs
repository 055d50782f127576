//! Segment trie for one method's dynamic routes

use crate::pattern::{split_path, Placeholder, Segment, SEPARATOR};
use crate::{Match, Params, RouteError};
use std::collections::HashMap;

/// Trie node for path segment matching
#[derive(Debug)]
struct Node<T> {
    /// Value if a route terminates exactly here
    value: Option<T>,
    /// Literal children (key = path segment)
    statics: HashMap<String, Node<T>>,
    /// Placeholder children, in registration order
    dynamics: Vec<(Placeholder, Node<T>)>,
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self {
            value: None,
            statics: HashMap::new(),
            dynamics: Vec::new(),
        }
    }
}

impl<T> Node<T> {
    fn child_mut(&mut self, segment: Segment<'_>) -> &mut Node<T> {
        match segment {
            Segment::Literal(literal) => self.statics.entry(literal.to_string()).or_default(),
            Segment::Placeholder(placeholder) => {
                let index = match self
                    .dynamics
                    .iter()
                    .position(|(existing, _)| existing == &placeholder)
                {
                    Some(index) => index,
                    None => {
                        self.dynamics.push((placeholder, Node::default()));
                        self.dynamics.len() - 1
                    }
                };
                &mut self.dynamics[index].1
            }
        }
    }

    /// Step to the child for one request segment.
    ///
    /// A literal child always wins; placeholders are tried in registration
    /// order and the first that captures is taken. There is no backtracking.
    fn step(&self, segment: &str, params: &mut Params) -> Option<&Node<T>> {
        if let Some(child) = self.statics.get(segment) {
            return Some(child);
        }

        self.dynamics.iter().find_map(|(placeholder, child)| {
            placeholder.capture(segment).map(|value| {
                params.insert(placeholder.name().to_string(), value.to_string());
                child
            })
        })
    }

    fn collect<'a>(&'a self, prefix: &str, out: &mut Vec<(String, &'a T)>) {
        let statics = self.statics.iter().map(|(literal, node)| (literal.as_str(), node));
        let dynamics = self
            .dynamics
            .iter()
            .map(|(placeholder, node)| (placeholder.pattern(), node));

        for (segment, node) in statics.chain(dynamics) {
            let path = format!("{prefix}{SEPARATOR}{segment}");
            if let Some(value) = &node.value {
                out.push((path.clone(), value));
            }
            node.collect(&path, out);
        }
    }
}

/// Segment trie
///
/// Each template segment is one level of the tree. Nodes are created on
/// first use and reused by every later template sharing the same prefix.
#[derive(Debug)]
pub struct Trie<T> {
    root: Node<T>,
}

impl<T> Default for Trie<T> {
    fn default() -> Self {
        Self {
            root: Node::default(),
        }
    }
}

impl<T> Trie<T> {
    /// Create an empty trie
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a template, returning the value it replaced.
    ///
    /// The whole template is validated before any node is created.
    pub fn insert(&mut self, template: &str, value: T) -> Result<Option<T>, RouteError> {
        let segments = split_path(template)
            .into_iter()
            .map(|segment| Segment::parse(template, segment))
            .collect::<Result<Vec<_>, _>>()?;

        let node = segments
            .into_iter()
            .fold(&mut self.root, |node, segment| node.child_mut(segment));

        Ok(node.value.replace(value))
    }

    /// Find the value for a request path
    ///
    /// # Example
    /// ```
    /// use waypost_router::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("/users/:id", "show").unwrap();
    ///
    /// let m = trie.find("/users/42").unwrap();
    /// assert_eq!(*m.value, "show");
    /// assert_eq!(m.params["id"], "42");
    /// ```
    pub fn find(&self, path: &str) -> Option<Match<'_, T>> {
        let mut params = Params::new();
        let mut node = &self.root;

        for segment in split_path(path) {
            node = node.step(segment, &mut params)?;
        }

        node.value.as_ref().map(|value| Match { value, params })
    }

    /// Every registered template with its value, in no particular order
    pub fn routes(&self) -> Vec<(String, &T)> {
        let mut out = Vec::new();
        if let Some(value) = &self.root.value {
            out.push((SEPARATOR.to_string(), value));
        }
        self.root.collect("", &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie(routes: &[(&str, u32)]) -> Trie<u32> {
        let mut trie = Trie::new();
        for (path, id) in routes {
            trie.insert(path, *id).unwrap();
        }
        trie
    }

    #[test]
    fn test_single_placeholder() {
        let trie = trie(&[("/dynamic/:var1", 1)]);

        let m = trie.find("/dynamic/123").unwrap();
        assert_eq!(*m.value, 1);
        assert_eq!(m.params.len(), 1);
        assert_eq!(m.params["var1"], "123");
    }

    #[test]
    fn test_multiple_placeholders() {
        let trie = trie(&[("/dynamic/:var1/segment/:var2", 1)]);

        let m = trie.find("/dynamic/123/segment/456").unwrap();
        assert_eq!(m.params["var1"], "123");
        assert_eq!(m.params["var2"], "456");
    }

    #[test]
    fn test_shared_prefix() {
        let trie = trie(&[
            ("/dynamic/:var1/segment_one", 1),
            ("/dynamic/:var1/segment_two", 2),
        ]);

        let m = trie.find("/dynamic/123/segment_two").unwrap();
        assert_eq!(*m.value, 2);
        assert_eq!(m.params.len(), 1);
        assert_eq!(m.params["var1"], "123");
        assert_eq!(*trie.find("/dynamic/123/segment_one").unwrap().value, 1);
    }

    #[test]
    fn test_segment_count_mismatch() {
        let trie = trie(&[("/dynamic/:var1/segment2", 1)]);

        assert!(trie.find("/dynamic/1").is_none());
        assert!(trie.find("/dynamic/1/invalid1/invalid2").is_none());
        assert!(trie.find("/dynamic/1/segment2/extra").is_none());
        assert!(trie.find("/").is_none());
    }

    #[test]
    fn test_prefix_never_falls_back_to_shorter_route() {
        let trie = trie(&[("/a/:x", 1), ("/a/:x/b", 2)]);

        assert_eq!(*trie.find("/a/1").unwrap().value, 1);
        assert_eq!(*trie.find("/a/1/b").unwrap().value, 2);
        assert!(trie.find("/a/1/c").is_none());
    }

    #[test]
    fn test_literal_outranks_placeholder() {
        let trie = trie(&[("/users/:id", 1), ("/users/me", 2)]);

        assert_eq!(*trie.find("/users/me").unwrap().value, 2);
        assert!(trie.find("/users/me").unwrap().params.is_empty());
        assert_eq!(*trie.find("/users/42").unwrap().value, 1);
    }

    #[test]
    fn test_literal_child_is_not_backtracked() {
        // Once a literal child is taken the walk is committed to it.
        let trie = trie(&[("/users/me/settings", 1), ("/users/:id/profile", 2)]);

        assert!(trie.find("/users/me/profile").is_none());
        assert_eq!(*trie.find("/users/7/profile").unwrap().value, 2);
    }

    #[test]
    fn test_placeholders_tried_in_registration_order() {
        let trie = trie(&[("/tasks/:id", 1), ("/tasks/:user_id/all", 2)]);

        // `:id` was registered first, so it captures and the walk never
        // reaches the `:user_id` branch.
        assert!(trie.find("/tasks/5/all").is_none());
        assert_eq!(trie.find("/tasks/5").unwrap().params["id"], "5");

        let trie = self::trie(&[("/tasks/:user_id/all", 2), ("/tasks/:id", 1)]);
        assert_eq!(*trie.find("/tasks/5/all").unwrap().value, 2);
        // The second placeholder is unreachable; `/tasks/5` lands on the
        // `:user_id` node, which has no value.
        assert!(trie.find("/tasks/5").is_none());
    }

    #[test]
    fn test_same_placeholder_node_is_reused() {
        let trie = trie(&[("/tasks/:id", 1), ("/tasks/:id/notes", 2)]);

        let m = trie.find("/tasks/9/notes").unwrap();
        assert_eq!(*m.value, 2);
        assert_eq!(m.params["id"], "9");
    }

    #[test]
    fn test_duplicate_placeholder_names_last_write_wins() {
        let trie = trie(&[("/a/:id/b/:id", 1)]);

        let m = trie.find("/a/first/b/second").unwrap();
        assert_eq!(m.params.len(), 1);
        assert_eq!(m.params["id"], "second");
    }

    #[test]
    fn test_empty_segment_does_not_match_placeholder() {
        let trie = trie(&[("/a/:x/b", 1)]);

        assert!(trie.find("/a//b").is_none());
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        let trie = trie(&[("/users/:id", 1)]);

        assert_eq!(*trie.find("/users/42/").unwrap().value, 1);
    }

    #[test]
    fn test_reinsert_replaces_value() {
        let mut trie = trie(&[("/users/:id", 1)]);

        assert_eq!(trie.insert("/users/:id", 2).unwrap(), Some(1));
        assert_eq!(*trie.find("/users/1").unwrap().value, 2);
    }

    #[test]
    fn test_invalid_template_leaves_trie_untouched() {
        let mut trie = Trie::new();

        assert!(trie.insert("/users/:id/v:version", 1).is_err());
        assert!(trie.root.statics.is_empty());
        assert!(trie.routes().is_empty());
    }

    #[test]
    fn test_literal_template_matches_like_exact_lookup() {
        let trie = trie(&[("/", 0), ("/static", 1), ("/static/nested", 2)]);

        let m = trie.find("/").unwrap();
        assert_eq!(*m.value, 0);
        assert!(m.params.is_empty());
        assert_eq!(*trie.find("/static").unwrap().value, 1);
        assert_eq!(*trie.find("/static/nested").unwrap().value, 2);
    }

    #[test]
    fn test_routes_rebuilds_templates() {
        let trie = trie(&[("/", 0), ("/tasks/:id", 1), ("/tasks/:id/notes", 2)]);

        let mut routes: Vec<(String, u32)> =
            trie.routes().into_iter().map(|(p, v)| (p, *v)).collect();
        routes.sort();
        assert_eq!(
            routes,
            vec![
                ("/".to_string(), 0),
                ("/tasks/:id".to_string(), 1),
                ("/tasks/:id/notes".to_string(), 2),
            ]
        );
    }
}
