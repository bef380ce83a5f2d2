//! Error reporting: hierarchical trees and human-readable text.
//!
//! Both views are pure folds over the flat issue list. Order follows the
//! list (field declaration order, then refinement order), never the order of
//! keys in any map.
//!
//! # Examples
//!
//! ```rust
//! use shape_guard::checkers;
//! use shape_guard::core::{FieldSpec, PathSegment, Schema};
//! use shape_guard::report;
//! use serde_json::json;
//!
//! let schema = Schema::builder("names")
//!     .field(FieldSpec::new("firstName", checkers::string().non_empty()))
//!     .field(FieldSpec::new("tags", checkers::array(checkers::string())))
//!     .build()?;
//!
//! let result = schema.validate(&json!({ "firstName": "", "tags": ["a", 1] }));
//! let text = report::to_text(result.issues());
//! assert_eq!(
//!     text,
//!     "firstName: Too small: expected string to have >=1 characters\n\
//!      tags[1]: Invalid input: expected string, received number"
//! );
//!
//! let tree = report::to_tree(result.issues());
//! let tags_1 = [PathSegment::from("tags"), PathSegment::Index(1)];
//! assert_eq!(tree.at(&tags_1).unwrap().errors().len(), 1);
//! # Ok::<(), shape_guard::error::GuardError>(())
//! ```

use crate::core::{Issue, PathSegment};
use serde::{Serialize, Serializer};
use serde_json::{json, Map, Value};

/// Issues grouped by path.
///
/// Each node holds the issues whose path ends at it and its children keyed
/// by path segment, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorTree {
    errors: Vec<Issue>,
    children: Vec<(PathSegment, ErrorTree)>,
}

impl ErrorTree {
    /// Builds a tree from a flat issue list.
    pub fn from_issues(issues: &[Issue]) -> Self {
        issues.iter().fold(ErrorTree::default(), |mut tree, issue| {
            let node = issue
                .path
                .iter()
                .fold(&mut tree, |node, segment| node.child_mut(segment));
            node.errors.push(issue.clone());
            tree
        })
    }

    fn child_mut(&mut self, segment: &PathSegment) -> &mut ErrorTree {
        let position = match self.children.iter().position(|(s, _)| s == segment) {
            Some(position) => position,
            None => {
                self.children.push((segment.clone(), ErrorTree::default()));
                self.children.len() - 1
            }
        };
        &mut self.children[position].1
    }

    /// Issues whose path ends at this node.
    pub fn errors(&self) -> &[Issue] {
        &self.errors
    }

    /// Messages of the issues at this node.
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|issue| issue.message.as_str()).collect()
    }

    /// Child nodes in first-appearance order.
    pub fn children(&self) -> &[(PathSegment, ErrorTree)] {
        &self.children
    }

    /// Returns the child for one segment.
    pub fn get(&self, segment: impl Into<PathSegment>) -> Option<&ErrorTree> {
        let segment = segment.into();
        self.children
            .iter()
            .find(|(s, _)| *s == segment)
            .map(|(_, child)| child)
    }

    /// Returns the node at `path`, relative to this node.
    pub fn at(&self, path: &[PathSegment]) -> Option<&ErrorTree> {
        path.iter()
            .try_fold(self, |node, segment| node.get(segment.clone()))
    }

    /// Returns true if neither this node nor any descendant holds issues.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.children.iter().all(|(_, child)| child.is_empty())
    }

    /// Total number of issues in this subtree.
    pub fn len(&self) -> usize {
        self.errors.len()
            + self
                .children
                .iter()
                .map(|(_, child)| child.len())
                .sum::<usize>()
    }

    /// Renders the tree as `{ "errors", "properties", "items" }` JSON.
    ///
    /// `properties` holds keyed children and `items` holds indexed children,
    /// with `null` for indices that have no issues. Either is omitted when
    /// empty. Indices so far apart that the array would be mostly holes are
    /// rendered as an object keyed by the decimal index instead.
    pub fn to_json(&self) -> Value {
        let mut node = Map::new();
        node.insert("errors".to_string(), json!(self.messages()));

        let mut properties = Map::new();
        let mut indexed: Vec<(usize, Value)> = Vec::new();
        for (segment, child) in &self.children {
            match segment {
                PathSegment::Key(key) => {
                    properties.insert(key.clone(), child.to_json());
                }
                PathSegment::Index(index) => indexed.push((*index, child.to_json())),
            }
        }

        if !properties.is_empty() {
            node.insert("properties".to_string(), Value::Object(properties));
        }
        if !indexed.is_empty() {
            node.insert("items".to_string(), render_items(indexed));
        }
        Value::Object(node)
    }
}

/// Largest number of `null` holes rendered in a dense `items` array.
const MAX_ITEM_HOLES: usize = 1024;

/// Renders indexed children as an array with `null` holes, or as an object
/// keyed by index when the array would be mostly holes.
fn render_items(mut indexed: Vec<(usize, Value)>) -> Value {
    indexed.sort_by_key(|(index, _)| *index);
    let highest = indexed.last().map_or(0, |(index, _)| *index);
    let holes = highest.saturating_sub(indexed.len().saturating_sub(1));

    if holes > MAX_ITEM_HOLES {
        let sparse: Map<String, Value> = indexed
            .into_iter()
            .map(|(index, value)| (index.to_string(), value))
            .collect();
        return Value::Object(sparse);
    }

    let mut items = vec![Value::Null; highest + 1];
    for (index, value) in indexed {
        items[index] = value;
    }
    Value::Array(items)
}

impl Serialize for ErrorTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// Groups issues by path. Equivalent to [`ErrorTree::from_issues`].
pub fn to_tree(issues: &[Issue]) -> ErrorTree {
    ErrorTree::from_issues(issues)
}

/// Renders one `<path>: <message>` line per issue, in list order.
pub fn to_text(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(|issue| format!("{}: {}", format_path(&issue.path), issue.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders a path as `a.b[0]["odd key"]`, or `(root)` when empty.
pub fn format_path(path: &[PathSegment]) -> String {
    if path.is_empty() {
        return "(root)".to_string();
    }

    let mut rendered = String::new();
    for segment in path {
        match segment {
            PathSegment::Key(key) if is_identifier(key) => {
                if !rendered.is_empty() {
                    rendered.push('.');
                }
                rendered.push_str(key);
            }
            PathSegment::Key(key) => rendered.push_str(&format!("[{key:?}]")),
            PathSegment::Index(index) => rendered.push_str(&format!("[{index}]")),
        }
    }
    rendered
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}
