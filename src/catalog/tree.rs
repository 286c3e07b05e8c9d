// Category tree - the immutable catalog taxonomy and the pure lookups over it
use serde::{Deserialize, Serialize};

pub type CategoryId = i64;

/// One node of the catalog taxonomy. The backend returns a forest of these
/// (multiple roots); ids are unique across the whole tree, so a single id
/// resolves to exactly one path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryNode {
    pub category_id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub children: Vec<CategoryNode>,
}

/// Resolve the root-to-target id path for `target`, depth-first in
/// root-list order. The returned path includes `target` itself. An unknown
/// id or an empty tree yields an empty path - that is the canonical
/// "show top level" result, not an error. First match wins if an id were
/// ever duplicated.
pub fn tree_path(tree: &[CategoryNode], target: CategoryId) -> Vec<CategoryId> {
    fn walk(nodes: &[CategoryNode], target: CategoryId, path: &mut Vec<CategoryId>) -> bool {
        for node in nodes {
            path.push(node.category_id);
            if node.category_id == target {
                return true;
            }
            if walk(&node.children, target, path) {
                return true;
            }
            path.pop();
        }
        false
    }

    let mut path = Vec::new();
    if walk(tree, target, &mut path) {
        path
    } else {
        Vec::new()
    }
}

/// Display name for a category id, same traversal as [`tree_path`].
/// Returns `""` when the id is not in the tree.
pub fn name_of(tree: &[CategoryNode], id: CategoryId) -> &str {
    for node in tree {
        if node.category_id == id {
            return &node.name;
        }
        let name = name_of(&node.children, id);
        if !name.is_empty() {
            return name;
        }
    }
    ""
}

/// Option list visible at drill `level` for a given selection path.
///
/// Level 0 is the root list verbatim. For deeper levels the selection is
/// re-resolved from the top on every call, so the result can never drift
/// out of sync with `tree` + `selection`. A missing tree, a selection
/// shorter than `level`, or a selection id that no longer resolves (stale
/// after a reload) all yield an empty slice.
pub fn options_at_level<'a>(
    tree: &'a [CategoryNode],
    selection: &[CategoryId],
    level: usize,
) -> &'a [CategoryNode] {
    let mut options = tree;
    for depth in 0..level {
        let Some(id) = selection.get(depth) else {
            return &[];
        };
        match options.iter().find(|node| node.category_id == *id) {
            Some(node) => options = &node.children,
            None => return &[],
        }
    }
    options
}
