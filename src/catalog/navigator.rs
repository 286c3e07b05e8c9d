// Category navigator - drill-down selection state shared by the header menu
// and the products-page sidebar
use super::tree::{options_at_level, tree_path, CategoryId, CategoryNode};

/// Number of drill levels the UI renders.
pub const DRILL_LEVELS: usize = 3;

/// Deepest level at which options are still drilled into rather than
/// navigated to (levels are 0-based).
const MAX_LEVEL: usize = DRILL_LEVELS - 1;

/// Drill-down controller over a category tree.
///
/// Owns the selected ancestor path; the render level is always the path
/// length (0..=2). Option lists are never stored - they are recomputed
/// from the tree and the selection on every frame, so back-navigation
/// reproduces the prior options exactly and a reloaded tree can never
/// leave a cached level behind.
#[derive(Debug, Clone)]
pub struct CategoryNavigator {
    selection: Vec<CategoryId>,
    /// (tree generation, seed target) the selection was last computed for.
    /// Re-syncing with an unchanged key is a no-op, which keeps a late
    /// tree load from clobbering a selection the user has advanced.
    synced: Option<(u64, Option<CategoryId>)>,
    all_action_from_level: usize,
}

/// What a pick at the current level resulted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    /// Selection advanced one level; keep showing the navigator.
    Drilled,
    /// A final category was chosen; the host should navigate to it.
    Terminal(CategoryId),
    /// The picked id is not among the current options (stale click);
    /// nothing changed.
    Ignored,
}

impl Default for CategoryNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryNavigator {
    pub fn new() -> Self {
        Self {
            selection: Vec::new(),
            synced: None,
            // Both production menus only offer Back / "All <name>" once a
            // node is selected; see DESIGN.md for the level-0 question.
            all_action_from_level: 1,
        }
    }

    #[allow(dead_code)]
    pub fn all_action_from_level(mut self, level: usize) -> Self {
        self.all_action_from_level = level.max(1);
        self
    }

    pub fn selection(&self) -> &[CategoryId] {
        &self.selection
    }

    /// Current render level. Always equals the selection length, bounded
    /// by [`MAX_LEVEL`] through the transitions themselves.
    pub fn level(&self) -> usize {
        self.selection.len()
    }

    /// Re-seed the selection from `target` when either the tree identity
    /// (its load generation) or the target itself has changed since the
    /// last sync. Idempotent for an unchanged `(generation, target)` pair.
    ///
    /// The resolved path is truncated to the drillable ancestor slots, so
    /// a deep-linked leaf is listed among its siblings at level 2 and an
    /// interior target shows its own children.
    pub fn sync(&mut self, tree: &[CategoryNode], generation: u64, target: Option<CategoryId>) {
        let key = (generation, target);
        if self.synced == Some(key) {
            return;
        }
        self.synced = Some(key);

        let mut path = match target {
            Some(id) => tree_path(tree, id),
            None => Vec::new(),
        };
        path.truncate(MAX_LEVEL);
        self.selection = path;
    }

    /// Options to render at the current level, computed fresh.
    pub fn options<'a>(&self, tree: &'a [CategoryNode]) -> &'a [CategoryNode] {
        options_at_level(tree, &self.selection, self.level())
    }

    /// User picked the option `id` at the current level.
    pub fn pick(&mut self, tree: &[CategoryNode], id: CategoryId) -> Pick {
        if !self.options(tree).iter().any(|n| n.category_id == id) {
            return Pick::Ignored;
        }
        if self.level() < MAX_LEVEL {
            self.selection.push(id);
            Pick::Drilled
        } else {
            Pick::Terminal(id)
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Drop the deepest selection step. No-op at the top level.
    pub fn back(&mut self) {
        self.selection.pop();
    }

    /// The node the "All <name>" terminal action refers to: the deepest
    /// selected node, once the policy level is reached.
    pub fn all_action<'a>(&self, tree: &'a [CategoryNode]) -> Option<&'a CategoryNode> {
        if self.level() < self.all_action_from_level {
            return None;
        }
        let parent_level = self.level().checked_sub(1)?;
        let id = *self.selection.get(parent_level)?;
        options_at_level(tree, &self.selection, parent_level)
            .iter()
            .find(|n| n.category_id == id)
    }

    /// Back to the initial empty state (after a terminal navigation has
    /// finished and its enclosing popup is gone). The sync key is kept, so
    /// an unchanged tree and target will not immediately re-seed.
    pub fn reset(&mut self) {
        self.selection.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::super::tree::tests::sample_tree;
    use super::*;

    #[test]
    fn three_level_drill_down_ends_terminal() {
        let tree = sample_tree();
        let mut nav = CategoryNavigator::new();
        nav.sync(&tree, 1, None);

        assert_eq!(nav.level(), 0);
        assert_eq!(nav.pick(&tree, 1), Pick::Drilled); // Produce
        assert_eq!(nav.selection(), &[1]);
        assert_eq!(nav.level(), 1);
        let ids: Vec<_> = nav.options(&tree).iter().map(|n| n.category_id).collect();
        assert_eq!(ids, vec![2, 5]); // Fruit, Vegetables

        assert_eq!(nav.pick(&tree, 2), Pick::Drilled); // Fruit
        assert_eq!(nav.selection(), &[1, 2]);
        assert_eq!(nav.level(), 2);
        let ids: Vec<_> = nav.options(&tree).iter().map(|n| n.category_id).collect();
        assert_eq!(ids, vec![3, 4]); // Apples, Bananas

        assert_eq!(nav.pick(&tree, 3), Pick::Terminal(3)); // Apples
        nav.reset();
        assert_eq!(nav.level(), 0);
        assert!(nav.selection().is_empty());
    }

    #[test]
    fn back_restores_prior_options_exactly() {
        let tree = sample_tree();
        let mut nav = CategoryNavigator::new();
        nav.sync(&tree, 1, None);
        nav.pick(&tree, 1);
        let before: Vec<_> = nav.options(&tree).iter().map(|n| n.category_id).collect();

        nav.pick(&tree, 2);
        assert_eq!(nav.level(), 2);
        nav.back();

        assert_eq!(nav.level(), 1);
        assert_eq!(nav.selection(), &[1]);
        let after: Vec<_> = nav.options(&tree).iter().map(|n| n.category_id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn back_at_top_level_is_noop() {
        let tree = sample_tree();
        let mut nav = CategoryNavigator::new();
        assert!(!nav.can_go_back());
        nav.back();
        assert_eq!(nav.level(), 0);
        assert_eq!(nav.options(&tree).len(), 2);
    }

    #[test]
    fn deep_link_seeds_ancestor_path() {
        // Navigator created before the tree arrives, seeded to Bananas.
        let tree = sample_tree();
        let mut nav = CategoryNavigator::new();
        nav.sync(&[], 0, Some(4));
        assert!(nav.selection().is_empty()); // nothing to resolve yet

        nav.sync(&tree, 1, Some(4)); // tree load bumped the generation
        assert_eq!(nav.selection(), &[1, 2]);
        assert_eq!(nav.level(), 2);
        assert!(nav.options(&tree).iter().any(|n| n.category_id == 4));
    }

    #[test]
    fn interior_deep_link_shows_its_children() {
        let tree = sample_tree();
        let mut nav = CategoryNavigator::new();
        nav.sync(&tree, 1, Some(2)); // Fruit
        assert_eq!(nav.selection(), &[1, 2]);
        let ids: Vec<_> = nav.options(&tree).iter().map(|n| n.category_id).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn sync_is_idempotent() {
        let tree = sample_tree();
        let mut nav = CategoryNavigator::new();
        nav.sync(&tree, 1, Some(4));
        let selection = nav.selection().to_vec();
        let level = nav.level();

        nav.sync(&tree, 1, Some(4));
        assert_eq!(nav.selection(), &selection[..]);
        assert_eq!(nav.level(), level);
    }

    #[test]
    fn sync_does_not_clobber_user_drilling() {
        // The user starts drilling, then a redundant sync for the same
        // generation and target fires; the drilled selection must survive.
        let tree = sample_tree();
        let mut nav = CategoryNavigator::new();
        nav.sync(&tree, 1, None);
        nav.pick(&tree, 6); // Bakery

        nav.sync(&tree, 1, None);
        assert_eq!(nav.selection(), &[6]);
    }

    #[test]
    fn tree_reload_recomputes_from_current_target() {
        let tree = sample_tree();
        let mut nav = CategoryNavigator::new();
        nav.sync(&tree, 1, Some(4));
        nav.back(); // user retreats to level 1

        // Reloaded tree no longer contains Fruit; path to Bananas is gone.
        let mut reloaded = sample_tree();
        reloaded[0].children.remove(0);
        nav.sync(&reloaded, 2, Some(4));
        assert!(nav.selection().is_empty());
        assert_eq!(nav.level(), 0);
        // degraded, not crashed: top level renders the reloaded roots
        assert_eq!(nav.options(&reloaded).len(), 2);
    }

    #[test]
    fn target_change_reseeds_even_on_same_tree() {
        let tree = sample_tree();
        let mut nav = CategoryNavigator::new();
        nav.sync(&tree, 1, Some(4));
        nav.sync(&tree, 1, Some(7)); // route moved to Bread
        assert_eq!(nav.selection(), &[6]);
        assert!(nav.options(&tree).iter().any(|n| n.category_id == 7));
    }

    #[test]
    fn unknown_deep_link_falls_back_to_top_level() {
        let tree = sample_tree();
        let mut nav = CategoryNavigator::new();
        nav.sync(&tree, 1, Some(-1));
        assert!(nav.selection().is_empty());
        assert_eq!(nav.options(&tree).len(), 2);
    }

    #[test]
    fn stale_pick_is_ignored() {
        let tree = sample_tree();
        let mut nav = CategoryNavigator::new();
        nav.sync(&tree, 1, None);
        assert_eq!(nav.pick(&tree, 999), Pick::Ignored);
        assert_eq!(nav.level(), 0);
    }

    #[test]
    fn all_action_requires_a_selected_node() {
        let tree = sample_tree();
        let mut nav = CategoryNavigator::new();
        nav.sync(&tree, 1, None);
        assert!(nav.all_action(&tree).is_none());

        nav.pick(&tree, 1);
        let all = nav.all_action(&tree).unwrap();
        assert_eq!(all.category_id, 1);
        assert_eq!(all.name, "Produce");

        nav.pick(&tree, 2);
        assert_eq!(nav.all_action(&tree).unwrap().category_id, 2);
    }

    #[test]
    fn all_action_policy_level_can_be_raised() {
        let tree = sample_tree();
        let mut nav = CategoryNavigator::new().all_action_from_level(2);
        nav.sync(&tree, 1, None);
        nav.pick(&tree, 1);
        assert!(nav.all_action(&tree).is_none());
        nav.pick(&tree, 2);
        assert!(nav.all_action(&tree).is_some());
    }

    #[test]
    fn drilling_into_a_leaf_shows_empty_options() {
        let tree = sample_tree();
        let mut nav = CategoryNavigator::new();
        nav.sync(&tree, 1, None);
        nav.pick(&tree, 1);
        nav.pick(&tree, 5); // Vegetables has no children
        assert!(nav.options(&tree).is_empty());
        // the All action still offers the leaf itself
        assert_eq!(nav.all_action(&tree).unwrap().category_id, 5);
    }
}
