// Catalog store - the one cached category tree snapshot every navigator
// instance reads from
use super::tree::{name_of, CategoryId, CategoryNode};
use crate::io::worker::ApiCommand;
use std::sync::mpsc::Sender;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeState {
    NotLoaded,
    Loading,
    Loaded,
    /// Fetch failed; surfaced once, not retried automatically. The store
    /// keeps serving an empty forest so everything degrades instead of
    /// crashing.
    Failed,
}

pub struct CatalogStore {
    roots: Vec<CategoryNode>,
    state: TreeState,
    /// Bumped on every successful load; navigators key their resync on it.
    generation: u64,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            roots: Vec::new(),
            state: TreeState::NotLoaded,
            generation: 0,
        }
    }

    /// The tree snapshot. Empty until a load succeeds.
    pub fn roots(&self) -> &[CategoryNode] {
        match self.state {
            TreeState::Loaded => &self.roots,
            _ => &[],
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn state(&self) -> TreeState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == TreeState::Loading
    }

    /// Request the tree once. Every navigator surface calls this; only the
    /// first call actually issues a fetch.
    pub fn ensure_loaded(&mut self, commands: &Sender<ApiCommand>) {
        if self.state != TreeState::NotLoaded {
            return;
        }
        self.state = TreeState::Loading;
        if commands.send(ApiCommand::FetchCategoryTree).is_err() {
            tracing::warn!("api worker is gone; category tree unavailable");
            self.state = TreeState::Failed;
        }
    }

    pub fn set_loaded(&mut self, roots: Vec<CategoryNode>) {
        self.roots = roots;
        self.state = TreeState::Loaded;
        self.generation += 1;
        tracing::debug!(
            generation = self.generation,
            roots = self.roots.len(),
            "category tree loaded"
        );
    }

    pub fn set_failed(&mut self) {
        self.roots.clear();
        self.state = TreeState::Failed;
    }

    /// Allow a manual reload after a failure (a fresh `ensure_loaded` will
    /// fetch again).
    pub fn retry(&mut self) {
        if self.state == TreeState::Failed {
            self.state = TreeState::NotLoaded;
        }
    }

    pub fn name_of(&self, id: CategoryId) -> &str {
        name_of(self.roots(), id)
    }
}

#[cfg(test)]
mod tests {
    use super::super::tree::tests::sample_tree;
    use super::*;
    use std::sync::mpsc::channel;

    #[test]
    fn fetch_is_deduplicated() {
        let (tx, rx) = channel();
        let mut store = CatalogStore::new();
        store.ensure_loaded(&tx);
        store.ensure_loaded(&tx);
        store.ensure_loaded(&tx);
        assert_eq!(rx.try_iter().count(), 1);
        assert!(store.is_loading());
    }

    #[test]
    fn roots_are_empty_until_loaded() {
        let (tx, _rx) = channel();
        let mut store = CatalogStore::new();
        assert!(store.roots().is_empty());
        store.ensure_loaded(&tx);
        assert!(store.roots().is_empty());

        store.set_loaded(sample_tree());
        assert_eq!(store.roots().len(), 2);
        assert_eq!(store.generation(), 1);
    }

    #[test]
    fn failure_degrades_to_empty_forest() {
        let mut store = CatalogStore::new();
        store.set_loaded(sample_tree());
        store.set_failed();
        assert!(store.roots().is_empty());
        assert_eq!(store.name_of(1), "");
        assert_eq!(store.state(), TreeState::Failed);
    }

    #[test]
    fn reload_bumps_generation() {
        let mut store = CatalogStore::new();
        store.set_loaded(sample_tree());
        store.set_loaded(sample_tree());
        assert_eq!(store.generation(), 2);
    }
}
