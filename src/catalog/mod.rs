pub mod navigator;
pub mod picker;
pub mod store;
pub mod tree;

pub use navigator::{CategoryNavigator, Pick};
pub use store::{CatalogStore, TreeState};
pub use tree::{CategoryId, CategoryNode};
