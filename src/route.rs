// Client-side routes and the linear navigation history
use crate::api::{ProductId, SortKey};
use crate::catalog::CategoryId;

#[derive(Clone, Debug, PartialEq)]
pub enum Route {
    Home,
    Products {
        category: Option<CategoryId>,
        search: Option<String>,
        sort: SortKey,
        page: u32,
    },
    Trolley,
    AdminProducts,
    AdminProductEdit(Option<ProductId>),
}

impl Route {
    /// Category-scoped listing, the navigator's terminal destination.
    /// Carries over an active in-category search when one exists.
    pub fn products_for(category: CategoryId, carried_search: Option<String>) -> Self {
        Route::Products {
            category: Some(category),
            search: carried_search,
            sort: SortKey::Relevance,
            page: 1,
        }
    }

    pub fn all_products() -> Self {
        Route::Products {
            category: None,
            search: None,
            sort: SortKey::Relevance,
            page: 1,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Products { .. } => "Products",
            Route::Trolley => "Trolley",
            Route::AdminProducts => "Admin - Products",
            Route::AdminProductEdit(_) => "Admin - Product",
        }
    }
}

pub struct Router {
    current: Route,
    history: Vec<Route>,
    history_index: usize,
}

impl Router {
    pub fn new(start: Route) -> Self {
        Self {
            current: start.clone(),
            history: vec![start],
            history_index: 0,
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Navigate to a new route, dropping any forward history.
    pub fn push(&mut self, route: Route) {
        if route == self.current {
            return;
        }
        tracing::debug!(to = route.title(), "navigate");
        self.history.truncate(self.history_index + 1);
        self.history.push(route.clone());
        self.history_index += 1;
        self.current = route;
    }

    pub fn can_go_back(&self) -> bool {
        self.history_index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.history_index + 1 < self.history.len()
    }

    pub fn back(&mut self) {
        if self.history_index > 0 {
            self.history_index -= 1;
            self.current = self.history[self.history_index].clone();
        }
    }

    pub fn forward(&mut self) {
        if self.history_index + 1 < self.history.len() {
            self.history_index += 1;
            self.current = self.history[self.history_index].clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_truncates_forward_history() {
        let mut router = Router::new(Route::Home);
        router.push(Route::all_products());
        router.push(Route::Trolley);
        router.back();
        router.back();
        assert_eq!(*router.current(), Route::Home);

        router.push(Route::AdminProducts);
        assert!(!router.can_go_forward());
        router.back();
        assert_eq!(*router.current(), Route::Home);
        router.forward();
        assert_eq!(*router.current(), Route::AdminProducts);
    }

    #[test]
    fn pushing_the_current_route_is_noop() {
        let mut router = Router::new(Route::Home);
        router.push(Route::Home);
        assert!(!router.can_go_back());
    }

    #[test]
    fn terminal_route_preserves_search() {
        let route = Route::products_for(4, Some("organic".into()));
        match route {
            Route::Products { category, search, page, .. } => {
                assert_eq!(category, Some(4));
                assert_eq!(search.as_deref(), Some("organic"));
                assert_eq!(page, 1);
            }
            _ => panic!("wrong route"),
        }
    }
}
