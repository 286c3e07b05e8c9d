use crate::api::{ApiClient, ProductId, ProductQuery, ProductSummary};
use crate::catalog::{CatalogStore, CategoryNavigator, TreeState};
use crate::config::Config;
use crate::io::worker::{spawn_worker, ApiCommand, ApiResult};
use crate::route::{Route, Router};
use crate::state::admin::{AdminState, ProductForm};
use crate::state::{TrolleyState, UiState};
use eframe::egui;
use std::sync::mpsc::{Receiver, Sender};

/// Product listing state for the storefront page. The query it was
/// requested for is the identity key: a worker result only applies while
/// its query still matches, so a slow response for an old page can never
/// overwrite a newer one.
pub struct ProductsPage {
    pub items: Vec<ProductSummary>,
    pub loading: bool,
    pub requested: Option<ProductQuery>,
    /// Buffer behind the in-category search box.
    pub search_input: String,
}

impl ProductsPage {
    fn new() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            requested: None,
            search_input: String::new(),
        }
    }
}

pub struct GreengrocerApp {
    pub config: Config,
    pub commands: Sender<ApiCommand>,
    results: Receiver<ApiResult>,

    pub router: Router,
    pub catalog: CatalogStore,
    pub ui: UiState,
    pub trolley: TrolleyState,

    // One navigator per surface; both read the same cached tree.
    pub menu_nav: CategoryNavigator,
    pub sidebar_nav: CategoryNavigator,
    menu_was_open: bool,

    pub products: ProductsPage,
    pub admin: AdminState,
    pub header_search: String,
}

impl GreengrocerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        if config.ui.theme == "dark" {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
        } else {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
        }

        let client = ApiClient::new(&config.api.base_url);
        let (commands, results) = spawn_worker(cc.egui_ctx.clone(), client);

        Self {
            config,
            commands,
            results,
            router: Router::new(Route::Home),
            catalog: CatalogStore::new(),
            ui: UiState::new(),
            trolley: TrolleyState::new(),
            menu_nav: CategoryNavigator::new(),
            sidebar_nav: CategoryNavigator::new(),
            menu_was_open: false,
            products: ProductsPage::new(),
            admin: AdminState::new(),
            header_search: String::new(),
        }
    }

    pub fn navigate(&mut self, route: Route) {
        self.router.push(route);
    }

    /// Apply everything the worker finished since the last frame.
    fn drain_results(&mut self) {
        while let Ok(result) = self.results.try_recv() {
            match result {
                ApiResult::CategoryTree(Ok(roots)) => {
                    self.catalog.set_loaded(roots);
                }
                ApiResult::CategoryTree(Err(message)) => {
                    // Surfaced once; navigators keep rendering empty lists.
                    self.catalog.set_failed();
                    self.ui.set_error(format!("Couldn't load categories: {message}"));
                }
                ApiResult::Products { query, result } => {
                    self.apply_product_listing(query, result);
                }
                ApiResult::Product(Ok(product)) => {
                    if self.admin.form_is_for(product.product_id) {
                        self.admin.form =
                            ProductForm::from_product(&product, self.catalog.roots());
                        self.admin.form_loading = false;
                    }
                }
                ApiResult::Product(Err(message)) => {
                    self.admin.form_loading = false;
                    self.ui.set_error(message);
                }
                ApiResult::ProductSaved(Ok(_)) => {
                    self.admin.form.saving = false;
                    self.admin.invalidate_listing();
                    self.ui.set_info("Product saved");
                    self.navigate(Route::AdminProducts);
                }
                ApiResult::ProductSaved(Err(message)) => {
                    self.admin.form.saving = false;
                    self.ui.set_error(message);
                }
                ApiResult::ProductDeleted(Ok(_)) => {
                    self.admin.invalidate_listing();
                    self.ui.set_info("Product removed");
                }
                ApiResult::ProductDeleted(Err(message)) => {
                    self.ui.set_error(message);
                }
            }
        }
    }

    fn apply_product_listing(
        &mut self,
        query: ProductQuery,
        result: Result<Vec<ProductSummary>, String>,
    ) {
        let for_storefront = self.products.requested.as_ref() == Some(&query);
        let for_admin = self.admin.requested.as_ref() == Some(&query);
        if !for_storefront && !for_admin {
            return; // stale: the page has moved on to a different query
        }

        match result {
            Ok(items) => {
                if for_storefront {
                    self.products.items = items.clone();
                    self.products.loading = false;
                }
                if for_admin {
                    self.admin.items = items;
                    self.admin.loading = false;
                }
            }
            Err(message) => {
                if for_storefront {
                    self.products.loading = false;
                }
                if for_admin {
                    self.admin.loading = false;
                }
                self.ui.set_error(message);
            }
        }
    }

    /// Keep both navigators in line with the tree snapshot and the route.
    /// `sync` itself is keyed on (generation, target), so calling it every
    /// frame is free when nothing changed.
    fn sync_navigators(&mut self) {
        let generation = self.catalog.generation();
        let tree = self.catalog.roots();

        let route_category = match self.router.current() {
            Route::Products { category, .. } => *category,
            _ => None,
        };
        self.sidebar_nav.sync(tree, generation, route_category);

        // The header menu always starts from the top level.
        self.menu_nav.sync(tree, generation, None);
    }

    /// Issue listing fetches whenever the route-derived query changed.
    fn sync_product_queries(&mut self) {
        if let Route::Products {
            category,
            search,
            sort,
            page,
        } = self.router.current()
        {
            let query = ProductQuery {
                category: *category,
                search: search.clone(),
                sort: *sort,
                page: *page,
                page_size: self.config.api.page_size,
            };
            if self.products.requested.as_ref() != Some(&query) {
                self.products.search_input = query.search.clone().unwrap_or_default();
                self.products.requested = Some(query.clone());
                self.products.loading = true;
                let _ = self.commands.send(ApiCommand::FetchProducts(query));
            }
        }

        if matches!(self.router.current(), Route::AdminProducts) {
            let query = self.admin.listing_query();
            if self.admin.requested.as_ref() != Some(&query) {
                self.admin.requested = Some(query.clone());
                self.admin.loading = true;
                let _ = self.commands.send(ApiCommand::FetchProducts(query));
            }
        }
    }

    /// The search string active on the current listing, carried into
    /// category-scoped navigation.
    pub fn current_search(&self) -> Option<String> {
        match self.router.current() {
            Route::Products { search, .. } => search.clone(),
            _ => None,
        }
    }

    fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.router.current().title());
                ui.separator();
                ui.label(format!("Trolley: {} item(s)", self.trolley.item_count()));
                if self.catalog.is_loading() {
                    ui.separator();
                    ui.spinner();
                    ui.label("Loading categories...");
                }
                if self.catalog.state() == TreeState::Failed {
                    ui.separator();
                    if ui.small_button("Retry categories").clicked() {
                        self.catalog.retry();
                    }
                }
                if let Some((message, _)) = &self.ui.error_message {
                    ui.separator();
                    ui.colored_label(egui::Color32::RED, message);
                }
                if let Some((message, _)) = &self.ui.info_message {
                    ui.separator();
                    ui.colored_label(egui::Color32::DARK_GREEN, message);
                }
            });
        });
    }

    fn render_current_page(&mut self, ctx: &egui::Context) {
        match self.router.current().clone() {
            Route::Home => self.render_home_page(ctx),
            Route::Products { .. } => self.render_products_page(ctx),
            Route::Trolley => self.render_trolley_page(ctx),
            Route::AdminProducts => self.render_admin_list_page(ctx),
            Route::AdminProductEdit(product_id) => self.render_admin_edit_page(ctx, product_id),
        }
    }

    pub(crate) fn menu_closed_edge(&mut self, open_now: bool) {
        if self.menu_was_open && !open_now {
            // Popup is gone; snap back to the top level for next open.
            self.menu_nav.reset();
        }
        self.menu_was_open = open_now;
    }

    pub(crate) fn delete_product(&mut self, id: ProductId) {
        let _ = self.commands.send(ApiCommand::DeleteProduct(id));
    }
}

impl eframe::App for GreengrocerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_results();
        self.ui.clear_expired_messages();

        self.catalog.ensure_loaded(&self.commands);
        self.sync_navigators();
        self.sync_product_queries();
        self.admin.sync_form(self.router.current(), &self.commands);

        self.render_header(ctx);
        self.render_status_bar(ctx);
        self.render_current_page(ctx);
        self.render_delete_confirm(ctx);
    }
}
