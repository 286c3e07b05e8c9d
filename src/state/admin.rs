// Admin console state - product listing plus the create/edit form
use crate::api::{PriceUnit, Product, ProductDraft, ProductId, ProductQuery, SortKey};
use crate::catalog::picker::{deepest, slot_prefix, slots_from_path, CategorySlots, EMPTY_SLOTS};
use crate::catalog::tree::{tree_path, CategoryNode};
use crate::io::worker::ApiCommand;
use crate::route::Route;
use std::sync::mpsc::Sender;

const ADMIN_PAGE_SIZE: u32 = 50;

pub struct AdminState {
    pub items: Vec<crate::api::ProductSummary>,
    pub loading: bool,
    pub requested: Option<ProductQuery>,
    pub page: u32,
    pub search_input: String,
    pub search: Option<String>,
    pub form: ProductForm,
    pub form_loading: bool,
    /// Which edit target the form is currently seeded for; changes to the
    /// route re-seed it exactly once.
    form_seeded: Option<Option<ProductId>>,
    pub pending_delete: Option<(ProductId, String)>,
}

impl AdminState {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            requested: None,
            page: 1,
            search_input: String::new(),
            search: None,
            form: ProductForm::new(),
            form_loading: false,
            form_seeded: None,
            pending_delete: None,
        }
    }

    pub fn listing_query(&self) -> ProductQuery {
        ProductQuery {
            category: None,
            search: self.search.clone(),
            sort: SortKey::Relevance,
            page: self.page,
            page_size: ADMIN_PAGE_SIZE,
        }
    }

    /// Force a refetch after a mutation went through.
    pub fn invalidate_listing(&mut self) {
        self.requested = None;
    }

    pub fn form_is_for(&self, id: ProductId) -> bool {
        self.form_seeded == Some(Some(id))
    }

    /// Reset or load the form when the edit route's target changes.
    pub fn sync_form(&mut self, route: &Route, commands: &Sender<ApiCommand>) {
        let Route::AdminProductEdit(target) = route else {
            self.form_seeded = None;
            return;
        };
        if self.form_seeded == Some(*target) {
            return;
        }
        self.form_seeded = Some(*target);
        self.form = ProductForm::new();
        match target {
            None => self.form_loading = false,
            Some(id) => {
                self.form.editing = Some(*id);
                self.form_loading = true;
                let _ = commands.send(ApiCommand::FetchProduct(*id));
            }
        }
    }
}

pub struct ProductForm {
    pub name: String,
    pub price_text: String,
    pub unit: PriceUnit,
    pub description: String,
    pub quantity_text: String,
    pub slots: CategorySlots,
    pub editing: Option<ProductId>,
    pub saving: bool,
}

impl ProductForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            price_text: String::new(),
            unit: PriceUnit::Each,
            description: String::new(),
            quantity_text: String::new(),
            slots: EMPTY_SLOTS,
            editing: None,
            saving: false,
        }
    }

    /// Seed the form from a fetched product. The category slots come from
    /// re-resolving the product's deepest category against the current
    /// tree, so a category that has since moved still yields a valid
    /// ancestor path (and one that vanished degrades to empty slots).
    pub fn from_product(product: &Product, tree: &[CategoryNode]) -> Self {
        let slots = match product.categories.last() {
            Some(&deepest_id) => {
                let path = tree_path(tree, deepest_id);
                if path.is_empty() {
                    slots_from_path(&product.categories)
                } else {
                    slots_from_path(&path)
                }
            }
            None => EMPTY_SLOTS,
        };

        Self {
            name: product.name.clone(),
            price_text: format!("{}", product.price),
            unit: product.price_unit_type,
            description: product.description.clone(),
            quantity_text: product.quantity.to_string(),
            slots,
            editing: Some(product.product_id),
            saving: false,
        }
    }

    /// Validate the form into a request payload.
    pub fn to_draft(&self) -> Result<ProductDraft, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Name is required".to_string());
        }
        let price: f64 = self
            .price_text
            .trim()
            .parse()
            .map_err(|_| "Price must be a number".to_string())?;
        if price <= 0.0 {
            return Err("Price must be positive".to_string());
        }
        let quantity: i64 = self
            .quantity_text
            .trim()
            .parse()
            .map_err(|_| "Stock quantity must be a whole number".to_string())?;
        if quantity < 0 {
            return Err("Stock quantity cannot be negative".to_string());
        }
        if deepest(&self.slots).is_none() {
            return Err("At least one category is required".to_string());
        }

        Ok(ProductDraft {
            name: name.to_string(),
            price,
            price_unit_type: self.unit,
            description: self.description.trim().to_string(),
            quantity,
            categories: slot_prefix(&self.slots),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tree::tests::sample_tree;

    fn filled_form() -> ProductForm {
        let mut form = ProductForm::new();
        form.name = "Bananas 1kg".into();
        form.price_text = "3.50".into();
        form.quantity_text = "40".into();
        form.slots = [Some(1), Some(2), Some(4)];
        form
    }

    #[test]
    fn draft_carries_the_slot_path() {
        let draft = filled_form().to_draft().unwrap();
        assert_eq!(draft.categories, vec![1, 2, 4]);
        assert_eq!(draft.price, 3.5);
        assert_eq!(draft.quantity, 40);
    }

    #[test]
    fn draft_rejects_missing_fields() {
        let mut form = filled_form();
        form.name.clear();
        assert!(form.to_draft().is_err());

        let mut form = filled_form();
        form.price_text = "three".into();
        assert!(form.to_draft().is_err());

        let mut form = filled_form();
        form.slots = EMPTY_SLOTS;
        assert_eq!(
            form.to_draft().unwrap_err(),
            "At least one category is required"
        );
    }

    #[test]
    fn form_seeds_slots_by_resolving_the_deepest_category() {
        let product = Product {
            product_id: 9,
            name: "Bananas".into(),
            price: 3.5,
            price_unit_type: PriceUnit::Each,
            description: String::new(),
            images: Vec::new(),
            quantity: 10,
            categories: vec![4], // only the leaf is recorded
            rating: 0.0,
            review_count: 0,
        };
        let form = ProductForm::from_product(&product, &sample_tree());
        assert_eq!(form.slots, [Some(1), Some(2), Some(4)]);
    }

    #[test]
    fn form_slots_degrade_when_category_is_gone() {
        let product = Product {
            product_id: 9,
            name: "Ghost".into(),
            price: 1.0,
            price_unit_type: PriceUnit::Each,
            description: String::new(),
            images: Vec::new(),
            quantity: 0,
            categories: vec![999],
            rating: 0.0,
            review_count: 0,
        };
        let form = ProductForm::from_product(&product, &sample_tree());
        // unresolvable id falls back to the recorded list verbatim
        assert_eq!(form.slots, [Some(999), None, None]);
    }
}
