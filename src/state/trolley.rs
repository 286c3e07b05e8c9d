// Trolley state - the locally held shopping trolley
use crate::api::{PriceUnit, ProductId, ProductSummary};

#[derive(Clone, Debug)]
pub struct TrolleyLine {
    pub product_id: ProductId,
    pub name: String,
    pub price: f64,
    pub price_unit: PriceUnit,
    pub quantity: u32,
}

impl TrolleyLine {
    pub fn total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Client-local trolley. Totals shown from it are presentational; the
/// backend re-prices everything at checkout.
pub struct TrolleyState {
    lines: Vec<TrolleyLine>,
}

impl TrolleyState {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn lines(&self) -> &[TrolleyLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Add one of `product`, merging into an existing line.
    pub fn add(&mut self, product: &ProductSummary) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product.product_id)
        {
            line.quantity += 1;
            return;
        }
        self.lines.push(TrolleyLine {
            product_id: product.product_id,
            name: product.name.clone(),
            price: product.price,
            price_unit: product.price_unit_type,
            quantity: 1,
        });
    }

    /// Set a line's quantity; zero removes the line.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.lines.retain(|line| line.product_id != product_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|line| line.product_id == product_id) {
            line.quantity = quantity;
        }
    }

    pub fn remove(&mut self, product_id: ProductId) {
        self.set_quantity(product_id, 0);
    }

    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(TrolleyLine::total).sum()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: ProductId, name: &str, price: f64) -> ProductSummary {
        ProductSummary {
            product_id: id,
            name: name.into(),
            price,
            price_unit_type: PriceUnit::Each,
            image: String::new(),
            rating: 0.0,
            review_count: 0,
        }
    }

    #[test]
    fn adding_twice_merges_lines() {
        let mut trolley = TrolleyState::new();
        trolley.add(&summary(1, "Bananas", 3.5));
        trolley.add(&summary(1, "Bananas", 3.5));
        trolley.add(&summary(2, "Bread", 4.0));

        assert_eq!(trolley.lines().len(), 2);
        assert_eq!(trolley.lines()[0].quantity, 2);
        assert_eq!(trolley.item_count(), 3);
    }

    #[test]
    fn zero_quantity_removes_the_line() {
        let mut trolley = TrolleyState::new();
        trolley.add(&summary(1, "Bananas", 3.5));
        trolley.set_quantity(1, 0);
        assert!(trolley.is_empty());
    }

    #[test]
    fn subtotal_sums_line_totals() {
        let mut trolley = TrolleyState::new();
        trolley.add(&summary(1, "Bananas", 3.5));
        trolley.set_quantity(1, 3);
        trolley.add(&summary(2, "Bread", 4.0));
        assert!((trolley.subtotal() - 14.5).abs() < f64::EPSILON);
    }
}
