// Trolley page - line editing and the external checkout handoff
use crate::app::GreengrocerApp;
use crate::api::ProductId;
use crate::route::Route;
use crate::style;
use eframe::egui;

impl GreengrocerApp {
    pub(crate) fn render_trolley_page(&mut self, ctx: &egui::Context) {
        let mut goto: Option<Route> = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("My Trolley");
            ui.separator();

            if self.trolley.is_empty() {
                ui.add_space(20.0);
                ui.vertical_centered(|ui| {
                    ui.label("Your trolley is empty.");
                    ui.add_space(8.0);
                    if ui.button("Browse products").clicked() {
                        goto = Some(Route::all_products());
                    }
                });
                return;
            }

            let mut quantity_changes: Vec<(ProductId, u32)> = Vec::new();

            egui::ScrollArea::vertical()
                .id_salt("trolley_lines")
                .auto_shrink([false, false])
                .max_height((ui.available_height() - 80.0).max(0.0))
                .show(ui, |ui| {
                    egui::Grid::new("trolley_grid")
                        .num_columns(5)
                        .striped(true)
                        .spacing([16.0, 6.0])
                        .show(ui, |ui| {
                            for line in self.trolley.lines() {
                                style::truncated_label(ui, &line.name);
                                ui.label(style::price_tag(line.price, line.price_unit));

                                let mut quantity = line.quantity;
                                ui.add(egui::DragValue::new(&mut quantity).range(0..=999));
                                if quantity != line.quantity {
                                    quantity_changes.push((line.product_id, quantity));
                                }

                                ui.label(format!("${:.2}", line.total()));
                                if ui.small_button("\u{2715}").clicked() {
                                    quantity_changes.push((line.product_id, 0));
                                }
                                ui.end_row();
                            }
                        });
                });

            for (product_id, quantity) in quantity_changes {
                self.trolley.set_quantity(product_id, quantity);
            }

            ui.separator();
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(format!("Subtotal: ${:.2}", self.trolley.subtotal())).strong());
                ui.weak("- final prices are confirmed at checkout");
            });
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button(egui::RichText::new("Checkout").color(style::ACCENT)).clicked() {
                    match open::that(&self.config.api.checkout_url) {
                        Ok(_) => self.ui.set_info("Continuing checkout in your browser"),
                        Err(e) => self.ui.set_error(format!("Could not open checkout: {e}")),
                    }
                }
                if ui.button("Clear trolley").clicked() {
                    self.trolley.clear();
                }
            });
        });

        if let Some(route) = goto {
            self.navigate(route);
        }
    }
}
