// Landing page - root categories as entry points
use crate::app::GreengrocerApp;
use crate::catalog::CategoryId;
use crate::route::Route;
use crate::style;
use eframe::egui;

impl GreengrocerApp {
    pub(crate) fn render_home_page(&mut self, ctx: &egui::Context) {
        let mut goto: Option<Route> = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(40.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("Greengrocer")
                        .color(style::ACCENT)
                        .strong()
                        .size(32.0),
                );
                ui.label("Fresh groceries, delivered.");
                ui.add_space(16.0);
                if ui.button("Shop all products").clicked() {
                    goto = Some(Route::all_products());
                }
            });

            ui.add_space(32.0);
            ui.separator();
            ui.add_space(8.0);
            ui.heading("Shop by category");
            ui.add_space(8.0);

            if self.catalog.is_loading() {
                ui.spinner();
            }

            let mut picked: Option<CategoryId> = None;
            ui.horizontal_wrapped(|ui| {
                for root in self.catalog.roots() {
                    if ui.button(&root.name).clicked() {
                        picked = Some(root.category_id);
                    }
                }
            });
            if let Some(id) = picked {
                goto = Some(Route::products_for(id, None));
            }
        });

        if let Some(route) = goto {
            self.navigate(route);
        }
    }
}
