// Products-page category sidebar - same navigator, seeded from the route
use crate::app::GreengrocerApp;
use crate::catalog::{CategoryId, Pick};
use crate::route::Route;
use crate::style;
use eframe::egui;

impl GreengrocerApp {
    pub(crate) fn render_category_sidebar(&mut self, ui: &mut egui::Ui) {
        let route_category = match self.router.current() {
            Route::Products { category, .. } => *category,
            _ => None,
        };
        let carried_search = self.current_search();

        ui.add_space(4.0);
        ui.heading("Categories");
        ui.separator();

        let mut goto: Option<Route> = None;
        let mut go_back = false;
        let mut picked: Option<CategoryId> = None;

        egui::ScrollArea::vertical()
            .id_salt("category_sidebar")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let tree = self.catalog.roots();

                if self.sidebar_nav.can_go_back() {
                    if style::truncated_label_with_sense(
                        ui,
                        egui::RichText::new("\u{2039} Back").color(style::ACCENT).size(15.0),
                        egui::Sense::click(),
                    )
                    .clicked()
                    {
                        go_back = true;
                    }
                    if let Some(all) = self.sidebar_nav.all_action(tree) {
                        let (all_id, all_name) = (all.category_id, all.name.clone());
                        if style::truncated_label_with_sense(
                            ui,
                            egui::RichText::new(format!("All {all_name}"))
                                .color(style::ACCENT_SOFT),
                            egui::Sense::click(),
                        )
                        .clicked()
                        {
                            goto = Some(Route::products_for(all_id, carried_search.clone()));
                        }
                    }
                    ui.separator();
                }

                let options = self.sidebar_nav.options(tree);
                if options.is_empty() {
                    ui.weak(if self.sidebar_nav.level() == 0 {
                        "No categories"
                    } else {
                        "No subcategories"
                    });
                }
                for node in options {
                    let selected = route_category == Some(node.category_id);
                    if ui.selectable_label(selected, &node.name).clicked() {
                        picked = Some(node.category_id);
                    }
                }
            });

        if go_back {
            self.sidebar_nav.back();
        }
        if let Some(id) = picked {
            let tree = self.catalog.roots();
            if let Pick::Terminal(chosen) = self.sidebar_nav.pick(tree, id) {
                goto = Some(Route::products_for(chosen, carried_search));
            }
        }
        if let Some(route) = goto {
            self.navigate(route);
        }
    }
}
