// Header bar - categories mega-menu, logo, search, account menu, trolley
use crate::app::GreengrocerApp;
use crate::api::SortKey;
use crate::catalog::{CategoryId, Pick};
use crate::route::Route;
use crate::style;
use eframe::egui;

impl GreengrocerApp {
    pub(crate) fn render_header(&mut self, ctx: &egui::Context) {
        let mut goto: Option<Route> = None;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(self.router.can_go_back(), egui::Button::new("\u{23f4}"))
                    .on_hover_text("Back")
                    .clicked()
                {
                    self.router.back();
                }
                if ui
                    .add_enabled(self.router.can_go_forward(), egui::Button::new("\u{23f5}"))
                    .on_hover_text("Forward")
                    .clicked()
                {
                    self.router.forward();
                }

                let menu_response = ui.menu_button("\u{2630} Categories", |ui| {
                    ui.set_min_width(style::MENU_WIDTH);
                    if let Some(route) = self.render_category_menu(ui) {
                        goto = Some(route);
                        ui.close();
                    }
                });
                self.menu_closed_edge(menu_response.inner.is_some());

                if ui
                    .button(egui::RichText::new("Greengrocer").color(style::ACCENT).strong().size(18.0))
                    .clicked()
                {
                    goto = Some(Route::Home);
                }

                // Search, centered in the remaining space
                let search_width = (ui.available_width() - 260.0).max(120.0);
                let response = ui.add_sized(
                    [search_width, 20.0],
                    egui::TextEdit::singleline(&mut self.header_search).hint_text("Search..."),
                );
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("\u{1f50d}").clicked() || submitted {
                    let term = self.header_search.trim().to_string();
                    goto = Some(Route::Products {
                        category: None,
                        search: (!term.is_empty()).then_some(term),
                        sort: SortKey::Relevance,
                        page: 1,
                    });
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(format!("\u{1f6d2} Trolley ({})", self.trolley.item_count()))
                        .clicked()
                    {
                        goto = Some(Route::Trolley);
                    }
                    ui.menu_button("My", |ui| {
                        if ui.button("Trolley").clicked() {
                            goto = Some(Route::Trolley);
                            ui.close();
                        }
                        if ui.button("Admin console").clicked() {
                            goto = Some(Route::AdminProducts);
                            ui.close();
                        }
                    });
                });
            });
            ui.add_space(4.0);
        });

        if let Some(route) = goto {
            self.navigate(route);
        }
    }

    /// The drill-down list inside the categories popup. Returns the route
    /// to open when a terminal pick was made.
    fn render_category_menu(&mut self, ui: &mut egui::Ui) -> Option<Route> {
        let mut goto: Option<Route> = None;
        let mut go_back = false;
        let mut picked: Option<CategoryId> = None;

        {
            let tree = self.catalog.roots();

            if self.menu_nav.can_go_back() {
                if ui
                    .button(egui::RichText::new("\u{2039} Back").color(style::ACCENT))
                    .clicked()
                {
                    go_back = true;
                }
                if let Some(all) = self.menu_nav.all_action(tree) {
                    let (all_id, all_name) = (all.category_id, all.name.clone());
                    if ui
                        .button(
                            egui::RichText::new(format!("All {all_name}"))
                                .color(style::ACCENT_SOFT),
                        )
                        .clicked()
                    {
                        goto = Some(Route::products_for(all_id, None));
                    }
                }
                ui.separator();
            }

            let options = self.menu_nav.options(tree);
            if options.is_empty() {
                ui.weak(if self.menu_nav.level() == 0 {
                    "No categories available"
                } else {
                    "No subcategories"
                });
            }
            for node in options {
                if ui.button(&node.name).clicked() {
                    picked = Some(node.category_id);
                }
            }
        }

        if go_back {
            self.menu_nav.back();
        }
        if let Some(id) = picked {
            let tree = self.catalog.roots();
            if let Pick::Terminal(chosen) = self.menu_nav.pick(tree, id) {
                goto = Some(Route::products_for(chosen, None));
            }
        }
        goto
    }
}
