// Storefront product listing - grid, in-category search, sort, pagination
use crate::app::GreengrocerApp;
use crate::api::SortKey;
use crate::route::Route;
use crate::style;
use eframe::egui;

impl GreengrocerApp {
    pub(crate) fn render_products_page(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::SidePanel::left("category_panel")
                .resizable(true)
                .default_width(style::SIDEBAR_WIDTH)
                .show_inside(ui, |ui| {
                    self.render_category_sidebar(ui);
                });
            egui::CentralPanel::default().show_inside(ui, |ui| {
                self.render_product_listing(ui);
            });
        });
    }

    fn render_product_listing(&mut self, ui: &mut egui::Ui) {
        let (category, search, sort, page) = match self.router.current() {
            Route::Products {
                category,
                search,
                sort,
                page,
            } => (*category, search.clone(), *sort, *page),
            _ => return,
        };

        let title = match category {
            Some(id) => {
                let name = self.catalog.name_of(id);
                if name.is_empty() {
                    "Products".to_string()
                } else {
                    name.to_string()
                }
            }
            None => "All Products".to_string(),
        };
        ui.add_space(4.0);
        ui.heading(title);

        let mut goto: Option<Route> = None;

        ui.horizontal(|ui| {
            if category.is_some() {
                let response = ui.add_sized(
                    [220.0, 20.0],
                    egui::TextEdit::singleline(&mut self.products.search_input)
                        .hint_text("In this category..."),
                );
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.small_button("Search").clicked() || submitted {
                    let term = self.products.search_input.trim().to_string();
                    goto = Some(Route::Products {
                        category,
                        search: (!term.is_empty()).then_some(term),
                        sort,
                        page: 1,
                    });
                }
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                egui::ComboBox::from_id_salt("sort_method")
                    .selected_text(sort.label())
                    .show_ui(ui, |ui| {
                        for key in SortKey::ALL {
                            if ui.selectable_label(sort == key, key.label()).clicked()
                                && key != sort
                            {
                                goto = Some(Route::Products {
                                    category,
                                    search: search.clone(),
                                    sort: key,
                                    page: 1,
                                });
                            }
                        }
                    });
                ui.label("Sort by");
            });
        });
        ui.separator();

        if self.products.loading {
            ui.centered_and_justified(|ui| {
                ui.spinner();
            });
            return;
        }

        if self.products.items.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.weak("No Products");
            });
            return;
        }

        let page_size = self.config.api.page_size;
        egui::ScrollArea::vertical()
            .id_salt("product_grid")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for product in &self.products.items {
                        ui.allocate_ui(
                            egui::vec2(style::CARD_WIDTH, style::CARD_HEIGHT),
                            |ui| {
                                egui::Frame::group(ui.style()).show(ui, |ui| {
                                    ui.set_width(style::CARD_WIDTH - 16.0);
                                    ui.vertical(|ui| {
                                        style::truncated_label(
                                            ui,
                                            egui::RichText::new(&product.name).strong(),
                                        );
                                        ui.label(style::price_tag(
                                            product.price,
                                            product.price_unit_type,
                                        ));
                                        let rating =
                                            style::rating_tag(product.rating, product.review_count);
                                        if rating.is_empty() {
                                            ui.weak("No reviews yet");
                                        } else {
                                            ui.weak(rating);
                                        }
                                        if ui.button("Add to trolley").clicked() {
                                            self.trolley.add(product);
                                        }
                                    });
                                });
                            },
                        );
                    }
                });
            });

        ui.separator();
        ui.horizontal(|ui| {
            if ui.add_enabled(page > 1, egui::Button::new("\u{2039} Prev")).clicked() {
                goto = Some(Route::Products {
                    category,
                    search: search.clone(),
                    sort,
                    page: page - 1,
                });
            }
            ui.label(format!("Page {page}"));
            let full_page = self.products.items.len() as u32 == page_size;
            if ui.add_enabled(full_page, egui::Button::new("Next \u{203a}")).clicked() {
                goto = Some(Route::Products {
                    category,
                    search,
                    sort,
                    page: page + 1,
                });
            }
        });

        if let Some(route) = goto {
            self.navigate(route);
        }
    }
}
