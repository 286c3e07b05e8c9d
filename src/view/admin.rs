// Admin console - product table and the create/edit form with the
// controlled category picker
use crate::app::GreengrocerApp;
use crate::api::{PriceUnit, ProductId};
use crate::catalog::navigator::DRILL_LEVELS;
use crate::catalog::picker;
use crate::io::worker::ApiCommand;
use crate::route::Route;
use crate::style;
use eframe::egui;
use egui_extras::{Column, TableBuilder};

impl GreengrocerApp {
    pub(crate) fn render_admin_list_page(&mut self, ctx: &egui::Context) {
        let mut goto: Option<Route> = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.heading("Products");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("New Product").clicked() {
                        goto = Some(Route::AdminProductEdit(None));
                    }
                    if ui.small_button("Search").clicked() {
                        let term = self.admin.search_input.trim().to_string();
                        self.admin.search = (!term.is_empty()).then_some(term);
                        self.admin.page = 1;
                    }
                    ui.add_sized(
                        [200.0, 20.0],
                        egui::TextEdit::singleline(&mut self.admin.search_input)
                            .hint_text("Filter by name..."),
                    );
                });
            });
            ui.separator();

            if self.admin.loading {
                ui.centered_and_justified(|ui| {
                    ui.spinner();
                });
                return;
            }

            let mut edit: Option<ProductId> = None;
            let mut ask_delete: Option<(ProductId, String)> = None;

            egui::ScrollArea::vertical()
                .id_salt("admin_table")
                .auto_shrink([false, false])
                .max_height((ui.available_height() - 30.0).max(0.0))
                .show(ui, |ui| {
                    TableBuilder::new(ui)
                        .striped(true)
                        .resizable(true)
                        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                        .column(Column::auto().at_least(50.0)) // id
                        .column(Column::remainder().clip(true)) // name
                        .column(Column::auto().at_least(80.0)) // price
                        .column(Column::auto().at_least(70.0)) // rating
                        .column(Column::auto().at_least(110.0)) // actions
                        .header(style::HEADER_HEIGHT, |mut header| {
                            header.col(|ui| {
                                ui.label("ID");
                            });
                            header.col(|ui| {
                                ui.label("Name");
                            });
                            header.col(|ui| {
                                ui.label("Price");
                            });
                            header.col(|ui| {
                                ui.label("Rating");
                            });
                            header.col(|ui| {
                                ui.label("");
                            });
                        })
                        .body(|body| {
                            body.rows(style::ROW_HEIGHT, self.admin.items.len(), |mut row| {
                                let product = &self.admin.items[row.index()];
                                row.col(|ui| {
                                    ui.label(product.product_id.to_string());
                                });
                                row.col(|ui| {
                                    style::truncated_label(ui, &product.name);
                                });
                                row.col(|ui| {
                                    ui.label(style::price_tag(
                                        product.price,
                                        product.price_unit_type,
                                    ));
                                });
                                row.col(|ui| {
                                    ui.label(style::rating_tag(
                                        product.rating,
                                        product.review_count,
                                    ));
                                });
                                row.col(|ui| {
                                    if ui.small_button("Edit").clicked() {
                                        edit = Some(product.product_id);
                                    }
                                    if ui.small_button("Delete").clicked() {
                                        ask_delete =
                                            Some((product.product_id, product.name.clone()));
                                    }
                                });
                            });
                        });
                });

            if let Some(id) = edit {
                goto = Some(Route::AdminProductEdit(Some(id)));
            }
            if ask_delete.is_some() {
                self.admin.pending_delete = ask_delete;
            }

            ui.separator();
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(self.admin.page > 1, egui::Button::new("\u{2039} Prev"))
                    .clicked()
                {
                    self.admin.page -= 1;
                }
                ui.label(format!("Page {}", self.admin.page));
                let full_page = self.admin.items.len() as u32
                    == self.admin.listing_query().page_size;
                if ui
                    .add_enabled(full_page, egui::Button::new("Next \u{203a}"))
                    .clicked()
                {
                    self.admin.page += 1;
                }
            });
        });

        if let Some(route) = goto {
            self.navigate(route);
        }
    }

    /// Modal confirmation before a product is deleted.
    pub(crate) fn render_delete_confirm(&mut self, ctx: &egui::Context) {
        let Some((id, name)) = self.admin.pending_delete.clone() else {
            return;
        };
        egui::Window::new("Confirm delete")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(format!("Delete \"{name}\"?"));
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Delete").clicked() {
                        self.delete_product(id);
                        self.admin.pending_delete = None;
                    }
                    if ui.button("Cancel").clicked() {
                        self.admin.pending_delete = None;
                    }
                });
            });
    }

    pub(crate) fn render_admin_edit_page(
        &mut self,
        ctx: &egui::Context,
        product_id: Option<ProductId>,
    ) {
        let mut goto: Option<Route> = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading(if product_id.is_some() {
                "Edit Product"
            } else {
                "New Product"
            });
            ui.separator();

            if self.admin.form_loading {
                ui.centered_and_justified(|ui| {
                    ui.spinner();
                });
                return;
            }

            egui::ScrollArea::vertical()
                .id_salt("admin_form")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.set_max_width(480.0);
                    self.render_category_picker(ui);
                    ui.add_space(8.0);

                    egui::Grid::new("product_form")
                        .num_columns(2)
                        .spacing([12.0, 8.0])
                        .show(ui, |ui| {
                            ui.label("Name");
                            ui.text_edit_singleline(&mut self.admin.form.name);
                            ui.end_row();

                            ui.label("Price");
                            ui.horizontal(|ui| {
                                ui.add_sized(
                                    [100.0, 20.0],
                                    egui::TextEdit::singleline(&mut self.admin.form.price_text),
                                );
                                egui::ComboBox::from_id_salt("price_unit")
                                    .selected_text(self.admin.form.unit.label())
                                    .show_ui(ui, |ui| {
                                        for unit in [PriceUnit::Each, PriceUnit::Gram] {
                                            ui.selectable_value(
                                                &mut self.admin.form.unit,
                                                unit,
                                                unit.label(),
                                            );
                                        }
                                    });
                            });
                            ui.end_row();

                            ui.label("Stock quantity");
                            ui.add_sized(
                                [100.0, 20.0],
                                egui::TextEdit::singleline(&mut self.admin.form.quantity_text),
                            );
                            ui.end_row();

                            ui.label("Description");
                            ui.text_edit_multiline(&mut self.admin.form.description);
                            ui.end_row();
                        });

                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        let save = egui::Button::new(if self.admin.form.saving {
                            "Saving..."
                        } else {
                            "Save"
                        });
                        if ui.add_enabled(!self.admin.form.saving, save).clicked() {
                            match self.admin.form.to_draft() {
                                Ok(draft) => {
                                    self.admin.form.saving = true;
                                    let command = match self.admin.form.editing {
                                        Some(id) => ApiCommand::UpdateProduct(id, draft),
                                        None => ApiCommand::CreateProduct(draft),
                                    };
                                    let _ = self.commands.send(command);
                                }
                                Err(message) => self.ui.set_error(message),
                            }
                        }
                        if ui.button("Cancel").clicked() {
                            goto = Some(Route::AdminProducts);
                        }
                    });
                });
        });

        if let Some(route) = goto {
            self.navigate(route);
        }
    }

    /// Three dependent dropdowns over the shared tree. The form owns the
    /// slots; options per level are recomputed from the tree every frame.
    fn render_category_picker(&mut self, ui: &mut egui::Ui) {
        for level in 0..DRILL_LEVELS {
            let slots = self.admin.form.slots;
            let enabled = level == 0 || slots[level - 1].is_some();

            let selected_text = match slots[level] {
                Some(id) => {
                    let name = self.catalog.name_of(id);
                    if name.is_empty() {
                        format!("#{id}")
                    } else {
                        name.to_string()
                    }
                }
                None => "\u{2014}".to_string(),
            };

            let mut changed: Option<(usize, crate::catalog::CategoryId)> = None;
            ui.horizontal(|ui| {
                ui.label(format!("Category {}", level + 1));
                ui.add_enabled_ui(enabled, |ui| {
                    egui::ComboBox::from_id_salt(("category_slot", level))
                        .width(220.0)
                        .selected_text(selected_text)
                        .show_ui(ui, |ui| {
                            let tree = self.catalog.roots();
                            for node in picker::slot_options(tree, &slots, level) {
                                if ui
                                    .selectable_label(
                                        slots[level] == Some(node.category_id),
                                        &node.name,
                                    )
                                    .clicked()
                                {
                                    changed = Some((level, node.category_id));
                                }
                            }
                        });
                });
            });
            if let Some((level, id)) = changed {
                picker::select_at(&mut self.admin.form.slots, level, id);
            }
        }
    }
}
