use crate::api::{ApiClient, Product, ProductDraft, ProductId, ProductQuery, ProductSummary};
use crate::catalog::CategoryNode;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

pub enum ApiCommand {
    FetchCategoryTree,
    FetchProducts(ProductQuery),
    FetchProduct(ProductId),
    CreateProduct(ProductDraft),
    UpdateProduct(ProductId, ProductDraft),
    DeleteProduct(ProductId),
}

pub enum ApiResult {
    CategoryTree(Result<Vec<CategoryNode>, String>),
    Products {
        query: ProductQuery,
        result: Result<Vec<ProductSummary>, String>,
    },
    Product(Result<Product, String>),
    ProductSaved(Result<ProductId, String>),
    ProductDeleted(Result<ProductId, String>),
}

/// Spawn the API worker thread. All HTTP happens here; the UI thread only
/// exchanges messages and gets a repaint nudge when a result lands.
pub fn spawn_worker(
    ctx: eframe::egui::Context,
    client: ApiClient,
) -> (Sender<ApiCommand>, Receiver<ApiResult>) {
    let (cmd_tx, cmd_rx) = channel::<ApiCommand>();
    let (res_tx, res_rx) = channel::<ApiResult>();

    thread::spawn(move || {
        while let Ok(cmd) = cmd_rx.recv() {
            let result = match cmd {
                ApiCommand::FetchCategoryTree => {
                    let result = client.category_tree().map_err(|e| {
                        tracing::warn!(error = %e, "category tree fetch failed");
                        e.to_string()
                    });
                    ApiResult::CategoryTree(result)
                }
                ApiCommand::FetchProducts(query) => {
                    let result = client.products(&query).map_err(|e| {
                        tracing::warn!(error = %e, "product listing fetch failed");
                        e.to_string()
                    });
                    ApiResult::Products { query, result }
                }
                ApiCommand::FetchProduct(id) => {
                    ApiResult::Product(client.product(id).map_err(|e| e.to_string()))
                }
                ApiCommand::CreateProduct(draft) => {
                    ApiResult::ProductSaved(client.create_product(&draft).map_err(|e| e.to_string()))
                }
                ApiCommand::UpdateProduct(id, draft) => ApiResult::ProductSaved(
                    client.update_product(id, &draft).map_err(|e| e.to_string()),
                ),
                ApiCommand::DeleteProduct(id) => {
                    ApiResult::ProductDeleted(client.delete_product(id).map_err(|e| e.to_string()))
                }
            };

            if res_tx.send(result).is_err() {
                break;
            }
            ctx.request_repaint();
        }
    });

    (cmd_tx, res_rx)
}
