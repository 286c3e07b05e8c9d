pub mod admin;
pub mod trolley;
pub mod ui;

pub use admin::AdminState;
pub use trolley::TrolleyState;
pub use ui::UiState;
