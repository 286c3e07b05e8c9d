// Layout constants and small label helpers for Greengrocer

use eframe::egui;

// --- Sizing ---
pub const ROW_HEIGHT: f32 = 24.0;
pub const HEADER_HEIGHT: f32 = 20.0;
pub const SIDEBAR_WIDTH: f32 = 220.0;
pub const MENU_WIDTH: f32 = 260.0;
pub const CARD_WIDTH: f32 = 170.0;
pub const CARD_HEIGHT: f32 = 120.0;

// --- Colors ---
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(25, 118, 210);
pub const ACCENT_SOFT: egui::Color32 = egui::Color32::from_rgb(99, 164, 255);

/// Render a label that truncates overflowing text with an ellipsis.
pub fn truncated_label(ui: &mut egui::Ui, text: impl Into<egui::WidgetText>) -> egui::Response {
    ui.add(egui::Label::new(text).truncate())
}

/// Same, but clickable.
pub fn truncated_label_with_sense(
    ui: &mut egui::Ui,
    text: impl Into<egui::WidgetText>,
    sense: egui::Sense,
) -> egui::Response {
    ui.add(egui::Label::new(text).truncate().sense(sense))
}

/// "$3.50 ea" style price tag.
pub fn price_tag(price: f64, unit: crate::api::PriceUnit) -> String {
    format!("${:.2} {}", price, unit.label())
}

/// "4.5 (12)" rating summary, empty when unrated.
pub fn rating_tag(rating: f64, review_count: i64) -> String {
    if review_count == 0 {
        String::new()
    } else {
        format!("\u{2605} {:.1} ({})", rating, review_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PriceUnit;

    #[test]
    fn price_and_rating_tags() {
        assert_eq!(price_tag(3.5, PriceUnit::Each), "$3.50 ea");
        assert_eq!(price_tag(0.9, PriceUnit::Gram), "$0.90 per g");
        assert_eq!(rating_tag(4.49, 12), "\u{2605} 4.5 (12)");
        assert_eq!(rating_tag(0.0, 0), "");
    }
}
