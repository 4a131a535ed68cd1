/// UI layer: one module per group of output slots.
///
/// Every renderer pulls from the session's memoized derived values and only
/// paints; anything worth testing lives below the UI in `session::derived`,
/// `stats` and `ml`.

pub mod charts;
pub mod heatmap;
pub mod model;
pub mod panels;
pub mod table;

use eframe::egui::{RichText, Ui};

/// Centered fallback shown in a slot whose minimum-data requirement is not
/// met. Keeps the failure contained: sibling slots render normally.
pub fn placeholder(ui: &mut Ui, message: &str) {
    ui.add_space(12.0);
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(message).weak().italics());
    });
    ui.add_space(12.0);
}
