use eframe::egui::{self, RichText, Ui};

use crate::data::model::Variable;
use crate::session::Session;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the sidebar controls. Widgets write straight into the session's
/// filter inputs; the memoized derived values pick the change up on read.
pub fn side_panel(ui: &mut Ui, session: &mut Session) {
    ui.heading("Filters");
    ui.separator();

    ui.strong("Select variable");
    egui::ComboBox::from_id_salt("variable")
        .selected_text(session.inputs.variable.label())
        .show_ui(ui, |ui: &mut Ui| {
            for variable in Variable::ALL {
                ui.selectable_value(&mut session.inputs.variable, variable, variable.label());
            }
        });

    ui.add_space(8.0);

    ui.strong("Minimum age");
    ui.add(egui::Slider::new(&mut session.inputs.age_min, 0..=100));

    ui.add_space(4.0);

    ui.strong("Maximum age");
    ui.add(egui::Slider::new(&mut session.inputs.age_max, 0..=100));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status strip.
pub fn top_bar(ui: &mut Ui, session: &mut Session) {
    let total = session.dataset().len();
    let visible = session.filtered_data().len();

    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Titanic Dataset Analysis");
        ui.separator();
        ui.label(format!("{total} passengers loaded, {visible} in age range"));
        if visible == 0 {
            ui.separator();
            ui.label(RichText::new("no rows match the current filters").weak());
        }
    });
}
