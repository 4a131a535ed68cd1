use std::sync::Arc;

use eframe::egui;

use crate::data::model::PassengerDataset;
use crate::session::Session;
use crate::ui::{charts, model, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SteerageApp {
    session: Session,
    /// 3-D view rotation; pure view state, not a filter input.
    azimuth: f32,
    elevation: f32,
}

impl SteerageApp {
    /// The dataset handle is injected once here; nothing else ever loads
    /// or mutates it.
    pub fn new(dataset: Arc<PassengerDataset>) -> Self {
        SteerageApp {
            session: Session::new(dataset),
            azimuth: 35.0,
            elevation: 25.0,
        }
    }
}

impl eframe::App for SteerageApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: status strip ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.session);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.session);
            });

        // ---- Central panel: the output slots, in page order ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut egui::Ui| {
                    ui.heading("Titanic Dataset Analysis");
                    ui.add_space(8.0);

                    section(ui, "Descriptive Statistics");
                    table::statistics_table(ui, &mut self.session);

                    section(ui, "Survival Distribution");
                    charts::distribution_bars(ui, &mut self.session);

                    section(ui, "Advanced Distribution");
                    charts::advanced_distribution(ui, &mut self.session);

                    section(ui, "Correlation Matrix");
                    charts::correlation_matrix(ui, &mut self.session);

                    section(ui, "Interactive Chart");
                    charts::interactive_chart(ui, &mut self.session);

                    section(ui, "Three-Dimensional Analysis");
                    charts::relationships_3d(
                        ui,
                        &mut self.session,
                        &mut self.azimuth,
                        &mut self.elevation,
                    );

                    section(ui, "Machine Learning Model");
                    model::model_metrics(ui, &mut self.session);

                    section(ui, "Confusion Matrix");
                    model::confusion_matrix(ui, &mut self.session);

                    section(ui, "ROC Curve");
                    model::roc_curve(ui, &mut self.session);

                    ui.add_space(16.0);
                });
        });
    }
}

fn section(ui: &mut egui::Ui, title: &str) {
    ui.add_space(16.0);
    ui.strong(title);
    ui.separator();
}
