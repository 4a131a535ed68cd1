use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoints};

use crate::color;
use crate::data::model::survival_label;
use crate::ml::{MlOutcome, MlReport};
use crate::session::Session;

// ---------------------------------------------------------------------------
// Model metrics text
// ---------------------------------------------------------------------------

/// Accuracy line for the fitted classifier.
pub fn model_metrics(ui: &mut Ui, session: &mut Session) {
    let outcome = session.prepared_ml_data();
    match &*outcome {
        MlOutcome::Insufficient { .. } => {
            ui.label("Insufficient data to train the model. Adjust the filters.");
        }
        MlOutcome::Failed(reason) => {
            ui.label(RichText::new(format!("Model unavailable: {reason}")).weak());
        }
        MlOutcome::Ready(report) => {
            ui.label(format!(
                "Model accuracy: {:.4} ({} test samples)",
                report.accuracy, report.test_rows
            ));
        }
    }
}

// ---------------------------------------------------------------------------
// Confusion matrix
// ---------------------------------------------------------------------------

/// 2×2 confusion heatmap: rows are true classes, columns predictions.
pub fn confusion_matrix(ui: &mut Ui, session: &mut Session) {
    let outcome = session.prepared_ml_data();
    let Some(report) = ready(ui, &outcome) else {
        return;
    };

    ui.label(RichText::new("rows: true class, columns: predicted class").weak());

    let labels: Vec<String> = [0u8, 1].iter().map(|&f| survival_label(f).to_string()).collect();
    let max = report.confusion.counts.iter().flatten().copied().max().unwrap_or(0);

    super::heatmap::annotated_grid(ui, &labels, &labels, 110.0, (110.0, 44.0), |row, col| {
        let count = report.confusion.counts[row][col];
        let t = if max == 0 { 0.0 } else { count as f64 / max as f64 };
        (count.to_string(), color::sequential(t))
    });
}

// ---------------------------------------------------------------------------
// ROC curve
// ---------------------------------------------------------------------------

/// Interactive ROC curve with the chance diagonal for reference.
pub fn roc_curve(ui: &mut Ui, session: &mut Session) {
    let outcome = session.prepared_ml_data();
    let Some(report) = ready(ui, &outcome) else {
        return;
    };
    let Some(roc) = &report.roc else {
        super::placeholder(ui, "ROC curve undefined: the test split contains a single class.");
        return;
    };

    let curve: PlotPoints = roc.points.iter().copied().collect();
    let diagonal: PlotPoints = vec![[0.0, 0.0], [1.0, 1.0]].into();

    Plot::new("roc_curve")
        .legend(Legend::default())
        .height(300.0)
        .x_axis_label("False Positive Rate")
        .y_axis_label("True Positive Rate")
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(curve)
                    .width(2.0)
                    .name(format!("ROC (AUC = {:.3})", roc.auc)),
            );
            plot_ui.line(
                Line::new(diagonal)
                    .style(LineStyle::Dashed { length: 8.0 })
                    .color(Color32::RED)
                    .name("Random (AUC = 0.500)"),
            );
        });
}

/// Unwrap a ready report, painting the slot's placeholder otherwise.
fn ready<'a>(ui: &mut Ui, outcome: &'a MlOutcome) -> Option<&'a MlReport> {
    match outcome {
        MlOutcome::Ready(report) => Some(report),
        MlOutcome::Insufficient { .. } => {
            super::placeholder(ui, "Insufficient data.");
            None
        }
        MlOutcome::Failed(_) => {
            super::placeholder(ui, "Model unavailable.");
            None
        }
    }
}
