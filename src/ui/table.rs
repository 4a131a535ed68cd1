use std::fmt::Display;

use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::model::Passenger;
use crate::session::Session;
use crate::session::derived::HEAD_ROWS;

const COLUMNS: [&str; 10] = [
    "PassengerId",
    "Survived",
    "Pclass",
    "Name",
    "Sex",
    "Age",
    "SibSp",
    "Parch",
    "Fare",
    "Embarked",
];

// ---------------------------------------------------------------------------
// Descriptive statistics – head of the filtered table
// ---------------------------------------------------------------------------

/// Render the first rows of the filtered table.
pub fn statistics_table(ui: &mut Ui, session: &mut Session) {
    let view = session.filtered_data();
    if view.is_empty() {
        super::placeholder(ui, "No passengers in the selected age range.");
        return;
    }
    let head = view.head(HEAD_ROWS);

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .columns(Column::auto().resizable(true), COLUMNS.len())
        .header(20.0, |mut header| {
            for title in COLUMNS {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, head.len(), |mut row| {
                let p: &Passenger = head[row.index()];
                let cells = [
                    opt(p.passenger_id),
                    opt(p.survived),
                    opt(p.pclass),
                    opt(p.name.as_ref()),
                    opt(p.sex.as_ref()),
                    float(p.age),
                    opt(p.sib_sp),
                    opt(p.parch),
                    float(p.fare),
                    opt(p.embarked.as_ref()),
                ];
                for cell in cells {
                    row.col(|ui: &mut Ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}

fn opt<T: Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "—".to_string())
}

fn float(value: Option<f64>) -> String {
    value
        .map(|v| {
            if v.fract() == 0.0 {
                format!("{v:.0}")
            } else {
                format!("{v:.2}")
            }
        })
        .unwrap_or_else(|| "—".to_string())
}
