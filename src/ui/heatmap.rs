use eframe::egui::{Align2, Color32, FontId, Rect, Sense, Ui, pos2, vec2};

use crate::color;

// ---------------------------------------------------------------------------
// Annotated cell grid – shared by the correlation and confusion views
// ---------------------------------------------------------------------------

/// Paint a grid of colored, annotated cells with row labels down the left
/// and column labels across the top.
///
/// `cell(row, col)` supplies the annotation text and fill; text color is
/// picked for contrast against the fill.
pub fn annotated_grid(
    ui: &mut Ui,
    row_labels: &[String],
    col_labels: &[String],
    gutter: f32,
    cell_size: (f32, f32),
    cell: impl Fn(usize, usize) -> (String, Color32),
) {
    let (cell_w, cell_h) = cell_size;
    let rows = row_labels.len();
    let cols = col_labels.len();
    let header_h = 20.0;

    let desired = vec2(
        gutter + cols as f32 * cell_w,
        header_h + rows as f32 * cell_h,
    );
    let (rect, _response) = ui.allocate_exact_size(desired, Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    let painter = ui.painter();
    let text_color = ui.visuals().text_color();
    let font = FontId::proportional(12.0);

    for (c, label) in col_labels.iter().enumerate() {
        let x = rect.left() + gutter + (c as f32 + 0.5) * cell_w;
        painter.text(
            pos2(x, rect.top() + header_h * 0.5),
            Align2::CENTER_CENTER,
            label,
            font.clone(),
            text_color,
        );
    }

    for (r, label) in row_labels.iter().enumerate() {
        let y = rect.top() + header_h + (r as f32 + 0.5) * cell_h;
        painter.text(
            pos2(rect.left() + gutter - 8.0, y),
            Align2::RIGHT_CENTER,
            label,
            font.clone(),
            text_color,
        );

        for c in 0..cols {
            let min = pos2(
                rect.left() + gutter + c as f32 * cell_w,
                rect.top() + header_h + r as f32 * cell_h,
            );
            let cell_rect = Rect::from_min_size(min, vec2(cell_w, cell_h)).shrink(1.0);
            let (text, fill) = cell(r, c);
            painter.rect_filled(cell_rect, 2.0, fill);
            painter.text(
                cell_rect.center(),
                Align2::CENTER_CENTER,
                text,
                font.clone(),
                color::contrast_text(fill),
            );
        }
    }
}
