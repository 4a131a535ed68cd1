use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            hsl_to_color32(Hsl::new(hue, 0.75, 0.55))
        })
        .collect()
}

/// Fixed colours for the two survival groups, shared by every split view
/// so the legend reads the same across charts.
pub fn survival_color(survived: bool) -> Color32 {
    if survived {
        hsl_to_color32(Hsl::new(145.0, 0.55, 0.45))
    } else {
        hsl_to_color32(Hsl::new(10.0, 0.70, 0.55))
    }
}

// ---------------------------------------------------------------------------
// Heatmap ramps
// ---------------------------------------------------------------------------

/// Diverging blue–white–red ramp for correlation cells, `t` in `[-1, 1]`
/// with white at zero.
pub fn diverging(t: f64) -> Color32 {
    let t = t.clamp(-1.0, 1.0) as f32;
    let (hue, strength) = if t < 0.0 { (225.0, -t) } else { (10.0, t) };
    // fade saturation and darken as |t| grows, so 0 is near-white
    let hsl = Hsl::new(hue, 0.85 * strength, 0.95 - 0.45 * strength);
    hsl_to_color32(hsl)
}

/// Sequential white–blue ramp for count cells, `t` in `[0, 1]`.
pub fn sequential(t: f64) -> Color32 {
    let t = t.clamp(0.0, 1.0) as f32;
    let hsl = Hsl::new(215.0, 0.80 * t, 0.96 - 0.55 * t);
    hsl_to_color32(hsl)
}

/// Black or white, whichever reads better on `background`.
pub fn contrast_text(background: Color32) -> Color32 {
    let luminance = 0.299 * f32::from(background.r())
        + 0.587 * f32::from(background.g())
        + 0.114 * f32::from(background.b());
    if luminance > 140.0 {
        Color32::BLACK
    } else {
        Color32::WHITE
    }
}

fn hsl_to_color32(hsl: Hsl) -> Color32 {
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size_and_distinct_entries() {
        assert!(generate_palette(0).is_empty());
        let colors = generate_palette(6);
        assert_eq!(colors.len(), 6);
        for pair in colors.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn diverging_ramp_is_light_at_zero_and_saturated_at_the_ends() {
        let zero = diverging(0.0);
        assert_eq!(contrast_text(zero), Color32::BLACK);
        assert_ne!(diverging(-1.0), diverging(1.0));
    }

    #[test]
    fn sequential_ramp_darkens_with_t() {
        let low = sequential(0.0);
        let high = sequential(1.0);
        assert!(low.r() as u16 + low.g() as u16 + low.b() as u16
            > high.r() as u16 + high.g() as u16 + high.b() as u16);
    }
}
