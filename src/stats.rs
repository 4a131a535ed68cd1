//! Small descriptive-statistics helpers backing the distribution views.

// ---------------------------------------------------------------------------
// Basics
// ---------------------------------------------------------------------------

/// Arithmetic mean. `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Pearson correlation coefficient of two equally long series.
///
/// `None` when fewer than two observations are available or either series
/// has zero variance.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    debug_assert_eq!(xs.len(), ys.len());
    if xs.len() < 2 {
        return None;
    }

    let mx = mean(xs)?;
    let my = mean(ys)?;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        cov += (x - mx) * (y - my);
        var_x += (x - mx).powi(2);
        var_y += (y - my).powi(2);
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        return None;
    }
    Some(cov / denom)
}

// ---------------------------------------------------------------------------
// Quartiles – boxplot geometry
// ---------------------------------------------------------------------------

/// Five-number summary with Tukey whiskers (furthest points within
/// 1.5 × IQR of the box).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quartiles {
    pub whisker_low: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_high: f64,
}

impl Quartiles {
    /// Compute from unsorted values. `None` for an empty slice.
    pub fn new(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let q1 = percentile(&sorted, 0.25);
        let median = percentile(&sorted, 0.5);
        let q3 = percentile(&sorted, 0.75);
        let iqr = q3 - q1;

        let low_fence = q1 - 1.5 * iqr;
        let high_fence = q3 + 1.5 * iqr;
        let whisker_low = sorted
            .iter()
            .copied()
            .find(|&v| v >= low_fence)
            .unwrap_or(q1);
        let whisker_high = sorted
            .iter()
            .rev()
            .copied()
            .find(|&v| v <= high_fence)
            .unwrap_or(q3);

        Some(Quartiles {
            whisker_low,
            q1,
            median,
            q3,
            whisker_high,
        })
    }
}

/// Linearly interpolated percentile of pre-sorted values, `q` in `[0, 1]`.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let rank = q * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let t = rank - lo as f64;
        sorted[lo] * (1.0 - t) + sorted[hi] * t
    }
}

// ---------------------------------------------------------------------------
// Histogram – fixed-width binning
// ---------------------------------------------------------------------------

/// Equal-width histogram over the observed value range.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub min: f64,
    pub max: f64,
    pub bin_width: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin `values` into `bins` equal-width buckets spanning `[min, max]`.
    ///
    /// `None` for empty input. A degenerate range (all values equal)
    /// collapses into a single bucket.
    pub fn new(values: &[f64], bins: usize) -> Option<Self> {
        let min = values.iter().copied().reduce(f64::min)?;
        let max = values.iter().copied().reduce(f64::max)?;
        Self::with_range(values, bins, min, max)
    }

    /// Like [`Histogram::new`] but over an externally fixed range, so two
    /// series can share bucket edges.
    pub fn with_range(values: &[f64], bins: usize, min: f64, max: f64) -> Option<Self> {
        if values.is_empty() || bins == 0 {
            return None;
        }
        if max <= min {
            return Some(Histogram {
                min,
                max: min,
                bin_width: 0.0,
                counts: vec![values.len()],
            });
        }

        let bin_width = (max - min) / bins as f64;
        let mut counts = vec![0usize; bins];
        for &v in values {
            if v < min || v > max {
                continue;
            }
            let idx = (((v - min) / bin_width) as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Some(Histogram {
            min,
            max,
            bin_width,
            counts,
        })
    }

    /// Center of bin `i`, for bar placement.
    pub fn bin_center(&self, i: usize) -> f64 {
        self.min + (i as f64 + 0.5) * self.bin_width
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_is_none() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[2.0, 4.0]), Some(3.0));
    }

    #[test]
    fn pearson_detects_perfect_correlation() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let up = [2.0, 4.0, 6.0, 8.0];
        let down = [8.0, 6.0, 4.0, 2.0];
        assert!((pearson(&xs, &up).unwrap() - 1.0).abs() < 1e-12);
        assert!((pearson(&xs, &down).unwrap() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn pearson_rejects_degenerate_series() {
        assert_eq!(pearson(&[1.0], &[2.0]), None);
        assert_eq!(pearson(&[3.0, 3.0, 3.0], &[1.0, 2.0, 3.0]), None);
    }

    #[test]
    fn quartiles_of_a_simple_series() {
        let q = Quartiles::new(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(q.median, 3.0);
        assert_eq!(q.q1, 2.0);
        assert_eq!(q.q3, 4.0);
        assert_eq!(q.whisker_low, 1.0);
        assert_eq!(q.whisker_high, 5.0);
    }

    #[test]
    fn whiskers_exclude_outliers() {
        let mut values: Vec<f64> = (1..=11).map(f64::from).collect();
        values.push(1000.0);
        let q = Quartiles::new(&values).unwrap();
        assert!(q.whisker_high < 1000.0);
    }

    #[test]
    fn histogram_counts_cover_all_values() {
        let values = [0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0];
        let h = Histogram::new(&values, 4).unwrap();
        assert_eq!(h.counts.len(), 4);
        assert_eq!(h.total(), values.len());
        // max value lands in the last bucket, not past it
        assert_eq!(*h.counts.last().unwrap(), 3);
    }

    #[test]
    fn histogram_of_constant_values_collapses() {
        let h = Histogram::new(&[7.0, 7.0, 7.0], 10).unwrap();
        assert_eq!(h.counts, vec![3]);
        assert_eq!(h.bin_width, 0.0);
    }

    #[test]
    fn histogram_of_empty_input_is_none() {
        assert!(Histogram::new(&[], 5).is_none());
    }
}
