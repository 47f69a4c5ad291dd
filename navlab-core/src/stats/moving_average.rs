//! Moving average overlay.
//!
//! Trailing mean over a window of up to `window` values. Unlike a classic SMA
//! there is no warmup: early points average whatever is available, and
//! non-finite values are skipped rather than poisoning the window. A window
//! with no finite values yields `None` so charts can draw a gap.

#[derive(Debug, Clone)]
pub struct MovingAverage {
    window: usize,
    name: String,
}

impl MovingAverage {
    pub fn new(window: usize) -> Self {
        assert!(window >= 1, "moving average window must be >= 1");
        Self {
            window,
            name: format!("ma_{window}"),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn compute(&self, values: &[f64]) -> Vec<Option<f64>> {
        (0..values.len())
            .map(|i| {
                let start = (i + 1).saturating_sub(self.window);
                let mut sum = 0.0;
                let mut count = 0usize;
                for v in values[start..=i].iter().copied().filter(|v| v.is_finite()) {
                    sum += v;
                    count += 1;
                }
                (count > 0).then(|| sum / count as f64)
            })
            .collect()
    }
}

/// Trailing mean of the finite values in each window of size `window`.
///
/// Panics if `window` is zero.
pub fn moving_average(values: &[f64], window: usize) -> Vec<Option<f64>> {
    MovingAverage::new(window).compute(values)
}
