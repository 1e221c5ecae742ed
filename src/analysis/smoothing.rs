/*!
 * Trailing moving average over the per-sentence emotion series.
 *
 * The window shrinks at the start of the series instead of padding, so the
 * first value is unchanged and the second is the mean of the first two.
 * Smoothed values are for trend display only and never feed the totals.
 */

use super::lexicon::EmotionVector;

/// Default number of sentences averaged together.
pub const DEFAULT_WINDOW: usize = 2;

/// Trailing moving-average smoother.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemporalSmoother {
    window: usize,
}

impl TemporalSmoother {
    /// Create a smoother; a zero window is treated as 1
    pub fn new(window: usize) -> Self {
        Self {
            window: window.max(1),
        }
    }

    /// Window size
    pub fn window(&self) -> usize {
        self.window
    }

    /// Smooth a series, keeping its length and order
    pub fn smooth(&self, raw: &[EmotionVector]) -> Vec<EmotionVector> {
        (0..raw.len())
            .map(|idx| {
                let start = (idx + 1).saturating_sub(self.window);
                let frame = &raw[start..=idx];
                let mut sum = frame[0].clone();
                for vector in &frame[1..] {
                    sum += vector;
                }
                sum.scaled(1.0 / frame.len() as f64)
            })
            .collect()
    }
}

impl Default for TemporalSmoother {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}
