/*!
 * Document-level emotion totals.
 */

use super::lexicon::EmotionVector;

/// Element-wise sum of raw per-sentence vectors, starting from `zero`.
///
/// `zero` carries the emotion names so an empty document still yields a
/// vector over every emotion.
pub fn aggregate(zero: EmotionVector, raw: &[EmotionVector]) -> EmotionVector {
    raw.iter().fold(zero, |mut total, vector| {
        total += vector;
        total
    })
}
