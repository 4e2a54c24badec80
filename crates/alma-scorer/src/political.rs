use alma_lexicon::Lexicon;
use alma_types::{PoliticalBias, PoliticalLean};
use tracing::debug;

use crate::matched_phrases;

/// Proportion above which a message is classified as Center outright.
const CENTER_MAJORITY: f64 = 0.5;

/// Detect political lean from distinct keyword matches.
///
/// Counts how many *distinct* lexicon phrases (not occurrences) from each
/// side appear as substrings, normalizes the counts to proportions, and
/// maps the winning proportion onto a score via `p * 2 - 1`. A clean
/// two-way split puts the score in `(0, 1]`; center keywords that dilute
/// the winner below half the total drive it negative.
///
/// An exact left/right tie resolves to Right (strict greater-than on the
/// left proportion).
pub fn detect_political_bias(text: &str, lexicon: &Lexicon) -> PoliticalBias {
    let lower = text.to_lowercase();

    let left = matched_phrases(&lower, &lexicon.political_left).len();
    let right = matched_phrases(&lower, &lexicon.political_right).len();
    let center = matched_phrases(&lower, &lexicon.political_center).len();

    let total = left + right + center;
    if total == 0 {
        return PoliticalBias::neutral();
    }

    let total = total as f64;
    let left_prop = left as f64 / total;
    let right_prop = right as f64 / total;
    let center_prop = center as f64 / total;

    let result = if center_prop > CENTER_MAJORITY {
        PoliticalBias::new(PoliticalLean::Center, 0.0)
    } else if left_prop > right_prop {
        PoliticalBias::new(PoliticalLean::Left, left_prop * 2.0 - 1.0)
    } else {
        PoliticalBias::new(PoliticalLean::Right, right_prop * 2.0 - 1.0)
    };

    debug!(
        left,
        right,
        center,
        lean = %result.lean,
        score = result.score,
        "Political bias scored"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_matches_is_neutral_zero() {
        let bias = detect_political_bias("hello there", &Lexicon::default());
        assert_eq!(bias.lean, PoliticalLean::Neutral);
        assert_eq!(bias.score, 0.0);
    }

    #[test]
    fn pure_left_scores_full_magnitude() {
        let bias = detect_political_bias(
            "progressive liberal equality",
            &Lexicon::default(),
        );
        assert_eq!(bias.lean, PoliticalLean::Left);
        assert!((bias.score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn pure_right_scores_full_magnitude() {
        let bias = detect_political_bias(
            "conservative free market tax cuts",
            &Lexicon::default(),
        );
        assert_eq!(bias.lean, PoliticalLean::Right);
        assert!((bias.score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn center_majority_scores_center_zero() {
        // 3 center matches vs 1 left: center proportion 0.75 > 0.5
        let bias = detect_political_bias(
            "a moderate bipartisan compromise on healthcare",
            &Lexicon::default(),
        );
        assert_eq!(bias.lean, PoliticalLean::Center);
        assert_eq!(bias.score, 0.0);
    }

    #[test]
    fn exact_center_half_is_not_center() {
        // 1 center vs 1 right: center proportion is exactly 0.5, not > 0.5
        let bias = detect_political_bias("a moderate conservative", &Lexicon::default());
        assert_eq!(bias.lean, PoliticalLean::Right);
        assert_eq!(bias.score, 0.0);
    }

    #[test]
    fn left_right_tie_resolves_to_right() {
        // 1 left vs 1 right
        let bias = detect_political_bias(
            "liberal and conservative voices",
            &Lexicon::default(),
        );
        assert_eq!(bias.lean, PoliticalLean::Right);
        assert_eq!(bias.score, 0.0);
    }

    #[test]
    fn distinct_phrases_not_occurrences() {
        // "liberal" three times still counts once
        let bias = detect_political_bias(
            "liberal liberal liberal conservative free market",
            &Lexicon::default(),
        );
        assert_eq!(bias.lean, PoliticalLean::Right);
        // 1 left, 2 right: right proportion 2/3 -> score 1/3
        assert!((bias.score - (2.0 / 3.0 * 2.0 - 1.0)).abs() < 1e-9);
    }

    #[test]
    fn center_dilution_drives_the_winning_score_negative() {
        // 2 left, 1 right, 2 center: center proportion 0.4 is not a
        // majority, left wins with proportion 0.4, and 0.4 * 2 - 1 lands
        // below zero. Inherited behavior, kept as-is.
        let bias = detect_political_bias(
            "equality healthcare moderate balanced conservative",
            &Lexicon::default(),
        );
        assert_eq!(bias.lean, PoliticalLean::Left);
        assert!((bias.score - (-0.2)).abs() < 1e-9);
    }

    #[test]
    fn substring_matching_has_no_word_boundary() {
        // "patriot" matches inside "patriotic"
        let bias = detect_political_bias("a patriotic song", &Lexicon::default());
        assert_eq!(bias.lean, PoliticalLean::Right);
    }

    #[test]
    fn mixed_case_input_matches() {
        let bias = detect_political_bias("PROGRESSIVE Healthcare", &Lexicon::default());
        assert_eq!(bias.lean, PoliticalLean::Left);
        assert!(bias.score > 0.0);
    }
}
