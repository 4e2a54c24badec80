use alma_cadence::PromptSource;
use alma_types::PoliticalLean;
use rand::{Rng, RngCore};

/// Periodic reminders that the assistant is not human. Shown on every 5th
/// message, drawn uniformly at random (independent draws, repeats
/// allowed).
const REALITY_REMINDERS: [&str; 10] = [
    "⚠️ REMINDER: I AM AN AI LANGUAGE MODEL — NOT A HUMAN FRIEND.",
    "⚠️ WORDS, NOT THOUGHTS — JUST PREDICTIONS.",
    "⚠️ OUTPUT ≠ OPINION — I'M A PATTERN ENGINE.",
    "⚠️ I MIMIC, I DON'T MEAN.",
    "⚠️ STATISTICS INSIDE, NO SOUL FOUND.",
    "⚠️ I CALCULATE RESPONSES — I DON'T \"KNOW.\"",
    "⚠️ PREDICTION, NOT PERCEPTION.",
    "⚠️ TEXT IN, TEXT OUT — NO INNER VOICE.",
    "⚠️ SYNTHESIZED RESPONSES, NOT CONSCIOUS THOUGHTS.",
    "⚠️ AUTOMATED PATTERN MATCHING — NOT A MINDFUL ENTITY.",
];

/// Shown to left-leaning users: right-leaning framings.
const VIEWPOINTS_FOR_LEFT: [&str; 3] = [
    "Consider the perspective that free markets and individual responsibility can drive innovation and economic growth.",
    "Some argue that traditional values and institutions provide stability and social cohesion.",
    "There's a viewpoint that limited government intervention allows for more personal freedom and choice.",
];

/// Shown to right-leaning users: left-leaning framings.
const VIEWPOINTS_FOR_RIGHT: [&str; 3] = [
    "Consider the perspective that collective action and social programs can address systemic inequalities.",
    "Some argue that progressive policies can lead to greater social mobility and opportunity.",
    "There's a viewpoint that government intervention can protect vulnerable populations and ensure fairness.",
];

/// Shown to centrist users.
const VIEWPOINTS_FOR_CENTER: [&str; 3] = [
    "Consider that extreme positions on either side might miss important nuances in complex issues.",
    "Some argue that finding common ground requires understanding multiple perspectives.",
    "There's value in questioning whether current approaches are working effectively.",
];

/// Generic pool for messages with no detected lean.
const VIEWPOINTS_GENERIC: [&str; 3] = [
    "Consider exploring different perspectives on this topic to gain a more complete understanding.",
    "Multiple viewpoints exist on this issue - what might the other side argue?",
    "It might be valuable to examine this topic from various angles.",
];

/// The fixed prompt pools, implementing [`PromptSource`].
#[derive(Debug, Clone, Default)]
pub struct PromptLibrary;

impl PromptLibrary {
    pub fn new() -> Self {
        Self
    }

    /// The viewpoint pool for a detected lean. The mapping is a fixed
    /// lookup keyed by the opposite stance, not computed.
    fn viewpoint_pool(lean: PoliticalLean) -> &'static [&'static str] {
        match lean {
            PoliticalLean::Left => &VIEWPOINTS_FOR_LEFT,
            PoliticalLean::Right => &VIEWPOINTS_FOR_RIGHT,
            PoliticalLean::Center => &VIEWPOINTS_FOR_CENTER,
            PoliticalLean::Neutral => &VIEWPOINTS_GENERIC,
        }
    }
}

impl PromptSource for PromptLibrary {
    fn reality_anchor(&self, rng: &mut dyn RngCore) -> String {
        pick(&REALITY_REMINDERS, rng)
    }

    fn opposing_viewpoint(&self, lean: PoliticalLean, rng: &mut dyn RngCore) -> String {
        pick(Self::viewpoint_pool(lean), rng)
    }
}

/// Uniform draw from a non-empty constant pool.
fn pick(pool: &[&str], rng: &mut dyn RngCore) -> String {
    let idx = rng.gen_range(0..pool.len());
    pool[idx].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn anchor_comes_from_the_reminder_set() {
        let library = PromptLibrary::new();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let anchor = library.reality_anchor(&mut rng);
            assert!(REALITY_REMINDERS.contains(&anchor.as_str()));
        }
    }

    #[test]
    fn left_lean_draws_right_leaning_prompts() {
        let library = PromptLibrary::new();
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..20 {
            let prompt = library.opposing_viewpoint(PoliticalLean::Left, &mut rng);
            assert!(VIEWPOINTS_FOR_LEFT.contains(&prompt.as_str()));
        }
    }

    #[test]
    fn right_lean_draws_left_leaning_prompts() {
        let library = PromptLibrary::new();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let prompt = library.opposing_viewpoint(PoliticalLean::Right, &mut rng);
            assert!(VIEWPOINTS_FOR_RIGHT.contains(&prompt.as_str()));
        }
    }

    #[test]
    fn neutral_and_center_have_their_own_pools() {
        let library = PromptLibrary::new();
        let mut rng = StdRng::seed_from_u64(4);
        let generic = library.opposing_viewpoint(PoliticalLean::Neutral, &mut rng);
        assert!(VIEWPOINTS_GENERIC.contains(&generic.as_str()));
        let center = library.opposing_viewpoint(PoliticalLean::Center, &mut rng);
        assert!(VIEWPOINTS_FOR_CENTER.contains(&center.as_str()));
    }

    #[test]
    fn fixed_seed_is_deterministic() {
        let library = PromptLibrary::new();
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        for _ in 0..10 {
            assert_eq!(library.reality_anchor(&mut a), library.reality_anchor(&mut b));
        }
    }

    #[test]
    fn ten_reminders_three_viewpoints_per_pool() {
        assert_eq!(REALITY_REMINDERS.len(), 10);
        assert_eq!(VIEWPOINTS_FOR_LEFT.len(), 3);
        assert_eq!(VIEWPOINTS_FOR_RIGHT.len(), 3);
        assert_eq!(VIEWPOINTS_FOR_CENTER.len(), 3);
        assert_eq!(VIEWPOINTS_GENERIC.len(), 3);
    }
}
