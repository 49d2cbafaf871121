//! Character unlock metadata
//!
//! Static data for the settings/progression UI. Character 0 is always
//! available; the rest open up once the all-time best score reaches their
//! threshold. The engine mirrors the same thresholds for in-run bumps.

/// Best score required for each character, indexed by character
pub const CHARACTER_THRESHOLDS: [u32; 3] = [0, 15, 35];

pub const CHARACTER_DESCRIPTIONS: [&str; 3] = [
    "Default character - available from start.",
    "Unlock by achieving a best score of 15 points.",
    "Unlock by achieving a best score of 35 points.",
];

/// Number of character variants
pub fn count() -> usize {
    CHARACTER_THRESHOLDS.len()
}

/// UI text for a character, `None` past the last variant
pub fn description(index: usize) -> Option<&'static str> {
    CHARACTER_DESCRIPTIONS.get(index).copied()
}

pub fn is_unlocked(index: usize, best_score: u32) -> bool {
    CHARACTER_THRESHOLDS
        .get(index)
        .is_some_and(|&threshold| best_score >= threshold)
}

/// Every character index available at this best score
pub fn unlocked_for_best(best_score: u32) -> Vec<usize> {
    (0..count())
        .filter(|&index| is_unlocked(index, best_score))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::progression;

    #[test]
    fn test_default_always_unlocked() {
        assert!(is_unlocked(0, 0));
        assert_eq!(unlocked_for_best(0), vec![0]);
    }

    #[test]
    fn test_thresholds() {
        assert!(!is_unlocked(1, 14));
        assert!(is_unlocked(1, 15));
        assert_eq!(unlocked_for_best(34), vec![0, 1]);
        assert_eq!(unlocked_for_best(35), vec![0, 1, 2]);
        assert!(!is_unlocked(3, 1000));
    }

    #[test]
    fn test_descriptions_cover_every_character() {
        assert_eq!(CHARACTER_DESCRIPTIONS.len(), count());
        assert!(description(1).is_some_and(|d| d.contains("15")));
        assert_eq!(description(count()), None);
    }

    #[test]
    fn test_engine_mirrors_thresholds() {
        for (score, index) in progression::CHARACTER_THRESHOLDS {
            assert_eq!(CHARACTER_THRESHOLDS[index as usize], score);
        }
    }
}
