//! KO probabilities and damage statistics
//!
//! Multi-turn probabilities enumerate every roll combination exhaustively
//! (16^turns outcomes) rather than sampling. Turn counts are expected to
//! stay small; the orchestrator bounds them so 16^k stays tractable.

use std::collections::HashMap;

/// Probability that a single hit deals at least `target_hp`
pub fn ko_probability(rolls: &[u32], target_hp: u32) -> f64 {
    if rolls.is_empty() {
        return 0.0;
    }
    let ko_count = rolls.iter().filter(|&&d| d >= target_hp).count();
    ko_count as f64 / rolls.len() as f64
}

/// Probability that two consecutive hits together deal at least `target_hp`
///
/// Enumerates all ordered roll pairs, then scales by `hit_chance` squared:
/// both hits must land, and accuracy rolls are independent.
pub fn two_turn_ko_probability(
    first_rolls: &[u32],
    second_rolls: &[u32],
    target_hp: u32,
    hit_chance: f64,
) -> f64 {
    if first_rolls.is_empty() || second_rolls.is_empty() {
        return 0.0;
    }

    let mut ko_count = 0usize;
    for first in first_rolls {
        for second in second_rolls {
            if first + second >= target_hp {
                ko_count += 1;
            }
        }
    }

    let total = first_rolls.len() * second_rolls.len();
    (ko_count as f64 / total as f64) * hit_chance * hit_chance
}

/// Probability that `turns` consecutive identical hits deal at least
/// `target_hp` in total
///
/// Fully enumerates the 16^turns combinations by recursive accumulation.
pub fn n_turn_ko_probability(rolls: &[u32], target_hp: u32, turns: u32) -> f64 {
    if turns == 0 || rolls.is_empty() {
        return 0.0;
    }

    let total = (rolls.len() as f64).powi(turns as i32);
    let ko_count = count_ko_outcomes(rolls, target_hp, turns, 0);
    ko_count as f64 / total
}

fn count_ko_outcomes(rolls: &[u32], target_hp: u32, remaining: u32, accumulated: u32) -> u64 {
    if remaining == 0 {
        return (accumulated >= target_hp) as u64;
    }
    rolls
        .iter()
        .map(|&d| count_ko_outcomes(rolls, target_hp, remaining - 1, accumulated + d))
        .sum()
}

/// Arithmetic mean of the rolls
pub fn average_damage(rolls: &[u32]) -> f64 {
    if rolls.is_empty() {
        return 0.0;
    }
    rolls.iter().sum::<u32>() as f64 / rolls.len() as f64
}

/// Probability of each distinct damage value
pub fn damage_distribution(rolls: &[u32]) -> HashMap<u32, f64> {
    let mut counts: HashMap<u32, u32> = HashMap::new();
    for &damage in rolls {
        *counts.entry(damage).or_insert(0) += 1;
    }

    let total = rolls.len() as f64;
    counts
        .into_iter()
        .map(|(damage, count)| (damage, count as f64 / total))
        .collect()
}

/// KO probability after each prefix of a turn sequence
///
/// Entry k (0-based) covers turns 1..=k+1: the Cartesian product of those
/// turns' roll sets, counting combinations whose sum reaches `target_hp`.
/// The product is counted recursively, never materialized.
pub fn cumulative_ko_probabilities(turn_rolls: &[Vec<u32>], target_hp: u32) -> Vec<f64> {
    (1..=turn_rolls.len())
        .map(|k| {
            let prefix = &turn_rolls[..k];
            let total: f64 = prefix.iter().map(|rolls| rolls.len() as f64).product();
            if total == 0.0 {
                return 0.0;
            }
            let ko_count = count_prefix_ko(prefix, target_hp, 0);
            ko_count as f64 / total
        })
        .collect()
}

fn count_prefix_ko(ranges: &[Vec<u32>], target_hp: u32, accumulated: u32) -> u64 {
    match ranges.split_first() {
        None => (accumulated >= target_hp) as u64,
        Some((first, rest)) => first
            .iter()
            .map(|&d| count_prefix_ko(rest, target_hp, accumulated + d))
            .sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE_ROLLS: [u32; 16] = [34, 35, 35, 36, 36, 36, 37, 37, 38, 38, 38, 39, 39, 40, 40, 41];

    #[test]
    fn test_ko_probability_counts_rolls() {
        // 5 of the 16 rolls reach 39
        assert_eq!(ko_probability(&REFERENCE_ROLLS, 39), 5.0 / 16.0);
        // Every roll reaches 34
        assert_eq!(ko_probability(&REFERENCE_ROLLS, 34), 1.0);
        // No roll reaches 42
        assert_eq!(ko_probability(&REFERENCE_ROLLS, 42), 0.0);
    }

    #[test]
    fn test_ko_probability_monotone_in_target_hp() {
        let mut previous = 1.0;
        for hp in 30..45 {
            let p = ko_probability(&REFERENCE_ROLLS, hp);
            assert!(p <= previous, "KO probability rose as HP increased");
            previous = p;
        }
    }

    #[test]
    fn test_two_turn_enumerates_256_pairs() {
        // Brute-force the expected count independently
        let mut expected = 0;
        for a in REFERENCE_ROLLS {
            for b in REFERENCE_ROLLS {
                if a + b >= 75 {
                    expected += 1;
                }
            }
        }

        let p = two_turn_ko_probability(&REFERENCE_ROLLS, &REFERENCE_ROLLS, 75, 1.0);
        assert_eq!(p, expected as f64 / 256.0);
    }

    #[test]
    fn test_two_turn_certain_and_impossible() {
        // Minimum pair sum is 68
        assert_eq!(
            two_turn_ko_probability(&REFERENCE_ROLLS, &REFERENCE_ROLLS, 68, 1.0),
            1.0
        );
        // Maximum pair sum is 82
        assert_eq!(
            two_turn_ko_probability(&REFERENCE_ROLLS, &REFERENCE_ROLLS, 83, 1.0),
            0.0
        );
    }

    #[test]
    fn test_two_turn_accuracy_squared() {
        let sure = two_turn_ko_probability(&REFERENCE_ROLLS, &REFERENCE_ROLLS, 68, 1.0);
        let shaky = two_turn_ko_probability(&REFERENCE_ROLLS, &REFERENCE_ROLLS, 68, 0.9);
        assert!((shaky - sure * 0.81).abs() < 1e-12);
    }

    #[test]
    fn test_n_turn_matches_two_turn_for_two() {
        let two = two_turn_ko_probability(&REFERENCE_ROLLS, &REFERENCE_ROLLS, 75, 1.0);
        let n = n_turn_ko_probability(&REFERENCE_ROLLS, 75, 2);
        assert!((two - n).abs() < 1e-12);
    }

    #[test]
    fn test_n_turn_zero_turns() {
        assert_eq!(n_turn_ko_probability(&REFERENCE_ROLLS, 1, 0), 0.0);
    }

    #[test]
    fn test_n_turn_single_turn_matches_ko_probability() {
        let single = ko_probability(&REFERENCE_ROLLS, 39);
        let n = n_turn_ko_probability(&REFERENCE_ROLLS, 39, 1);
        assert_eq!(single, n);
    }

    #[test]
    fn test_n_turn_three_turns() {
        // 3 * 34 = 102 guaranteed; 3 * 41 = 123 maximum
        assert_eq!(n_turn_ko_probability(&REFERENCE_ROLLS, 102, 3), 1.0);
        assert_eq!(n_turn_ko_probability(&REFERENCE_ROLLS, 124, 3), 0.0);

        let partial = n_turn_ko_probability(&REFERENCE_ROLLS, 112, 3);
        assert!(partial > 0.0 && partial < 1.0);
    }

    #[test]
    fn test_average_damage() {
        assert_eq!(average_damage(&[10, 20, 30]), 20.0);

        let sum: u32 = REFERENCE_ROLLS.iter().sum();
        assert_eq!(average_damage(&REFERENCE_ROLLS), sum as f64 / 16.0);
    }

    #[test]
    fn test_damage_distribution() {
        let distribution = damage_distribution(&REFERENCE_ROLLS);

        // 34 appears once, 36 and 38 three times each
        assert_eq!(distribution[&34], 1.0 / 16.0);
        assert_eq!(distribution[&36], 3.0 / 16.0);
        assert_eq!(distribution[&38], 3.0 / 16.0);

        // Probabilities sum to 1
        let total: f64 = distribution.values().sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cumulative_first_entry_is_single_hit() {
        let turns = vec![REFERENCE_ROLLS.to_vec(), REFERENCE_ROLLS.to_vec()];
        let cumulative = cumulative_ko_probabilities(&turns, 70);

        assert_eq!(cumulative.len(), 2);
        assert_eq!(cumulative[0], ko_probability(&REFERENCE_ROLLS, 70));
        assert_eq!(
            cumulative[1],
            two_turn_ko_probability(&REFERENCE_ROLLS, &REFERENCE_ROLLS, 70, 1.0)
        );
    }

    #[test]
    fn test_cumulative_is_non_decreasing() {
        let turns = vec![
            REFERENCE_ROLLS.to_vec(),
            REFERENCE_ROLLS.to_vec(),
            REFERENCE_ROLLS.to_vec(),
        ];
        let cumulative = cumulative_ko_probabilities(&turns, 110);

        for pair in cumulative.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn test_cumulative_mixed_turns() {
        // A strong then a weak turn
        let strong = vec![50u32; 16];
        let weak = vec![10u32; 16];
        let cumulative = cumulative_ko_probabilities(&[strong, weak], 60);

        assert_eq!(cumulative[0], 0.0);
        assert_eq!(cumulative[1], 1.0);
    }

    #[test]
    fn test_cumulative_empty_sequence() {
        assert!(cumulative_ko_probabilities(&[], 100).is_empty());
    }
}
