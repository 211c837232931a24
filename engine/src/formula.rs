//! Core stat and damage formulas
//!
//! Every function here reproduces the game's published arithmetic, with
//! truncating division at the exact points the game truncates. The
//! intermediate floors are not interchangeable with a single rounding at
//! the end; reordering them changes results by one point in ways the
//! worked examples below pin down.

use porygon_data::Type;

/// Stage multiplier table, indexed from -6 to +6 as (numerator, denominator)
const STAGE_TABLE: [(u32, u32); 13] = [
    (2, 8), // -6: 0.25x
    (2, 7), // -5
    (2, 6), // -4
    (2, 5), // -3: 0.4x
    (2, 4), // -2: 0.5x
    (2, 3), // -1
    (2, 2), //  0: 1.0x
    (3, 2), // +1: 1.5x
    (4, 2), // +2: 2.0x
    (5, 2), // +3: 2.5x
    (6, 2), // +4: 3.0x
    (7, 2), // +5: 3.5x
    (8, 2), // +6: 4.0x
];

/// Get the stage multiplier as a float (stage clamped to -6..+6)
///
/// +1 = 1.5x, +2 = 2x, ..., +6 = 4x
/// -1 = 0.67x, -2 = 0.5x, ..., -6 = 0.25x
pub fn stage_multiplier(stage: i8) -> f64 {
    let (num, den) = stage_fraction(stage);
    num as f64 / den as f64
}

fn stage_fraction(stage: i8) -> (u32, u32) {
    let index = (stage.clamp(-6, 6) + 6) as usize;
    STAGE_TABLE[index]
}

/// Apply a stage multiplier to a computed stat (truncating)
///
/// Uses exact integer fractions so that -1 on a stat of 120 gives 80, not
/// the 79 a binary 2/3 would produce.
pub fn apply_stage(stat: u32, stage: i8) -> u32 {
    let (num, den) = stage_fraction(stage);
    stat * num / den
}

/// Calculate a non-HP stat value
///
/// `floor((2*base + iv + ev/4) * level / 100) + 5`, times the nature
/// multiplier (floored), times the stage multiplier (truncated).
///
/// Worked example: base 49, level 50, 31 IV, 252 EV, boosted nature ->
/// floor(192 * 50 / 100) + 5 = 101, floor(101 * 1.1) = 111.
pub fn calculate_stat(
    base: u16,
    level: u8,
    iv: u8,
    ev: u16,
    nature_multiplier: f64,
    stage: i8,
) -> u32 {
    let spread = 2 * base as u32 + iv as u32 + ev as u32 / 4;
    let inner = spread * level as u32 / 100;
    let natured = ((inner + 5) as f64 * nature_multiplier).floor() as u32;
    apply_stage(natured, stage)
}

/// Calculate the HP stat value
///
/// `floor((2*base + iv + ev/4) * level / 100) + level + 10`. Natures and
/// stages never apply to HP.
pub fn calculate_hp(base: u16, level: u8, iv: u8, ev: u16) -> u32 {
    let spread = 2 * base as u32 + iv as u32 + ev as u32 / 4;
    spread * level as u32 / 100 + level as u32 + 10
}

/// Calculate the same-type attack bonus multiplier
///
/// The decision table spans four axes: terastallized or not, tera type
/// matching the move, the move type being among the native types, and
/// adaptability. Each branch lands on 1.0, 1.5, or 2.0; adaptability then
/// promotes 1.5 to 2.0 and 2.0 to 2.25, and the mask bonus (1.0 when no
/// mask item is in play) multiplies the result.
pub fn calculate_stab(
    move_type: Type,
    native_types: &[Type],
    terastallized: bool,
    tera_type: Option<Type>,
    has_adaptability: bool,
    mask_bonus: f64,
) -> f64 {
    let native_match = native_types.contains(&move_type);

    let base = match (terastallized, tera_type) {
        (true, Some(tera)) if tera == move_type => {
            if native_match {
                2.0
            } else {
                1.5
            }
        }
        // Terastallized into a type the move doesn't match: only the
        // native STAB (if any) remains.
        _ => {
            if native_match {
                1.5
            } else {
                1.0
            }
        }
    };

    let corrected = if !has_adaptability {
        base
    } else if base == 2.0 {
        2.25
    } else if base == 1.5 {
        2.0
    } else {
        base
    };

    corrected * mask_bonus
}

/// Base damage before the random roll and modifiers
///
/// `(2*level/5 + 2) * power * attack / defense / 50 + 2`, truncating after
/// each division. Defense must be >= 1, which stat derivation guarantees.
///
/// Worked example: level 50, power 90, 100 attack vs 100 defense ->
/// 22 * 90 * 100 / 100 / 50 + 2 = 41.
pub fn base_damage(level: u8, power: u16, attack: u32, defense: u32) -> u32 {
    let level_factor = 2 * level as u32 / 5 + 2;
    level_factor * power as u32 * attack / defense / 50 + 2
}

/// Calculate all 16 damage rolls
///
/// The game rolls a random percentage from 85 to 100; this returns the
/// damage for every roll in ascending percentage order, so the sequence is
/// deterministic for identical inputs. Each value is
/// `floor(base * percent/100 * total_modifier)` with a floor of 1.
pub fn calculate_damage(
    level: u8,
    power: u16,
    attack: u32,
    defense: u32,
    total_modifier: f64,
) -> [u32; 16] {
    let base = base_damage(level, power, attack, defense) as f64;

    let mut rolls = [0u32; 16];
    for (i, roll) in rolls.iter_mut().enumerate() {
        let percent = (85 + i) as f64 / 100.0;
        let raw = base * percent * total_modifier;
        *roll = (raw.floor() as u32).max(1);
    }
    rolls
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_multiplier() {
        assert_eq!(stage_multiplier(0), 1.0);
        assert_eq!(stage_multiplier(1), 1.5);
        assert_eq!(stage_multiplier(2), 2.0);
        assert_eq!(stage_multiplier(6), 4.0);
        assert_eq!(stage_multiplier(-2), 0.5);
        assert_eq!(stage_multiplier(-6), 0.25);

        // Out of range clamps
        assert_eq!(stage_multiplier(7), 4.0);
        assert_eq!(stage_multiplier(-7), 0.25);
    }

    #[test]
    fn test_apply_stage_exact_fractions() {
        assert_eq!(apply_stage(100, 0), 100);
        assert_eq!(apply_stage(100, 1), 150);
        assert_eq!(apply_stage(100, 6), 400);
        assert_eq!(apply_stage(100, -2), 50);
        assert_eq!(apply_stage(100, -6), 25);

        // 120 * 2/3 must be exactly 80
        assert_eq!(apply_stage(120, -1), 80);
        // Truncation: 85 * 2/3 = 56.67 -> 56
        assert_eq!(apply_stage(85, -1), 56);
    }

    #[test]
    fn test_calculate_stat_worked_examples() {
        // 252 EV, 31 IV, boosted nature at level 50
        assert_eq!(calculate_stat(100, 50, 31, 252, 1.1, 0), 167);
        // Same spread at level 100
        assert_eq!(calculate_stat(100, 100, 31, 252, 1.1, 0), 328);
        // Bulbasaur's base 49 attack, max attack investment
        assert_eq!(calculate_stat(49, 50, 31, 252, 1.1, 0), 111);
        // Zero investment, neutral nature
        assert_eq!(calculate_stat(100, 50, 0, 0, 1.0, 0), 105);
    }

    #[test]
    fn test_calculate_stat_with_stages() {
        let base = calculate_stat(100, 50, 31, 0, 1.0, 0);
        assert_eq!(base, 120);

        assert_eq!(calculate_stat(100, 50, 31, 0, 1.0, 1), 180);
        assert_eq!(calculate_stat(100, 50, 31, 0, 1.0, -1), 80);
    }

    #[test]
    fn test_calculate_stat_hindering_nature() {
        // 101 * 0.9 = 90.9 -> 90
        assert_eq!(calculate_stat(49, 50, 31, 252, 0.9, 0), 90);
    }

    #[test]
    fn test_calculate_hp_worked_examples() {
        assert_eq!(calculate_hp(100, 50, 31, 252), 207);
        assert_eq!(calculate_hp(100, 100, 31, 252), 404);
        assert_eq!(calculate_hp(100, 50, 0, 0), 160);
        // Bulbasaur with 31 IV, 252 EV at level 50
        assert_eq!(calculate_hp(45, 50, 31, 252), 152);
    }

    #[test]
    fn test_stab_plain_match() {
        let stab = calculate_stab(
            Type::Fire,
            &[Type::Fire, Type::Flying],
            false,
            None,
            false,
            1.0,
        );
        assert_eq!(stab, 1.5);
    }

    #[test]
    fn test_stab_no_match() {
        let stab = calculate_stab(
            Type::Water,
            &[Type::Fire, Type::Flying],
            false,
            None,
            false,
            1.0,
        );
        assert_eq!(stab, 1.0);
    }

    #[test]
    fn test_stab_tera_matching_native_type() {
        // Tera type == move type, also a native type: 2.0
        let stab = calculate_stab(
            Type::Fire,
            &[Type::Fire, Type::Flying],
            true,
            Some(Type::Fire),
            false,
            1.0,
        );
        assert_eq!(stab, 2.0);
    }

    #[test]
    fn test_stab_tera_new_type() {
        // Tera type == move type, not a native type: fresh 1.5
        let stab = calculate_stab(
            Type::Water,
            &[Type::Fire, Type::Flying],
            true,
            Some(Type::Water),
            false,
            1.0,
        );
        assert_eq!(stab, 1.5);
    }

    #[test]
    fn test_stab_tera_mismatched_keeps_native_stab() {
        // Terastallized away, but the move still matches a native type
        let stab = calculate_stab(
            Type::Fire,
            &[Type::Fire, Type::Flying],
            true,
            Some(Type::Water),
            false,
            1.0,
        );
        assert_eq!(stab, 1.5);
    }

    #[test]
    fn test_stab_tera_no_match_at_all() {
        let stab = calculate_stab(
            Type::Grass,
            &[Type::Fire, Type::Flying],
            true,
            Some(Type::Water),
            false,
            1.0,
        );
        assert_eq!(stab, 1.0);
    }

    #[test]
    fn test_stab_adaptability() {
        // 1.5 -> 2.0
        let stab = calculate_stab(Type::Fire, &[Type::Fire], false, None, true, 1.0);
        assert_eq!(stab, 2.0);

        // Double tera match: 2.0 -> 2.25
        let stab = calculate_stab(Type::Fire, &[Type::Fire], true, Some(Type::Fire), true, 1.0);
        assert_eq!(stab, 2.25);

        // No match stays 1.0
        let stab = calculate_stab(Type::Water, &[Type::Fire], false, None, true, 1.0);
        assert_eq!(stab, 1.0);
    }

    #[test]
    fn test_stab_mask_bonus() {
        // 1.5 * 1.2 = 1.8 (mask holder, not terastallized)
        let stab = calculate_stab(
            Type::Water,
            &[Type::Grass, Type::Water],
            false,
            None,
            false,
            1.2,
        );
        assert!((stab - 1.8).abs() < 1e-9);

        // 2.0 * 1.3 = 2.6 (terastallized mask holder)
        let stab = calculate_stab(
            Type::Water,
            &[Type::Grass, Type::Water],
            true,
            Some(Type::Water),
            false,
            1.3,
        );
        assert!((stab - 2.6).abs() < 1e-9);
    }

    #[test]
    fn test_stab_is_pure() {
        let args = (Type::Fire, [Type::Fire, Type::Flying]);
        let first = calculate_stab(args.0, &args.1, true, Some(Type::Fire), true, 1.0);
        let second = calculate_stab(args.0, &args.1, true, Some(Type::Fire), true, 1.0);
        assert_eq!(first, second);
    }

    #[test]
    fn test_base_damage_worked_examples() {
        // Level 50: 22 * 90 * 100 / 100 / 50 + 2 = 41
        assert_eq!(base_damage(50, 90, 100, 100), 41);
        // Level 100: 42 * 90 * 100 / 100 / 50 + 2 = 77
        assert_eq!(base_damage(100, 90, 100, 100), 77);
    }

    #[test]
    fn test_calculate_damage_reference_rolls() {
        // Base damage 41, no modifiers: floor(41 * p/100) for p in 85..=100
        let rolls = calculate_damage(50, 90, 100, 100, 1.0);
        assert_eq!(
            rolls,
            [34, 35, 35, 36, 36, 36, 37, 37, 38, 38, 38, 39, 39, 40, 40, 41]
        );
    }

    #[test]
    fn test_calculate_damage_shape() {
        let rolls = calculate_damage(50, 80, 150, 100, 1.5);

        assert_eq!(rolls.len(), 16);
        assert!(rolls.iter().all(|&d| d >= 1));
        // Ascending in roll order
        for pair in rolls.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        assert!(rolls[15] >= rolls[0]);
    }

    #[test]
    fn test_calculate_damage_minimum_is_one() {
        // A hopeless matchup still deals at least 1 per roll
        let rolls = calculate_damage(1, 10, 5, 400, 0.5);
        assert!(rolls.iter().all(|&d| d == 1));
    }

    #[test]
    fn test_calculate_damage_min_to_max_ratio() {
        let rolls = calculate_damage(50, 80, 150, 100, 1.0);
        let ratio = rolls[0] as f64 / rolls[15] as f64;
        assert!(ratio >= 0.83 && ratio <= 0.86);
    }

    #[test]
    fn test_calculate_damage_modifier_scales() {
        let plain = calculate_damage(50, 80, 150, 100, 1.0);
        let boosted = calculate_damage(50, 80, 150, 100, 2.0);
        let ratio = boosted[15] as f64 / plain[15] as f64;
        assert!(ratio >= 1.9 && ratio <= 2.1);
    }
}
