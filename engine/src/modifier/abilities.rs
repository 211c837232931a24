//! Ability effect descriptors and their interpreters
//!
//! Abilities dispatch by numeric id into a small tagged descriptor; one
//! interpreter per category then evaluates the descriptor against the
//! move. Adding an ability is a table entry, not new branch logic. Ids the
//! tables don't cover evaluate neutrally: an unimplemented ability is a
//! documented gap, never an error.

use porygon_data::{AbilityId, DamageClass, Type};

// PokeAPI ability ids the tables below dispatch on.
pub const WATER_ABSORB: AbilityId = 11;
pub const FLASH_FIRE: AbilityId = 18;
pub const LEVITATE: AbilityId = 26;
pub const LIGHTNING_ROD: AbilityId = 31;
pub const HUGE_POWER: AbilityId = 37;
pub const THICK_FAT: AbilityId = 47;
pub const PURE_POWER: AbilityId = 74;
pub const MOTOR_DRIVE: AbilityId = 78;
pub const RIVALRY: AbilityId = 79;
pub const DRY_SKIN: AbilityId = 87;
pub const IRON_FIST: AbilityId = 89;
pub const ADAPTABILITY: AbilityId = 91;
pub const SOLAR_POWER: AbilityId = 94;
pub const TECHNICIAN: AbilityId = 101;
pub const FILTER: AbilityId = 111;
pub const STORM_DRAIN: AbilityId = 114;
pub const SOLID_ROCK: AbilityId = 116;
pub const RECKLESS: AbilityId = 120;
pub const SHEER_FORCE: AbilityId = 125;
pub const MULTISCALE: AbilityId = 136;
pub const ANALYTIC: AbilityId = 148;
pub const SAP_SIPPER: AbilityId = 157;
pub const SAND_FORCE: AbilityId = 159;
pub const FUR_COAT: AbilityId = 169;
pub const TOUGH_CLAWS: AbilityId = 181;
pub const FLUFFY: AbilityId = 208;
pub const PRISM_ARMOR: AbilityId = 230;
pub const SHADOW_SHIELD: AbilityId = 231;
pub const PUNK_ROCK: AbilityId = 244;

/// What an attacker-side ability does to outgoing damage
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttackerAbilityEffect {
    /// No damage modifier (includes adaptability, which the STAB table
    /// already accounts for)
    Neutral,

    /// Boost moves at or below a power threshold (technician)
    LowPowerBoost { max_power: u16, factor: f64 },

    /// The condition needs data this engine does not model (move flags,
    /// weather, gender, turn order); evaluates to 1.0
    Unmodeled,
}

/// What a defender-side ability does to incoming damage
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefenderAbilityEffect {
    /// No damage modifier
    Neutral,

    /// Full immunity to one type (water-absorb family)
    Absorb { absorbed: Type },

    /// Immunity to one type, amplified damage from another (dry-skin)
    AbsorbAmplify {
        absorbed: Type,
        amplified: Type,
        factor: f64,
    },

    /// Scale damage from one or two specific types (thick-fat, fluffy)
    ScaleTypes {
        first: Type,
        second: Option<Type>,
        factor: f64,
    },

    /// Scale super-effective hits only (filter family); applies iff the
    /// precomputed type effectiveness exceeds 1.0
    ScaleSuperEffective { factor: f64 },

    /// The condition needs data this engine does not model (remaining HP,
    /// sound or contact flags); evaluates to 1.0
    Unmodeled,
}

/// What an ability does to a computed stat before the damage formula
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatAbilityEffect {
    /// No stat scaling
    Neutral,

    /// Scale the offensive stat for one damage class (huge-power)
    ScaleAttack { class: DamageClass, factor: f64 },

    /// Scale the defensive stat for one damage class (fur-coat)
    ScaleDefense { class: DamageClass, factor: f64 },
}

/// Look up the attacker-side damage descriptor for an ability id
pub fn attacker_effect(id: AbilityId) -> AttackerAbilityEffect {
    match id {
        TECHNICIAN => AttackerAbilityEffect::LowPowerBoost {
            max_power: 60,
            factor: 1.5,
        },
        // TODO: iron-fist/tough-claws/reckless/sheer-force need punch,
        // contact, recoil, and secondary-effect flags on MoveData
        IRON_FIST | TOUGH_CLAWS | RECKLESS | SHEER_FORCE => AttackerAbilityEffect::Unmodeled,
        SAND_FORCE | SOLAR_POWER | ANALYTIC | RIVALRY => AttackerAbilityEffect::Unmodeled,
        _ => AttackerAbilityEffect::Neutral,
    }
}

/// Look up the defender-side damage descriptor for an ability id
pub fn defender_effect(id: AbilityId) -> DefenderAbilityEffect {
    match id {
        FLASH_FIRE => DefenderAbilityEffect::Absorb {
            absorbed: Type::Fire,
        },
        WATER_ABSORB | STORM_DRAIN => DefenderAbilityEffect::Absorb {
            absorbed: Type::Water,
        },
        LIGHTNING_ROD | MOTOR_DRIVE => DefenderAbilityEffect::Absorb {
            absorbed: Type::Electric,
        },
        SAP_SIPPER => DefenderAbilityEffect::Absorb {
            absorbed: Type::Grass,
        },
        LEVITATE => DefenderAbilityEffect::Absorb {
            absorbed: Type::Ground,
        },
        DRY_SKIN => DefenderAbilityEffect::AbsorbAmplify {
            absorbed: Type::Water,
            amplified: Type::Fire,
            factor: 1.25,
        },
        THICK_FAT => DefenderAbilityEffect::ScaleTypes {
            first: Type::Fire,
            second: Some(Type::Ice),
            factor: 0.5,
        },
        // Fluffy's contact halving is unmodeled; the fire weakness is not
        FLUFFY => DefenderAbilityEffect::ScaleTypes {
            first: Type::Fire,
            second: None,
            factor: 2.0,
        },
        FILTER | SOLID_ROCK | PRISM_ARMOR => {
            DefenderAbilityEffect::ScaleSuperEffective { factor: 0.75 }
        }
        MULTISCALE | SHADOW_SHIELD | PUNK_ROCK => DefenderAbilityEffect::Unmodeled,
        _ => DefenderAbilityEffect::Neutral,
    }
}

/// Look up the stat descriptor for an ability id
pub fn stat_effect(id: AbilityId) -> StatAbilityEffect {
    match id {
        HUGE_POWER | PURE_POWER => StatAbilityEffect::ScaleAttack {
            class: DamageClass::Physical,
            factor: 2.0,
        },
        FUR_COAT => StatAbilityEffect::ScaleDefense {
            class: DamageClass::Physical,
            factor: 2.0,
        },
        _ => StatAbilityEffect::Neutral,
    }
}

/// Evaluate an attacker descriptor against the move's power
pub fn apply_attacker_effect(effect: AttackerAbilityEffect, move_power: u16) -> f64 {
    match effect {
        AttackerAbilityEffect::Neutral | AttackerAbilityEffect::Unmodeled => 1.0,
        AttackerAbilityEffect::LowPowerBoost { max_power, factor } => {
            if move_power <= max_power {
                factor
            } else {
                1.0
            }
        }
    }
}

/// Evaluate a defender descriptor against the move's type and the
/// precomputed effectiveness product
pub fn apply_defender_effect(
    effect: DefenderAbilityEffect,
    move_type: Type,
    type_effectiveness: f64,
) -> f64 {
    match effect {
        DefenderAbilityEffect::Neutral | DefenderAbilityEffect::Unmodeled => 1.0,
        DefenderAbilityEffect::Absorb { absorbed } => {
            if move_type == absorbed {
                0.0
            } else {
                1.0
            }
        }
        DefenderAbilityEffect::AbsorbAmplify {
            absorbed,
            amplified,
            factor,
        } => {
            if move_type == absorbed {
                0.0
            } else if move_type == amplified {
                factor
            } else {
                1.0
            }
        }
        DefenderAbilityEffect::ScaleTypes {
            first,
            second,
            factor,
        } => {
            if move_type == first || second == Some(move_type) {
                factor
            } else {
                1.0
            }
        }
        DefenderAbilityEffect::ScaleSuperEffective { factor } => {
            if type_effectiveness > 1.0 {
                factor
            } else {
                1.0
            }
        }
    }
}

/// Stat multiplier the attacker's ability applies to the offensive stat
pub fn attack_stat_multiplier(ability: Option<AbilityId>, class: DamageClass) -> f64 {
    match ability.map(stat_effect) {
        Some(StatAbilityEffect::ScaleAttack { class: c, factor }) if c == class => factor,
        _ => 1.0,
    }
}

/// Stat multiplier the defender's ability applies to the defensive stat
pub fn defense_stat_multiplier(ability: Option<AbilityId>, class: DamageClass) -> f64 {
    match ability.map(stat_effect) {
        Some(StatAbilityEffect::ScaleDefense { class: c, factor }) if c == class => factor,
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_technician_power_gate() {
        let effect = attacker_effect(TECHNICIAN);
        assert_eq!(apply_attacker_effect(effect, 60), 1.5);
        assert_eq!(apply_attacker_effect(effect, 61), 1.0);
        assert_eq!(apply_attacker_effect(effect, 40), 1.5);
    }

    #[test]
    fn test_unmodeled_attacker_abilities_are_neutral() {
        for id in [IRON_FIST, TOUGH_CLAWS, SAND_FORCE, SHEER_FORCE, RIVALRY] {
            assert_eq!(apply_attacker_effect(attacker_effect(id), 120), 1.0);
        }
    }

    #[test]
    fn test_unknown_ability_is_neutral() {
        assert_eq!(attacker_effect(9999), AttackerAbilityEffect::Neutral);
        assert_eq!(defender_effect(9999), DefenderAbilityEffect::Neutral);
        assert_eq!(stat_effect(9999), StatAbilityEffect::Neutral);
    }

    #[test]
    fn test_water_absorb_zeroes_water() {
        let effect = defender_effect(WATER_ABSORB);
        // Exactly zero for water regardless of effectiveness
        assert_eq!(apply_defender_effect(effect, Type::Water, 1.0), 0.0);
        assert_eq!(apply_defender_effect(effect, Type::Water, 4.0), 0.0);
        assert_eq!(apply_defender_effect(effect, Type::Fire, 1.0), 1.0);
    }

    #[test]
    fn test_type_immunity_family() {
        let cases = [
            (FLASH_FIRE, Type::Fire),
            (STORM_DRAIN, Type::Water),
            (LIGHTNING_ROD, Type::Electric),
            (MOTOR_DRIVE, Type::Electric),
            (SAP_SIPPER, Type::Grass),
            (LEVITATE, Type::Ground),
        ];
        for (id, absorbed) in cases {
            assert_eq!(apply_defender_effect(defender_effect(id), absorbed, 1.0), 0.0);
        }
    }

    #[test]
    fn test_dry_skin() {
        let effect = defender_effect(DRY_SKIN);
        assert_eq!(apply_defender_effect(effect, Type::Water, 1.0), 0.0);
        assert_eq!(apply_defender_effect(effect, Type::Fire, 1.0), 1.25);
        assert_eq!(apply_defender_effect(effect, Type::Grass, 1.0), 1.0);
    }

    #[test]
    fn test_thick_fat_halves_fire_and_ice() {
        let effect = defender_effect(THICK_FAT);
        assert_eq!(apply_defender_effect(effect, Type::Fire, 1.0), 0.5);
        assert_eq!(apply_defender_effect(effect, Type::Ice, 1.0), 0.5);
        assert_eq!(apply_defender_effect(effect, Type::Water, 1.0), 1.0);
    }

    #[test]
    fn test_fluffy_doubles_fire() {
        let effect = defender_effect(FLUFFY);
        assert_eq!(apply_defender_effect(effect, Type::Fire, 1.0), 2.0);
        assert_eq!(apply_defender_effect(effect, Type::Fighting, 1.0), 1.0);
    }

    #[test]
    fn test_filter_family_gates_on_effectiveness() {
        for id in [FILTER, SOLID_ROCK, PRISM_ARMOR] {
            let effect = defender_effect(id);
            assert_eq!(apply_defender_effect(effect, Type::Rock, 2.0), 0.75);
            assert_eq!(apply_defender_effect(effect, Type::Rock, 4.0), 0.75);
            assert_eq!(apply_defender_effect(effect, Type::Rock, 1.0), 1.0);
            assert_eq!(apply_defender_effect(effect, Type::Rock, 0.5), 1.0);
        }
    }

    #[test]
    fn test_unmodeled_defender_abilities_are_neutral() {
        for id in [MULTISCALE, SHADOW_SHIELD, PUNK_ROCK] {
            assert_eq!(apply_defender_effect(defender_effect(id), Type::Normal, 2.0), 1.0);
        }
    }

    #[test]
    fn test_huge_power_doubles_physical_attack_only() {
        assert_eq!(
            attack_stat_multiplier(Some(HUGE_POWER), DamageClass::Physical),
            2.0
        );
        assert_eq!(
            attack_stat_multiplier(Some(HUGE_POWER), DamageClass::Special),
            1.0
        );
        assert_eq!(
            attack_stat_multiplier(Some(PURE_POWER), DamageClass::Physical),
            2.0
        );
        assert_eq!(attack_stat_multiplier(None, DamageClass::Physical), 1.0);
    }

    #[test]
    fn test_fur_coat_doubles_physical_defense_only() {
        assert_eq!(
            defense_stat_multiplier(Some(FUR_COAT), DamageClass::Physical),
            2.0
        );
        assert_eq!(
            defense_stat_multiplier(Some(FUR_COAT), DamageClass::Special),
            1.0
        );
        assert_eq!(defense_stat_multiplier(None, DamageClass::Physical), 1.0);
    }
}
