//! The modifier resolver

use porygon_data::{DamageClass, ItemCondition, ItemData, MoveData, Type};

use crate::formula;
use crate::state::{BattleMode, BattleState, DamageModifiers, ParticipantState, Terrain, Weather};

use super::abilities;

/// Resolve all damage modifiers for one calculation request
///
/// `type_effectiveness` must already be computed against the defender's
/// current effective type set; it is passed through into its own field and
/// consulted by the filter-style defender abilities.
pub fn resolve_modifiers(
    state: &BattleState,
    move_data: &MoveData,
    attacker_item: Option<&ItemData>,
    type_effectiveness: f64,
) -> DamageModifiers {
    let move_type = move_data.move_type;

    DamageModifiers {
        stab: resolve_stab(&state.attacker, attacker_item, move_type),
        type_effectiveness,
        weather: resolve_weather(state.environment.weather, move_type),
        terrain: resolve_terrain(state.environment.terrain, move_type),
        screen: resolve_screen(state, move_data.damage_class),
        item: resolve_item(attacker_item, move_type, &state.attacker),
        ability: resolve_ability(
            state.attacker.ability,
            state.defender.ability,
            move_type,
            move_data.power.unwrap_or(0),
            type_effectiveness,
        ),
        other: resolve_spread(state.mode, move_data.spread),
    }
}

/// STAB, including the mask item's bonus and adaptability
fn resolve_stab(
    attacker: &ParticipantState,
    attacker_item: Option<&ItemData>,
    move_type: Type,
) -> f64 {
    let mask_bonus = resolve_mask_bonus(attacker, attacker_item, move_type);
    let has_adaptability = attacker.ability == Some(abilities::ADAPTABILITY);

    formula::calculate_stab(
        move_type,
        &attacker.base_types,
        attacker.terastallized,
        attacker.tera_type,
        has_adaptability,
        mask_bonus,
    )
}

/// The mask item's STAB bonus: only for a mask effect, worn by the species
/// it is restricted to, on a move of the mask's type
fn resolve_mask_bonus(
    attacker: &ParticipantState,
    attacker_item: Option<&ItemData>,
    move_type: Type,
) -> f64 {
    let Some(effect) = attacker_item.and_then(|item| item.damage_effect.as_ref()) else {
        return 1.0;
    };
    if !effect.is_mask() {
        return 1.0;
    }
    let Some(name) = attacker.name.as_deref() else {
        return 1.0;
    };
    if !effect.applies_to(name) || !effect.covers_type(move_type) {
        return 1.0;
    }

    if attacker.terastallized {
        effect.tera_multiplier.unwrap_or(effect.base_multiplier)
    } else {
        effect.base_multiplier
    }
}

/// Weather table: sun boosts fire and cuts water, rain the reverse;
/// sandstorm and snow have no direct damage modifier
fn resolve_weather(weather: Option<Weather>, move_type: Type) -> f64 {
    match weather {
        Some(Weather::Sun) => match move_type {
            Type::Fire => 1.5,
            Type::Water => 0.5,
            _ => 1.0,
        },
        Some(Weather::Rain) => match move_type {
            Type::Water => 1.5,
            Type::Fire => 0.5,
            _ => 1.0,
        },
        Some(Weather::Sandstorm) | Some(Weather::Snow) | None => 1.0,
    }
}

/// Terrain table: matching-type boost, except misty which cuts dragon
fn resolve_terrain(terrain: Option<Terrain>, move_type: Type) -> f64 {
    match terrain {
        Some(Terrain::Electric) if move_type == Type::Electric => 1.3,
        Some(Terrain::Grassy) if move_type == Type::Grass => 1.3,
        Some(Terrain::Psychic) if move_type == Type::Psychic => 1.3,
        Some(Terrain::Misty) if move_type == Type::Dragon => 0.5,
        _ => 1.0,
    }
}

/// Screen reduction, parameterized by battle mode and damage class
fn resolve_screen(state: &BattleState, class: DamageClass) -> f64 {
    match state.environment.screen {
        Some(screen) => screen.damage_reduction(state.mode == BattleMode::Double, class),
        None => 1.0,
    }
}

/// Item damage multiplier, dispatched on the item's condition tag
fn resolve_item(
    attacker_item: Option<&ItemData>,
    move_type: Type,
    attacker: &ParticipantState,
) -> f64 {
    let Some(effect) = attacker_item.and_then(|item| item.damage_effect.as_ref()) else {
        return 1.0;
    };

    match &effect.condition {
        ItemCondition::AllDamagingMoves => effect.base_multiplier,
        ItemCondition::SameTypeAsMask => {
            if effect.covers_type(move_type) {
                if attacker.terastallized {
                    effect.tera_multiplier.unwrap_or(effect.base_multiplier)
                } else {
                    effect.base_multiplier
                }
            } else {
                1.0
            }
        }
        // TODO: needs the effectiveness product threaded in before the
        // expert-belt family can be modeled
        ItemCondition::SuperEffective => 1.0,
        ItemCondition::Other(_) => 1.0,
    }
}

/// Attacker and defender ability modifiers combined
fn resolve_ability(
    attacker_ability: Option<porygon_data::AbilityId>,
    defender_ability: Option<porygon_data::AbilityId>,
    move_type: Type,
    move_power: u16,
    type_effectiveness: f64,
) -> f64 {
    let mut modifier = 1.0;

    if let Some(id) = attacker_ability {
        modifier *= abilities::apply_attacker_effect(abilities::attacker_effect(id), move_power);
    }
    if let Some(id) = defender_ability {
        modifier *= abilities::apply_defender_effect(
            abilities::defender_effect(id),
            move_type,
            type_effectiveness,
        );
    }

    modifier
}

/// Spread moves in double battles hit each target for 0.75x
fn resolve_spread(mode: BattleMode, is_spread: bool) -> f64 {
    if mode == BattleMode::Double && is_spread {
        0.75
    } else {
        1.0
    }
}
