//! The battle session orchestrator

use porygon_data::{
    AbilityData, DamageClass, ItemData, MoveData, MoveId, Nature, PokemonData, Stat, Type,
};
use porygon_engine::modifier::abilities;
use porygon_engine::state::{
    BattleState, DamageReport, EffortValues, IndividualValues, MultiTurnReport, ParticipantState,
    Screen, StatStages, Terrain, TurnDamage, Weather,
};
use porygon_engine::{formula, modifier, probability};

use crate::provider::DataProvider;
use crate::SessionError;

/// Which participant a selection operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Attacker,
    Defender,
}

/// Owns a battle snapshot and drives calculation requests against it
///
/// All mutation goes through the selection methods below; calculations
/// never mutate the snapshot. The multi-turn path maps the same pure
/// per-move calculation over the queued moves instead of temporarily
/// rewriting the selected move.
pub struct BattleSession<P: DataProvider> {
    provider: P,
    state: BattleState,
}

impl<P: DataProvider> BattleSession<P> {
    /// Create a session with an empty battle state
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            state: BattleState::new(),
        }
    }

    /// Create a session from a saved snapshot
    pub fn from_snapshot(provider: P, state: BattleState) -> Self {
        Self { provider, state }
    }

    /// Read the current snapshot
    pub fn state(&self) -> &BattleState {
        &self.state
    }

    /// Give up the session, keeping the snapshot (e.g. to save it)
    pub fn into_state(self) -> BattleState {
        self.state
    }

    fn participant_mut(&mut self, side: Side) -> &mut ParticipantState {
        match side {
            Side::Attacker => &mut self.state.attacker,
            Side::Defender => &mut self.state.defender,
        }
    }

    // === Selection operations ===

    /// Select a Pokemon for one side
    ///
    /// Overwrites identity, base stats, and types; the side's level, EVs,
    /// IVs, nature, and stages persist across the swap.
    pub fn select_pokemon(&mut self, side: Side, data: &PokemonData) {
        self.participant_mut(side).set_pokemon(data);
    }

    /// Select the move for single-turn calculation
    pub fn select_move(&mut self, move_id: MoveId) {
        self.state.selected_move = Some(move_id);
    }

    /// Select an ability for one side
    pub fn select_ability(&mut self, side: Side, ability: &AbilityData) {
        self.participant_mut(side).ability = Some(ability.id);
    }

    /// Select or clear a held item for one side
    pub fn select_item(&mut self, side: Side, item: Option<&ItemData>) {
        self.participant_mut(side).held_item = item.map(|i| i.id);
    }

    /// Set a side's level (clamped to 1-100)
    pub fn set_level(&mut self, side: Side, level: u8) {
        self.participant_mut(side).level = level.clamp(1, 100);
    }

    /// Set a side's effort values
    pub fn set_effort_values(&mut self, side: Side, effort: EffortValues) {
        self.participant_mut(side).effort = effort;
    }

    /// Set a side's individual values
    pub fn set_individual_values(&mut self, side: Side, individual: IndividualValues) {
        self.participant_mut(side).individual = individual;
    }

    /// Set a side's nature
    pub fn set_nature(&mut self, side: Side, nature: Nature) {
        self.participant_mut(side).nature = nature;
    }

    /// Set a side's stat stages
    pub fn set_stat_stages(&mut self, side: Side, stages: StatStages) {
        self.participant_mut(side).stages = stages;
    }

    /// Choose a side's tera type
    pub fn set_tera_type(&mut self, side: Side, tera_type: Type) {
        self.participant_mut(side).tera_type = Some(tera_type);
    }

    /// Flip a side's terastallized flag
    ///
    /// Turning it on without a chosen tera type defaults to the side's
    /// first native type.
    pub fn toggle_terastallize(&mut self, side: Side) {
        self.participant_mut(side).toggle_terastallize();
    }

    /// Switch between single and double battle
    pub fn toggle_battle_mode(&mut self) {
        self.state.mode = self.state.mode.toggled();
    }

    /// Set or clear the weather
    pub fn set_weather(&mut self, weather: Option<Weather>) {
        self.state.environment.weather = weather;
    }

    /// Set or clear the terrain
    pub fn set_terrain(&mut self, terrain: Option<Terrain>) {
        self.state.environment.terrain = terrain;
    }

    /// Set or clear the defending side's screen
    pub fn set_screen(&mut self, screen: Option<Screen>) {
        self.state.environment.screen = screen;
    }

    /// Exchange attacker and defender wholesale
    pub fn swap_sides(&mut self) {
        self.state.swap();
    }

    /// Reset the snapshot to its initial empty state
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Whether multi-hit KO probabilities account for move accuracy
    pub fn set_apply_accuracy(&mut self, apply: bool) {
        self.state.apply_accuracy = apply;
    }

    // === Turn queue ===

    /// Append a move to the multi-turn sequence
    pub fn add_turn(&mut self, move_id: MoveId) {
        self.state.turn_moves.push(move_id);
    }

    /// Remove one queued turn (out-of-range indices are ignored)
    pub fn remove_turn(&mut self, index: usize) {
        if index < self.state.turn_moves.len() {
            self.state.turn_moves.remove(index);
        }
    }

    /// Replace one queued turn's move (out-of-range indices are ignored)
    pub fn update_turn(&mut self, index: usize, move_id: MoveId) {
        if let Some(slot) = self.state.turn_moves.get_mut(index) {
            *slot = move_id;
        }
    }

    /// Clear the multi-turn sequence
    pub fn clear_turns(&mut self) {
        self.state.turn_moves.clear();
    }

    // === Calculation ===

    /// Calculate damage for the currently selected move
    pub async fn calculate(&self) -> Result<DamageReport, SessionError> {
        let move_id = self
            .state
            .selected_move
            .ok_or(SessionError::NoMoveSelected)?;
        self.calculate_for_move(move_id).await
    }

    /// Calculate damage for an arbitrary move without touching the snapshot
    pub async fn calculate_for_move(&self, move_id: MoveId) -> Result<DamageReport, SessionError> {
        let (_, report) = self.calculate_with_move(move_id).await?;
        Ok(report)
    }

    /// Calculate every queued turn, then the cumulative KO probabilities
    /// across the growing prefix of the sequence
    pub async fn calculate_multi_turn(&self) -> Result<MultiTurnReport, SessionError> {
        if self.state.turn_moves.is_empty() {
            return Err(SessionError::NoTurnsQueued);
        }

        let mut turns = Vec::with_capacity(self.state.turn_moves.len());
        for (index, &move_id) in self.state.turn_moves.iter().enumerate() {
            let (move_data, report) = self.calculate_with_move(move_id).await?;
            turns.push(TurnDamage {
                turn: index as u32 + 1,
                move_id,
                move_name: move_data.name,
                report,
            });
        }

        let defender_max_hp = turns[0].report.defender_max_hp;
        let turn_rolls: Vec<Vec<u32>> = turns.iter().map(|t| t.report.rolls.to_vec()).collect();
        let cumulative_ko = probability::cumulative_ko_probabilities(&turn_rolls, defender_max_hp);

        Ok(MultiTurnReport {
            turns,
            cumulative_ko,
            defender_max_hp,
        })
    }

    /// The shared per-move calculation path
    async fn calculate_with_move(
        &self,
        move_id: MoveId,
    ) -> Result<(MoveData, DamageReport), SessionError> {
        if self.state.attacker.pokemon.is_none() {
            return Err(SessionError::NoAttacker);
        }
        if self.state.defender.pokemon.is_none() {
            return Err(SessionError::NoDefender);
        }

        tracing::debug!(move_id, "resolving data for calculation");

        let move_data = self.provider.move_data(move_id).await?;
        let power = match move_data.power {
            Some(p) if move_data.damage_class.is_damaging() => p,
            _ => {
                tracing::warn!(name = %move_data.name, "selected move cannot deal damage");
                return Err(SessionError::NotDamaging(move_data.name));
            }
        };

        let attacker_item = match self.state.attacker.held_item {
            Some(id) => Some(self.provider.item(id).await?),
            None => None,
        };
        let relations = self.provider.type_relations(move_data.move_type).await?;

        let class = move_data.damage_class;
        let attack_stat = self.attack_stat(class);
        let defense_stat = self.defense_stat(class);

        let defender = &self.state.defender;
        let defender_max_hp = formula::calculate_hp(
            defender.base_stats.hp,
            defender.level,
            defender.individual.hp,
            defender.effort.hp as u16,
        );

        // The tera type substitutes for the native types wholesale
        let defender_types = defender.effective_types();
        let type_effectiveness = relations.effectiveness_against(&defender_types);

        let modifiers = modifier::resolve_modifiers(
            &self.state,
            &move_data,
            attacker_item.as_ref(),
            type_effectiveness,
        );

        let rolls = formula::calculate_damage(
            self.state.attacker.level,
            power,
            attack_stat,
            defense_stat,
            modifiers.total(),
        );
        let min_damage = rolls[0];
        let max_damage = rolls[15];

        let hit_chance = if self.state.apply_accuracy {
            move_data.accuracy.map(|a| a as f64 / 100.0).unwrap_or(1.0)
        } else {
            1.0
        };

        let report = DamageReport {
            min_damage,
            max_damage,
            rolls,
            average_damage: probability::average_damage(&rolls),
            ko_chance: probability::ko_probability(&rolls, defender_max_hp),
            two_turn_ko_chance: probability::two_turn_ko_probability(
                &rolls,
                &rolls,
                defender_max_hp,
                hit_chance,
            ),
            hits_to_ko: defender_max_hp.div_ceil(max_damage),
            defender_max_hp,
            modifiers,
        };

        tracing::debug!(
            min = report.min_damage,
            max = report.max_damage,
            ko = report.ko_chance,
            "calculation finished"
        );

        Ok((move_data, report))
    }

    /// The attacker's offensive stat for the move's class, including the
    /// ability stat scaling applied as a truncating multiply
    fn attack_stat(&self, class: DamageClass) -> u32 {
        let kind = match class {
            DamageClass::Physical => Stat::Attack,
            _ => Stat::SpecialAttack,
        };
        let attacker = &self.state.attacker;
        let stat = formula::calculate_stat(
            attacker.base_stats.get(kind),
            attacker.level,
            attacker.individual.get(kind),
            attacker.effort.get(kind) as u16,
            attacker.nature.modifier(kind),
            attacker.stages.get(kind),
        );
        (stat as f64 * abilities::attack_stat_multiplier(attacker.ability, class)) as u32
    }

    /// The defender's defensive stat for the move's class, including the
    /// ability stat scaling applied as a truncating multiply
    fn defense_stat(&self, class: DamageClass) -> u32 {
        let kind = match class {
            DamageClass::Physical => Stat::Defense,
            _ => Stat::SpecialDefense,
        };
        let defender = &self.state.defender;
        let stat = formula::calculate_stat(
            defender.base_stats.get(kind),
            defender.level,
            defender.individual.get(kind),
            defender.effort.get(kind) as u16,
            defender.nature.modifier(kind),
            defender.stages.get(kind),
        );
        (stat as f64 * abilities::defense_stat_multiplier(defender.ability, class)) as u32
    }
}
