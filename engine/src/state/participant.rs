//! Participant state: one side of the matchup

use porygon_data::{AbilityId, BaseStats, ItemId, Nature, PokemonData, PokemonId, Stat, Type};

/// Effort values (0-252 per stat)
///
/// The cross-stat 510 cap is a team-building rule enforced by the caller,
/// not by the calculator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EffortValues {
    pub hp: u8,
    pub attack: u8,
    pub defense: u8,
    pub special_attack: u8,
    pub special_defense: u8,
    pub speed: u8,
}

impl EffortValues {
    /// All zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value for a stat
    pub fn get(&self, stat: Stat) -> u8 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpecialAttack => self.special_attack,
            Stat::SpecialDefense => self.special_defense,
            Stat::Speed => self.speed,
        }
    }

    /// Sum across all stats (legal spreads stay at or below 510)
    pub fn total(&self) -> u16 {
        Stat::ALL.iter().map(|s| self.get(*s) as u16).sum()
    }

    /// Check the per-stat 252 and total 510 limits
    pub fn is_valid(&self) -> bool {
        self.total() <= 510 && Stat::ALL.iter().all(|s| self.get(*s) <= 252)
    }
}

/// Individual values (0-31 per stat)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IndividualValues {
    pub hp: u8,
    pub attack: u8,
    pub defense: u8,
    pub special_attack: u8,
    pub special_defense: u8,
    pub speed: u8,
}

impl IndividualValues {
    /// All 31
    pub fn max() -> Self {
        Self::default()
    }

    /// All zero
    pub fn min() -> Self {
        Self {
            hp: 0,
            attack: 0,
            defense: 0,
            special_attack: 0,
            special_defense: 0,
            speed: 0,
        }
    }

    /// Get the value for a stat
    pub fn get(&self, stat: Stat) -> u8 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpecialAttack => self.special_attack,
            Stat::SpecialDefense => self.special_defense,
            Stat::Speed => self.speed,
        }
    }
}

impl Default for IndividualValues {
    fn default() -> Self {
        Self {
            hp: 31,
            attack: 31,
            defense: 31,
            special_attack: 31,
            special_defense: 31,
            speed: 31,
        }
    }
}

/// Stat stage modifiers (-6 to +6; HP has no stage)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatStages {
    pub attack: i8,
    pub defense: i8,
    pub special_attack: i8,
    pub special_defense: i8,
    pub speed: i8,
}

impl StatStages {
    /// All at 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the stage for a stat (HP is always 0)
    pub fn get(&self, stat: Stat) -> i8 {
        match stat {
            Stat::Hp => 0,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpecialAttack => self.special_attack,
            Stat::SpecialDefense => self.special_defense,
            Stat::Speed => self.speed,
        }
    }

    /// Set the stage for a stat, clamped to -6..+6 (HP is ignored)
    pub fn set(&mut self, stat: Stat, value: i8) {
        let clamped = value.clamp(-6, 6);
        match stat {
            Stat::Hp => {}
            Stat::Attack => self.attack = clamped,
            Stat::Defense => self.defense = clamped,
            Stat::SpecialAttack => self.special_attack = clamped,
            Stat::SpecialDefense => self.special_defense = clamped,
            Stat::Speed => self.speed = clamped,
        }
    }

    /// Check if all stages are at 0
    pub fn is_clear(&self) -> bool {
        *self == Self::default()
    }
}

/// One participant's full configuration
///
/// Identity fields (`pokemon`, `name`, `sprite_url`, `base_types`,
/// `base_stats`) are overwritten when a new Pokemon is selected; the stat
/// configuration (level, EVs, IVs, nature, stages) survives the swap.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParticipantState {
    /// Selected species (None until a Pokemon is chosen)
    pub pokemon: Option<PokemonId>,

    /// Display name of the selected species
    pub name: Option<String>,

    /// Sprite URL for presentation layers
    pub sprite_url: Option<String>,

    /// Level (1-100)
    pub level: u8,

    /// Effort values
    pub effort: EffortValues,

    /// Individual values
    pub individual: IndividualValues,

    /// Stat stage modifiers
    pub stages: StatStages,

    /// Nature
    pub nature: Nature,

    /// Selected ability (None = no ability effects)
    pub ability: Option<AbilityId>,

    /// Held item (None = no item)
    pub held_item: Option<ItemId>,

    /// Native types of the selected species
    pub base_types: Vec<Type>,

    /// Base stats of the selected species
    pub base_stats: BaseStats,

    /// Chosen tera type (None = not chosen yet)
    pub tera_type: Option<Type>,

    /// Whether currently terastallized
    pub terastallized: bool,
}

impl ParticipantState {
    /// Create an empty participant at the default level
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the identity fields from a resolved species record
    ///
    /// Level, EVs, IVs, nature, and stages are left untouched.
    pub fn set_pokemon(&mut self, data: &PokemonData) {
        self.pokemon = Some(data.id);
        self.name = Some(data.name.clone());
        self.sprite_url = data.sprite_url.clone();
        self.base_types = data.types.clone();
        self.base_stats = data.base_stats;
    }

    /// Flip the terastallized flag
    ///
    /// Turning it on without a chosen tera type defaults to the first
    /// native type (Normal if no species is selected yet).
    pub fn toggle_terastallize(&mut self) {
        self.terastallized = !self.terastallized;
        if self.terastallized && self.tera_type.is_none() {
            self.tera_type = Some(self.base_types.first().copied().unwrap_or(Type::Normal));
        }
    }

    /// The type set damage is computed against
    ///
    /// While terastallized the tera type replaces the native types
    /// wholesale; it is not merged with them.
    pub fn effective_types(&self) -> Vec<Type> {
        if self.terastallized {
            if let Some(tera) = self.tera_type {
                return vec![tera];
            }
        }
        self.base_types.clone()
    }
}

impl Default for ParticipantState {
    fn default() -> Self {
        Self {
            pokemon: None,
            name: None,
            sprite_url: None,
            level: 50,
            effort: EffortValues::default(),
            individual: IndividualValues::default(),
            stages: StatStages::default(),
            nature: Nature::default(),
            ability: None,
            held_item: None,
            base_types: Vec::new(),
            base_stats: BaseStats::default(),
            tera_type: None,
            terastallized: false,
        }
    }
}
