//! Battle environment: weather, terrain, screens, and battle mode

use porygon_data::DamageClass;

/// Weather conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Weather {
    Sun,
    Rain,
    Sandstorm,
    Snow,
}

impl Weather {
    /// Display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Weather::Sun => "sun",
            Weather::Rain => "rain",
            Weather::Sandstorm => "sandstorm",
            Weather::Snow => "snow",
        }
    }
}

impl std::fmt::Display for Weather {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Terrain conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Terrain {
    Electric,
    Grassy,
    Misty,
    Psychic,
}

impl Terrain {
    /// Display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Terrain::Electric => "electric",
            Terrain::Grassy => "grassy",
            Terrain::Misty => "misty",
            Terrain::Psychic => "psychic",
        }
    }
}

impl std::fmt::Display for Terrain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Screen effects on the defending side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Screen {
    Reflect,
    LightScreen,
    AuroraVeil,
}

impl Screen {
    /// Damage reduction factor for a move of the given class
    ///
    /// Screens reduce to 1/2 in single battles and 2/3 in double battles.
    /// Reflect covers physical moves, Light Screen special moves, and
    /// Aurora Veil both.
    pub fn damage_reduction(&self, is_double: bool, class: DamageClass) -> f64 {
        let reduction = if is_double { 2.0 / 3.0 } else { 0.5 };
        match self {
            Screen::Reflect => {
                if class == DamageClass::Physical {
                    reduction
                } else {
                    1.0
                }
            }
            Screen::LightScreen => {
                if class == DamageClass::Special {
                    reduction
                } else {
                    1.0
                }
            }
            Screen::AuroraVeil => reduction,
        }
    }
}

/// Single or double battle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BattleMode {
    #[default]
    Single,
    Double,
}

impl BattleMode {
    /// The other mode
    pub fn toggled(&self) -> Self {
        match self {
            BattleMode::Single => BattleMode::Double,
            BattleMode::Double => BattleMode::Single,
        }
    }
}

/// Environment state for a calculation request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EnvironmentState {
    /// Active weather (None = clear)
    pub weather: Option<Weather>,

    /// Active terrain (None = none)
    pub terrain: Option<Terrain>,

    /// Active screen on the defending side (None = none)
    pub screen: Option<Screen>,
}

impl EnvironmentState {
    /// Clear skies, no terrain, no screens
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect_reduces_physical_only() {
        let reflect = Screen::Reflect;
        assert_eq!(reflect.damage_reduction(false, DamageClass::Physical), 0.5);
        assert_eq!(reflect.damage_reduction(false, DamageClass::Special), 1.0);
        assert_eq!(
            reflect.damage_reduction(true, DamageClass::Physical),
            2.0 / 3.0
        );
    }

    #[test]
    fn test_light_screen_reduces_special_only() {
        let screen = Screen::LightScreen;
        assert_eq!(screen.damage_reduction(false, DamageClass::Special), 0.5);
        assert_eq!(screen.damage_reduction(false, DamageClass::Physical), 1.0);
    }

    #[test]
    fn test_aurora_veil_reduces_both() {
        let veil = Screen::AuroraVeil;
        assert_eq!(veil.damage_reduction(false, DamageClass::Physical), 0.5);
        assert_eq!(veil.damage_reduction(false, DamageClass::Special), 0.5);
        assert_eq!(
            veil.damage_reduction(true, DamageClass::Special),
            2.0 / 3.0
        );
    }

    #[test]
    fn test_battle_mode_toggle() {
        assert_eq!(BattleMode::Single.toggled(), BattleMode::Double);
        assert_eq!(BattleMode::Double.toggled(), BattleMode::Single);
        assert_eq!(BattleMode::default(), BattleMode::Single);
    }
}
