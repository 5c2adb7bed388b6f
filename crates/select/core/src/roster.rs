//! Fighter definitions and the immutable roster they belong to.
//!
//! The selection machine never inspects fighters; it only needs the roster's
//! length. Everything here exists for presentation layers and loaders.

use core::fmt;
use core::str::FromStr;
use std::collections::HashMap;

/// Highest value a single fighter stat may take.
pub const STAT_MAX: u8 = 10;

/// Accent colour of a fighter, written as `#RRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid colour {0:?}: expected #RRGGBB")]
pub struct ColorParseError(pub String);

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorParseError(raw.to_string());
        let hex = raw.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |at: usize| u8::from_str_radix(&hex[at..at + 2], 16).map_err(|_| invalid());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// The four stats shown for every fighter.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatKind {
    Strength,
    Speed,
    Technique,
    Magic,
}

impl StatKind {
    pub const ALL: [StatKind; 4] = [
        StatKind::Strength,
        StatKind::Speed,
        StatKind::Technique,
        StatKind::Magic,
    ];

    /// Three-letter label used on stat bars.
    pub const fn abbreviation(self) -> &'static str {
        match self {
            StatKind::Strength => "STR",
            StatKind::Speed => "SPD",
            StatKind::Technique => "TEC",
            StatKind::Magic => "MAG",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FighterStats {
    pub strength: u8,
    pub speed: u8,
    pub technique: u8,
    pub magic: u8,
}

impl FighterStats {
    pub const fn new(strength: u8, speed: u8, technique: u8, magic: u8) -> Self {
        Self {
            strength,
            speed,
            technique,
            magic,
        }
    }

    pub const fn get(&self, kind: StatKind) -> u8 {
        match kind {
            StatKind::Strength => self.strength,
            StatKind::Speed => self.speed,
            StatKind::Technique => self.technique,
            StatKind::Magic => self.magic,
        }
    }

    /// Stats in display order.
    pub fn iter(&self) -> impl Iterator<Item = (StatKind, u8)> + '_ {
        StatKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }

    pub fn total(&self) -> u16 {
        self.iter().map(|(_, value)| u16::from(value)).sum()
    }
}

/// A selectable fighter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fighter {
    pub id: String,
    pub name: String,
    /// Poster image path, relative to the asset root.
    pub image: String,
    /// Model path, relative to the asset root.
    pub model_url: String,
    pub description: String,
    pub stats: FighterStats,
    pub color: Rgb,
}

impl Fighter {
    /// First word of the display name, used for the large headline.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("roster must contain at least one fighter")]
    Empty,

    #[error("fighter id {id:?} appears at positions {first} and {second}")]
    DuplicateId {
        id: String,
        first: usize,
        second: usize,
    },

    #[error("fighter {id:?} has {stat} {value}, above the maximum of {max}", max = STAT_MAX)]
    StatOutOfRange {
        id: String,
        stat: StatKind,
        value: u8,
    },
}

/// Non-empty, ordered list of fighters with unique ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Roster {
    fighters: Vec<Fighter>,
}

impl Roster {
    pub fn new(fighters: Vec<Fighter>) -> Result<Self, RosterError> {
        if fighters.is_empty() {
            return Err(RosterError::Empty);
        }

        let mut seen = HashMap::with_capacity(fighters.len());
        for (position, fighter) in fighters.iter().enumerate() {
            if let Some(&first) = seen.get(fighter.id.as_str()) {
                return Err(RosterError::DuplicateId {
                    id: fighter.id.clone(),
                    first,
                    second: position,
                });
            }
            seen.insert(fighter.id.as_str(), position);

            if let Some((stat, value)) = fighter.stats.iter().find(|(_, v)| *v > STAT_MAX) {
                return Err(RosterError::StatOutOfRange {
                    id: fighter.id.clone(),
                    stat,
                    value,
                });
            }
        }

        Ok(Self { fighters })
    }

    pub fn len(&self) -> usize {
        self.fighters.len()
    }

    /// Always false for a constructed roster.
    pub fn is_empty(&self) -> bool {
        self.fighters.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Fighter> {
        self.fighters.get(index)
    }

    /// Position of the fighter with the given id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.fighters.iter().position(|f| f.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fighter> {
        self.fighters.iter()
    }

    pub fn as_slice(&self) -> &[Fighter] {
        &self.fighters
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Fighter;
    type IntoIter = core::slice::Iter<'a, Fighter>;

    fn into_iter(self) -> Self::IntoIter {
        self.fighters.iter()
    }
}
