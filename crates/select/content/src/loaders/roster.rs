//! Fighter roster loader.
//!
//! Loads rosters from RON or TOML files. Both formats deserialize straight
//! into [`select_core::Fighter`]; validation (non-empty, unique ids, stat
//! bounds) happens in [`Roster::new`].

use std::path::Path;

use anyhow::Context;
use select_core::{Fighter, Roster};
use serde::Deserialize;

use crate::BUILTIN_ROSTER_RON;
use crate::loaders::{LoadResult, read_file};

/// File formats understood by [`RosterLoader::load`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RosterFormat {
    /// RON list of fighters: `[ (id: "...", ...), ... ]`.
    Ron,
    /// TOML document with a `[[fighters]]` array of tables.
    Toml,
}

impl RosterFormat {
    /// Detects the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "ron" => Some(Self::Ron),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// TOML needs a table at the top level.
#[derive(Deserialize)]
struct TomlRoster {
    fighters: Vec<Fighter>,
}

/// Loader for fighter rosters.
pub struct RosterLoader;

impl RosterLoader {
    /// Load the roster compiled into this crate.
    pub fn builtin() -> LoadResult<Roster> {
        Self::from_ron_str(BUILTIN_ROSTER_RON).context("Built-in roster is invalid")
    }

    /// Load a roster file, choosing the parser from the file extension.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, the extension is neither `.ron` nor
    /// `.toml`, the content does not parse, or the roster is invalid.
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let format = RosterFormat::from_path(path).ok_or_else(|| {
            anyhow::anyhow!(
                "Unsupported roster file {}: expected a .ron or .toml extension",
                path.display()
            )
        })?;

        let content = read_file(path)?;
        let roster = match format {
            RosterFormat::Ron => Self::from_ron_str(&content),
            RosterFormat::Toml => Self::from_toml_str(&content),
        };

        roster.with_context(|| format!("Failed to load roster from {}", path.display()))
    }

    /// Load `path` when given, otherwise fall back to the built-in roster.
    pub fn load_or_builtin(path: Option<&Path>) -> LoadResult<Roster> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    pub fn from_ron_str(content: &str) -> LoadResult<Roster> {
        let fighters: Vec<Fighter> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;
        Ok(Roster::new(fighters)?)
    }

    pub fn from_toml_str(content: &str) -> LoadResult<Roster> {
        let file: TomlRoster = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster TOML: {}", e))?;
        Ok(Roster::new(file.fighters)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use select_core::{FighterStats, Rgb};

    #[test]
    fn builtin_roster_has_seven_fighters_in_grid_order() {
        let roster = RosterLoader::builtin().unwrap();
        assert_eq!(roster.len(), 7);

        let ids: Vec<_> = roster.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(
            ids,
            ["pablo", "anajulia", "pietro", "velho", "babuino", "resnatao", "luir"]
        );

        let pablo = roster.get(0).unwrap();
        assert_eq!(pablo.stats, FighterStats::new(7, 9, 8, 3));
        assert_eq!(pablo.color, Rgb::new(0x8B, 0x5C, 0xF6));
        assert_eq!(pablo.first_name(), "Pablo");
    }

    #[test]
    fn detects_format_from_extension() {
        assert_eq!(
            RosterFormat::from_path(Path::new("roster.RON")),
            Some(RosterFormat::Ron)
        );
        assert_eq!(
            RosterFormat::from_path(Path::new("a/b/roster.toml")),
            Some(RosterFormat::Toml)
        );
        assert_eq!(RosterFormat::from_path(Path::new("roster.json")), None);
        assert_eq!(RosterFormat::from_path(Path::new("roster")), None);
    }

    #[test]
    fn parses_toml_fighters_table() {
        let roster = RosterLoader::from_toml_str(
            r##"
            [[fighters]]
            id = "ryu"
            name = "Ryu"
            image = "posters/ryu.png"
            model_url = "models/ryu.glb"
            description = "Wandering warrior."
            color = "#FFFFFF"
            stats = { strength = 7, speed = 7, technique = 8, magic = 5 }
            "##,
        )
        .unwrap();

        assert_eq!(roster.len(), 1);
        assert_eq!(roster.get(0).unwrap().color, Rgb::new(255, 255, 255));
    }

    #[test]
    fn surfaces_validation_errors() {
        let err = RosterLoader::from_ron_str("[]").unwrap_err();
        assert!(err.to_string().contains("at least one fighter"));
    }

    #[test]
    fn rejects_bad_colours_during_parsing() {
        let err = RosterLoader::from_ron_str(
            r##"[(
                id: "x", name: "X", image: "", model_url: "", description: "",
                stats: (strength: 1, speed: 1, technique: 1, magic: 1),
                color: "red",
            )]"##,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Failed to parse roster RON"));
    }
}
