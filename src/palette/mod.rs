//! Team display colors.
//!
//! Lookup order is runtime overrides, then the built-in table, then a color
//! derived from a hash of the team name. The hash fallback depends on the
//! name only, so a team keeps its color across calls and reloads.

mod color;
mod team_colors;

pub use color::Color;
pub use team_colors::{TeamColorDocument, TeamColorRecord, looks_like_team_name};

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::error::SplitsResult;

/// Alpha applied when the caller does not ask for one.
pub const DEFAULT_TEAM_ALPHA: f64 = 0.85;

const BUILT_IN_TEAM_COLORS: [(&str, Color); 7] = [
    ("Coastal Carolina", Color::rgb(0x00, 0x6F, 0x71)),
    ("App State", Color::rgb(0x22, 0x22, 0x22)),
    ("Southern Miss.", Color::rgb(0xFF, 0xCC, 0x00)),
    ("Texas State", Color::rgb(0x6D, 0x1E, 0x2E)),
    ("Louisiana", Color::rgb(0xCE, 0x11, 0x26)),
    ("Arkansas State", Color::rgb(0xCC, 0x00, 0x00)),
    ("James Madison", Color::rgb(0x45, 0x00, 0x84)),
];

#[derive(Debug, Clone, PartialEq)]
pub struct TeamPalette {
    overrides: IndexMap<String, Color>,
    defaults: IndexMap<String, Color>,
    alpha: f64,
}

impl Default for TeamPalette {
    fn default() -> Self {
        Self {
            overrides: IndexMap::new(),
            defaults: BUILT_IN_TEAM_COLORS
                .iter()
                .map(|(team, color)| ((*team).to_owned(), *color))
                .collect(),
            alpha: DEFAULT_TEAM_ALPHA,
        }
    }
}

impl TeamPalette {
    /// Palette with no built-in entries; every team resolves via overrides or
    /// the hash fallback.
    #[must_use]
    pub fn without_defaults() -> Self {
        Self {
            defaults: IndexMap::new(),
            ..Self::default()
        }
    }

    /// Sets the alpha used by [`TeamPalette::color_for`].
    pub fn with_alpha(mut self, alpha: f64) -> SplitsResult<Self> {
        Color::rgb(0, 0, 0).with_alpha(alpha).validate()?;
        self.alpha = alpha;
        Ok(self)
    }

    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Color of `team` at the palette's default alpha.
    #[must_use]
    pub fn color_for(&self, team: &str) -> Color {
        self.color_for_with_alpha(team, self.alpha)
    }

    #[must_use]
    pub fn color_for_with_alpha(&self, team: &str, alpha: f64) -> Color {
        self.configured(team)
            .unwrap_or_else(|| hashed_team_color(team))
            .with_alpha(alpha)
    }

    /// Configured color of `team`, ignoring the hash fallback.
    #[must_use]
    pub fn configured(&self, team: &str) -> Option<Color> {
        self.overrides
            .get(team)
            .or_else(|| self.defaults.get(team))
            .copied()
    }

    pub fn set_override(&mut self, team: impl Into<String>, color: Color) {
        self.overrides.insert(team.into(), color);
    }

    /// Parses `hex` and stores it as an override for `team`.
    pub fn set_override_hex(&mut self, team: impl Into<String>, hex: &str) -> SplitsResult<()> {
        let color = Color::from_hex(hex)?;
        self.set_override(team, color);
        Ok(())
    }

    /// Merges records of a team-colors document into the overrides.
    ///
    /// Only keys that read like team names and records with a parseable
    /// `primary_hex` are applied. Returns the number of applied entries.
    pub fn apply_team_colors(&mut self, document: &TeamColorDocument) -> usize {
        let mut applied = 0;
        for (key, record) in &document.entries {
            if record.primary_hex.trim().is_empty() {
                debug!(key = %key, "team color entry has no primary color");
                continue;
            }
            if !looks_like_team_name(key) {
                debug!(key = %key, "team color key is not a team name");
                continue;
            }
            match Color::from_hex(&record.primary_hex) {
                Ok(color) => {
                    self.set_override(key.clone(), color);
                    applied += 1;
                }
                Err(err) => warn!(key = %key, error = %err, "ignoring team color"),
            }
        }
        debug!(applied, total = document.entries.len(), "applied team colors");
        applied
    }

    /// Built-in table merged with overrides, overrides winning.
    #[must_use]
    pub fn resolved_table(&self) -> IndexMap<String, Color> {
        let mut table = self.defaults.clone();
        for (team, color) in &self.overrides {
            table.insert(team.clone(), *color);
        }
        table
    }
}

/// Deterministic color for a team with no configured entry.
///
/// Folds the first UTF-16 code unit of every character of the name into
/// `h = (h * 33) ^ unit` with 32-bit wrapping arithmetic, seeded with 5381,
/// and takes the low three bytes as red, green and blue. Characters outside
/// the BMP contribute their high surrogate only. An empty name hashes as
/// `"x"`.
#[must_use]
pub fn hashed_team_color(team: &str) -> Color {
    let name = if team.is_empty() { "x" } else { team };
    let hash = name
        .chars()
        .map(|ch| ch.encode_utf16(&mut [0; 2])[0])
        .fold(5381_i32, |hash, unit| hash.wrapping_mul(33) ^ i32::from(unit))
        as u32;
    Color::rgb(
        ((hash >> 16) & 0xFF) as u8,
        ((hash >> 8) & 0xFF) as u8,
        (hash & 0xFF) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::hashed_team_color;

    #[test]
    fn hash_matches_reference_values() {
        // 5381 * 33 ^ 'x' (120) = 177573 ^ 120 = 177629 = 0x02B5DD
        let color = hashed_team_color("x");
        assert_eq!((color.red, color.green, color.blue), (0x02, 0xB5, 0xDD));
        assert_eq!(hashed_team_color(""), color);
    }

    #[test]
    fn astral_characters_fold_one_unit_each() {
        let color = hashed_team_color("Team \u{1F3C3}");
        assert_eq!((color.red, color.green, color.blue), (243, 215, 68));
    }
}
