//! Case-insensitive set of excluded mod acronyms

use crate::data_fetcher::models::Play;
use crate::error::AppError;
use std::collections::BTreeSet;
use std::fmt;

/// Mods that disqualify a player when found in any of their best plays.
///
/// Tokens are stored upper-cased, so `"dt"` and `"DT"` are the same mod.
/// The set is built once before a run and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModExclusionSet {
    mods: BTreeSet<String>,
}

impl ModExclusionSet {
    /// Builds a set from acronyms. Empty tokens and surrounding whitespace are rejected.
    pub fn new<I, S>(tokens: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut mods = BTreeSet::new();
        for token in tokens {
            let token = token.as_ref().trim();
            if token.is_empty() {
                return Err(AppError::config_error("Excluded mod names cannot be empty"));
            }
            if !token.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(AppError::config_error(format!(
                    "Invalid mod acronym '{token}'"
                )));
            }
            mods.insert(token.to_ascii_uppercase());
        }

        if mods.is_empty() {
            return Err(AppError::config_error(
                "At least one mod must be excluded",
            ));
        }

        Ok(Self { mods })
    }

    pub fn contains(&self, acronym: &str) -> bool {
        self.mods.contains(&acronym.trim().to_ascii_uppercase())
    }

    /// True if any mod of the play is excluded
    pub fn matches(&self, play: &Play) -> bool {
        play.acronyms().any(|acronym| self.contains(acronym))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.mods.iter().map(String::as_str)
    }
}

impl fmt::Display for ModExclusionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self.iter().collect::<Vec<_>>().join("/");
        f.write_str(&joined)
    }
}
