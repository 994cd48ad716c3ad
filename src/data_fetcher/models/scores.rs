use serde::Deserialize;

/// A mod as returned by the API.
///
/// Legacy responses carry plain acronyms (`"DT"`), newer API versions carry
/// objects (`{"acronym": "DT", "settings": {...}}`).
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum ModEntry {
    Acronym(String),
    Detailed { acronym: String },
}

impl ModEntry {
    pub fn acronym(&self) -> &str {
        match self {
            ModEntry::Acronym(acronym) | ModEntry::Detailed { acronym } => acronym,
        }
    }
}

/// One entry of `GET /users/{id}/scores/best`. Only the mods matter here.
#[derive(Debug, Deserialize, Clone)]
pub struct Play {
    pub mods: Vec<ModEntry>,
}

impl Play {
    /// Mod acronyms of the play in API order
    pub fn acronyms(&self) -> impl Iterator<Item = &str> {
        self.mods.iter().map(ModEntry::acronym)
    }
}
