use serde::Deserialize;

/// One page of `GET /rankings/{mode}/performance`.
///
/// `ranking` is optional: a page without it marks the end of the data.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct RankingResponse {
    #[serde(default)]
    pub ranking: Option<Vec<RankingEntry>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RankingEntry {
    #[serde(default)]
    pub user: Option<RankingUser>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RankingUser {
    pub id: u64,
    #[serde(default)]
    pub username: Option<String>,
}

impl RankingUser {
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or("Unknown")
    }
}
