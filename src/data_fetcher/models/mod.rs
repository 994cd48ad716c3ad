pub mod common;
pub mod ranking;
pub mod scores;
pub mod token;

// Re-export all public types
pub use common::{GameMode, RankedUser};
pub use ranking::{RankingEntry, RankingResponse, RankingUser};
pub use scores::{ModEntry, Play};
pub use token::TokenResponse;
