/// Errors returned by [`crate::board::Board`] operations.
///
/// All of them are caller errors: nothing is retried and a failed call leaves
/// the board exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("Game {home} vs {away} already started.")]
    DuplicateMatch { home: String, away: String },

    #[error("Game {home} vs {away} not found.")]
    MatchNotFound { home: String, away: String },

    #[error("Scores must be non-negative integers (got {home_score}-{away_score}).")]
    InvalidScore { home_score: i32, away_score: i32 },

    #[error("team names must be non-empty")]
    InvalidTeamName,
}

impl BoardError {
    pub(crate) fn duplicate(home: &str, away: &str) -> Self {
        BoardError::DuplicateMatch {
            home: home.to_string(),
            away: away.to_string(),
        }
    }

    pub(crate) fn not_found(home: &str, away: &str) -> Self {
        BoardError::MatchNotFound {
            home: home.to_string(),
            away: away.to_string(),
        }
    }
}
