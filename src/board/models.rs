use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Identity of a match: the ordered (home, away) pair.
///
/// Direction matters, so `Spain vs Brazil` and `Brazil vs Spain` are two
/// different keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchKey {
    pub home: String,
    pub away: String,
}

impl MatchKey {
    pub fn new(home: &str, away: &str) -> Self {
        MatchKey {
            home: home.to_string(),
            away: away.to_string(),
        }
    }
}

impl fmt::Display for MatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.home, self.away)
    }
}

/// An active match held by the board.
///
/// Fields are private: scores only change through
/// [`Board::update_score`](super::Board::update_score).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    home_team: String,
    away_team: String,
    home_score: u32,
    away_score: u32,
    /// Creation order on the board; authoritative for tie-breaks
    sequence: u64,
    /// Informational only
    created_at: DateTime<Utc>,
}

impl Match {
    pub(crate) fn new(home_team: &str, away_team: &str, sequence: u64) -> Self {
        Match {
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            home_score: 0,
            away_score: 0,
            sequence,
            created_at: Utc::now(),
        }
    }

    pub fn home_team(&self) -> &str {
        &self.home_team
    }

    pub fn away_team(&self) -> &str {
        &self.away_team
    }

    pub fn home_score(&self) -> u32 {
        self.home_score
    }

    pub fn away_score(&self) -> u32 {
        self.away_score
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Combined score used as the primary ranking key.
    pub fn total_score(&self) -> u64 {
        u64::from(self.home_score) + u64::from(self.away_score)
    }

    pub(crate) fn set_score(&mut self, home_score: u32, away_score: u32) {
        self.home_score = home_score;
        self.away_score = away_score;
    }

    pub(crate) fn to_summary_entry(&self) -> SummaryEntry {
        SummaryEntry {
            home_team: self.home_team.clone(),
            home_score: self.home_score,
            away_team: self.away_team.clone(),
            away_score: self.away_score,
        }
    }
}

/// Read-only snapshot of one match, as produced by
/// [`Board::summary`](super::Board::summary).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryEntry {
    pub home_team: String,
    pub home_score: u32,
    pub away_team: String,
    pub away_score: u32,
}

impl fmt::Display for SummaryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home_team, self.home_score, self.away_team, self.away_score
        )
    }
}
