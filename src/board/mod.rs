pub mod models;
pub mod ranking;
pub mod shared;

pub use models::{Match, MatchKey, SummaryEntry};
pub use shared::SharedBoard;

use std::collections::HashMap;
use tracing::debug;

use crate::error::BoardError;

/// In-memory scoreboard of active matches.
///
/// The board is the only owner of its [`Match`] records. Each started match
/// gets the next value of a monotonic sequence counter, which is what breaks
/// ties in [`Board::summary`]; map iteration order is never relied on.
///
/// A `Board` is not internally synchronized. Wrap it in a [`SharedBoard`] when
/// several callers need it.
#[derive(Debug, Default)]
pub struct Board {
    matches: HashMap<MatchKey, Match>,
    next_sequence: u64,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new 0-0 match between `home` and `away`.
    ///
    /// Fails with [`BoardError::DuplicateMatch`] if this exact ordered pair is
    /// already active. Team names that are empty or whitespace-only are
    /// rejected with [`BoardError::InvalidTeamName`], which is stricter than
    /// plain non-emptiness. A rejected call does not consume a sequence number.
    pub fn start(&mut self, home: &str, away: &str) -> Result<(), BoardError> {
        if home.trim().is_empty() || away.trim().is_empty() {
            return Err(BoardError::InvalidTeamName);
        }
        let key = MatchKey::new(home, away);
        if self.matches.contains_key(&key) {
            return Err(BoardError::duplicate(home, away));
        }

        let sequence = self.next_sequence;
        self.next_sequence += 1;
        debug!("Started {} (seq={})", key, sequence);
        self.matches.insert(key, Match::new(home, away, sequence));
        Ok(())
    }

    /// Finish (remove) the match for this exact ordered pair.
    pub fn finish(&mut self, home: &str, away: &str) -> Result<(), BoardError> {
        let key = MatchKey::new(home, away);
        match self.matches.remove(&key) {
            Some(m) => {
                debug!(
                    "Finished {} at {}-{} (seq={}, started {})",
                    key,
                    m.home_score(),
                    m.away_score(),
                    m.sequence(),
                    m.created_at().to_rfc3339()
                );
                Ok(())
            }
            None => Err(BoardError::not_found(home, away)),
        }
    }

    /// Overwrite the score of an active match.
    ///
    /// Scores are validated before the match is looked up, so a negative
    /// score is reported as [`BoardError::InvalidScore`] even when the match
    /// does not exist.
    pub fn update_score(
        &mut self,
        home: &str,
        away: &str,
        home_score: i32,
        away_score: i32,
    ) -> Result<(), BoardError> {
        let (Ok(h), Ok(a)) = (u32::try_from(home_score), u32::try_from(away_score)) else {
            return Err(BoardError::InvalidScore {
                home_score,
                away_score,
            });
        };

        let key = MatchKey::new(home, away);
        let m = self
            .matches
            .get_mut(&key)
            .ok_or_else(|| BoardError::not_found(home, away))?;
        m.set_score(h, a);
        debug!("Score update: {} {}-{}", key, h, a);
        Ok(())
    }

    /// Ranked snapshot of every active match: highest total first, ties going
    /// to the most recently started match.
    pub fn summary(&self) -> Vec<SummaryEntry> {
        let mut ranked: Vec<&Match> = self.matches.values().collect();
        ranking::rank(&mut ranked);
        ranked.into_iter().map(Match::to_summary_entry).collect()
    }

    /// Look up an active match by its ordered pair.
    pub fn get(&self, home: &str, away: &str) -> Option<&Match> {
        self.matches.get(&MatchKey::new(home, away))
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
