use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{Board, Match, SummaryEntry};
use crate::error::BoardError;

/// Cloneable handle to a single [`Board`] behind one mutex.
///
/// Every operation takes the same lock, so starts, finishes, score updates and
/// summaries are fully serialized and a summary never observes a half-applied
/// call.
#[derive(Debug, Clone, Default)]
pub struct SharedBoard {
    board: Arc<Mutex<Board>>,
}

impl SharedBoard {
    pub fn new() -> Self {
        Self::default()
    }

    // Board operations never panic mid-mutation, so a poisoned lock still
    // guards a consistent board.
    fn lock(&self) -> MutexGuard<'_, Board> {
        self.board.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn start(&self, home: &str, away: &str) -> Result<(), BoardError> {
        self.lock().start(home, away)
    }

    pub fn finish(&self, home: &str, away: &str) -> Result<(), BoardError> {
        self.lock().finish(home, away)
    }

    pub fn update_score(
        &self,
        home: &str,
        away: &str,
        home_score: i32,
        away_score: i32,
    ) -> Result<(), BoardError> {
        self.lock().update_score(home, away, home_score, away_score)
    }

    pub fn summary(&self) -> Vec<SummaryEntry> {
        self.lock().summary()
    }

    /// Owned copy of one active match.
    pub fn get(&self, home: &str, away: &str) -> Option<Match> {
        self.lock().get(home, away).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl From<Board> for SharedBoard {
    fn from(board: Board) -> Self {
        SharedBoard {
            board: Arc::new(Mutex::new(board)),
        }
    }
}
