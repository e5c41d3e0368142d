use crate::table::Phase;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("number of decks must be at least 1, got {0}")]
    InvalidDeckCount(u8),
    #[error("{action} is not allowed during {phase:?}")]
    OutOfTurn { action: &'static str, phase: Phase },
}
