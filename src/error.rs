//! Error types for battle construction and catalog access.
//!
//! Only content errors surface to callers: an unknown id means the catalog
//! and the content referencing it disagree, which is never recoverable for
//! that battle. Resolution misses, summon capacity exhaustion and the
//! turn-limit guard are not errors.

use thiserror::Error;

use crate::types::TeamId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BattleError {
    #[error("unknown unit id `{0}`")]
    UnknownUnit(String),
    #[error("unknown item id `{0}`")]
    UnknownItem(String),
    #[error("invalid catalog entry `{id}`: {reason}")]
    InvalidCatalog { id: String, reason: String },
    #[error("duplicate board position {row},{col} on team {team}")]
    DuplicatePosition { team: TeamId, row: u8, col: u8 },
}

pub type BattleResult<T> = Result<T, BattleError>;
