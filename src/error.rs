//! Types d'erreur du moteur de labyrinthe

use thiserror::Error;

use crate::maze::Position;

/// Erreurs du moteur de labyrinthe.
///
/// Hors-limites et absence de chemin ne sont pas des erreurs : ils passent
/// par `Option::None` et `PathResult::found`.
#[derive(Error, Debug)]
pub enum MazeError {
    #[error("Invalid maze dimensions {width}x{height}, both must be at least 1")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("No cell record at ({}, {})", .0.x, .0.y)]
    MissingCell(Position),

    #[error("Agent walled in at ({}, {}): no open side to move through", .0.x, .0.y)]
    StrategyDeadlock(Position),

    #[error("Cannot pop from an empty priority queue")]
    EmptyQueueExtraction,

    #[error("Codec error: {0}")]
    Codec(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MazeError>;
