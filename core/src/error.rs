use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board must be at least one cell wide and tall")]
    InvalidSize,
    #[error("Too many mines, one cell must stay free")]
    TooManyMines,
}

pub type Result<T> = core::result::Result<T, GameError>;
