use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DeckError {
    #[error("a deck needs at least one slide")]
    EmptyDeck,

    #[error("slide {index} is out of range for a deck of {count} slides")]
    SlideOutOfRange { index: usize, count: usize },

    #[error("viewport height must be a positive number, got {0}")]
    InvalidViewport(f32),
}
