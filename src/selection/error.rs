use thiserror::Error;

/// Reasons a layout can be rejected before a position is selected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The total number of urinals is outside 1..=20.
    #[error("Total urinals must be between 1 and 20")]
    OutOfRangeCapacity(i64),

    /// An occupied position is outside 1..=capacity.
    #[error("Occupied positions must be between 1 and {capacity}")]
    OutOfRangePosition { position: i64, capacity: u8 },

    /// A token in the occupied list is not an integer.
    #[error("Invalid input format: '{0}' is not a number")]
    MalformedInput(String),

    /// Every slot is taken.
    #[error("All urinals are occupied!")]
    FullyOccupied,
}
