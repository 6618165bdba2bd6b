use super::{Capacity, Layout, OccupiedSet, SelectionError};

/// Parse a typed capacity such as `" 8 "`.
pub fn parse_capacity(input: &str) -> Result<Capacity, SelectionError> {
    let trimmed = input.trim();
    let value = trimmed
        .parse::<i64>()
        .map_err(|_| SelectionError::MalformedInput(trimmed.to_string()))?;
    Capacity::new(value)
}

/// Parse a comma-separated list such as `"1, 3,5"` into an occupied set.
///
/// Blank tokens are skipped, so an empty line means nothing is occupied.
pub fn parse_occupied(input: &str, capacity: Capacity) -> Result<OccupiedSet, SelectionError> {
    let positions = input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| SelectionError::MalformedInput(token.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    OccupiedSet::from_positions(positions, capacity)
}

/// Validate raw numbers and compute the recommendation in one step.
pub fn recommend(total: i64, occupied: &[i64]) -> Result<Layout, SelectionError> {
    let capacity = Capacity::new(total)?;
    let occupied = OccupiedSet::from_positions(occupied.iter().copied(), capacity)?;
    Layout::resolve(capacity, occupied)
}
