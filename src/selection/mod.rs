//! Position selection: pick the free slot farthest from every occupied one.
//!
//! Slots are numbered `1..=capacity`. The recommendation is the free slot whose
//! distance to the nearest occupied slot is largest; among equally good slots
//! the lowest-numbered one wins.

mod error;
mod validate;

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use tracing::debug;

pub use error::SelectionError;
pub use validate::{parse_capacity, parse_occupied, recommend};

/// Smallest number of urinals a layout can have
pub const MIN_CAPACITY: u8 = 1;

/// Largest number of urinals a layout can have
pub const MAX_CAPACITY: u8 = 20;

/// Number of slots in a layout, always within `MIN_CAPACITY..=MAX_CAPACITY`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity(u8);

impl Capacity {
    pub fn new(value: i64) -> Result<Self, SelectionError> {
        if value < MIN_CAPACITY as i64 || value > MAX_CAPACITY as i64 {
            return Err(SelectionError::OutOfRangeCapacity(value));
        }
        Ok(Self(value as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// All slot numbers in scan order
    pub fn slots(self) -> RangeInclusive<u8> {
        1..=self.0
    }
}

/// Occupied slot numbers for one layout.
///
/// Every member lies in `1..=capacity` and at least one slot stays free.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccupiedSet(BTreeSet<u8>);

impl OccupiedSet {
    /// Build a set from raw positions, collapsing duplicates.
    pub fn from_positions<I>(positions: I, capacity: Capacity) -> Result<Self, SelectionError>
    where
        I: IntoIterator<Item = i64>,
    {
        let mut set = BTreeSet::new();
        for position in positions {
            if position < 1 || position > capacity.get() as i64 {
                return Err(SelectionError::OutOfRangePosition {
                    position,
                    capacity: capacity.get(),
                });
            }
            set.insert(position as u8);
        }

        if set.len() >= capacity.get() as usize {
            return Err(SelectionError::FullyOccupied);
        }

        Ok(Self(set))
    }

    pub fn contains(&self, slot: u8) -> bool {
        self.0.contains(&slot)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Occupied slots in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.iter().collect()
    }
}

/// A validated layout together with its recommended slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub capacity: Capacity,
    pub occupied: OccupiedSet,
    pub optimal: u8,
}

impl Layout {
    /// Run the selection for an already validated capacity and occupied set.
    pub fn resolve(capacity: Capacity, occupied: OccupiedSet) -> Result<Self, SelectionError> {
        let optimal = select(capacity, &occupied).ok_or(SelectionError::FullyOccupied)?;
        Ok(Self {
            capacity,
            occupied,
            optimal,
        })
    }
}

/// Distance from `slot` to the nearest occupied slot, or `None` when nothing
/// is occupied.
pub fn min_distance(slot: u8, occupied: &OccupiedSet) -> Option<u8> {
    occupied.iter().map(|taken| slot.abs_diff(taken)).min()
}

/// Select the free slot with the largest distance to its nearest neighbour.
///
/// Returns slot 1 when nothing is occupied. The scan runs in ascending slot
/// order and only replaces the current best on a strictly larger distance,
/// so ties resolve to the lowest slot number. Returns `None` only when no slot
/// is free.
pub fn select(capacity: Capacity, occupied: &OccupiedSet) -> Option<u8> {
    if occupied.is_empty() {
        return Some(1);
    }

    let mut best_distance = 0;
    let mut optimal = None;

    for slot in capacity.slots() {
        if occupied.contains(slot) {
            continue;
        }

        let Some(distance) = min_distance(slot, occupied) else {
            continue;
        };

        if distance > best_distance {
            best_distance = distance;
            optimal = Some(slot);
        }
    }

    debug!(
        capacity = capacity.get(),
        occupied = ?occupied.to_vec(),
        ?optimal,
        best_distance,
        "selected position"
    );

    optimal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(capacity: i64, occupied: &[i64]) -> (Capacity, OccupiedSet) {
        let capacity = Capacity::new(capacity).unwrap();
        let occupied = OccupiedSet::from_positions(occupied.iter().copied(), capacity).unwrap();
        (capacity, occupied)
    }

    #[test]
    fn test_empty_layout_picks_first_slot() {
        for total in MIN_CAPACITY..=MAX_CAPACITY {
            let (capacity, occupied) = layout(total as i64, &[]);
            assert_eq!(select(capacity, &occupied), Some(1));
        }
    }

    #[test]
    fn test_single_slot() {
        let (capacity, occupied) = layout(1, &[]);
        assert_eq!(select(capacity, &occupied), Some(1));
    }

    #[test]
    fn test_farthest_end_wins() {
        // Slot 1 is 4 away from 5, slot 10 is 5 away.
        let (capacity, occupied) = layout(10, &[5]);
        assert_eq!(select(capacity, &occupied), Some(10));
    }

    #[test]
    fn test_tie_goes_to_lowest_slot() {
        // Slots 5 and 6 are both 4 away from the nearest neighbour.
        let (capacity, occupied) = layout(10, &[1, 10]);
        assert_eq!(min_distance(5, &occupied), Some(4));
        assert_eq!(min_distance(6, &occupied), Some(4));
        assert_eq!(select(capacity, &occupied), Some(5));
    }

    #[test]
    fn test_last_free_slot() {
        let (capacity, occupied) = layout(5, &[1, 2, 3, 4]);
        assert_eq!(select(capacity, &occupied), Some(5));
    }

    #[test]
    fn test_adjacent_ties_prefer_left() {
        // Slots 1 and 3 are both 1 away from 2.
        let (capacity, occupied) = layout(3, &[2]);
        assert_eq!(select(capacity, &occupied), Some(1));
    }

    #[test]
    fn test_result_is_free_and_in_range() {
        let cases: &[(i64, &[i64])] = &[
            (2, &[1]),
            (2, &[2]),
            (7, &[1, 4, 7]),
            (12, &[3, 4, 9]),
            (20, &[1, 2, 3, 18, 19, 20]),
            (20, &[10]),
        ];

        for &(total, taken) in cases {
            let (capacity, occupied) = layout(total, taken);
            let optimal = select(capacity, &occupied).unwrap();
            assert!(capacity.slots().contains(&optimal));
            assert!(!occupied.contains(optimal));
        }
    }

    #[test]
    fn test_select_is_repeatable() {
        let (capacity, occupied) = layout(15, &[2, 9, 11]);
        let first = select(capacity, &occupied);
        assert_eq!(first, select(capacity, &occupied));
        assert_eq!(first, Some(15));
    }

    #[test]
    fn test_min_distance_without_neighbours() {
        assert_eq!(min_distance(3, &OccupiedSet::default()), None);
    }

    #[test]
    fn test_capacity_bounds() {
        assert!(Capacity::new(0).is_err());
        assert!(Capacity::new(21).is_err());
        assert!(Capacity::new(-3).is_err());
        assert_eq!(Capacity::new(20).unwrap().get(), 20);
        assert_eq!(Capacity::new(1).unwrap().slots().count(), 1);
    }

    #[test]
    fn test_occupied_set_rejects_out_of_range() {
        let capacity = Capacity::new(5).unwrap();
        assert_eq!(
            OccupiedSet::from_positions([2, 6], capacity),
            Err(SelectionError::OutOfRangePosition { position: 6, capacity: 5 })
        );
        assert_eq!(
            OccupiedSet::from_positions([0], capacity),
            Err(SelectionError::OutOfRangePosition { position: 0, capacity: 5 })
        );
    }

    #[test]
    fn test_occupied_set_rejects_full_layout() {
        let capacity = Capacity::new(5).unwrap();
        assert_eq!(
            OccupiedSet::from_positions([1, 2, 3, 4, 5], capacity),
            Err(SelectionError::FullyOccupied)
        );
    }

    #[test]
    fn test_occupied_set_collapses_duplicates() {
        let capacity = Capacity::new(4).unwrap();
        let occupied = OccupiedSet::from_positions([3, 1, 3, 1], capacity).unwrap();
        assert_eq!(occupied.to_vec(), vec![1, 3]);
    }
}
