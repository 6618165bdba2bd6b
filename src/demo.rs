use std::io::{self, Write};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::console::report;
use crate::render::Appearance;
use crate::selection::{Capacity, Layout, OccupiedSet, SelectionError, MAX_CAPACITY, MIN_CAPACITY};

/// Generate a random layout that always leaves at least one slot free.
pub fn random_layout<R: Rng>(rng: &mut R) -> Result<Layout, SelectionError> {
    let total = rng.gen_range(MIN_CAPACITY..=MAX_CAPACITY);
    let capacity = Capacity::new(total as i64)?;

    let taken_count = rng.gen_range(0..total) as usize;
    let slots: Vec<u8> = capacity.slots().collect();
    let taken = slots
        .choose_multiple(rng, taken_count)
        .map(|&slot| slot as i64);

    let occupied = OccupiedSet::from_positions(taken, capacity)?;
    Layout::resolve(capacity, occupied)
}

/// Print a random scenario. Without a seed one is drawn and shown so the
/// run can be repeated.
pub fn run_demo<W: Write>(
    out: &mut W,
    seed: Option<u64>,
    appearance: Appearance,
) -> io::Result<Layout> {
    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = StdRng::seed_from_u64(seed);

    let layout = random_layout(&mut rng).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    debug!(seed, total = layout.capacity.get(), "demo layout generated");

    writeln!(
        out,
        "Demo: {} urinals, occupied {:?} (seed {})",
        layout.capacity.get(),
        layout.occupied.to_vec(),
        seed
    )?;
    report(out, &layout, appearance)?;

    Ok(layout)
}
