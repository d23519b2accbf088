/// The B3/S23 transition rule for a single cell.
///
/// A live cell survives with 2 or 3 live neighbors, a dead cell is born with
/// exactly 3, and every other combination is dead in the next generation.
#[inline]
pub(super) fn next_state(alive: bool, live_neighbors: u8) -> bool {
    matches!((alive, live_neighbors), (true, 2) | (_, 3))
}
