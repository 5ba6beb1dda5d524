use maze_core::Cell;

/// Minimal pathfinding interface — provides neighbor enumeration.
///
/// The enumeration order must be stable: it decides which predecessor
/// a cell keeps when several frontier entries share a priority.
pub trait Pather {
    /// Append neighbors of `c` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>);
}

/// Pather with a goal-distance estimate, sufficient for greedy
/// best-first search.
///
/// The estimate is used purely as a frontier priority key; it is never
/// combined with accumulated cost.
pub trait GreedyPather: Pather {
    /// Estimated distance from `from` to `to`.
    fn estimate(&self, from: Cell, to: Cell) -> i32;
}
