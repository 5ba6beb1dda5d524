//! Greedy best-first search over maze grids.
//!
//! The search expands whichever frontier cell has the smallest
//! estimated distance to the goal ([`manhattan`]), ignoring accumulated
//! path cost entirely. It is goal-seeking, not cost-optimal: the
//! returned path is valid but not guaranteed shortest.
//!
//! All queries go through [`PathField`], which owns and reuses the
//! node array and scratch buffers so repeated searches incur almost no
//! allocations after warm-up.
//!
//! Two deliberate, observable policies:
//!
//! - **Lazy deletion**: a cell may sit in the frontier several times;
//!   stale duplicates are skipped on pop instead of being removed or
//!   re-keyed. Replacing this with decrease-key semantics would change
//!   which predecessor wins ties and therefore which path is returned.
//! - **FIFO tie-break**: entries with equal estimates pop in insertion
//!   order, enforced by a sequence counter so heap internals never
//!   influence the result.

mod distance;
mod field;
mod greedy;
mod pather;
mod traits;

pub use distance::manhattan;
pub use field::PathField;
pub use traits::{GreedyPather, Pather};
