//! Grid model for maze pathfinding.
//!
//! This crate provides the static world a search runs over:
//!
//! - [`Cell`] — a `(row, col)` grid coordinate
//! - [`Marker`] — the per-cell vocabulary (`0 1 A B *`)
//! - [`Maze`] — a rectangular marker grid with located start/goal,
//!   neighbor queries, and text rendering
//! - [`PathOverlay`] — a borrowed display view that stamps a path over
//!   the maze without mutating it
//!
//! The maze is immutable after construction; search engines only read
//! it, and rendering with a path goes through [`Maze::with_path`].

mod geom;
mod marker;
mod maze;

pub use geom::Cell;
pub use marker::{Marker, MarkerError};
pub use maze::{Maze, MazeError, PathOverlay};
