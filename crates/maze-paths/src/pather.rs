//! Pather trait implementations for [`Maze`].

use maze_core::{Cell, Maze};

use crate::distance::manhattan;
use crate::traits::{GreedyPather, Pather};

impl Pather for Maze {
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        Maze::neighbors(self, c, buf);
    }
}

impl GreedyPather for Maze {
    fn estimate(&self, from: Cell, to: Cell) -> i32 {
        manhattan(from, to)
    }
}
