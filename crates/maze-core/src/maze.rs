//! The [`Maze`] type — a rectangular marker grid with start and goal.
//!
//! A `Maze` is immutable after construction. Search engines only read
//! it (bounds, walls, neighbors); rendering a found path goes through
//! the non-destructive [`PathOverlay`] view rather than mutating the
//! marker buffer, so the query surface and the render surface never
//! interfere.

use std::fmt;

use thiserror::Error;

use crate::geom::Cell;
use crate::marker::Marker;

/// Error constructing a [`Maze`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// The input had no rows, or rows of zero width.
    #[error("maze has no cells")]
    Empty,
    /// A row's width differs from the first row's.
    #[error("row {row} has {len} cells, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// No start marker anywhere in the grid.
    #[error("start marker 'A' not found")]
    MissingStart,
    /// No goal marker anywhere in the grid.
    #[error("goal marker 'B' not found")]
    MissingGoal,
    /// More than one start marker.
    #[error("duplicate start marker at {0}")]
    DuplicateStart(Cell),
    /// More than one goal marker.
    #[error("duplicate goal marker at {0}")]
    DuplicateGoal(Cell),
    /// A symbol that is not part of the maze vocabulary.
    #[error("invalid symbol {ch:?} at {at}")]
    InvalidSymbol { ch: char, at: Cell },
}

/// A rectangular grid of [`Marker`]s with a unique start and goal.
///
/// The marker buffer is flat, indexed `row * width + col`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maze {
    cells: Vec<Marker>,
    width: i32,
    height: i32,
    start: Cell,
    goal: Cell,
}

impl Maze {
    /// Build a maze from rows of markers.
    ///
    /// Validates eagerly: the grid must be non-empty and rectangular
    /// and must contain exactly one [`Marker::Start`] and one
    /// [`Marker::Goal`].
    pub fn new(rows: Vec<Vec<Marker>>) -> Result<Self, MazeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(MazeError::Empty);
        }

        let mut cells = Vec::with_capacity(width * height);
        let mut start = None;
        let mut goal = None;

        for (r, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(MazeError::Ragged {
                    row: r,
                    len: row.len(),
                    expected: width,
                });
            }
            for (c, &m) in row.iter().enumerate() {
                let here = Cell::new(r as i32, c as i32);
                match m {
                    Marker::Start => {
                        if start.replace(here).is_some() {
                            return Err(MazeError::DuplicateStart(here));
                        }
                    }
                    Marker::Goal => {
                        if goal.replace(here).is_some() {
                            return Err(MazeError::DuplicateGoal(here));
                        }
                    }
                    _ => {}
                }
                cells.push(m);
            }
        }

        Ok(Self {
            cells,
            width: width as i32,
            height: height as i32,
            start: start.ok_or(MazeError::MissingStart)?,
            goal: goal.ok_or(MazeError::MissingGoal)?,
        })
    }

    /// Parse a maze from a text map, one symbol per cell.
    ///
    /// Lines are rows. Spaces and tabs between symbols are ignored, so
    /// both `"A01"` and `"A 0 1"` describe the same row; blank lines
    /// are skipped. All rows must have the same width.
    pub fn parse(s: &str) -> Result<Self, MazeError> {
        let mut rows = Vec::new();
        for line in s.lines() {
            let mut row = Vec::new();
            for ch in line.chars() {
                if ch == ' ' || ch == '\t' {
                    continue;
                }
                let here = Cell::new(rows.len() as i32, row.len() as i32);
                let m = Marker::try_from(ch)
                    .map_err(|_| MazeError::InvalidSymbol { ch, at: here })?;
                row.push(m);
            }
            if !row.is_empty() {
                rows.push(row);
            }
        }
        Self::new(rows)
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The unique start cell.
    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    /// The unique goal cell.
    #[inline]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Whether `c` is inside the grid.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        c.row >= 0 && c.row < self.height && c.col >= 0 && c.col < self.width
    }

    /// The marker at `c`, or `None` if out of bounds.
    pub fn at(&self, c: Cell) -> Option<Marker> {
        if !self.contains(c) {
            return None;
        }
        Some(self.cells[(c.row * self.width + c.col) as usize])
    }

    /// Whether `c` is in bounds and traversable.
    #[inline]
    pub fn is_open(&self, c: Cell) -> bool {
        self.at(c).is_some_and(|m| !m.is_blocking())
    }

    /// Append the traversable orthogonal neighbours of `c` to `buf`,
    /// in the fixed up/down/left/right order. The caller clears `buf`.
    pub fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        for n in c.neighbors_4() {
            if self.is_open(n) {
                buf.push(n);
            }
        }
    }

    /// A display view of the maze with `path` stamped over it.
    ///
    /// Every path cell except start and goal renders as the path
    /// marker; the maze itself is not modified, so the overlay can be
    /// rendered any number of times and never disturbs later searches.
    pub fn with_path<'a>(&'a self, path: &'a [Cell]) -> PathOverlay<'a> {
        PathOverlay { maze: self, path }
    }

    fn fmt_rows(
        &self,
        f: &mut fmt::Formatter<'_>,
        mut marker_at: impl FnMut(Cell, Marker) -> Marker,
    ) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                if col > 0 {
                    f.write_str(" ")?;
                }
                let c = Cell::new(row, col);
                let m = self.cells[(row * self.width + col) as usize];
                write!(f, "{}", marker_at(c, m))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Maze {
    /// Render row-major, symbols space-separated, one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_rows(f, |_, m| m)
    }
}

/// A borrowed view of a [`Maze`] with a path stamped on top.
///
/// Created by [`Maze::with_path`]; only implements [`fmt::Display`].
#[derive(Debug, Clone, Copy)]
pub struct PathOverlay<'a> {
    maze: &'a Maze,
    path: &'a [Cell],
}

impl fmt::Display for PathOverlay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.maze.fmt_rows(f, |c, m| {
            if self.path.contains(&c) && c != self.maze.start && c != self.maze.goal {
                Marker::Path
            } else {
                m
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Maze {
        Maze::parse(
            "A 0 1\n\
             0 0 1\n\
             1 0 B\n",
        )
        .unwrap()
    }

    #[test]
    fn construction_locates_start_and_goal() {
        let m = small();
        assert_eq!(m.width(), 3);
        assert_eq!(m.height(), 3);
        assert_eq!(m.start(), Cell::new(0, 0));
        assert_eq!(m.goal(), Cell::new(2, 2));
        assert_eq!(m.at(Cell::new(0, 2)), Some(Marker::Wall));
        assert_eq!(m.at(Cell::new(3, 0)), None);
    }

    #[test]
    fn parse_ignores_spacing_differences() {
        let spaced = small();
        let dense = Maze::parse("A01\n001\n10B").unwrap();
        assert_eq!(spaced, dense);
    }

    #[test]
    fn missing_markers_are_errors() {
        assert_eq!(
            Maze::parse("0 0\n0 B").unwrap_err(),
            MazeError::MissingStart
        );
        assert_eq!(
            Maze::parse("A 0\n0 0").unwrap_err(),
            MazeError::MissingGoal
        );
    }

    #[test]
    fn duplicate_markers_are_errors() {
        assert_eq!(
            Maze::parse("A A\n0 B").unwrap_err(),
            MazeError::DuplicateStart(Cell::new(0, 1))
        );
        assert_eq!(
            Maze::parse("A B\nB 0").unwrap_err(),
            MazeError::DuplicateGoal(Cell::new(1, 0))
        );
    }

    #[test]
    fn ragged_rows_are_errors() {
        assert_eq!(
            Maze::parse("A 0 0\n0 B").unwrap_err(),
            MazeError::Ragged {
                row: 1,
                len: 2,
                expected: 3
            }
        );
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(Maze::parse("").unwrap_err(), MazeError::Empty);
        assert_eq!(Maze::parse("\n \n").unwrap_err(), MazeError::Empty);
    }

    #[test]
    fn invalid_symbol_reports_location() {
        assert_eq!(
            Maze::parse("A 0\nx B").unwrap_err(),
            MazeError::InvalidSymbol {
                ch: 'x',
                at: Cell::new(1, 0)
            }
        );
    }

    #[test]
    fn neighbors_respect_walls_bounds_and_order() {
        let m = small();
        let mut buf = Vec::new();

        // Corner cell: up and left out of bounds, right is a wall.
        m.neighbors(Cell::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Cell::new(1, 0)]);

        // Center cell: up/down/left/right enumeration order.
        buf.clear();
        m.neighbors(Cell::new(1, 1), &mut buf);
        assert_eq!(
            buf,
            vec![Cell::new(0, 1), Cell::new(2, 1), Cell::new(1, 0)]
        );
    }

    #[test]
    fn start_and_goal_are_traversable() {
        let m = small();
        assert!(m.is_open(m.start()));
        assert!(m.is_open(m.goal()));
        assert!(!m.is_open(Cell::new(0, 2)));
        assert!(!m.is_open(Cell::new(-1, 0)));
    }

    #[test]
    fn display_renders_space_separated_rows() {
        let m = small();
        assert_eq!(m.to_string(), "A 0 1\n0 0 1\n1 0 B\n");
    }

    #[test]
    fn overlay_marks_interior_path_cells_only() {
        let m = small();
        let path = [
            Cell::new(0, 0),
            Cell::new(1, 0),
            Cell::new(1, 1),
            Cell::new(2, 1),
            Cell::new(2, 2),
        ];
        let rendered = m.with_path(&path).to_string();
        assert_eq!(rendered, "A 0 1\n* * 1\n1 * B\n");
        // The maze itself is untouched.
        assert_eq!(m.at(Cell::new(1, 0)), Some(Marker::Open));
        assert_eq!(m.to_string(), "A 0 1\n0 0 1\n1 0 B\n");
    }

    #[test]
    fn overlay_is_repeatable() {
        let m = small();
        let path = [Cell::new(0, 0), Cell::new(1, 0)];
        let first = m.with_path(&path).to_string();
        let second = m.with_path(&path).to_string();
        assert_eq!(first, second);
    }
}
