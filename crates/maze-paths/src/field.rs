use maze_core::Cell;

// ---------------------------------------------------------------------------
// Internal node for the greedy search
// ---------------------------------------------------------------------------

/// Sentinel parent index meaning "no predecessor" (the start cell).
pub(crate) const NO_PARENT: usize = usize::MAX;

#[derive(Clone)]
pub(crate) struct Node {
    /// Index of the cell that first discovered this one.
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    /// Whether the cell has been popped and expanded (the visited set).
    pub(crate) expanded: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            parent: NO_PARENT,
            generation: 0,
            expanded: false,
        }
    }
}

/// Frontier entry ordered by estimate, then insertion sequence, for use
/// in `BinaryHeap`.
///
/// The sequence number makes the tie-break explicit: among entries with
/// equal estimates, the one pushed first pops first.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct FrontierEntry {
    pub(crate) idx: usize,
    pub(crate) estimate: i32,
    pub(crate) seq: u64,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest estimate,
        // oldest entry first.
        other
            .estimate
            .cmp(&self.estimate)
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// PathField
// ---------------------------------------------------------------------------

/// Reusable search state for a grid of fixed dimensions.
///
/// `PathField` owns the node array and scratch buffers so that repeated
/// queries incur no allocations after the first use. A generation
/// counter invalidates all nodes in O(1) between searches.
pub struct PathField {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Cell>,
}

impl PathField {
    /// Create a new `PathField` for a `width` × `height` grid.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0) as usize;
        let h = height.max(0) as usize;
        Self {
            width: w,
            height: h,
            nodes: vec![Node::default(); w * h],
            generation: 0,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Change the grid dimensions, reallocating only when the new size
    /// exceeds the existing node capacity.
    pub fn resize(&mut self, width: i32, height: i32) {
        let w = width.max(0) as usize;
        let h = height.max(0) as usize;
        self.width = w;
        self.height = h;
        let len = w * h;
        if len > self.nodes.len() {
            self.nodes.clear();
            self.nodes.resize(len, Node::default());
            self.generation = 0;
        } else {
            // Fits within existing capacity — stale nodes are ignored
            // once the next search bumps the generation.
            self.generation = self.generation.wrapping_add(1);
        }
    }

    /// Grid width the field was sized for.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width as i32
    }

    /// Grid height the field was sized for.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height as i32
    }

    /// Convert a `Cell` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, c: Cell) -> Option<usize> {
        if c.row < 0
            || c.col < 0
            || (c.row as usize) >= self.height
            || (c.col as usize) >= self.width
        {
            return None;
        }
        Some(c.row as usize * self.width + c.col as usize)
    }

    /// Convert a flat index back to a `Cell`.
    #[inline]
    pub(crate) fn cell(&self, idx: usize) -> Cell {
        Cell::new((idx / self.width) as i32, (idx % self.width) as i32)
    }
}

// Only the dimensions are serialized; caches are rebuilt fresh.
#[cfg(feature = "serde")]
impl serde::Serialize for PathField {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.width as i32, self.height as i32).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PathField {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (width, height) = <(i32, i32)>::deserialize(deserializer)?;
        Ok(PathField::new(width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn idx_round_trip() {
        let f = PathField::new(7, 4);
        let c = Cell::new(3, 5);
        let i = f.idx(c).unwrap();
        assert_eq!(f.cell(i), c);
        assert_eq!(f.idx(Cell::new(4, 0)), None);
        assert_eq!(f.idx(Cell::new(0, 7)), None);
        assert_eq!(f.idx(Cell::new(-1, 0)), None);
    }

    #[test]
    fn resize_smaller_preserves_capacity() {
        let mut f = PathField::new(10, 10);
        let cap = f.nodes.len();
        f.resize(4, 4);
        assert_eq!(f.nodes.len(), cap);
        assert_eq!(f.width(), 4);
        assert!(f.generation > 0);
    }

    #[test]
    fn resize_larger_reallocates() {
        let mut f = PathField::new(3, 3);
        f.resize(10, 10);
        assert_eq!(f.nodes.len(), 100);
    }

    #[test]
    fn frontier_orders_by_estimate_then_insertion() {
        let mut heap = BinaryHeap::new();
        heap.push(FrontierEntry { idx: 0, estimate: 3, seq: 0 });
        heap.push(FrontierEntry { idx: 1, estimate: 1, seq: 1 });
        heap.push(FrontierEntry { idx: 2, estimate: 1, seq: 2 });
        heap.push(FrontierEntry { idx: 3, estimate: 2, seq: 3 });

        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|e| e.idx)).collect();
        // Smallest estimate first; equal estimates in push order.
        assert_eq!(order, vec![1, 2, 3, 0]);
    }
}
