use std::collections::BinaryHeap;

use maze_core::Cell;

use crate::PathField;
use crate::field::{FrontierEntry, NO_PARENT};
use crate::traits::GreedyPather;

impl PathField {
    /// Find a path from `from` to `to` using greedy best-first search.
    ///
    /// The frontier is ordered by the pather's estimate alone, so the
    /// search heads straight for the goal and the result is not
    /// guaranteed shortest. Returns the full path (both endpoints
    /// included, start first) or `None` if the goal is unreachable or
    /// either endpoint is out of range.
    ///
    /// Each cell's predecessor is recorded when the cell is first
    /// discovered and never updated afterwards; duplicate frontier
    /// entries are skipped lazily on pop once a cell has been expanded.
    pub fn greedy_path<P: GreedyPather>(
        &mut self,
        pather: &P,
        from: Cell,
        to: Cell,
    ) -> Option<Vec<Cell>> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        if start_idx == goal_idx {
            return Some(vec![from]);
        }

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        {
            let node = &mut self.nodes[start_idx];
            node.parent = NO_PARENT;
            node.generation = cur_gen;
            node.expanded = false;
        }

        let mut frontier: BinaryHeap<FrontierEntry> = BinaryHeap::new();
        let mut seq: u64 = 0;
        frontier.push(FrontierEntry {
            idx: start_idx,
            estimate: pather.estimate(from, to),
            seq,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut expansions: usize = 0;

        let found = 'search: loop {
            let Some(current) = frontier.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Goal test happens on pop, before the visited check.
            if ci == goal_idx {
                break 'search true;
            }

            // Skip stale duplicates (lazy deletion).
            if self.nodes[ci].expanded {
                continue;
            }
            self.nodes[ci].expanded = true;
            expansions += 1;

            let current_cell = self.cell(ci);

            nbuf.clear();
            pather.neighbors(current_cell, &mut nbuf);

            for &nc in nbuf.iter() {
                let Some(ni) = self.idx(nc) else {
                    continue;
                };

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if n.expanded {
                        continue;
                    }
                } else {
                    // First discovery: the predecessor is fixed here,
                    // later discoverers never replace it.
                    n.generation = cur_gen;
                    n.expanded = false;
                    n.parent = ci;
                }

                seq += 1;
                frontier.push(FrontierEntry {
                    idx: ni,
                    estimate: pather.estimate(nc, to),
                    seq,
                });
            }
        };

        self.nbuf = nbuf;

        log::debug!(
            "greedy search {from} -> {to}: {} after {expansions} expansions, {} pushes",
            if found { "goal reached" } else { "frontier exhausted" },
            seq + 1,
        );

        if !found {
            return None;
        }

        // Reconstruct by walking predecessors from the goal back to the
        // start, whose parent is the sentinel.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != NO_PARENT {
            path.push(self.cell(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        Some(path)
    }
}
