// Breadth-first searches over a private occupancy grid
//
// Both searches consume their grid by value: callers hand over a copy, and
// visitation is marked in place on it. The work queue is a flat Vec read by a
// cursor, reserved up front for the worst case of four pushes per cell.

use crate::grid::{Cell, Grid, SearchMode};
use crate::types::Coord;

/// Transient traversal node
#[derive(Debug, Clone, Copy)]
struct Node {
    coord: Coord,
    depth: usize,
}

/// FIFO queue backed by a growable buffer; nodes are never removed, only skipped
struct WorkQueue {
    nodes: Vec<Node>,
    cursor: usize,
}

impl WorkQueue {
    fn seeded(grid: &Grid, start: Coord) -> Self {
        let mut nodes = Vec::with_capacity(4 * grid.cell_count() + 1);
        nodes.push(Node { coord: start, depth: 1 });
        WorkQueue { nodes, cursor: 0 }
    }

    fn pop(&mut self) -> Option<Node> {
        let node = self.nodes.get(self.cursor).copied();
        if node.is_some() {
            self.cursor += 1;
        }
        node
    }

    fn push_neighbors(&mut self, node: Node) {
        for neighbor in node.coord.neighbors().iter() {
            self.nodes.push(Node {
                coord: *neighbor,
                depth: node.depth + 1,
            });
        }
    }
}

/// Returns the cell at `node` if it may be entered at the node's depth
fn enterable(grid: &Grid, node: &Node, mode: SearchMode) -> Option<Cell> {
    grid.get(&node.coord)
        .filter(|cell| cell.is_passable_at(node.depth, mode))
}

/// Flood fill from `start`, returning the deepest level reached
///
/// The result approximates how much room a snake entering `start` has; it is
/// not a cell count. Returns 0 when `start` itself cannot be entered.
pub fn reachable_depth(mut grid: Grid, start: Coord, mode: SearchMode) -> usize {
    let mut queue = WorkQueue::seeded(&grid, start);
    let mut max_depth = 0;

    while let Some(node) = queue.pop() {
        if enterable(&grid, &node, mode).is_none() {
            continue;
        }

        grid.set(&node.coord, Cell::Visited);
        max_depth = max_depth.max(node.depth);
        queue.push_neighbors(node);
    }

    max_depth
}

/// Shortest path length to the nearest food, counting the move into `start`
///
/// Returns None when no food is reachable.
pub fn food_distance(mut grid: Grid, start: Coord) -> Option<usize> {
    let mut queue = WorkQueue::seeded(&grid, start);

    while let Some(node) = queue.pop() {
        let cell = match enterable(&grid, &node, SearchMode::Strict) {
            Some(cell) => cell,
            None => continue,
        };

        if cell == Cell::Food {
            return Some(node.depth);
        }

        grid.set(&node.coord, Cell::Visited);
        queue.push_neighbors(node);
    }

    None
}
