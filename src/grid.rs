// Occupancy grid for the decision engine
//
// Each cell tells a search *when* it becomes passable. Body segments carry a
// countdown: a segment with code k blocks for the next k - 1 turns, so a path
// reaching it at depth d may enter iff k <= d + 1.

use std::fmt;

use crate::types::Coord;

pub const CODE_EMPTY: u32 = 0;
pub const CODE_FOOD: u32 = 1;
pub const CODE_DANGER: u32 = 999;
pub const CODE_VISITED: u32 = 1000;

/// Passability rules applied by searches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Danger cells always block
    Strict,
    /// Danger cells may be entered; bounds and bodies still block
    Tolerant,
}

/// A single occupancy cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Food,
    /// Cell an equal-or-longer rival head can reach next turn
    Danger,
    /// Body segment; holds its occupancy code (head = length + 1, tail = 2)
    Body(u32),
    /// Marked by a search on its private copy
    Visited,
}

impl Cell {
    /// Integer occupancy code of this cell
    pub fn code(&self) -> u32 {
        match self {
            Cell::Empty => CODE_EMPTY,
            Cell::Food => CODE_FOOD,
            Cell::Danger => CODE_DANGER,
            Cell::Body(k) => *k,
            Cell::Visited => CODE_VISITED,
        }
    }

    /// Whether a path arriving at `depth` may enter this cell
    pub fn is_passable_at(&self, depth: usize, mode: SearchMode) -> bool {
        match self {
            Cell::Empty | Cell::Food => true,
            Cell::Danger => mode == SearchMode::Tolerant,
            Cell::Body(k) => (*k as usize) <= depth + 1,
            Cell::Visited => false,
        }
    }
}

/// Fixed-shape rectangular occupancy matrix, stored row-major with y as the row
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an all-empty grid
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn in_bounds(&self, coord: &Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    fn index(&self, coord: &Coord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(coord.y as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    /// Cell at `coord`, or None when out of bounds
    pub fn get(&self, coord: &Coord) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Writes a cell; out-of-bounds writes are ignored and reported as false
    pub fn set(&mut self, coord: &Coord, cell: Cell) -> bool {
        match self.index(coord) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Occupancy code at `coord`, or None when out of bounds
    pub fn code(&self, coord: &Coord) -> Option<u32> {
        self.get(coord).map(|c| c.code())
    }
}

impl fmt::Debug for Grid {
    /// Renders codes with the top row (highest y) first
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.width, self.height)?;
        for y in (0..self.height).rev() {
            let row: Vec<String> = (0..self.width)
                .map(|x| format!("{:>4}", self.cells[y * self.width + x].code()))
                .collect();
            writeln!(f, "{}", row.join(""))?;
        }
        Ok(())
    }
}
