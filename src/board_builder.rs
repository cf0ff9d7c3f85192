// Board builder: turns an API board snapshot into an occupancy grid
//
// Phases run as full passes in a fixed order (food, danger, bodies) so that a
// body segment always wins over a danger or food marker regardless of the
// order snakes appear in the snapshot.

use std::error::Error;
use std::fmt;

use log::debug;

use crate::grid::{Cell, Grid};
use crate::types::{Battlesnake, Board, Coord};

/// Largest grid (in cells) a snapshot may ask for
pub const MAX_CELLS: usize = 256 * 256;

/// Reasons a snapshot cannot be turned into a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    InvalidDimensions { width: i32, height: i32 },
    BoardTooLarge { width: i32, height: i32 },
    FoodOutOfBounds { coord: Coord },
    ControlledSnakeMissing { snake_id: String },
    EmptyBody { snake_id: String },
    SegmentOutOfBounds { snake_id: String, coord: Coord },
}

impl fmt::Display for BoardError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BoardError::InvalidDimensions { width, height } => {
                write!(formatter, "Invalid board dimensions {}x{}", width, height)
            }
            BoardError::BoardTooLarge { width, height } => write!(
                formatter,
                "Board {}x{} exceeds the {} cell limit",
                width, height, MAX_CELLS
            ),
            BoardError::FoodOutOfBounds { coord } => {
                write!(formatter, "Food at ({}, {}) is outside the board", coord.x, coord.y)
            }
            BoardError::ControlledSnakeMissing { snake_id } => {
                write!(formatter, "Snake '{}' is not on the board", snake_id)
            }
            BoardError::EmptyBody { snake_id } => {
                write!(formatter, "Snake '{}' has an empty body", snake_id)
            }
            BoardError::SegmentOutOfBounds { snake_id, coord } => write!(
                formatter,
                "Snake '{}' has a segment at ({}, {}) outside the board",
                snake_id, coord.x, coord.y
            ),
        }
    }
}

impl Error for BoardError {}

/// Builds the occupancy grid for the snake identified by `you_id`
///
/// # Arguments
/// * `board` - Board snapshot as received from the API
/// * `you_id` - Identifier of the controlled snake
///
/// # Returns
/// * `Result<Grid, BoardError>` - Fresh grid sized from the snapshot, or the first validation failure
pub fn build_grid(board: &Board, you_id: &str) -> Result<Grid, BoardError> {
    let you = validate(board, you_id)?;
    let you_length = you.body.len();

    let mut grid = Grid::new(board.width as usize, board.height as usize);

    for food in &board.food {
        grid.set(food, Cell::Food);
    }

    for snake in &board.snakes {
        if snake.id == you_id || snake.body.len() < you_length {
            continue;
        }
        let head = snake.body[0];
        for neighbor in head.neighbors().iter() {
            // Out-of-bounds neighbors are dropped by set
            grid.set(neighbor, Cell::Danger);
        }
    }

    for snake in &board.snakes {
        let length = snake.body.len();
        for (i, segment) in snake.body.iter().enumerate() {
            grid.set(segment, Cell::Body((length - i + 1) as u32));
        }
    }

    debug!("Built grid for snake '{}':\n{:?}", you_id, grid);
    Ok(grid)
}

/// Checks every coordinate against the declared bounds before anything is written
fn validate<'a>(board: &'a Board, you_id: &str) -> Result<&'a Battlesnake, BoardError> {
    if board.width <= 0 || board.height <= 0 {
        return Err(BoardError::InvalidDimensions {
            width: board.width,
            height: board.height,
        });
    }

    let cells = (board.width as usize).checked_mul(board.height as usize);
    if cells.map_or(true, |n| n > MAX_CELLS) {
        return Err(BoardError::BoardTooLarge {
            width: board.width,
            height: board.height,
        });
    }

    if let Some(food) = board.food.iter().find(|f| !board.contains(f)) {
        return Err(BoardError::FoodOutOfBounds { coord: *food });
    }

    for snake in &board.snakes {
        if snake.body.is_empty() {
            return Err(BoardError::EmptyBody {
                snake_id: snake.id.clone(),
            });
        }
        if let Some(segment) = snake.body.iter().find(|c| !board.contains(c)) {
            return Err(BoardError::SegmentOutOfBounds {
                snake_id: snake.id.clone(),
                coord: *segment,
            });
        }
    }

    board
        .snakes
        .iter()
        .find(|s| s.id == you_id)
        .ok_or_else(|| BoardError::ControlledSnakeMissing {
            snake_id: you_id.to_string(),
        })
}
