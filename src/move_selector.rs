// Move selection policy
//
// A small state machine over the four candidate cells around our head:
//
//   Food ──(no eligible food move)──> Avoid ──(all zero)──> AvoidTolerant ──(all zero)──> LastResort
//
// Food is the entry state when food exists on the board, Avoid otherwise.
// Candidates are always tested in Direction::all() order and a later
// candidate replaces the current pick only when strictly better.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::DecisionConfig;
use crate::grid::{Grid, SearchMode};
use crate::search::{food_distance, reachable_depth};
use crate::types::{Coord, Direction};

/// Decision states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Focus {
    /// Shortest path to food among moves with enough room
    Food,
    /// Most open space, danger cells blocked
    Avoid,
    /// Most open space, danger cells allowed
    AvoidTolerant,
    /// Nothing provably safe; stay on the board if possible
    LastResort,
}

/// The chosen move and the state that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub direction: Direction,
    pub focus: Focus,
}

/// Evaluates candidate moves for one turn
pub struct MoveSelector<'a> {
    grid: &'a Grid,
    head: Coord,
    length: usize,
    has_food: bool,
    config: &'a DecisionConfig,
}

impl<'a> MoveSelector<'a> {
    /// # Arguments
    /// * `grid` - Occupancy grid for this turn; every search runs on its own copy
    /// * `head` - Our head coordinate
    /// * `length` - Our body length
    /// * `has_food` - Whether the snapshot contains any food
    /// * `config` - Policy tuning
    pub fn new(
        grid: &'a Grid,
        head: Coord,
        length: usize,
        has_food: bool,
        config: &'a DecisionConfig,
    ) -> Self {
        MoveSelector {
            grid,
            head,
            length,
            has_food,
            config,
        }
    }

    /// Runs the state machine to completion
    pub fn decide(&self) -> Decision {
        let mut focus = if self.has_food {
            Focus::Food
        } else {
            Focus::Avoid
        };

        loop {
            let (chosen, next) = match focus {
                Focus::Food => (self.food_focus(), Focus::Avoid),
                Focus::Avoid => (self.avoid_focus(SearchMode::Strict), Focus::AvoidTolerant),
                Focus::AvoidTolerant => (self.avoid_focus(self.tolerant_mode()), Focus::LastResort),
                Focus::LastResort => {
                    return Decision {
                        direction: self.last_resort(),
                        focus,
                    }
                }
            };

            if let Some(direction) = chosen {
                return Decision { direction, focus };
            }

            debug!("{:?} found no move, falling back to {:?}", focus, next);
            focus = next;
        }
    }

    fn tolerant_mode(&self) -> SearchMode {
        if self.config.tolerant_accepts_danger {
            SearchMode::Tolerant
        } else {
            SearchMode::Strict
        }
    }

    /// Closest food among moves whose reachable space exceeds our length
    fn food_focus(&self) -> Option<Direction> {
        let threshold = self.length + self.config.space_margin;
        let mut best: Option<(Direction, usize)> = None;

        for direction in Direction::all().iter() {
            let target = direction.apply(&self.head);
            let space = reachable_depth(self.grid.clone(), target, SearchMode::Strict);
            let distance = food_distance(self.grid.clone(), target);

            debug!(
                "Food focus {}: space={} food_distance={:?}",
                direction.as_str(),
                space,
                distance
            );

            if space <= threshold {
                continue;
            }

            if let Some(distance) = distance {
                if best.map_or(true, |(_, d)| distance < d) {
                    best = Some((*direction, distance));
                }
            }
        }

        best.map(|(direction, _)| direction)
    }

    /// Move with the most reachable space; None when every move yields zero
    fn avoid_focus(&self, mode: SearchMode) -> Option<Direction> {
        let mut best: Option<(Direction, usize)> = None;

        for direction in Direction::all().iter() {
            let target = direction.apply(&self.head);
            let space = reachable_depth(self.grid.clone(), target, mode);

            debug!("Avoid focus ({:?}) {}: space={}", mode, direction.as_str(), space);

            if space > 0 && best.map_or(true, |(_, s)| space > s) {
                best = Some((*direction, space));
            }
        }

        best.map(|(direction, _)| direction)
    }

    /// Up when it stays on the board, otherwise the first in-bounds move
    fn last_resort(&self) -> Direction {
        Direction::all()
            .iter()
            .copied()
            .find(|d| self.grid.in_bounds(&d.apply(&self.head)))
            .unwrap_or(Direction::Up)
    }
}
