// Welcome to
// __________         __    __  .__                               __
// \______   \_____ _/  |__/  |_|  |   ____   ______ ____ _____  |  | __ ____
//  |    |  _/\__  \\   __\   __\  | _/ __ \ /  ___//    \\__  \ |  |/ // __ \
//  |    |   \ / __ \|  |  |  | |  |_\  ___/ \___ \|   |  \/ __ \|    <\  ___/
//  |________/(______/__|  |__| |____/\_____>______>___|__(______/__|__\\_____>
//
// Frostflight: board snapshot -> occupancy grid -> flood fill / food BFS -> move.

use log::{info, warn};
use serde_json::{json, Value};
use std::time::Instant;

use crate::board_builder::{build_grid, BoardError};
use crate::config::Config;
use crate::debug_logger::DebugLogger;
use crate::move_selector::{Decision, MoveSelector};
use crate::types::{Battlesnake, Board, Game};

/// Battlesnake Bot with OOP-style API
/// Takes static configuration dependencies and exposes methods corresponding to API endpoints
pub struct Bot {
    config: Config,
    debug_logger: DebugLogger,
}

impl Bot {
    /// Creates a new Bot instance with the given configuration
    ///
    /// # Arguments
    /// * `config` - Static configuration that does not change during the bot's lifetime
    pub fn new(config: Config) -> Self {
        Bot {
            config,
            debug_logger: DebugLogger::disabled(),
        }
    }

    /// Attaches a debug logger that records every decided turn
    pub fn with_debug_logger(mut self, debug_logger: DebugLogger) -> Self {
        self.debug_logger = debug_logger;
        self
    }

    /// Returns bot metadata and appearance
    /// Corresponds to GET / endpoint
    pub fn info(&self) -> Value {
        info!("INFO");

        let appearance = &self.config.appearance;
        json!({
            "apiversion": appearance.apiversion,
            "author": appearance.author,
            "color": appearance.color,
            "head": appearance.head,
            "tail": appearance.tail,
        })
    }

    /// Called when a game starts
    /// Corresponds to POST /start endpoint
    pub fn start(&self, game: &Game, _turn: &i32, _board: &Board, you: &Battlesnake) {
        info!("GAME START: {} as '{}'", game.id, you.id);
    }

    /// Called when a game ends
    /// Corresponds to POST /end endpoint
    pub fn end(&self, game: &Game, turn: &i32, _board: &Board, you: &Battlesnake) {
        info!("GAME OVER: {} after {} turns (health {})", game.id, turn, you.health);
    }

    /// Runs one decision for the snake identified by `you_id`
    ///
    /// Synchronous and self-contained: builds a fresh grid from `board` and
    /// shares nothing with other calls.
    pub fn decide(&self, board: &Board, you_id: &str) -> Result<Decision, BoardError> {
        let grid = build_grid(board, you_id)?;

        // build_grid has already checked that we are on the board with a body
        let you = board
            .snakes
            .iter()
            .find(|s| s.id == you_id)
            .ok_or_else(|| BoardError::ControlledSnakeMissing {
                snake_id: you_id.to_string(),
            })?;

        let selector = MoveSelector::new(
            &grid,
            you.body[0],
            you.body.len(),
            !board.food.is_empty(),
            &self.config.decision,
        );
        Ok(selector.decide())
    }

    /// Computes and returns the next move
    /// Corresponds to POST /move endpoint
    ///
    /// # Arguments
    /// * `game` - Current game metadata
    /// * `turn` - Current turn number
    /// * `board` - Current board state
    /// * `you` - Your snake's current state
    ///
    /// # Returns
    /// * `Result<Value, BoardError>` - JSON move response, or why the snapshot was rejected
    pub fn get_move(
        &self,
        game: &Game,
        turn: &i32,
        board: &Board,
        you: &Battlesnake,
    ) -> Result<Value, BoardError> {
        let start_time = Instant::now();

        let decision = self.decide(board, &you.id).map_err(|e| {
            warn!("Turn {}: rejected snapshot: {}", turn, e);
            e
        })?;

        info!(
            "Turn {}: Chose {} ({:?}, length: {}, time: {}us)",
            turn,
            decision.direction.as_str(),
            decision.focus,
            you.body.len(),
            start_time.elapsed().as_micros()
        );

        self.debug_logger
            .log_move(*turn, &game.id, &you.id, board, decision);

        Ok(match &self.config.decision.shout {
            Some(shout) => json!({ "move": decision.direction.as_str(), "shout": shout }),
            None => json!({ "move": decision.direction.as_str() }),
        })
    }
}
