// Library exports for the Frostflight Battlesnake
// This allows the replay tool and integration tests to use the core decision logic

pub mod board_builder;
pub mod bot;
pub mod config;
pub mod debug_logger;
pub mod grid;
pub mod move_selector;
pub mod replay;
pub mod search;
pub mod types;
