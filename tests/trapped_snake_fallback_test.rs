// Integration test for trapped snake fallback behavior
//
// When no move is provably safe the bot must still answer, and it must:
// 1. Stay in-bounds if any in-bounds neighbor exists
// 2. Answer "up" only when "up" is actually on the board
// 3. Prefer stepping into a danger cell over a wall

use frostflight::bot::Bot;
use frostflight::config::Config;
use frostflight::types::{Battlesnake, Board, Coord, Game};
use std::collections::HashMap;

fn game() -> Game {
    Game {
        id: "test-game".to_string(),
        ruleset: HashMap::new(),
        timeout: 500,
        source: "test".to_string(),
    }
}

fn snake(id: &str, body: &[(i32, i32)]) -> Battlesnake {
    let body: Vec<Coord> = body.iter().map(|&(x, y)| Coord { x, y }).collect();
    Battlesnake {
        id: id.to_string(),
        name: "Rusty".to_string(),
        health: 50,
        head: body[0],
        length: body.len() as i32,
        body,
        latency: "0".to_string(),
        shout: None,
    }
}

fn chosen_move(board: &Board, you: &Battlesnake) -> String {
    let bot = Bot::new(Config::default_hardcoded());
    let response = bot
        .get_move(&game(), &0, board, you)
        .expect("board should be valid");
    response["move"].as_str().unwrap().to_string()
}

/// Snake at the top wall of a one-column board, facing its own neck
/// Should fall back to "down" (in-bounds), not "up" (out-of-bounds)
#[test]
fn test_trapped_at_top_wall_chooses_in_bounds_move() {
    let you = snake("our-snake", &[(0, 4), (0, 3), (0, 2), (0, 1)]);
    let board = Board {
        height: 5,
        width: 1,
        food: vec![],
        snakes: vec![you.clone()],
        hazards: vec![],
    };

    assert_eq!(chosen_move(&board, &you), "down");
}

/// Every neighbor is a long-lived body segment, but "up" is on the board
#[test]
fn test_fully_enclosed_defaults_to_up() {
    let you = snake(
        "our-snake",
        &[(1, 1), (1, 2), (2, 2), (2, 1), (2, 0), (1, 0), (0, 0), (0, 1), (0, 2)],
    );
    let board = Board {
        height: 3,
        width: 3,
        food: vec![Coord { x: 0, y: 0 }],
        snakes: vec![you.clone()],
        hazards: vec![],
    };

    assert_eq!(chosen_move(&board, &you), "up");
}

/// Only open cell next to our head is in a longer rival's reach
#[test]
fn test_trapped_next_to_rival_steps_into_danger() {
    // Rival head at (2, 0) threatens (1, 0); walls everywhere else
    let you = snake("our-snake", &[(0, 0)]);
    let rival = snake("rival", &[(2, 0), (3, 0)]);
    let board = Board {
        height: 1,
        width: 4,
        food: vec![],
        snakes: vec![rival, you.clone()],
        hazards: vec![],
    };

    assert_eq!(chosen_move(&board, &you), "right");
}
