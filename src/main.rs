//! Four-player chess game simulation.
//!
//! Plays a random legal game from the standard starting position and prints
//! the move record plus the final board, the way the original package was
//! meant to be driven. An optional argument caps the number of plies.

use four_player_chess::game_state::chess_types::Color;
use four_player_chess::game_state::game::Game;
use four_player_chess::utils::render_game_state::render_game_state;
use four_player_chess::utils::simulation::play_random_game;

const DEFAULT_PLIES: usize = 48;

fn main() {
    let max_plies = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<usize>().ok())
        .unwrap_or(DEFAULT_PLIES);

    let mut game = Game::new();
    let mut rng = rand::rng();

    println!("[Event \"Four-Player Chess Simulation\"]");
    println!("[Date \"{}\"]", chrono::Local::now().format("%Y.%m.%d"));

    let record = match play_random_game(&mut game, max_plies, &mut rng) {
        Ok(record) => record,
        Err(err) => {
            eprintln!("simulation stopped: {err}");
            std::process::exit(1);
        }
    };

    for (ply, notation) in record.iter().enumerate() {
        let color = Color::ALL[ply % Color::COUNT];
        println!("{:>3}. {} {}", ply + 1, color.letter(), notation);
    }

    println!();
    println!("{}", render_game_state(game.state()));
    println!();
    println!("position: {}", game.state().get_fed());

    for color in Color::ALL {
        if game.in_check(color) {
            println!("{:?} is in check", color);
        }
    }
}
