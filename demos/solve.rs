use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::time::{Duration, Instant};
use wwf_solver::{board_from_json, rack_from_json, Board, Dictionary, Game, Rack, TileSet};

const USAGE: &str = "usage: solve WORDFILE RACK [BOARD_JSON]
  RACK is a string of letters with ? for a blank, or a json file with a list of tiles.
  Without BOARD_JSON an empty standard board is used.";

fn read_rack(arg: &str) -> Result<Rack> {
    if arg.ends_with(".json") {
        let json = fs::read_to_string(arg).with_context(|| format!("reading rack {}", arg))?;
        Ok(rack_from_json(&json)?)
    } else {
        Ok(Rack::from_letters(&TileSet::default(), arg))
    }
}

fn read_board(arg: Option<&String>) -> Result<Board> {
    match arg {
        Some(path) => {
            let json =
                fs::read_to_string(path).with_context(|| format!("reading board {}", path))?;
            Ok(board_from_json(&json)?)
        }
        None => Ok(Board::default()),
    }
}

fn run() -> Result<()> {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        anyhow::bail!(USAGE);
    }
    let dictionary = Dictionary::from_file(&args[0])?;
    let rack = read_rack(&args[1])?;
    let board = read_board(args.get(2))?;
    info!("{}", dictionary);
    println!("{}\n", board);
    println!("rack: {}", rack);

    let game = Game::new(&dictionary, &board, &rack).with_deadline(Duration::from_secs(10));
    if let Err(errors) = game.validate_board() {
        for error in &errors {
            eprintln!("{}", error);
        }
        anyhow::bail!("board is not valid");
    }
    let now = Instant::now();
    let moves = game.get_scored_possible_words();
    let dt = now.elapsed().as_secs_f32();
    eprintln!("found {} moves in {:.3} s", moves.len(), dt);
    for m in moves.iter().take(20) {
        println!("{}", m);
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
