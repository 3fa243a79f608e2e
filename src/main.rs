use std::env;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use chess_ai::board::{format_uci, Game, GameResult, Rules, SearchParams, Side};
use chess_ai::engine::ComputerPlayer;

const USAGE: &str = "usage: chess_ai [--white] [--depth N] [--fen FEN]";

struct Options {
    /// Side the computer plays
    computer: Side,
    depth: u32,
    fen: Option<String>,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        computer: Side::Black,
        depth: SearchParams::default().base_depth,
        fen: None,
    };
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--white" => options.computer = Side::White,
            "--depth" => {
                let value = iter.next().ok_or("--depth needs a value")?;
                options.depth = value
                    .parse()
                    .map_err(|_| format!("invalid depth '{value}'"))?;
            }
            "--fen" => {
                let value = iter.next().ok_or("--fen needs a value")?;
                options.fen = Some(value.clone());
            }
            "-h" | "--help" => return Err(USAGE.to_string()),
            other => return Err(format!("unknown argument '{other}'\n{USAGE}")),
        }
    }
    Ok(options)
}

fn end_message(result: GameResult) -> &'static str {
    match result {
        GameResult::WhiteWins => "White wins!",
        GameResult::BlackWins => "Black wins!",
        GameResult::Draw => "Draw!",
        GameResult::Ongoing => "Game abandoned.",
    }
}

/// Print `text` and read one trimmed line. `None` once input is closed.
fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, text: &str) -> Option<String> {
    print!("{text}");
    io::stdout().flush().ok()?;
    let line = lines.next()?.ok()?;
    Some(line.trim().to_string())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let mut game = match options.fen.as_deref().map(Game::from_fen) {
        Some(Ok(game)) => game,
        Some(Err(e)) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
        None => Game::new(),
    };

    let params = SearchParams {
        base_depth: options.depth,
        ..SearchParams::default()
    };
    let mut computer = ComputerPlayer::with_params(options.computer, params);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    println!("you play {}; type 'new' to restart, 'quit' to leave", options.computer.opposite());

    loop {
        println!("{game}");
        if game.is_game_over() {
            let result = game.result();
            println!("{} ({result})", end_message(result));
            match prompt(&mut lines, "new game? [new/quit]> ").as_deref() {
                Some("new") => game.reset(),
                _ => break,
            }
            continue;
        }

        if game.turn() == computer.side() {
            match computer.play(&mut game) {
                Some(mv) => {
                    if let Some(report) = computer.last_report() {
                        println!(
                            "computer: {} (depth {}, nodes {}, cutoffs {}, pruned {:.2}%)",
                            format_uci(&mv),
                            report.depth,
                            report.stats.nodes,
                            report.stats.cutoffs,
                            report.stats.prune_percent()
                        );
                    }
                }
                None => break,
            }
            continue;
        }

        if game.is_check() {
            println!("check!");
        }
        let Some(line) = prompt(&mut lines, &format!("{} to move> ", game.turn())) else {
            println!("{}", end_message(GameResult::Ongoing));
            break;
        };

        match line.as_str() {
            "" => {}
            "quit" | "exit" => break,
            "new" => game.reset(),
            "fen" => println!("{}", game.to_fen()),
            "moves" => {
                let moves: Vec<String> = game.legal_moves().iter().map(format_uci).collect();
                println!("{}", moves.join(" "));
            }
            "undo" => {
                // Take back the computer's reply and the player's move.
                game.undo_move();
                game.undo_move();
            }
            text => {
                if let Err(e) = game.push_uci(text) {
                    println!("{e}");
                }
            }
        }
    }

    ExitCode::SUCCESS
}
