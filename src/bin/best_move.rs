use std::env;
use std::process::ExitCode;

use chess_ai::board::{format_uci, Game, NullLogger, Rules, Searcher};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let Some(fen) = args.get(1) else {
        eprintln!("usage: best_move <fen> [depth]");
        return ExitCode::FAILURE;
    };
    let depth: u32 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(3);

    let mut game = match Game::from_fen(fen) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut searcher = Searcher::new(game.side_to_move()).with_logger(NullLogger);
    let result = searcher.search(&mut game, depth);

    println!("side_to_move: {}", game.side_to_move());
    println!("legal_moves: {}", game.legal_moves().len());
    println!("depth: {}", result.depth);
    match result.best_move {
        Some(mv) => println!("bestmove: {}", format_uci(&mv)),
        None => println!("bestmove: (none)"),
    }
    println!("score: {}", result.score);
    println!("nodes: {}", result.stats.nodes);
    println!("cutoffs: {}", result.stats.cutoffs);
    println!("pruned: {:.2}%", result.stats.prune_percent());
    ExitCode::SUCCESS
}
