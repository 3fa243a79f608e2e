use serde::Deserialize;

use chess_ai::board::{format_uci, Game, NullLogger, Rules, Searcher, MATE_SCORE};

#[derive(Deserialize)]
struct ProblemSet {
    problems: Vec<Problem>,
}

#[derive(Deserialize)]
struct Problem {
    #[serde(rename = "type")]
    kind: String,
    fen: String,
    moves: String,
}

fn uci_from_problem_moves(moves: &str) -> String {
    moves.replace('-', "")
}

fn load_problems() -> Vec<Problem> {
    let data = include_str!("data/problems.json");
    let set: ProblemSet = serde_json::from_str(data).expect("invalid problems.json");
    set.problems
        .into_iter()
        .filter(|p| p.kind == "Mate in One")
        .collect()
}

#[test]
fn mate_in_one_solutions_are_mate() {
    for problem in load_problems() {
        let mut game = Game::from_fen(&problem.fen).expect("valid fen");
        let uci = uci_from_problem_moves(&problem.moves);
        game.push_uci(&uci).expect("solution is legal");
        assert!(
            game.is_checkmate(),
            "mate in one failed for fen: {} move: {}",
            problem.fen,
            problem.moves
        );
    }
}

#[test]
fn mate_in_one_suite() {
    for problem in load_problems() {
        let mut game = Game::from_fen(&problem.fen).expect("valid fen");
        let side = game.side_to_move();
        let mut searcher = Searcher::new(side).with_logger(NullLogger);

        let result = searcher.search_fixed_depth(&mut game, 2);
        let mv = result.best_move.expect("should find a move");
        assert_eq!(result.score, MATE_SCORE, "fen: {}", problem.fen);
        assert_eq!(game.to_fen(), problem.fen.trim(), "search must not move pieces");

        game.apply_move(&mv);
        assert!(
            game.is_checkmate(),
            "engine played {} instead of mating in fen: {} (expected {})",
            format_uci(&mv),
            problem.fen,
            problem.moves
        );
    }
}
