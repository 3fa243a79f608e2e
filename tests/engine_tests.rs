//! Computer player tests.

use std::thread;
use std::time::Duration;

use chess_ai::board::{format_uci, Game, NullLogger, Rules, SearchParams, Searcher, Side, STARTING_FEN};
use chess_ai::engine::ComputerPlayer;

fn shallow() -> SearchParams {
    SearchParams {
        base_depth: 2,
        endgame_depth: 2,
        ..SearchParams::default()
    }
}

#[test]
fn waits_for_its_turn() {
    let mut game = Game::new();
    let mut black = ComputerPlayer::with_params(Side::Black, shallow());
    assert_eq!(black.play(&mut game), None);
    assert_eq!(game.to_fen(), STARTING_FEN);
    assert!(black.last_report().is_none());
}

#[test]
fn plays_a_reply() {
    let mut game = Game::new();
    game.push_uci("e2e4").expect("legal");
    let mut black = ComputerPlayer::with_params(Side::Black, shallow());

    let legal = game.legal_moves();
    let mv = black.play(&mut game).expect("black has moves");
    assert!(legal.contains(&mv));
    assert_eq!(game.turn(), Side::White);
    assert_eq!(game.last_move(), Some(&mv));

    let report = black.last_report().expect("report recorded");
    assert_eq!(report.side, Side::Black);
    assert_eq!(report.best_move, Some(format_uci(&mv)));
    assert_eq!(report.depth, 2);
    assert!(report.stats.nodes > 0);
}

#[test]
fn does_not_move_when_game_is_over() {
    let mut game = Game::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
        .expect("valid fen");
    let mut white = ComputerPlayer::new(Side::White);
    assert_eq!(white.think(&mut game), None);
    assert_eq!(white.play(&mut game), None);
}

#[test]
fn background_search_uses_private_copy() {
    let game = Game::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 0 4")
        .expect("valid fen");
    let white = ComputerPlayer::with_params(Side::White, shallow());
    let reports = white.report_handle();

    let job = white.spawn_search(&game).expect("thread spawns");
    let mv = job.wait().expect("white has moves");

    assert_eq!(format_uci(&mv), "h5f7");
    assert_eq!(game.ply(), 0);
    let report = reports.lock().clone().expect("worker published a report");
    assert_eq!(report.best_move.as_deref(), Some("h5f7"));
    assert_eq!(white.last_report(), Some(report));
}

#[test]
fn background_search_matches_foreground() {
    let mut game = Game::new();
    game.push_uci("d2d4").expect("legal");
    let mut black = ComputerPlayer::with_params(Side::Black, shallow());

    let job = black.spawn_search(&game).expect("thread spawns");
    let background = job.wait();
    let foreground = black.think(&mut game);
    assert_eq!(background, foreground);
}

#[test]
fn background_search_reports_completion() {
    let game = Game::new();
    let white = ComputerPlayer::with_params(Side::White, shallow());

    let job = white.spawn_search(&game).expect("thread spawns");
    while !job.is_finished() {
        thread::sleep(Duration::from_millis(1));
    }
    assert!(job.is_finished());
    assert!(job.wait().is_some());
    assert!(white.last_report().is_some());
}

#[test]
fn drawn_root_is_left_to_the_player() {
    // Bare kings: drawn, yet the king still has moves.
    let mut game = Game::from_fen("8/8/4k3/8/8/3K4/8/8 w - - 0 1").expect("valid fen");
    assert!(game.is_game_over());

    let mut searcher = Searcher::with_params(Side::White, shallow()).with_logger(NullLogger);
    assert!(searcher.search_fixed_depth(&mut game, 1).best_move.is_some());

    let mut white = ComputerPlayer::with_params(Side::White, shallow());
    assert_eq!(white.think(&mut game), None);
}
