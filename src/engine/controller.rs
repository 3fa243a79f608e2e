//! Computer player implementation.

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::Mutex;

use crate::board::{
    format_uci, Game, Move, Rules, Score, SearchParams, SearchResult, SearchStats, Searcher, Side,
};

/// Search thread stack size (8 MB)
const SEARCH_STACK_SIZE: usize = 8 * 1024 * 1024;

/// What the last finished search found, for telemetry readers.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchReport {
    pub side: Side,
    /// Chosen move in UCI notation
    pub best_move: Option<String>,
    pub score: Score,
    pub depth: u32,
    pub stats: SearchStats,
}

impl SearchReport {
    fn new(side: Side, result: &SearchResult<Move>) -> Self {
        SearchReport {
            side,
            best_move: result.best_move.as_ref().map(format_uci),
            score: result.score,
            depth: result.depth,
            stats: result.stats,
        }
    }
}

/// A search running on its own thread over a private copy of the game.
pub struct SearchJob {
    handle: JoinHandle<Option<Move>>,
}

impl SearchJob {
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the search and return its move.
    ///
    /// A panic on the search thread is resumed on the caller's.
    #[must_use]
    pub fn wait(self) -> Option<Move> {
        match self.handle.join() {
            Ok(mv) => mv,
            Err(payload) => std::panic::resume_unwind(payload),
        }
    }
}

/// Plays one side of a game.
pub struct ComputerPlayer {
    searcher: Searcher,
    last_report: Arc<Mutex<Option<SearchReport>>>,
}

impl ComputerPlayer {
    #[must_use]
    pub fn new(side: Side) -> Self {
        Self::with_params(side, SearchParams::default())
    }

    #[must_use]
    pub fn with_params(side: Side, params: SearchParams) -> Self {
        ComputerPlayer {
            searcher: Searcher::with_params(side, params),
            last_report: Arc::new(Mutex::new(None)),
        }
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.searcher.side()
    }

    #[must_use]
    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }

    /// Snapshot of the most recent search report.
    #[must_use]
    pub fn last_report(&self) -> Option<SearchReport> {
        self.last_report.lock().clone()
    }

    /// Shared handle other threads can poll for search reports.
    #[must_use]
    pub fn report_handle(&self) -> Arc<Mutex<Option<SearchReport>>> {
        Arc::clone(&self.last_report)
    }

    /// Choose a move without playing it. `None` when it is not this side's
    /// turn, the game is over, or there is no legal move.
    pub fn think(&mut self, game: &mut Game) -> Option<Move> {
        if game.turn() != self.side() || game.is_game_over() {
            return None;
        }
        let depth = self.searcher.params().base_depth;
        let result = self.searcher.search(game, depth);
        *self.last_report.lock() = Some(SearchReport::new(self.side(), &result));
        result.best_move
    }

    /// Choose a move and play it on `game`.
    pub fn play(&mut self, game: &mut Game) -> Option<Move> {
        let mv = self.think(game)?;
        game.apply_move(&mv);
        log::info!("{} plays {}", self.side(), format_uci(&mv));
        Some(mv)
    }

    /// Start a search on a worker thread.
    ///
    /// The worker gets its own searcher and its own copy of `game`, so the
    /// caller's game is never touched and may keep changing meanwhile.
    pub fn spawn_search(&self, game: &Game) -> io::Result<SearchJob> {
        let side = self.side();
        let params = self.searcher.params().clone();
        let mut game = game.clone();
        let report = Arc::clone(&self.last_report);

        let handle = thread::Builder::new()
            .name(format!("search-{side}").to_lowercase())
            .stack_size(SEARCH_STACK_SIZE)
            .spawn(move || {
                if game.turn() != side || game.is_game_over() {
                    return None;
                }
                let mut searcher = Searcher::with_params(side, params);
                let depth = searcher.params().base_depth;
                let result = searcher.search(&mut game, depth);
                *report.lock() = Some(SearchReport::new(side, &result));
                result.best_move
            })?;

        Ok(SearchJob { handle })
    }
}
