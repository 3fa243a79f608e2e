use crate::board::eval::Score;

/// Summary of one finished top-level search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchInfo {
    pub depth: u32,
    pub nodes: u64,
    pub cutoffs: u64,
    pub prune_percent: f64,
    pub score: Score,
    /// The search stopped early on a move that mates immediately
    pub mate_found: bool,
}

pub trait SearchLogger: Send {
    fn info(&self, info: &SearchInfo);
}

/// Writes one `debug` record per search through the `log` facade.
pub struct LogLogger;

impl SearchLogger for LogLogger {
    fn info(&self, info: &SearchInfo) {
        log::debug!(
            "search depth {} nodes {} cutoffs {} pruned {:.2}% score {}{}",
            info.depth,
            info.nodes,
            info.cutoffs,
            info.prune_percent,
            info.score,
            if info.mate_found { " (mate)" } else { "" }
        );
    }
}

/// Discards all search diagnostics.
pub struct NullLogger;

impl SearchLogger for NullLogger {
    fn info(&self, _info: &SearchInfo) {}
}
