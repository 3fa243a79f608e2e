//! Computer opponent driving the searcher over a [`Game`](crate::board::Game).

mod controller;

pub use controller::{ComputerPlayer, SearchJob, SearchReport};
