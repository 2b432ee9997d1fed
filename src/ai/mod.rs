pub mod eval;
pub mod search;

pub use eval::evaluate;
pub use search::{SearchStats, Searcher, choose_move};
