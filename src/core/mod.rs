pub mod generate;
pub mod history;
pub mod random;
pub mod select;
pub mod state;
pub mod timer;

pub use history::{HistoryLog, MAX_HISTORY, clear_history, record_selection};
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use select::{select_next, select_next_in};
pub use state::AppState;
