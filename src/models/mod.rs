pub mod category;
pub mod excuse;
pub mod theme;

pub use category::Category;
pub use excuse::{ExcuseRecord, HistoryEntry};
pub use theme::Theme;
