pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

pub use formatting::strip_ansi;
