pub mod clipboard;
pub mod messages;
pub mod render;
