pub mod catalog;
pub mod config;
pub mod generate;
pub mod history;
pub mod init;
pub mod log;
pub mod theme;
