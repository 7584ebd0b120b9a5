pub mod add;
pub mod chart;
pub mod config;
pub mod del;
pub mod export;
pub mod glossary;
pub mod init;
pub mod list;
pub mod log;
