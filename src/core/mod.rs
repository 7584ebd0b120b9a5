pub mod add;
pub mod calculator;
pub mod chart;
pub mod config;
pub mod del;
pub mod filter;
pub mod glossary;
pub mod log;
