pub mod initialize;
pub mod log;
pub mod migrate;
pub mod store;

pub use store::EntryStore;
