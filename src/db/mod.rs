pub mod bindings;
pub mod entries;
pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod stats;
