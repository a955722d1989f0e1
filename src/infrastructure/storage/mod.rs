//! Local persistence

pub mod pool_store;

pub use pool_store::JsonPoolStore;
