//! Infrastructure layer - network clients and persistence

pub mod blockchain;
pub mod storage;
