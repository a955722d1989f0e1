//! Domain layer - core business logic and entities

pub mod cluster;
pub mod notification;
pub mod pool;
