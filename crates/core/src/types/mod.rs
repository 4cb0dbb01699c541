//! Core types for Course Shop.
//!
//! This module provides type-safe wrappers for entity identity and status.

pub mod entity;
pub mod id;
pub mod status;

pub use entity::Entity;
pub use id::*;
pub use status::{OrderStatus, UnknownOrderStatus};
