//! Course Shop Core - Shared entity library.
//!
//! This crate provides the types shared by every Course Shop component:
//! - `api` - Read-only HTTP backend for categories and orders
//! - `cli` - Command-line tools for migrations and demo data
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no database access,
//! no HTTP. Entities are plain records; relationships between them are
//! resolved by the persistence layer in the `api` crate.
//!
//! # Modules
//!
//! - [`types`] - Newtype ids, the [`Entity`] trait, and [`OrderStatus`]
//! - [`entities`] - `Category`, `User`, `Product`, `Order`, `OrderItem`

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod entities;
pub mod types;

pub use entities::*;
pub use types::*;
