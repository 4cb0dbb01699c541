//! Course Shop API library.
//!
//! Read-only HTTP access to categories and orders. Requests flow through
//! `routes` → `services` → `db` repositories → `PostgreSQL`. The binary in
//! `main.rs` only loads configuration and wires these together.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod telemetry;
