//! Entity records.
//!
//! Plain data with identity. Relationships are referential: an `Order`
//! carries its client and items because the persistence layer resolved them
//! on load, not because it owns their lifecycle.

pub mod category;
pub mod order;
pub mod product;
pub mod user;

pub use category::Category;
pub use order::{Order, OrderItem};
pub use product::Product;
pub use user::User;
