//! Services sitting between the HTTP handlers and the repositories.
//!
//! # Services
//!
//! - [`CategoryService`] - Reads categories
//! - [`OrderService`] - Reads orders (with client and items resolved)
//!
//! Both are the same [`ReadService`] over a different entity. They add no
//! business rules; their one job is turning an absent entity into
//! [`ServiceError::NotFound`].

pub mod error;
pub mod read;

use course_shop_core::{Category, Order};

pub use error::ServiceError;
pub use read::ReadService;

/// Service over the category repository.
pub type CategoryService = ReadService<Category>;

/// Service over the order repository.
pub type OrderService = ReadService<Order>;
