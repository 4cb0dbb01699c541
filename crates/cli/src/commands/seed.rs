//! Seed the shop database with a small demo data set.
//!
//! Inserts two users, three categories, five products, three orders and
//! four order items in a single transaction, so a failed seed leaves the
//! database untouched.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{Postgres, Transaction};

use course_shop_core::{CategoryId, OrderId, OrderStatus, ProductId, UserId};

use super::{CommandError, connect};

struct SeedUser {
    name: &'static str,
    email: &'static str,
    phone: &'static str,
}

struct SeedProduct {
    name: &'static str,
    description: &'static str,
    /// Price in cents.
    price_cents: i64,
    /// Indexes into `CATEGORIES`.
    categories: &'static [usize],
}

struct SeedOrder {
    moment: &'static str,
    status: OrderStatus,
    /// Index into `USERS`.
    client: usize,
}

struct SeedItem {
    /// Index into `ORDERS`.
    order: usize,
    /// Index into `PRODUCTS`.
    product: usize,
    quantity: i32,
}

const USERS: &[SeedUser] = &[
    SeedUser {
        name: "Maria Brown",
        email: "maria@gmail.com",
        phone: "988888888",
    },
    SeedUser {
        name: "Alex Green",
        email: "alex@gmail.com",
        phone: "977777777",
    },
];

const CATEGORIES: &[&str] = &["Electronics", "Books", "Computers"];

const PRODUCTS: &[SeedProduct] = &[
    SeedProduct {
        name: "The Lord of the Rings",
        description: "Lorem ipsum dolor sit amet, consectetur.",
        price_cents: 9050,
        categories: &[1],
    },
    SeedProduct {
        name: "Smart TV",
        description: "Nulla eu imperdiet purus. Maecenas ante.",
        price_cents: 219_000,
        categories: &[0, 2],
    },
    SeedProduct {
        name: "Macbook Pro",
        description: "Nam eleifend maximus tortor, at mollis.",
        price_cents: 125_000,
        categories: &[2],
    },
    SeedProduct {
        name: "PC Gamer",
        description: "Donec aliquet odio ac rhoncus cursus.",
        price_cents: 120_000,
        categories: &[2],
    },
    SeedProduct {
        name: "Rails for Dummies",
        description: "Cras fringilla convallis sem vel faucibus.",
        price_cents: 10_099,
        categories: &[1],
    },
];

const ORDERS: &[SeedOrder] = &[
    SeedOrder {
        moment: "2019-06-20T19:53:07Z",
        status: OrderStatus::Paid,
        client: 0,
    },
    SeedOrder {
        moment: "2019-07-21T03:42:10Z",
        status: OrderStatus::WaitingPayment,
        client: 1,
    },
    SeedOrder {
        moment: "2019-07-22T15:21:22Z",
        status: OrderStatus::WaitingPayment,
        client: 0,
    },
];

const ITEMS: &[SeedItem] = &[
    SeedItem {
        order: 0,
        product: 0,
        quantity: 2,
    },
    SeedItem {
        order: 0,
        product: 2,
        quantity: 1,
    },
    SeedItem {
        order: 1,
        product: 2,
        quantity: 2,
    },
    SeedItem {
        order: 2,
        product: 4,
        quantity: 2,
    },
];

/// Seed the database.
///
/// # Arguments
///
/// * `reset` - Truncate every shop table (and restart id sequences) first
///
/// # Errors
///
/// Returns an error if the database is unreachable or any insert fails.
pub async fn run(reset: bool) -> Result<(), CommandError> {
    let pool = connect().await?;
    let mut tx = pool.begin().await?;

    if reset {
        tracing::info!("Truncating shop tables");
        sqlx::query(
            "TRUNCATE order_items, orders, product_categories, products, categories, users \
             RESTART IDENTITY CASCADE",
        )
        .execute(&mut *tx)
        .await?;
    }

    let users = insert_users(&mut tx).await?;
    let categories = insert_categories(&mut tx).await?;
    let products = insert_products(&mut tx, &categories).await?;
    let orders = insert_orders(&mut tx, &users).await?;
    insert_items(&mut tx, &orders, &products).await?;

    tx.commit().await?;

    tracing::info!(
        users = users.len(),
        categories = categories.len(),
        products = products.len(),
        orders = orders.len(),
        items = ITEMS.len(),
        "Seeding complete"
    );
    Ok(())
}

async fn insert_users(tx: &mut Transaction<'_, Postgres>) -> Result<Vec<UserId>, CommandError> {
    let mut ids = Vec::with_capacity(USERS.len());
    for user in USERS {
        let id: UserId = sqlx::query_scalar(
            "INSERT INTO users (name, email, phone) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(user.name)
        .bind(user.email)
        .bind(user.phone)
        .fetch_one(&mut **tx)
        .await?;
        ids.push(id);
    }
    Ok(ids)
}

async fn insert_categories(
    tx: &mut Transaction<'_, Postgres>,
) -> Result<Vec<CategoryId>, CommandError> {
    let mut ids = Vec::with_capacity(CATEGORIES.len());
    for name in CATEGORIES {
        let id: CategoryId =
            sqlx::query_scalar("INSERT INTO categories (name) VALUES ($1) RETURNING id")
                .bind(*name)
                .fetch_one(&mut **tx)
                .await?;
        ids.push(id);
    }
    Ok(ids)
}

async fn insert_products(
    tx: &mut Transaction<'_, Postgres>,
    categories: &[CategoryId],
) -> Result<Vec<ProductId>, CommandError> {
    let mut ids = Vec::with_capacity(PRODUCTS.len());
    for product in PRODUCTS {
        let id: ProductId = sqlx::query_scalar(
            "INSERT INTO products (name, description, price) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(product.name)
        .bind(product.description)
        .bind(Decimal::new(product.price_cents, 2))
        .fetch_one(&mut **tx)
        .await?;

        for &category in product.categories {
            sqlx::query("INSERT INTO product_categories (product_id, category_id) VALUES ($1, $2)")
                .bind(id)
                .bind(lookup(categories, category, "category")?)
                .execute(&mut **tx)
                .await?;
        }
        ids.push(id);
    }
    Ok(ids)
}

async fn insert_orders(
    tx: &mut Transaction<'_, Postgres>,
    users: &[UserId],
) -> Result<Vec<OrderId>, CommandError> {
    let mut ids = Vec::with_capacity(ORDERS.len());
    for order in ORDERS {
        let id: OrderId = sqlx::query_scalar(
            "INSERT INTO orders (moment, order_status, client_id) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(parse_moment(order.moment)?)
        .bind(order.status.code())
        .bind(lookup(users, order.client, "user")?)
        .fetch_one(&mut **tx)
        .await?;
        ids.push(id);
    }
    Ok(ids)
}

async fn insert_items(
    tx: &mut Transaction<'_, Postgres>,
    orders: &[OrderId],
    products: &[ProductId],
) -> Result<(), CommandError> {
    for item in ITEMS {
        // Items snapshot the product's price at order time
        let product = PRODUCTS
            .get(item.product)
            .ok_or_else(|| CommandError::InvalidSeed(format!("no product {}", item.product)))?;
        let price = Decimal::new(product.price_cents, 2);
        sqlx::query(
            "INSERT INTO order_items (order_id, product_id, quantity, price) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(lookup(orders, item.order, "order")?)
        .bind(lookup(products, item.product, "product")?)
        .bind(item.quantity)
        .bind(price)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

/// Id of the `index`th inserted row of a seed table.
fn lookup<T: Copy>(ids: &[T], index: usize, what: &str) -> Result<T, CommandError> {
    ids.get(index)
        .copied()
        .ok_or_else(|| CommandError::InvalidSeed(format!("no {what} at index {index}")))
}

/// Parse an RFC 3339 seed timestamp.
fn parse_moment(moment: &str) -> Result<DateTime<Utc>, CommandError> {
    DateTime::parse_from_rfc3339(moment)
        .map(|m| m.with_timezone(&Utc))
        .map_err(|e| CommandError::InvalidSeed(format!("bad timestamp {moment:?}: {e}")))
}
