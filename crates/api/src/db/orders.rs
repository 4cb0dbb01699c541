//! Order repository.
//!
//! An order row only stores `client_id`; the client and the items are
//! resolved through [`UserRepository`] and [`OrderItemRepository`] when the
//! order is loaded.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use course_shop_core::{Order, OrderId, OrderItem, OrderStatus, User, UserId};

use super::{OrderItemRepository, Repository, RepositoryError, UserRepository};

#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: OrderId,
    moment: DateTime<Utc>,
    order_status: i32,
    client_id: UserId,
}

/// Repository for order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: PgPool,
    users: UserRepository,
    items: OrderItemRepository,
}

impl OrderRepository {
    /// Create a new order repository.
    ///
    /// The related user and item repositories share the same pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            items: OrderItemRepository::new(pool.clone()),
            pool,
        }
    }

    /// Turn order rows into full orders with client and items attached.
    async fn resolve(&self, rows: Vec<OrderRow>) -> Result<Vec<Order>, RepositoryError> {
        let order_ids: Vec<OrderId> = rows.iter().map(|r| r.id).collect();
        let items = self.items.find_by_orders(&order_ids).await?;

        let mut clients: HashMap<UserId, User> = HashMap::new();
        for row in &rows {
            if clients.contains_key(&row.client_id) {
                continue;
            }
            if let Some(client) = self.users.find_by_id(row.client_id).await? {
                clients.insert(row.client_id, client);
            }
        }

        assemble(rows, items, &clients)
    }
}

/// Build orders from their rows, the items grouped by order, and the
/// clients keyed by id.
///
/// Rows keep their order. An order with no entry in `items` gets no items.
fn assemble(
    rows: Vec<OrderRow>,
    mut items: HashMap<OrderId, Vec<OrderItem>>,
    clients: &HashMap<UserId, User>,
) -> Result<Vec<Order>, RepositoryError> {
    rows.into_iter()
        .map(|row| {
            let client = clients.get(&row.client_id).cloned().ok_or_else(|| {
                RepositoryError::DataCorruption(format!(
                    "order {} references missing user {}",
                    row.id, row.client_id
                ))
            })?;

            let status = OrderStatus::from_code(row.order_status).map_err(|e| {
                RepositoryError::DataCorruption(format!("order {}: {e}", row.id))
            })?;

            Ok(Order {
                id: row.id,
                moment: row.moment,
                status,
                client,
                items: items.remove(&row.id).unwrap_or_default(),
            })
        })
        .collect()
}

#[async_trait]
impl Repository<Order> for OrderRepository {
    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            "SELECT id, moment, order_status, client_id FROM orders ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        self.resolve(rows).await
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let row = sqlx::query_as::<_, OrderRow>(
            "SELECT id, moment, order_status, client_id FROM orders WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };
        Ok(self.resolve(vec![row]).await?.into_iter().next())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;
    use course_shop_core::{OrderItemId, Product, ProductId};
    use rust_decimal::Decimal;

    use super::*;

    fn row(id: i64, status: i32, client: i64) -> OrderRow {
        OrderRow {
            id: OrderId::new(id),
            moment: Utc.with_ymd_and_hms(2019, 6, 20, 19, 53, 7).unwrap(),
            order_status: status,
            client_id: UserId::new(client),
        }
    }

    fn clients() -> HashMap<UserId, User> {
        let maria = User {
            id: UserId::new(1),
            name: "Maria Brown".to_string(),
            email: "maria@gmail.com".to_string(),
            phone: "988888888".to_string(),
        };
        HashMap::from([(maria.id, maria)])
    }

    fn item(id: i64, order: i64) -> OrderItem {
        OrderItem {
            id: OrderItemId::new(id),
            order_id: OrderId::new(order),
            product: Product {
                id: ProductId::new(1),
                name: "Smart TV".to_string(),
                description: "Nulla eu imperdiet purus.".to_string(),
                price: Decimal::new(219_000, 2),
                img_url: String::new(),
            },
            quantity: 1,
            price: Decimal::new(219_000, 2),
        }
    }

    #[test]
    fn test_assemble_attaches_client_and_status() {
        let orders = assemble(vec![row(1, 2, 1)], HashMap::new(), &clients()).unwrap();

        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, OrderId::new(1));
        assert_eq!(orders[0].status, OrderStatus::Paid);
        assert_eq!(orders[0].client.name, "Maria Brown");
    }

    #[test]
    fn test_assemble_unknown_status_is_data_corruption() {
        for code in [0, 6] {
            let err = assemble(vec![row(7, code, 1)], HashMap::new(), &clients()).unwrap_err();
            assert!(
                matches!(err, RepositoryError::DataCorruption(ref msg) if msg.contains("order 7")),
                "code {code}: {err}"
            );
        }
    }

    #[test]
    fn test_assemble_missing_client_is_data_corruption() {
        let err = assemble(vec![row(3, 1, 42)], HashMap::new(), &clients()).unwrap_err();
        assert!(matches!(
            err,
            RepositoryError::DataCorruption(ref msg) if msg == "order 3 references missing user 42"
        ));
    }

    #[test]
    fn test_assemble_order_without_items_has_empty_items() {
        let orders = assemble(vec![row(2, 1, 1)], HashMap::new(), &clients()).unwrap();

        assert!(orders[0].items.is_empty());
        assert_eq!(orders[0].total(), Decimal::ZERO);
    }

    #[test]
    fn test_assemble_keeps_items_with_their_order() {
        let items = HashMap::from([
            (OrderId::new(1), vec![item(10, 1), item(11, 1)]),
            (OrderId::new(2), vec![item(20, 2)]),
        ]);

        let orders = assemble(vec![row(1, 2, 1), row(2, 1, 1)], items, &clients()).unwrap();

        let ids: Vec<Vec<OrderItemId>> = orders
            .iter()
            .map(|o| o.items.iter().map(|i| i.id).collect())
            .collect();
        assert_eq!(
            ids,
            vec![
                vec![OrderItemId::new(10), OrderItemId::new(11)],
                vec![OrderItemId::new(20)],
            ]
        );
        assert!(
            orders
                .iter()
                .all(|o| o.items.iter().all(|i| i.order_id == o.id))
        );
    }
}
