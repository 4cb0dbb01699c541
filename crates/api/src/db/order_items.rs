//! Order item repository.
//!
//! Each item row is joined with its product so callers get a complete
//! [`OrderItem`] in one round trip.

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;

use course_shop_core::{OrderId, OrderItem, OrderItemId, Product, ProductId};

use super::{Repository, RepositoryError};

const SELECT_ITEMS: &str = r"
    SELECT oi.id, oi.order_id, oi.quantity, oi.price,
           p.id AS product_id,
           p.name AS product_name,
           p.description AS product_description,
           p.price AS product_price,
           p.img_url AS product_img_url
    FROM order_items oi
    JOIN products p ON p.id = oi.product_id
";

#[derive(Debug, sqlx::FromRow)]
struct OrderItemRow {
    id: OrderItemId,
    order_id: OrderId,
    quantity: i32,
    price: Decimal,
    product_id: ProductId,
    product_name: String,
    product_description: String,
    product_price: Decimal,
    product_img_url: String,
}

impl From<OrderItemRow> for OrderItem {
    fn from(row: OrderItemRow) -> Self {
        Self {
            id: row.id,
            order_id: row.order_id,
            product: Product {
                id: row.product_id,
                name: row.product_name,
                description: row.product_description,
                price: row.product_price,
                img_url: row.product_img_url,
            },
            quantity: row.quantity,
            price: row.price,
        }
    }
}

/// Repository for order item database operations.
#[derive(Debug, Clone)]
pub struct OrderItemRepository {
    pool: PgPool,
}

impl OrderItemRepository {
    /// Create a new order item repository.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get the items of several orders at once, grouped by order.
    ///
    /// Orders without items have no entry in the returned map.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_by_orders(
        &self,
        order_ids: &[OrderId],
    ) -> Result<HashMap<OrderId, Vec<OrderItem>>, RepositoryError> {
        if order_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let query = format!("{SELECT_ITEMS} WHERE oi.order_id = ANY($1) ORDER BY oi.id");
        let rows = sqlx::query_as::<_, OrderItemRow>(&query)
            .bind(order_ids)
            .fetch_all(&self.pool)
            .await?;

        Ok(group_by_order(rows.into_iter().map(OrderItem::from)))
    }
}

/// Group items under their owning order, keeping their relative order.
fn group_by_order(
    items: impl IntoIterator<Item = OrderItem>,
) -> HashMap<OrderId, Vec<OrderItem>> {
    let mut grouped: HashMap<OrderId, Vec<OrderItem>> = HashMap::new();
    for item in items {
        grouped.entry(item.order_id).or_default().push(item);
    }
    grouped
}

#[async_trait]
impl Repository<OrderItem> for OrderItemRepository {
    async fn find_all(&self) -> Result<Vec<OrderItem>, RepositoryError> {
        let query = format!("{SELECT_ITEMS} ORDER BY oi.id");
        let rows = sqlx::query_as::<_, OrderItemRow>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(OrderItem::from).collect())
    }

    async fn find_by_id(&self, id: OrderItemId) -> Result<Option<OrderItem>, RepositoryError> {
        let query = format!("{SELECT_ITEMS} WHERE oi.id = $1");
        let row = sqlx::query_as::<_, OrderItemRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(OrderItem::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, order: i64) -> OrderItemRow {
        OrderItemRow {
            id: OrderItemId::new(id),
            order_id: OrderId::new(order),
            quantity: 2,
            price: Decimal::new(9050, 2),
            product_id: ProductId::new(1),
            product_name: "The Lord of the Rings".to_string(),
            product_description: "Lorem ipsum dolor sit amet.".to_string(),
            product_price: Decimal::new(9900, 2),
            product_img_url: String::new(),
        }
    }

    #[test]
    fn test_row_keeps_item_price_apart_from_product_price() {
        let item = OrderItem::from(row(1, 1));

        assert_eq!(item.price, Decimal::new(9050, 2));
        assert_eq!(item.product.price, Decimal::new(9900, 2));
        assert_eq!(item.sub_total(), Decimal::new(18100, 2));
    }

    #[test]
    fn test_group_by_order_separates_orders() {
        let items = [row(1, 1), row(2, 2), row(3, 1)].map(OrderItem::from);

        let grouped = group_by_order(items);

        assert_eq!(grouped.len(), 2);
        let first: Vec<OrderItemId> = grouped[&OrderId::new(1)].iter().map(|i| i.id).collect();
        assert_eq!(first, vec![OrderItemId::new(1), OrderItemId::new(3)]);
        let second: Vec<OrderItemId> = grouped[&OrderId::new(2)].iter().map(|i| i.id).collect();
        assert_eq!(second, vec![OrderItemId::new(2)]);
    }

    #[test]
    fn test_group_by_order_empty() {
        assert!(group_by_order(Vec::new()).is_empty());
    }
}
