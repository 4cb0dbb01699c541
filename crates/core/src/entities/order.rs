//! Orders and their line items.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::{Product, User};
use crate::types::{Entity, OrderId, OrderItemId, OrderStatus};

/// An order placed by a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    /// When the order was placed.
    pub moment: DateTime<Utc>,
    pub status: OrderStatus,
    /// The user who placed the order.
    pub client: User,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Sum of all item subtotals.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items.iter().map(OrderItem::sub_total).sum()
    }
}

impl Entity for Order {
    type Id = OrderId;

    const NAME: &'static str = "Order";

    fn id(&self) -> OrderId {
        self.id
    }
}

impl Serialize for Order {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Order", 6)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("moment", &self.moment)?;
        state.serialize_field("orderStatus", &self.status)?;
        state.serialize_field("client", &self.client)?;
        state.serialize_field("items", &self.items)?;
        state.serialize_field("total", &self.total())?;
        state.end()
    }
}

/// One product line of an order.
///
/// `price` is the unit price at the time the order was placed, which may
/// differ from the product's current price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    pub id: OrderItemId,
    /// Back reference to the owning order, by id only.
    pub order_id: OrderId,
    pub product: Product,
    pub quantity: i32,
    pub price: Decimal,
}

impl OrderItem {
    /// Unit price times quantity.
    #[must_use]
    pub fn sub_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

impl Entity for OrderItem {
    type Id = OrderItemId;

    const NAME: &'static str = "OrderItem";

    fn id(&self) -> OrderItemId {
        self.id
    }
}

impl Serialize for OrderItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("OrderItem", 6)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("orderId", &self.order_id)?;
        state.serialize_field("product", &self.product)?;
        state.serialize_field("quantity", &self.quantity)?;
        state.serialize_field("price", &self.price)?;
        state.serialize_field("subTotal", &self.sub_total())?;
        state.end()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;
    use crate::types::{ProductId, UserId};

    fn product(id: i64, price: Decimal) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            description: String::new(),
            price,
            img_url: String::new(),
        }
    }

    fn item(id: i64, quantity: i32, price: Decimal) -> OrderItem {
        OrderItem {
            id: OrderItemId::new(id),
            order_id: OrderId::new(5),
            product: product(id, price),
            quantity,
            price,
        }
    }

    fn order(items: Vec<OrderItem>) -> Order {
        Order {
            id: OrderId::new(5),
            moment: Utc.with_ymd_and_hms(2019, 6, 20, 19, 53, 7).unwrap(),
            status: OrderStatus::Paid,
            client: User {
                id: UserId::new(1),
                name: "Maria Brown".to_string(),
                email: "maria@gmail.com".to_string(),
                phone: "988888888".to_string(),
            },
            items,
        }
    }

    #[test]
    fn test_sub_total_multiplies_price_by_quantity() {
        assert_eq!(item(1, 3, Decimal::new(1050, 2)).sub_total(), Decimal::new(3150, 2));
    }

    #[test]
    fn test_total_sums_items() {
        let order = order(vec![
            item(1, 2, Decimal::new(905, 1)),
            item(2, 1, Decimal::new(1250, 0)),
        ]);
        assert_eq!(order.total(), Decimal::new(1431, 0));
    }

    #[test]
    fn test_total_of_empty_order_is_zero() {
        assert_eq!(order(Vec::new()).total(), Decimal::ZERO);
    }

    #[test]
    fn test_order_json_shape() {
        let value = serde_json::to_value(order(vec![item(1, 2, Decimal::new(905, 1))])).unwrap();

        assert_eq!(value["id"], json!(5));
        assert_eq!(value["orderStatus"], json!("PAID"));
        assert_eq!(value["moment"], json!("2019-06-20T19:53:07Z"));
        assert_eq!(value["client"]["name"], json!("Maria Brown"));
        assert_eq!(value["items"][0]["orderId"], json!(5));
        assert_eq!(value["items"][0]["subTotal"], json!(181.0));
        assert_eq!(value["total"], json!(181.0));
        assert!(value["items"][0].get("order").is_none());
    }
}
