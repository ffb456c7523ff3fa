pub type OrderId = i64;

/// An order placed inside the reminder window, joined with its customer's e-mail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOrder {
    pub order_id: OrderId,
    pub order_date: String,
    pub customer_email: Option<String>,
}

impl PendingOrder {
    pub fn new(order_id: OrderId, order_date: impl Into<String>, email: Option<String>) -> Self {
        Self {
            order_id,
            order_date: order_date.into(),
            customer_email: email,
        }
    }
}
