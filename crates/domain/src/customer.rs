use chrono::{DateTime, Utc};

pub type CustomerId = i64;

/// A CRM customer row. Created and edited by the web application; the
/// maintenance jobs only read and delete it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Snapshot of a customer's ordering history as seen by the inactivity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomerActivity {
    pub customer_id: CustomerId,
    /// Creation time of the newest order, `None` when the customer never ordered.
    pub last_order_at: Option<DateTime<Utc>>,
}

impl CustomerActivity {
    pub fn new(customer_id: CustomerId, last_order_at: Option<DateTime<Utc>>) -> Self {
        Self {
            customer_id,
            last_order_at,
        }
    }

    pub fn without_orders(customer_id: CustomerId) -> Self {
        Self::new(customer_id, None)
    }
}
