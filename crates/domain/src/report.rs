//! Audit records appended to the job log files.
//!
//! Each report renders to exactly the text written in one append, trailing
//! newline included.

use crate::order::PendingOrder;
use crate::product::Product;
use crate::timestamp::{HEARTBEAT_TIMESTAMP_FORMAT, LOG_TIMESTAMP_FORMAT};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupReport {
    pub deleted: u64,
    pub started_at: DateTime<Utc>,
    pub cutoff: DateTime<Utc>,
}

impl CleanupReport {
    pub fn new(deleted: u64, started_at: DateTime<Utc>, cutoff: DateTime<Utc>) -> Self {
        Self {
            deleted,
            started_at,
            cutoff,
        }
    }

    /// `[YYYY-MM-DD HH:MM:SS] Deleted <N> inactive customers`, no newline.
    pub fn log_line(&self) -> String {
        format!(
            "[{}] Deleted {} inactive customers",
            self.started_at.format(LOG_TIMESTAMP_FORMAT),
            self.deleted
        )
    }

    pub fn render(&self) -> String {
        let mut line = self.log_line();
        line.push('\n');
        line
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderReport {
    pub started_at: DateTime<Utc>,
    pub orders: Vec<PendingOrder>,
}

impl ReminderReport {
    pub fn new(started_at: DateTime<Utc>, orders: Vec<PendingOrder>) -> Self {
        Self { started_at, orders }
    }

    pub fn render(&self) -> String {
        let timestamp = self.started_at.format(LOG_TIMESTAMP_FORMAT);
        if self.orders.is_empty() {
            return format!("\n[{timestamp}] No pending orders found.\n");
        }

        let mut block = format!(
            "\n[{timestamp}] Processing {} pending orders:\n",
            self.orders.len()
        );
        for order in &self.orders {
            let email = order.customer_email.as_deref().unwrap_or("N/A");
            block.push_str(&format!(
                "  - Order ID: {}, Customer Email: {}\n",
                order.order_id, email
            ));
        }
        block
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestockReport {
    pub started_at: DateTime<Utc>,
    pub outcome: Result<Vec<Product>, String>,
}

impl RestockReport {
    pub fn succeeded(started_at: DateTime<Utc>, products: Vec<Product>) -> Self {
        Self {
            started_at,
            outcome: Ok(products),
        }
    }

    pub fn failed(started_at: DateTime<Utc>, error: impl Into<String>) -> Self {
        Self {
            started_at,
            outcome: Err(error.into()),
        }
    }

    pub fn updated_count(&self) -> u64 {
        self.outcome.as_ref().map_or(0, |p| p.len() as u64)
    }

    pub fn render(&self) -> String {
        let mut block = format!(
            "\n\n=== Update Run: {} ===\n",
            self.started_at.format(LOG_TIMESTAMP_FORMAT)
        );
        match &self.outcome {
            Ok(products) => {
                for product in products {
                    block.push_str(&format!(
                        "{} \u{2192} New Stock: {}\n",
                        product.name, product.stock
                    ));
                }
                block.push_str("Status: SUCCESS\n");
            }
            Err(error) => {
                block.push_str(&format!("Error: {error}\n"));
            }
        }
        block
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeartbeatReport {
    pub at: DateTime<Utc>,
    pub probe: Result<(), String>,
}

impl HeartbeatReport {
    pub fn new(at: DateTime<Utc>, probe: Result<(), String>) -> Self {
        Self { at, probe }
    }

    pub fn store_responsive(&self) -> bool {
        self.probe.is_ok()
    }

    pub fn log_line(&self) -> String {
        let timestamp = self.at.format(HEARTBEAT_TIMESTAMP_FORMAT);
        match &self.probe {
            Ok(()) => format!("{timestamp} CRM is alive - store responsive"),
            Err(e) => format!("{timestamp} CRM is alive - store check failed: {e}"),
        }
    }

    pub fn render(&self) -> String {
        let mut line = self.log_line();
        line.push('\n');
        line
    }
}
