//! Order status enumeration.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a placed order.
///
/// Every order is created as [`Processing`](Self::Processing); transitions
/// are performed only by an administrative actor. Representing the status
/// as a closed enum keeps invalid states unrepresentable - there is no
/// fourth value a record can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Initial state for every newly placed order.
    #[default]
    Processing,
    /// The order has been dispatched to the carrier.
    Shipped,
    /// The order was canceled before dispatch.
    Canceled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Processing => write!(f, "processing"),
            Self::Shipped => write!(f, "shipped"),
            Self::Canceled => write!(f, "canceled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "processing" => Ok(Self::Processing),
            "shipped" => Ok(Self::Shipped),
            "canceled" => Ok(Self::Canceled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}
