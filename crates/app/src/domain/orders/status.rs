//! Order Status

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::labels::UnknownLabel;

/// Lifecycle tag of a customer order.
///
/// Nominal flow is pending, preparation, shipped, delivered, with cancelled
/// as the alternate terminal. Which moves are legal is a business rule owned
/// elsewhere; only the label set lives here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum OrderStatus {
    Pending,
    Preparation,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::Preparation,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pendiente",
            Self::Preparation => "preparacion",
            Self::Shipped => "enviado",
            Self::Delivered => "entregado",
            Self::Cancelled => "cancelado",
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = UnknownLabel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| UnknownLabel::new("order status", value))
    }
}

impl From<OrderStatus> for &'static str {
    fn from(value: OrderStatus) -> Self {
        value.as_str()
    }
}

impl TryFrom<String> for OrderStatus {
    type Error = UnknownLabel;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn every_status_round_trips_through_its_literal() -> TestResult {
        for status in OrderStatus::ALL {
            let json = serde_json::to_string(&status)?;

            assert_eq!(json, format!("\"{status}\""));
            assert_eq!(serde_json::from_str::<OrderStatus>(&json)?, status);
            assert_eq!(status.as_str().parse::<OrderStatus>()?, status);
        }

        Ok(())
    }

    #[test]
    fn literals_match_existing_clients() {
        let literals: Vec<_> = OrderStatus::ALL.iter().map(|s| s.as_str()).collect();

        assert_eq!(
            literals,
            ["pendiente", "preparacion", "enviado", "entregado", "cancelado"]
        );
    }

    #[test]
    fn unknown_and_miscased_literals_are_rejected() {
        for input in ["PENDIENTE", "pending", "", "pagado"] {
            let result = input.parse::<OrderStatus>();

            assert_eq!(
                result,
                Err(UnknownLabel::new("order status", input)),
                "expected {input:?} to be rejected"
            );
        }

        assert!(serde_json::from_str::<OrderStatus>("\"Enviado\"").is_err());
    }

    #[test]
    fn only_delivered_and_cancelled_are_terminal() {
        let terminal: Vec<_> = OrderStatus::ALL
            .into_iter()
            .filter(|status| status.is_terminal())
            .collect();

        assert_eq!(terminal, [OrderStatus::Delivered, OrderStatus::Cancelled]);
    }
}
