//! Payment Status

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::labels::UnknownLabel;

/// Lifecycle tag of a payment attempt: pending, then approved or rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum PaymentStatus {
    Pending,
    Approved,
    Rejected,
}

impl PaymentStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::Approved, Self::Rejected];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pendiente",
            Self::Approved => "aprobado",
            Self::Rejected => "rechazado",
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = UnknownLabel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| UnknownLabel::new("payment status", value))
    }
}

impl From<PaymentStatus> for &'static str {
    fn from(value: PaymentStatus) -> Self {
        value.as_str()
    }
}

impl TryFrom<String> for PaymentStatus {
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
        for status in PaymentStatus::ALL {
            let json = serde_json::to_string(&status)?;

            assert_eq!(json, format!("\"{}\"", status.as_str()));
            assert_eq!(serde_json::from_str::<PaymentStatus>(&json)?, status);
            assert_eq!(status.to_string().parse::<PaymentStatus>()?, status);
        }

        Ok(())
    }

    #[test]
    fn approved_literal_is_preserved() -> TestResult {
        assert_eq!(serde_json::to_string(&PaymentStatus::Approved)?, "\"aprobado\"");

        Ok(())
    }

    #[test]
    fn unknown_literal_is_rejected() {
        let result = "pagado".parse::<PaymentStatus>();

        assert!(
            matches!(&result, Err(UnknownLabel { kind: "payment status", value }) if value == "pagado"),
            "expected UnknownLabel, got {result:?}"
        );
    }

    #[test]
    fn pending_is_the_only_open_status() {
        assert!(!PaymentStatus::Pending.is_terminal());
        assert!(PaymentStatus::Approved.is_terminal());
        assert!(PaymentStatus::Rejected.is_terminal());
    }
}
