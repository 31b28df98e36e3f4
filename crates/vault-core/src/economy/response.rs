use std::fmt;

/// Outcome category of an economy call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseType {
    Success,
    Failure,
    /// The provider has no model for the requested operation
    NotImplemented,
}

impl ResponseType {
    /// Numeric id used by the host API
    pub fn id(&self) -> u8 {
        match self {
            ResponseType::Success => 1,
            ResponseType::Failure => 2,
            ResponseType::NotImplemented => 3,
        }
    }
}

/// Result of a balance-changing or bank economy call
#[derive(Debug, Clone, PartialEq)]
pub struct EconomyResponse {
    /// Amount modified by the call
    pub amount: f64,
    /// Balance after the call
    pub balance: f64,
    pub kind: ResponseType,
    pub error_message: Option<String>,
}

impl EconomyResponse {
    pub fn success(amount: f64, balance: f64) -> Self {
        Self {
            amount,
            balance,
            kind: ResponseType::Success,
            error_message: None,
        }
    }

    pub fn failure(amount: f64, balance: f64, message: impl Into<String>) -> Self {
        Self {
            amount,
            balance,
            kind: ResponseType::Failure,
            error_message: Some(message.into()),
        }
    }

    pub fn not_implemented(message: impl Into<String>) -> Self {
        Self {
            amount: 0.0,
            balance: 0.0,
            kind: ResponseType::NotImplemented,
            error_message: Some(message.into()),
        }
    }

    /// Checks if the transaction was successful.
    pub fn transaction_success(&self) -> bool {
        self.kind == ResponseType::Success
    }
}

impl fmt::Display for EconomyResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.kind, &self.error_message) {
            (ResponseType::Success, _) => write!(f, "ok: {} (balance {})", self.amount, self.balance),
            (kind, Some(message)) => write!(f, "{:?}: {}", kind, message),
            (kind, None) => write!(f, "{:?}", kind),
        }
    }
}
