use std::io;
use std::path::PathBuf;

use rust_decimal::Decimal;

/// Failures reported to the user through the error notification.
///
/// None of them is fatal: the form stays usable and the in-memory account is
/// kept as it was when the error happened.
#[derive(thiserror::Error, Debug)]
pub enum AccountError {
    #[error("Enter a valid amount")]
    InvalidAmount { input: String },
    #[error("Insufficient balance")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },
    #[error("Error saving data to {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AccountError {
    pub fn invalid_amount(input: &str) -> Self {
        AccountError::InvalidAmount {
            input: input.to_owned(),
        }
    }

    /// Extra line shown under the message in the error notification.
    pub fn hint(&self) -> Option<String> {
        match self {
            AccountError::InvalidAmount { input } if input.trim().is_empty() => {
                Some("The amount field is empty".to_owned())
            }
            AccountError::InvalidAmount { input } => Some(format!("{input:?} is not accepted")),
            AccountError::InsufficientFunds {
                requested,
                available,
            } => Some(format!("Requested {requested}, available {available}")),
            AccountError::Persistence { .. } => None,
        }
    }
}
