use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// UI settings, kept in eframe's storage between runs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_file: PathBuf,
    pub currency: String,
    /// A negative deposit lowers the balance and a negative withdrawal
    /// raises it. Switched off, both are refused as invalid amounts.
    pub allow_negative_amounts: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("bank_data.txt"),
            currency: String::new(),
            allow_negative_amounts: true,
        }
    }
}
