use std::path::PathBuf;

use time::{OffsetDateTime, Time};

use crate::app::account::{parse_amount, Account};
use crate::app::config::Config;
use crate::app::error::AccountError;
use crate::app::store;

pub struct LogEntry {
    pub at: Time,
    pub text: String,
}

impl LogEntry {
    fn now(text: impl Into<String>) -> Self {
        let at = OffsetDateTime::now_local()
            .unwrap_or_else(|_| OffsetDateTime::now_utc())
            .time();
        Self {
            at,
            text: text.into(),
        }
    }
}

/// The form's state: the account, the amount field and the output log.
///
/// Each trigger reads the current field contents, updates the account and
/// writes it to the data file.
pub struct Teller {
    pub account: Account,
    pub amount: String,
    pub log: Vec<LogEntry>,
    data_file: PathBuf,
}

impl Teller {
    /// Restores the last saved account. A missing or unreadable file leaves
    /// an empty account and is never reported to the user.
    pub fn open(cfg: &Config) -> Self {
        let account = match store::load(&cfg.data_file) {
            Ok(account) => {
                log::info!("restored account from {}", cfg.data_file.display());
                account
            }
            Err(e) => {
                log::debug!("starting with an empty account: {e:#}");
                Account::default()
            }
        };

        Self {
            account,
            amount: String::new(),
            log: Vec::new(),
            data_file: cfg.data_file.clone(),
        }
    }

    pub fn create(&mut self, _cfg: &Config) -> Result<(), AccountError> {
        self.account.create();
        log::info!("created account {:?}", self.account.number);
        self.log.clear();
        self.log.push(LogEntry::now("Account created successfully"));
        self.persist()
    }

    pub fn deposit(&mut self, cfg: &Config) -> Result<(), AccountError> {
        let amount = parse_amount(&self.amount, cfg.allow_negative_amounts)?;
        self.account.deposit(amount)?;
        log::info!("deposited {amount}, balance {}", self.account.balance);
        self.log
            .push(LogEntry::now(format!("Deposited: {}{amount}", cfg.currency)));
        self.persist()
    }

    pub fn withdraw(&mut self, cfg: &Config) -> Result<(), AccountError> {
        let amount = parse_amount(&self.amount, cfg.allow_negative_amounts)?;
        self.account.withdraw(amount)?;
        log::info!("withdrew {amount}, balance {}", self.account.balance);
        self.log
            .push(LogEntry::now(format!("Withdrawn: {}{amount}", cfg.currency)));
        self.persist()
    }

    pub fn view(&mut self, cfg: &Config) -> Result<(), AccountError> {
        self.log.clear();
        self.log.extend(
            self.account
                .view(&cfg.currency)
                .lines()
                .map(LogEntry::now),
        );
        Ok(())
    }

    fn persist(&self) -> Result<(), AccountError> {
        store::save(&self.data_file, &self.account)
    }
}
