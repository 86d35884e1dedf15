use std::fmt::Write;

use rust_decimal::Decimal;

use crate::app::error::AccountError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Account {
    pub number: String,
    pub holder: String,
    pub balance: Decimal,
}

impl Account {
    /// Starts the account over with a zero balance. Number and holder keep
    /// whatever the form currently shows.
    pub fn create(&mut self) {
        self.balance = Decimal::ZERO;
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        // sums past the Decimal range are rejected, never saturated
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| AccountError::invalid_amount(&amount.to_string()))?;
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        if amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }

        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| AccountError::invalid_amount(&amount.to_string()))?;
        Ok(())
    }

    pub fn view(&self, currency: &str) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = writeln!(out, "Account Number : {}", self.number);
        let _ = writeln!(out, "Account Holder : {}", self.holder);
        let _ = write!(out, "Current Balance: {}{}", currency, self.balance);
        out
    }
}

/// Parses the amount field.
///
/// Accepts plain (`500`, `+5`, `0.25`) and scientific (`1e3`) notation with
/// surrounding whitespace. Negative amounts only pass when `allow_negative` is
/// set; a negative deposit then lowers the balance and a negative withdrawal
/// raises it.
pub fn parse_amount(text: &str, allow_negative: bool) -> Result<Decimal, AccountError> {
    let trimmed = text.trim();
    let amount = trimmed
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| AccountError::invalid_amount(text))?;

    if amount.is_sign_negative() && !amount.is_zero() && !allow_negative {
        return Err(AccountError::invalid_amount(text));
    }

    Ok(amount)
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    fn funded(balance: Decimal) -> Account {
        Account {
            number: "ACC-1".to_owned(),
            holder: "Jo Doe".to_owned(),
            balance,
        }
    }

    #[test]
    fn parses_common_amount_forms() {
        assert_eq!(parse_amount("500", true).unwrap(), Decimal::new(500, 0));
        assert_eq!(parse_amount(" 12.50 ", true).unwrap(), Decimal::new(1250, 2));
        assert_eq!(parse_amount("+5", true).unwrap(), Decimal::new(5, 0));
        assert_eq!(parse_amount("1e3", true).unwrap(), Decimal::new(1000, 0));
        assert_eq!(parse_amount("-20", true).unwrap(), Decimal::new(-20, 0));
    }

    #[test]
    fn rejects_non_numeric_amounts() {
        for text in ["", "   ", "abc", "12abc", "NaN", "1,000"] {
            let err = parse_amount(text, true).unwrap_err();
            assert!(
                matches!(err, AccountError::InvalidAmount { ref input } if input == text),
                "{text:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn negative_amounts_follow_policy() {
        assert!(matches!(
            parse_amount("-1", false),
            Err(AccountError::InvalidAmount { .. })
        ));
        assert_eq!(parse_amount("-0", false).unwrap(), Decimal::ZERO);
        assert_eq!(parse_amount("-1", true).unwrap(), Decimal::NEGATIVE_ONE);
    }

    #[test]
    fn create_resets_balance_only() {
        let mut account = funded(Decimal::new(98765, 2));
        account.create();
        assert_eq!(account.balance, Decimal::ZERO);
        assert_eq!(account.number, "ACC-1");
        assert_eq!(account.holder, "Jo Doe");
    }

    #[test]
    fn deposit_adds_exact_amount() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let start = Decimal::new(rng.gen_range(-1_000_000..1_000_000), 2);
            let amount = Decimal::new(rng.gen_range(0..1_000_000_000), rng.gen_range(0..4));
            let mut account = funded(start);
            account.deposit(amount).unwrap();
            assert_eq!(account.balance, start + amount);
        }
    }

    #[test]
    fn negative_deposit_lowers_balance() {
        let mut account = funded(Decimal::new(100, 0));
        account.deposit(Decimal::new(-30, 0)).unwrap();
        assert_eq!(account.balance, Decimal::new(70, 0));
    }

    #[test]
    fn deposit_overflow_leaves_balance() {
        let mut account = funded(Decimal::MAX);
        let err = account.deposit(Decimal::ONE).unwrap_err();
        assert!(matches!(err, AccountError::InvalidAmount { .. }));
        assert_eq!(account.balance, Decimal::MAX);
    }

    #[test]
    fn withdraw_within_balance_subtracts() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let start = Decimal::new(rng.gen_range(0..1_000_000_000), 2);
            let amount = Decimal::new(rng.gen_range(0..=start.mantissa() as i64), 2);
            let mut account = funded(start);
            account.withdraw(amount).unwrap();
            assert_eq!(account.balance, start - amount);
        }
    }

    #[test]
    fn withdraw_entire_balance_reaches_zero() {
        let mut account = funded(Decimal::new(300, 0));
        account.withdraw(Decimal::new(300, 0)).unwrap();
        assert_eq!(account.balance, Decimal::ZERO);
    }

    #[test]
    fn withdraw_beyond_balance_is_refused() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let start = Decimal::new(rng.gen_range(0..1_000_000), 2);
            let amount = start + Decimal::new(rng.gen_range(1..1_000_000), 2);
            let mut account = funded(start);
            let err = account.withdraw(amount).unwrap_err();
            assert!(matches!(
                err,
                AccountError::InsufficientFunds { requested, available }
                    if requested == amount && available == start
            ));
            assert_eq!(account.balance, start);
        }
    }

    #[test]
    fn view_lists_all_fields() {
        let account = funded(Decimal::new(300, 0));
        assert_eq!(
            account.view("$"),
            "Account Number : ACC-1\nAccount Holder : Jo Doe\nCurrent Balance: $300"
        );
    }
}
