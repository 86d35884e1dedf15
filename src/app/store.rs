//! Single-record flat file holding the account between runs.
//!
//! Three lines: account number, holder name, balance. Backslash, newline and
//! carriage return inside the text fields are escaped so every record stays
//! exactly three lines long.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{anyhow, Context, Result};

use crate::app::account::Account;
use crate::app::error::AccountError;

pub fn save(path: &Path, account: &Account) -> Result<(), AccountError> {
    write_record(path, account).map_err(|source| AccountError::Persistence {
        path: path.to_owned(),
        source,
    })
}

fn write_record(path: &Path, account: &Account) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "{}", escape(&account.number))?;
    writeln!(out, "{}", escape(&account.holder))?;
    writeln!(out, "{}", account.balance)?;
    out.flush()
}

/// Reads the record back. Callers treat any error as "nothing to restore".
pub fn load(path: &Path) -> Result<Account> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let mut lines = text.lines();

    let (Some(number), Some(holder), Some(balance)) = (lines.next(), lines.next(), lines.next())
    else {
        return Err(anyhow!("{} holds fewer than three lines", path.display()));
    };

    let balance = balance
        .trim()
        .parse()
        .with_context(|| format!("balance {balance:?} in {}", path.display()))?;

    Ok(Account {
        number: unescape(number),
        holder: unescape(holder),
        balance,
    })
}

fn escape(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    for c in field.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out
}

fn unescape(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            // unknown escapes and a trailing backslash are kept as written
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
