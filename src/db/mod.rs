mod error;
mod schema;

pub(crate) use error::StoreError;

use chrono::NaiveDate;
use error::Result;
use rusqlite::{params, Connection, Row};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::models::Holding;

/// Persistence façade for holdings. Owns the connection for its lifetime;
/// all writes serialize through this single owner.
pub(crate) struct Database {
    conn: Connection,
}

impl Database {
    /// Opens or creates the backing file and ensures the schema exists.
    /// Safe to call on every startup; existing rows are never touched.
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        conn.execute_batch(schema::SCHEMA)?;
        Ok(Self { conn })
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::SCHEMA)?;
        Ok(Self { conn })
    }

    /// Inserts one lot and returns its assigned id. `created_at` is
    /// stamped here when the caller left it empty.
    pub(crate) fn insert_holding(&self, holding: &Holding) -> Result<i64> {
        validate(holding)?;
        let created_at = if holding.created_at.is_empty() {
            chrono::Utc::now().to_rfc3339()
        } else {
            holding.created_at.clone()
        };
        self.conn.execute(
            "INSERT INTO holdings (ticker, shares, purchase_price, purchase_date, account, notes, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                holding.ticker,
                holding.shares.to_string(),
                holding.purchase_price.to_string(),
                holding.purchase_date,
                holding.account,
                holding.notes,
                created_at,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// All lots, most recent purchase first. Lots sharing a date come back
    /// in reverse insertion order, so the sort is stable across reloads.
    pub(crate) fn get_holdings(&self) -> Result<Vec<Holding>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, ticker, shares, purchase_price, purchase_date, account, notes, created_at
             FROM holdings ORDER BY purchase_date DESC, id DESC",
        )?;
        let rows = stmt.query_map([], row_to_holding)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    pub(crate) fn get_holding_by_id(&self, id: i64) -> Result<Option<Holding>> {
        let result = self.conn.query_row(
            "SELECT id, ticker, shares, purchase_price, purchase_date, account, notes, created_at
             FROM holdings WHERE id = ?1",
            params![id],
            row_to_holding,
        );
        match result {
            Ok(h) => Ok(Some(h)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Exact ticker match; "aapl" and "AAPL" are different tickers.
    pub(crate) fn get_holdings_by_ticker(&self, ticker: &str) -> Result<Vec<Holding>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, ticker, shares, purchase_price, purchase_date, account, notes, created_at
             FROM holdings WHERE ticker = ?1 ORDER BY purchase_date DESC, id DESC",
        )?;
        let rows = stmt.query_map(params![ticker], row_to_holding)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    pub(crate) fn get_unique_tickers(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT ticker FROM holdings ORDER BY ticker")?;
        let rows = stmt.query_map([], |row| row.get(0))?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    /// Replaces every mutable field of the row with the given id.
    /// `created_at` is deliberately absent from the SET list. Returns
    /// whether a row was actually affected.
    pub(crate) fn update_holding(&self, id: i64, holding: &Holding) -> Result<bool> {
        validate(holding)?;
        let changed = self.conn.execute(
            "UPDATE holdings
             SET ticker = ?1, shares = ?2, purchase_price = ?3, purchase_date = ?4,
                 account = ?5, notes = ?6
             WHERE id = ?7",
            params![
                holding.ticker,
                holding.shares.to_string(),
                holding.purchase_price.to_string(),
                holding.purchase_date,
                holding.account,
                holding.notes,
                id,
            ],
        )?;
        Ok(changed > 0)
    }

    pub(crate) fn delete_holding(&self, id: i64) -> Result<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM holdings WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    }
}

/// Boundary validation: rejected input never reaches SQL.
fn validate(holding: &Holding) -> Result<()> {
    if holding.ticker.trim().is_empty() {
        return Err(StoreError::Invalid("ticker must not be empty".into()));
    }
    if holding.shares <= Decimal::ZERO {
        return Err(StoreError::Invalid(format!(
            "shares must be positive, got {}",
            holding.shares
        )));
    }
    if holding.purchase_price <= Decimal::ZERO {
        return Err(StoreError::Invalid(format!(
            "purchase price must be positive, got {}",
            holding.purchase_price
        )));
    }
    if NaiveDate::parse_from_str(&holding.purchase_date, "%Y-%m-%d").is_err() {
        return Err(StoreError::Invalid(format!(
            "purchase date must be YYYY-MM-DD, got '{}'",
            holding.purchase_date
        )));
    }
    Ok(())
}

fn row_to_holding(row: &Row) -> rusqlite::Result<Holding> {
    Ok(Holding {
        id: Some(row.get(0)?),
        ticker: row.get(1)?,
        shares: decimal_column(row, 2)?,
        purchase_price: decimal_column(row, 3)?,
        purchase_date: row.get(4)?,
        account: row.get(5)?,
        notes: row.get(6)?,
        created_at: row.get(7)?,
    })
}

/// A shares/price cell that no longer parses is schema corruption and
/// surfaces as a storage failure, not a default value.
fn decimal_column(row: &Row, idx: usize) -> rusqlite::Result<Decimal> {
    let raw: String = row.get(idx)?;
    Decimal::from_str(&raw).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

#[cfg(test)]
mod tests;
