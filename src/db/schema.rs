// Share counts and prices are decimal strings, not REAL; the query layer
// never orders or filters on them.
pub(crate) const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS holdings (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    ticker         TEXT NOT NULL,
    shares         TEXT NOT NULL,
    purchase_price TEXT NOT NULL,
    purchase_date  TEXT NOT NULL,
    account        TEXT NOT NULL DEFAULT '',
    notes          TEXT NOT NULL DEFAULT '',
    created_at     TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_holdings_date ON holdings(purchase_date);
CREATE INDEX IF NOT EXISTS idx_holdings_ticker ON holdings(ticker);
"#;
