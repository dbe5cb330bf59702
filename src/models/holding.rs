use rust_decimal::Decimal;

/// One purchase lot of a security. A ticker can appear in any number of
/// lots; each lot keeps its own share count, price, and date.
#[derive(Debug, Clone, PartialEq)]
pub struct Holding {
    pub id: Option<i64>,
    pub ticker: String,
    pub shares: Decimal,
    pub purchase_price: Decimal,
    pub purchase_date: String,
    pub account: String,
    pub notes: String,
    pub created_at: String,
}

impl Holding {
    pub fn new(
        ticker: String,
        shares: Decimal,
        purchase_price: Decimal,
        purchase_date: String,
        account: String,
        notes: String,
    ) -> Self {
        Self {
            id: None,
            ticker,
            shares,
            purchase_price,
            purchase_date,
            account,
            notes,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Amount paid for this lot.
    pub fn cost(&self) -> Decimal {
        self.shares * self.purchase_price
    }
}
