use anyhow::Result;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashSet};

use crate::config::Config;
use crate::db::Database;
use crate::models::Holding;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Holdings,
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Holdings => write!(f, "Holdings"),
        }
    }
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Dashboard, Self::Holdings]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Editing,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Editing => write!(f, "EDIT"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Destructive action awaiting a y/N answer.
#[derive(Debug, Clone)]
pub(crate) enum PendingAction {
    DeleteHolding { id: i64, ticker: String },
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) confirm_message: String,
    pub(crate) show_help: bool,
    pub(crate) visible_rows: usize,

    // UI defaults from Config; the store never sees these
    pub(crate) default_account: String,
    pub(crate) currency: String,

    // Holdings screen
    pub(crate) holdings: Vec<Holding>,
    pub(crate) holding_index: usize,
    pub(crate) holding_scroll: usize,
    pub(crate) ticker_filter: Option<String>,

    // Dashboard
    pub(crate) lot_count: usize,
    pub(crate) tickers: Vec<String>,
    pub(crate) total_invested: Decimal,
    pub(crate) invested_by_ticker: Vec<(String, Decimal)>,
    pub(crate) account_count: usize,
    pub(crate) recent: Vec<Holding>,

    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) editing_id: Option<i64>,
}

impl App {
    pub(crate) fn new(config: &Config) -> Self {
        Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            confirm_message: String::new(),
            show_help: false,
            visible_rows: 20,
            default_account: config.default_account.clone(),
            currency: config.currency.clone(),
            holdings: Vec::new(),
            holding_index: 0,
            holding_scroll: 0,
            ticker_filter: None,
            lot_count: 0,
            tickers: Vec::new(),
            total_invested: Decimal::ZERO,
            invested_by_ticker: Vec::new(),
            account_count: 0,
            recent: Vec::new(),
            pending_action: None,
            editing_id: None,
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    pub(crate) fn holdings_page(&self) -> usize {
        self.visible_rows.max(1)
    }

    pub(crate) fn refresh_all(&mut self, db: &Database) -> Result<()> {
        self.refresh_dashboard(db)?;
        self.refresh_holdings(db)
    }

    pub(crate) fn refresh_holdings(&mut self, db: &Database) -> Result<()> {
        self.holdings = match &self.ticker_filter {
            Some(t) => db.get_holdings_by_ticker(t)?,
            None => db.get_holdings()?,
        };
        if self.holding_index >= self.holdings.len() {
            self.holding_index = self.holdings.len().saturating_sub(1);
        }
        if self.holding_scroll > self.holding_index {
            self.holding_scroll = self.holding_index;
        }
        Ok(())
    }

    /// Dashboard figures are presentation sums over stored lots; no market
    /// data is involved.
    pub(crate) fn refresh_dashboard(&mut self, db: &Database) -> Result<()> {
        let holdings = db.get_holdings()?;
        self.tickers = db.get_unique_tickers()?;
        self.lot_count = holdings.len();
        self.total_invested = holdings.iter().map(Holding::cost).sum();

        let mut by_ticker: BTreeMap<String, Decimal> = BTreeMap::new();
        for h in &holdings {
            *by_ticker.entry(h.ticker.clone()).or_default() += h.cost();
        }
        let mut invested: Vec<(String, Decimal)> = by_ticker.into_iter().collect();
        invested.sort_by(|a, b| b.1.cmp(&a.1));
        self.invested_by_ticker = invested;

        self.account_count = holdings
            .iter()
            .map(|h| h.account.as_str())
            .collect::<HashSet<_>>()
            .len();

        self.recent = holdings.into_iter().take(8).collect();
        Ok(())
    }
}
