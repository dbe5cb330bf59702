use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;

use rust_decimal::Decimal;

use super::app::{App, InputMode, PendingAction, Screen};
use crate::db::{Database, StoreError};
use crate::models::Holding;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &Database) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit FolioTUI", cmd_quit, r);
    register_command!("quit", "Quit FolioTUI", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("h", "Go to Holdings", cmd_holdings, r);
    register_command!("holdings", "Go to Holdings", cmd_holdings, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!(
        "add",
        "Record a lot (e.g. :add AAPL 10.5 150.25 2023-10-15 [account] [notes])",
        cmd_add,
        r
    );
    register_command!("edit", "Edit the selected holding inline", cmd_edit, r);
    register_command!("delete", "Delete the selected holding", cmd_delete, r);
    register_command!(
        "ticker",
        "Filter holdings by exact ticker (e.g. :ticker AAPL); no arg clears",
        cmd_ticker,
        r
    );
    register_command!("t", "Filter holdings by exact ticker", cmd_ticker, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App, db: &Database) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, db)?;
    } else {
        app.set_status(format!("Unknown command: :{cmd_name}. Try :help"));
    }

    Ok(())
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _db: &Database) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App, db: &Database) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    app.refresh_dashboard(db)?;
    Ok(())
}

fn cmd_holdings(_args: &str, app: &mut App, db: &Database) -> anyhow::Result<()> {
    app.screen = Screen::Holdings;
    app.refresh_holdings(db)?;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _db: &Database) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_add(args: &str, app: &mut App, db: &Database) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :add TICKER SHARES PRICE DATE [ACCOUNT] [NOTES]");
        return Ok(());
    }

    let holding = match parse_lot_line(args, &app.default_account) {
        Ok(h) => h,
        Err(msg) => {
            app.set_status(msg);
            return Ok(());
        }
    };

    match db.insert_holding(&holding) {
        Ok(id) => {
            app.refresh_all(db)?;
            app.set_status(format!(
                "Added {}: {} shares @ ${:.2} (id {id})",
                holding.ticker,
                holding.shares.normalize(),
                holding.purchase_price,
            ));
        }
        Err(StoreError::Invalid(msg)) => app.set_status(format!("Invalid: {msg}")),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn cmd_edit(_args: &str, app: &mut App, _db: &Database) -> anyhow::Result<()> {
    if app.screen != Screen::Holdings || app.holdings.is_empty() {
        app.set_status("Navigate to Holdings and select one first");
        return Ok(());
    }

    if let Some(h) = app.holdings.get(app.holding_index) {
        let mut line = format!(
            "{} {} {} {} {}",
            h.ticker,
            h.shares.normalize(),
            h.purchase_price,
            h.purchase_date,
            h.account,
        );
        if !h.notes.is_empty() {
            line.push(' ');
            line.push_str(&h.notes);
        }
        app.editing_id = h.id;
        app.command_input = line;
        app.input_mode = InputMode::Editing;
        app.set_status("Edit TICKER SHARES PRICE DATE ACCOUNT NOTES, Enter to save");
    }
    Ok(())
}

/// Completes an `:edit` started on the Holdings screen.
pub(crate) fn finish_edit(id: i64, input: &str, app: &mut App, db: &Database) -> anyhow::Result<()> {
    let holding = match parse_lot_line(input, &app.default_account) {
        Ok(h) => h,
        Err(msg) => {
            app.set_status(msg);
            return Ok(());
        }
    };

    match db.update_holding(id, &holding) {
        Ok(true) => {
            app.refresh_all(db)?;
            app.set_status(format!("Updated {} (id {id})", holding.ticker));
        }
        Ok(false) => app.set_status(format!("No holding with id {id}")),
        Err(StoreError::Invalid(msg)) => app.set_status(format!("Invalid: {msg}")),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn cmd_delete(_args: &str, app: &mut App, _db: &Database) -> anyhow::Result<()> {
    if app.screen != Screen::Holdings || app.holdings.is_empty() {
        app.set_status("Navigate to Holdings and select one first");
        return Ok(());
    }

    if let Some(h) = app.holdings.get(app.holding_index) {
        if let Some(id) = h.id {
            let ticker = h.ticker.clone();
            let date = h.purchase_date.clone();
            app.confirm_message = format!("Delete {ticker} lot from {date}?");
            app.pending_action = Some(PendingAction::DeleteHolding { id, ticker });
            app.input_mode = InputMode::Confirm;
        }
    }
    Ok(())
}

fn cmd_ticker(args: &str, app: &mut App, db: &Database) -> anyhow::Result<()> {
    app.screen = Screen::Holdings;
    app.holding_index = 0;
    app.holding_scroll = 0;

    if args.is_empty() {
        app.ticker_filter = None;
        app.refresh_holdings(db)?;
        app.set_status("Ticker filter cleared");
        return Ok(());
    }

    app.ticker_filter = Some(args.to_string());
    app.refresh_holdings(db)?;
    if app.holdings.is_empty() {
        app.set_status(format!("No holdings for '{args}'"));
    } else {
        app.set_status(format!("Filtering by ticker: {args}"));
    }
    Ok(())
}

// ── Lot line parsing ─────────────────────────────────────────

/// `TICKER SHARES PRICE DATE [ACCOUNT] [NOTES...]`, whitespace-separated.
/// Account is a single token here; the CLI's `--account` flag takes spaces.
/// Positivity and date-format checks are the store's job.
fn parse_lot_line(args: &str, default_account: &str) -> Result<Holding, String> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    if parts.len() < 4 {
        return Err("Expected: TICKER SHARES PRICE DATE [ACCOUNT] [NOTES]".into());
    }

    let shares =
        Decimal::from_str(parts[1]).map_err(|_| format!("Invalid share count: {}", parts[1]))?;
    let price =
        Decimal::from_str(parts[2]).map_err(|_| format!("Invalid price: {}", parts[2]))?;

    let account = parts
        .get(4)
        .map(|s| s.to_string())
        .unwrap_or_else(|| default_account.to_string());
    let notes = if parts.len() > 5 {
        parts[5..].join(" ")
    } else {
        String::new()
    };

    Ok(Holding::new(
        parts[0].to_string(),
        shares,
        price,
        parts[3].to_string(),
        account,
        notes,
    ))
}
