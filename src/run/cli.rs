use anyhow::Result;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::config::Config;
use crate::db::Database;
use crate::models::Holding;

pub(crate) fn as_cli(args: &[String], db: &Database, config: &Config) -> Result<()> {
    match args[1].as_str() {
        "add" => cli_add(&args[2..], db, config),
        "list" | "ls" => cli_list(&args[2..], db),
        "show" => cli_show(&args[2..], db),
        "tickers" => cli_tickers(db),
        "update" => cli_update(&args[2..], db, config),
        "delete" | "rm" => cli_delete(&args[2..], db),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("foliotui {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("FolioTUI — local-only investment portfolio tracker");
    println!();
    println!("Usage: foliotui [command]");
    println!();
    println!("Commands:");
    println!("  (none)                                    Launch interactive TUI");
    println!("  add <ticker> <shares> <price> <date>      Record a purchase lot");
    println!("    --account <name>                        Account label (default: configured account)");
    println!("    --notes <text>                          Free-form note");
    println!("  list                                      List all holdings, newest purchase first");
    println!("    --ticker <symbol>                       Only lots of one ticker (exact match)");
    println!("  show <id>                                 Show one holding in detail");
    println!("  tickers                                   List distinct tickers");
    println!("  update <id> <ticker> <shares> <price> <date> [--account] [--notes]");
    println!("                                            Replace a holding's fields");
    println!("  delete <id>                               Remove a holding");
    println!("  --help, -h                                Show this help");
    println!("  --version, -V                             Show version");
}

fn cli_add(args: &[String], db: &Database, config: &Config) -> Result<()> {
    let holding = parse_lot(args, config)
        .map_err(|e| anyhow::anyhow!("{e}\nUsage: foliotui add <ticker> <shares> <price> <date> [--account <name>] [--notes <text>]"))?;
    let id = db.insert_holding(&holding)?;
    println!(
        "Added {}: {} shares @ ${:.2} on {} (id {id})",
        holding.ticker,
        holding.shares.normalize(),
        holding.purchase_price,
        holding.purchase_date,
    );
    Ok(())
}

fn cli_list(args: &[String], db: &Database) -> Result<()> {
    let ticker = flag_value(args, "--ticker");
    let holdings = match ticker {
        Some(t) => db.get_holdings_by_ticker(t)?,
        None => db.get_holdings()?,
    };

    if holdings.is_empty() {
        match ticker {
            Some(t) => println!("No holdings for {t}"),
            None => println!("No holdings"),
        }
        return Ok(());
    }

    println!(
        "{:<4} {:<11} {:<8} {:>10} {:>11} {:>12}  {:<10} Notes",
        "ID", "Date", "Ticker", "Shares", "Price", "Cost", "Account"
    );
    println!("{}", "─".repeat(84));
    for h in &holdings {
        println!(
            "{:<4} {:<11} {:<8} {:>10} {:>11} {:>12}  {:<10} {}",
            h.id.unwrap_or(0),
            h.purchase_date,
            h.ticker,
            h.shares.normalize().to_string(),
            format!("${:.2}", h.purchase_price),
            format!("${:.2}", h.cost()),
            h.account,
            h.notes,
        );
    }
    Ok(())
}

fn cli_show(args: &[String], db: &Database) -> Result<()> {
    let id = parse_id(args, "show")?;
    match db.get_holding_by_id(id)? {
        Some(h) => {
            println!("Holding {id}");
            println!("{}", "─".repeat(40));
            println!("  Ticker:     {}", h.ticker);
            println!("  Shares:     {}", h.shares.normalize());
            println!("  Price:      ${:.2}", h.purchase_price);
            println!("  Cost:       ${:.2}", h.cost());
            println!("  Purchased:  {}", h.purchase_date);
            println!("  Account:    {}", h.account);
            if !h.notes.is_empty() {
                println!("  Notes:      {}", h.notes);
            }
            println!("  Recorded:   {}", h.created_at);
        }
        None => println!("No holding with id {id}"),
    }
    Ok(())
}

fn cli_tickers(db: &Database) -> Result<()> {
    let tickers = db.get_unique_tickers()?;
    if tickers.is_empty() {
        println!("No holdings");
        return Ok(());
    }
    for t in &tickers {
        println!("{t}");
    }
    Ok(())
}

fn cli_update(args: &[String], db: &Database, config: &Config) -> Result<()> {
    let id = parse_id(args, "update")?;
    let holding = parse_lot(&args[1..], config).map_err(|e| {
        anyhow::anyhow!("{e}\nUsage: foliotui update <id> <ticker> <shares> <price> <date> [--account <name>] [--notes <text>]")
    })?;
    if db.update_holding(id, &holding)? {
        println!("Updated holding {id}");
    } else {
        println!("No holding with id {id}");
    }
    Ok(())
}

fn cli_delete(args: &[String], db: &Database) -> Result<()> {
    let id = parse_id(args, "delete")?;
    if db.delete_holding(id)? {
        println!("Deleted holding {id}");
    } else {
        println!("No holding with id {id}");
    }
    Ok(())
}

// ── Argument parsing ─────────────────────────────────────────

fn parse_id(args: &[String], command: &str) -> Result<i64> {
    args.first()
        .and_then(|a| a.parse().ok())
        .ok_or_else(|| anyhow::anyhow!("Usage: foliotui {command} <id>"))
}

/// Positional `<ticker> <shares> <price> <date>` followed by optional
/// `--account`/`--notes` flags. Positivity and date-format checks belong
/// to the store; only numeric syntax is rejected here.
fn parse_lot(args: &[String], config: &Config) -> Result<Holding, String> {
    let positional: Vec<&String> = args.iter().take_while(|a| !a.starts_with("--")).collect();
    if positional.len() < 4 {
        return Err("Expected <ticker> <shares> <price> <date>".into());
    }

    let shares = Decimal::from_str(positional[1])
        .map_err(|_| format!("Invalid share count: {}", positional[1]))?;
    let price = Decimal::from_str(positional[2])
        .map_err(|_| format!("Invalid price: {}", positional[2]))?;

    let account = flag_value(args, "--account")
        .unwrap_or(&config.default_account)
        .to_string();
    let notes = flag_value(args, "--notes").unwrap_or_default().to_string();

    Ok(Holding::new(
        positional[0].clone(),
        shares,
        price,
        positional[3].clone(),
        account,
        notes,
    ))
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
