#![allow(clippy::unwrap_used)]

use super::*;
use rust_decimal_macros::dec;

fn lot(ticker: &str, date: &str) -> Holding {
    Holding::new(
        ticker.into(),
        dec!(10),
        dec!(150.25),
        date.into(),
        "TFSA".into(),
        String::new(),
    )
}

// ── Round trip ────────────────────────────────────────────────

#[test]
fn test_insert_and_get_by_id() {
    let db = Database::open_in_memory().unwrap();
    let mut h = lot("AAPL", "2023-10-15");
    h.shares = dec!(10.5);
    h.notes = "first buy".into();

    let id = db.insert_holding(&h).unwrap();
    assert!(id > 0);

    let fetched = db.get_holding_by_id(id).unwrap().unwrap();
    assert_eq!(fetched.id, Some(id));
    assert_eq!(fetched.ticker, "AAPL");
    assert_eq!(fetched.shares, dec!(10.5));
    assert_eq!(fetched.purchase_price, dec!(150.25));
    assert_eq!(fetched.purchase_date, "2023-10-15");
    assert_eq!(fetched.account, "TFSA");
    assert_eq!(fetched.notes, "first buy");
    assert_eq!(fetched.created_at, h.created_at);
}

#[test]
fn test_get_by_id_not_found() {
    let db = Database::open_in_memory().unwrap();
    assert!(db.get_holding_by_id(99999).unwrap().is_none());
}

#[test]
fn test_ids_are_assigned_in_order() {
    let db = Database::open_in_memory().unwrap();
    let first = db.insert_holding(&lot("AAPL", "2023-01-01")).unwrap();
    let second = db.insert_holding(&lot("MSFT", "2023-01-02")).unwrap();
    assert!(second > first);
}

#[test]
fn test_created_at_backfilled_when_empty() {
    let db = Database::open_in_memory().unwrap();
    let mut h = lot("AAPL", "2023-10-15");
    h.created_at = String::new();

    let id = db.insert_holding(&h).unwrap();
    let fetched = db.get_holding_by_id(id).unwrap().unwrap();
    assert!(!fetched.created_at.is_empty());
}

// ── Ordering ──────────────────────────────────────────────────

#[test]
fn test_get_holdings_date_descending() {
    let db = Database::open_in_memory().unwrap();
    db.insert_holding(&lot("AAPL", "2023-01-01")).unwrap();
    db.insert_holding(&lot("MSFT", "2023-06-15")).unwrap();
    db.insert_holding(&lot("GOOG", "2022-12-01")).unwrap();

    let all = db.get_holdings().unwrap();
    let dates: Vec<&str> = all.iter().map(|h| h.purchase_date.as_str()).collect();
    assert_eq!(dates, vec!["2023-06-15", "2023-01-01", "2022-12-01"]);
}

#[test]
fn test_equal_dates_break_ties_by_id_descending() {
    let db = Database::open_in_memory().unwrap();
    let first = db.insert_holding(&lot("AAPL", "2023-03-01")).unwrap();
    let second = db.insert_holding(&lot("MSFT", "2023-03-01")).unwrap();

    let all = db.get_holdings().unwrap();
    assert_eq!(all[0].id, Some(second));
    assert_eq!(all[1].id, Some(first));
}

// ── Initialization ────────────────────────────────────────────

#[test]
fn test_reopen_keeps_existing_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portfolio.db");

    let id = {
        let db = Database::open(&path).unwrap();
        db.insert_holding(&lot("AAPL", "2023-10-15")).unwrap()
    };

    let db = Database::open(&path).unwrap();
    assert_eq!(db.get_holdings().unwrap().len(), 1);
    assert!(db.get_holding_by_id(id).unwrap().is_some());
}

// ── Update ────────────────────────────────────────────────────

#[test]
fn test_update_replaces_mutable_fields() {
    let db = Database::open_in_memory().unwrap();
    let id = db.insert_holding(&lot("AAPL", "2023-10-15")).unwrap();
    let other = db.insert_holding(&lot("MSFT", "2023-11-01")).unwrap();
    let before = db.get_holding_by_id(id).unwrap().unwrap();

    let mut replacement = lot("AAPL", "2023-10-20");
    replacement.shares = dec!(12);
    replacement.purchase_price = dec!(148.00);
    replacement.account = "RRSP".into();
    replacement.notes = "averaged in".into();

    assert!(db.update_holding(id, &replacement).unwrap());

    let after = db.get_holding_by_id(id).unwrap().unwrap();
    assert_eq!(after.shares, dec!(12));
    assert_eq!(after.purchase_price, dec!(148.00));
    assert_eq!(after.purchase_date, "2023-10-20");
    assert_eq!(after.account, "RRSP");
    assert_eq!(after.notes, "averaged in");
    assert_eq!(after.created_at, before.created_at);

    // The other row is untouched
    let untouched = db.get_holding_by_id(other).unwrap().unwrap();
    assert_eq!(untouched.ticker, "MSFT");
    assert_eq!(untouched.shares, dec!(10));
}

#[test]
fn test_update_missing_id_returns_false() {
    let db = Database::open_in_memory().unwrap();
    db.insert_holding(&lot("AAPL", "2023-10-15")).unwrap();

    assert!(!db.update_holding(99999, &lot("MSFT", "2023-11-01")).unwrap());

    let all = db.get_holdings().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].ticker, "AAPL");
}

// ── Delete ────────────────────────────────────────────────────

#[test]
fn test_delete_removes_row() {
    let db = Database::open_in_memory().unwrap();
    let id = db.insert_holding(&lot("AAPL", "2023-10-15")).unwrap();
    db.insert_holding(&lot("AAPL", "2023-11-01")).unwrap();

    assert!(db.delete_holding(id).unwrap());

    assert!(db.get_holding_by_id(id).unwrap().is_none());
    assert!(!db.get_holdings().unwrap().iter().any(|h| h.id == Some(id)));
    assert!(!db
        .get_holdings_by_ticker("AAPL")
        .unwrap()
        .iter()
        .any(|h| h.id == Some(id)));
}

#[test]
fn test_delete_missing_id_returns_false() {
    let db = Database::open_in_memory().unwrap();
    db.insert_holding(&lot("AAPL", "2023-10-15")).unwrap();

    assert!(!db.delete_holding(99999).unwrap());
    assert_eq!(db.get_holdings().unwrap().len(), 1);
}

// ── Ticker queries ────────────────────────────────────────────

#[test]
fn test_unique_tickers_sorted_and_deduped() {
    let db = Database::open_in_memory().unwrap();
    db.insert_holding(&lot("AAPL", "2023-01-01")).unwrap();
    db.insert_holding(&lot("MSFT", "2023-02-01")).unwrap();
    db.insert_holding(&lot("AAPL", "2023-03-01")).unwrap();

    assert_eq!(db.get_unique_tickers().unwrap(), vec!["AAPL", "MSFT"]);
}

#[test]
fn test_get_by_ticker_exact_match_only() {
    let db = Database::open_in_memory().unwrap();
    db.insert_holding(&lot("AAPL", "2023-01-01")).unwrap();
    db.insert_holding(&lot("aapl", "2023-02-01")).unwrap();
    db.insert_holding(&lot("AAP", "2023-03-01")).unwrap();
    db.insert_holding(&lot("AAPL", "2023-04-01")).unwrap();

    let matched = db.get_holdings_by_ticker("AAPL").unwrap();
    assert_eq!(matched.len(), 2);
    assert!(matched.iter().all(|h| h.ticker == "AAPL"));
    // Same ordering contract as get_holdings
    assert_eq!(matched[0].purchase_date, "2023-04-01");
    assert_eq!(matched[1].purchase_date, "2023-01-01");
}

#[test]
fn test_get_by_ticker_no_matches() {
    let db = Database::open_in_memory().unwrap();
    db.insert_holding(&lot("AAPL", "2023-01-01")).unwrap();
    assert!(db.get_holdings_by_ticker("TSLA").unwrap().is_empty());
}

// ── Validation ────────────────────────────────────────────────

#[test]
fn test_insert_rejects_empty_ticker() {
    let db = Database::open_in_memory().unwrap();
    let err = db.insert_holding(&lot("", "2023-01-01")).unwrap_err();
    assert!(matches!(err, StoreError::Invalid(_)));
    assert!(db.get_holdings().unwrap().is_empty());
}

#[test]
fn test_insert_rejects_whitespace_ticker() {
    let db = Database::open_in_memory().unwrap();
    let err = db.insert_holding(&lot("   ", "2023-01-01")).unwrap_err();
    assert!(matches!(err, StoreError::Invalid(_)));
}

#[test]
fn test_insert_rejects_nonpositive_shares() {
    let db = Database::open_in_memory().unwrap();

    let mut h = lot("AAPL", "2023-01-01");
    h.shares = dec!(0);
    assert!(matches!(
        db.insert_holding(&h).unwrap_err(),
        StoreError::Invalid(_)
    ));

    h.shares = dec!(-1.5);
    assert!(matches!(
        db.insert_holding(&h).unwrap_err(),
        StoreError::Invalid(_)
    ));

    assert!(db.get_holdings().unwrap().is_empty());
}

#[test]
fn test_insert_rejects_nonpositive_price() {
    let db = Database::open_in_memory().unwrap();
    let mut h = lot("AAPL", "2023-01-01");
    h.purchase_price = dec!(-0.01);
    assert!(matches!(
        db.insert_holding(&h).unwrap_err(),
        StoreError::Invalid(_)
    ));
}

#[test]
fn test_insert_rejects_bad_dates() {
    let db = Database::open_in_memory().unwrap();
    for bad in ["", "15/10/2023", "2023-13-01", "yesterday"] {
        let err = db.insert_holding(&lot("AAPL", bad)).unwrap_err();
        assert!(matches!(err, StoreError::Invalid(_)), "accepted '{bad}'");
    }
    assert!(db.get_holdings().unwrap().is_empty());
}

#[test]
fn test_update_validates_before_touching_storage() {
    let db = Database::open_in_memory().unwrap();
    let id = db.insert_holding(&lot("AAPL", "2023-01-01")).unwrap();

    let mut bad = lot("AAPL", "2023-02-01");
    bad.shares = dec!(0);
    assert!(matches!(
        db.update_holding(id, &bad).unwrap_err(),
        StoreError::Invalid(_)
    ));

    let unchanged = db.get_holding_by_id(id).unwrap().unwrap();
    assert_eq!(unchanged.shares, dec!(10));
    assert_eq!(unchanged.purchase_date, "2023-01-01");
}
