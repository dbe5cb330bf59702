#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

fn make_holding() -> Holding {
    Holding::new(
        "AAPL".into(),
        dec!(10.5),
        dec!(150.25),
        "2023-10-15".into(),
        "TFSA".into(),
        String::new(),
    )
}

#[test]
fn test_new_defaults() {
    let h = make_holding();
    assert!(h.id.is_none());
    assert_eq!(h.ticker, "AAPL");
    assert_eq!(h.shares, dec!(10.5));
    assert_eq!(h.purchase_price, dec!(150.25));
    assert_eq!(h.purchase_date, "2023-10-15");
    assert_eq!(h.account, "TFSA");
    assert!(h.notes.is_empty());
    assert!(!h.created_at.is_empty());
}

#[test]
fn test_cost() {
    let h = make_holding();
    assert_eq!(h.cost(), dec!(1577.625));
}

#[test]
fn test_cost_whole_shares() {
    let mut h = make_holding();
    h.shares = dec!(4);
    h.purchase_price = dec!(25.10);
    assert_eq!(h.cost(), dec!(100.40));
}

#[test]
fn test_cost_is_exact() {
    // 0.1 + 0.2 style drift must not show up in the display sum
    let mut h = make_holding();
    h.shares = dec!(0.3);
    h.purchase_price = dec!(0.1);
    assert_eq!(h.cost(), dec!(0.03));
}
