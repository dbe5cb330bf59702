#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::util::*;

#[test]
fn test_format_amount_grouping() {
    assert_eq!(format_amount(dec!(0)), "$0.00");
    assert_eq!(format_amount(dec!(999.9)), "$999.90");
    assert_eq!(format_amount(dec!(1000)), "$1,000.00");
    assert_eq!(format_amount(dec!(1234567.89)), "$1,234,567.89");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-1234.5)), "-$1,234.50");
}

#[test]
fn test_format_amount_rounds_to_cents() {
    assert_eq!(format_amount(dec!(1577.626)), "$1,577.63");
    assert_eq!(format_amount(Decimal::new(1, 3)), "$0.00");
}

#[test]
fn test_truncate_short_strings_untouched() {
    assert_eq!(truncate("AAPL", 10), "AAPL");
    assert_eq!(truncate("", 5), "");
}

#[test]
fn test_truncate_appends_ellipsis() {
    assert_eq!(truncate("long ticker note", 8), "long ti…");
    assert_eq!(truncate("abc", 0), "");
}

#[test]
fn test_truncate_multibyte() {
    assert_eq!(truncate("héllo wörld", 6), "héllo…");
}

#[test]
fn test_scroll_down_moves_and_scrolls() {
    let (mut index, mut scroll) = (0, 0);
    for _ in 0..5 {
        scroll_down(&mut index, &mut scroll, 10, 3);
    }
    assert_eq!(index, 5);
    assert_eq!(scroll, 3);
}

#[test]
fn test_scroll_down_stops_at_end() {
    let (mut index, mut scroll) = (1, 0);
    scroll_down(&mut index, &mut scroll, 2, 5);
    assert_eq!(index, 1);
}

#[test]
fn test_scroll_up_clamps_at_zero() {
    let (mut index, mut scroll) = (0, 0);
    scroll_up(&mut index, &mut scroll);
    assert_eq!(index, 0);
    assert_eq!(scroll, 0);
}

#[test]
fn test_scroll_to_bottom_sets_page_window() {
    let (mut index, mut scroll) = (0, 0);
    scroll_to_bottom(&mut index, &mut scroll, 10, 4);
    assert_eq!(index, 9);
    assert_eq!(scroll, 6);
}

#[test]
fn test_scroll_to_top_resets() {
    let (mut index, mut scroll) = (7, 5);
    scroll_to_top(&mut index, &mut scroll);
    assert_eq!(index, 0);
    assert_eq!(scroll, 0);
}
