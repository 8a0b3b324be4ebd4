#![allow(clippy::unwrap_used)]

use super::util::*;

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_fits() {
    assert_eq!(truncate("Rent", 10), "Rent");
    assert_eq!(truncate("Groceries", 9), "Groceries");
    assert_eq!(truncate("", 3), "");
}

#[test]
fn test_truncate_adds_ellipsis() {
    assert_eq!(truncate("Streaming subscriptions", 10), "Streaming…");
    assert_eq!(truncate("ab", 1), "…");
    assert_eq!(truncate("abc", 0), "");
}

#[test]
fn test_truncate_counts_chars_not_bytes() {
    assert_eq!(truncate("café crème", 5), "café…");
    assert_eq!(truncate("🍕🍔🍟🌮", 3), "🍕🍔…");
}

// ── scrolling ─────────────────────────────────────────────────

#[test]
fn test_scroll_down_moves_window() {
    let (mut index, mut scroll) = (0, 0);
    for _ in 0..5 {
        scroll_down(&mut index, &mut scroll, 10, 3);
    }
    assert_eq!(index, 5);
    assert_eq!(scroll, 3);
}

#[test]
fn test_scroll_down_stops_at_end() {
    let (mut index, mut scroll) = (2, 0);
    scroll_down(&mut index, &mut scroll, 3, 5);
    assert_eq!(index, 2);
    assert_eq!(scroll, 0);
}

#[test]
fn test_scroll_up_pulls_window() {
    let (mut index, mut scroll) = (3, 3);
    scroll_up(&mut index, &mut scroll);
    assert_eq!(index, 2);
    assert_eq!(scroll, 2);
    let (mut index, mut scroll) = (0, 0);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
}

#[test]
fn test_scroll_to_ends() {
    let (mut index, mut scroll) = (4, 2);
    scroll_to_top(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
    scroll_to_bottom(&mut index, &mut scroll, 10, 4);
    assert_eq!((index, scroll), (9, 6));
    scroll_to_bottom(&mut index, &mut scroll, 0, 4);
    assert_eq!((index, scroll), (9, 6));
}
