//! Shopping Cart Business Logic Helpers
//!
//! Pure functions over cart lines, shared by the cart manager and snapshot
//! restoration.

use super::models::CartLine;

/// Restores the cart invariants on lines that came from outside (a persisted
/// snapshot).
///
/// # Behaviour
///
/// * Lines with quantity 0 are dropped.
/// * Lines sharing a product id are merged into the first occurrence by
///   summing quantities; the first line's name and price win.
/// * Order of first appearance is kept.
pub fn normalize_lines(incoming: Vec<CartLine>) -> Vec<CartLine> {
    let mut lines: Vec<CartLine> = Vec::with_capacity(incoming.len());
    for line in incoming.into_iter().filter(|l| l.quantity > 0) {
        if let Some(existing) = lines.iter_mut().find(|l| l.product_id == line.product_id) {
            existing.quantity = existing.quantity.saturating_add(line.quantity);
        } else {
            lines.push(line);
        }
    }
    lines
}

/// Produces a human-readable one-line summary for a list of cart lines.
///
/// Example output: `"2x Galaxy S24, 1x Pixel 8"`.
pub fn format_cart_summary(lines: &[CartLine]) -> String {
    lines
        .iter()
        .map(|l| format!("{}x {}", l.quantity, l.name))
        .collect::<Vec<_>>()
        .join(", ")
}
