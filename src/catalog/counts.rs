// SPDX-License-Identifier: MPL-2.0
//! Compact counter formatting shared by every screen.

/// Formats a counter the way short-form video apps abbreviate them:
/// millions as `X.YM`, thousands as `X.YK`, anything below 1,000 verbatim.
///
/// One decimal place is kept, with ties rounded away from zero, so
/// `1_250_000` renders as `1.3M` and exact powers keep their `.0`
/// (`1_000_000` renders as `1.0M`). Integer arithmetic throughout; no
/// floating point involved.
#[must_use]
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format_scaled(n, 1_000_000, 'M')
    } else if n >= 1_000 {
        format_scaled(n, 1_000, 'K')
    } else {
        n.to_string()
    }
}

/// Renders `n / unit` with one decimal place, rounding ties away from zero.
fn format_scaled(n: u64, unit: u64, suffix: char) -> String {
    let tenth = unit / 10;
    let tenths = (n + tenth / 2) / tenth;
    format!("{}.{}{}", tenths / 10, tenths % 10, suffix)
}
