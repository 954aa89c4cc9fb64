//! Display helpers for prices and statuses.

use crate::i18n::{translate, Language};
use crate::types::ArtworkStatus;

/// Format an amount as whole euros the Italian way: `850.000 €`.
///
/// Four-digit amounts are not grouped (`1500 €`), matching Italian locale
/// rules.
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());

    let grouped = if digits.len() <= 4 {
        digits
    } else {
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push('.');
            }
            out.push(c);
        }
        out
    };

    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}{} €", sign, grouped)
}

/// Translation key for a status label.
pub fn status_key(status: ArtworkStatus) -> &'static str {
    match status {
        ArtworkStatus::Available => "statusAvailable",
        ArtworkStatus::Sold => "statusSold",
        ArtworkStatus::Loan => "statusLoan",
    }
}

/// Status label in the given language.
pub fn status_label(lang: Language, status: ArtworkStatus) -> &'static str {
    translate(lang, status_key(status))
}
