use super::Transaction;

/// Renders an amount the way the ledger reports print it.
///
/// Whole numbers keep a single decimal place (`1000.0`) and other values use the
/// shortest digits that round-trip. Magnitudes below `1e-4` or from `1e16` upward switch
/// to exponent form with a signed, two-digit exponent (`1e+16`, `1.5e-05`).
pub fn format_amount(amount: f64) -> String {
    if amount.is_nan() {
        return "nan".to_string();
    }
    if amount.is_infinite() {
        return format!("{amount}");
    }
    let magnitude = amount.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return exponent_form(amount);
    }
    if amount.fract() == 0.0 {
        format!("{amount:.1}")
    } else {
        format!("{amount}")
    }
}

fn exponent_form(amount: f64) -> String {
    let raw = format!("{amount:e}");
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => raw,
    }
}

/// `<date> - <category> (<transaction_type>): $<amount>`
pub fn transaction_line(txn: &Transaction) -> String {
    format!(
        "{} - {} ({}): ${}",
        txn.date,
        txn.category,
        txn.transaction_type,
        format_amount(txn.amount)
    )
}
