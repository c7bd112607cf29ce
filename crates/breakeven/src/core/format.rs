//! Display formatting for money and unit counts

/// Inserts `,` every three digits of an unsigned integer string
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Rounds to a whole number and groups thousands; keeps a leading `-`,
/// including for values that round to zero (`-0.2` gives `-0`)
fn whole_number(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let grouped = group_thousands(&digits);
    if value.is_sign_negative() {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Currency with thousands separators and no decimals, e.g. `$2,000,000`.
///
/// Negative amounts render as `$-500,000`.
#[must_use]
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return format!("${value}");
    }
    format!("${}", whole_number(value))
}

/// Thousands-separated count without decimals, e.g. `1,250`
#[must_use]
pub fn format_quantity(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    whole_number(value)
}

/// Integer unit count, e.g. `500 units`
#[must_use]
pub fn format_units(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value} units");
    }
    format!("{value:.0} units")
}
