//! Number formatting for the table, summary, and chart labels.
//!
//! Pure functions, `f64` in, `String` out. Rounding happens only here; the
//! simulator keeps full precision.

/// Fixed two decimals with `,` thousands grouping: `51,204.08`.
pub fn format_currency(value: f64) -> String {
    format_grouped(value, 2, false)
}

/// Up to three decimals, trailing zeros dropped, grouped: `50,000`, `1,234.5`.
pub fn format_amount(value: f64) -> String {
    format_grouped(value, 3, true)
}

/// Currency with a symbol prefix and no forced decimals: `$50,000`.
pub fn format_money(symbol: &str, value: f64) -> String {
    if value.is_sign_negative() && value != 0.0 {
        format!("-{symbol}{}", format_amount(-value))
    } else {
        format!("{symbol}{}", format_amount(value))
    }
}

/// Currency with a symbol prefix and two decimals: `$25.98`.
pub fn format_money_cents(symbol: &str, value: f64) -> String {
    if value.is_sign_negative() && value != 0.0 {
        format!("-{symbol}{}", format_currency(-value))
    } else {
        format!("{symbol}{}", format_currency(value))
    }
}

/// Rounded to two decimals, trailing zeros dropped, ungrouped: `29.9%`.
pub fn format_percent(value: f64) -> String {
    format!("{}%", trim_number(value, 2))
}

/// Risk fraction as a percentage with one decimal: `0.23` → `23.0%`.
pub fn format_risk_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Reward:risk as `1:<ratio>`: `1.3` → `1:1.3`.
pub fn format_ratio(ratio: f64) -> String {
    format!("1:{}", trim_number(ratio, 4))
}

/// Round to `max_decimals` and drop trailing zeros (and a bare decimal point).
pub fn trim_number(value: f64, max_decimals: usize) -> String {
    if !value.is_finite() {
        return non_finite(value).to_string();
    }
    let fixed = format!("{:.*}", max_decimals, value);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    strip_negative_zero(trimmed).to_string()
}

fn format_grouped(value: f64, decimals: usize, trim: bool) -> String {
    if !value.is_finite() {
        return non_finite(value).to_string();
    }

    let fixed = if trim {
        trim_number(value, decimals)
    } else {
        strip_negative_zero(&format!("{:.*}", decimals, value)).to_string()
    };

    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3);
    out.push_str(sign);
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Insert `,` every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn strip_negative_zero(s: &str) -> &str {
    match s.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest,
        _ => s,
    }
}

fn non_finite(value: f64) -> &'static str {
    if value.is_nan() {
        "NaN"
    } else if value > 0.0 {
        "∞"
    } else {
        "-∞"
    }
}
