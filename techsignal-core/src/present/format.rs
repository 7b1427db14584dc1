//! Number formatting. Every helper takes `Option<f64>` and renders `None`
//! (or a non-finite value) as `N/A`.

pub const NOT_AVAILABLE: &str = "N/A";

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Insert `,` every three digits of an unsigned integer string.
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

/// `value` with `decimals` places and thousands separators, sign kept.
fn grouped(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };
    let sign = if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };
    match frac_part {
        Some(frac) => format!("{sign}{}.{frac}", group_thousands(int_part)),
        None => format!("{sign}{}", group_thousands(int_part)),
    }
}

/// `$1,234.56`, `-$12.00`.
pub fn format_currency(value: Option<f64>) -> String {
    match finite(value) {
        Some(v) => {
            let body = grouped(v, 2);
            match body.strip_prefix('-') {
                Some(abs) => format!("-${abs}"),
                None => format!("${body}"),
            }
        }
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Plain number with `decimals` places.
pub fn format_number(value: Option<f64>, decimals: usize) -> String {
    match finite(value) {
        Some(v) => format!("{v:.decimals$}"),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// A fraction as a percentage: `0.8512` → `85.12%`.
pub fn format_percent(fraction: Option<f64>) -> String {
    match finite(fraction) {
        Some(v) => format!("{:.2}%", v * 100.0),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// A percentage with an explicit sign: `1.5` → `+1.50%`.
pub fn format_signed_percent(percent: Option<f64>) -> String {
    match finite(percent) {
        Some(v) => format!("{v:+.2}%"),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Share volume, rounded, with thousands separators: `1,234,567`.
pub fn format_volume(volume: Option<f64>) -> String {
    match finite(volume) {
        Some(v) => grouped(v.round(), 0),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// A multiple of the average: `1.23x`.
pub fn format_ratio(ratio: Option<f64>) -> String {
    match finite(ratio) {
        Some(v) => format!("{v:.2}x"),
        None => NOT_AVAILABLE.to_string(),
    }
}
