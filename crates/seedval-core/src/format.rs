//! Spanish (es-ES) number formatting for reports.
//!
//! Thousands use `.` and decimals use `,`: `$ 1.500.000`, `12,5`.

/// Whole-currency amount, e.g. `$ 1.000.000`. Non-finite values render as `—`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return String::from("—");
    }
    format!("$ {}", format_number(amount, 0))
}

/// Fixed-decimal number with es-ES separators, e.g. `format_number(12.5, 1)` is `12,5`.
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return String::from("—");
    }

    let rendered = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match rendered.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (rendered.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let is_zero = rendered.chars().all(|ch| ch == '0' || ch == '.');
    let mut output = String::new();
    if value.is_sign_negative() && !is_zero {
        output.push('-');
    }
    output.push_str(&grouped);
    if let Some(fraction) = fraction {
        output.push(',');
        output.push_str(fraction);
    }
    output
}

/// Signed percentage for ledger impacts, e.g. `-0.30` is `-30%`, `0.1` is `+10%`.
pub fn format_impact(impact: f64) -> String {
    let sign = if impact > 0.0 { "+" } else { "" };
    format!("{sign}{}%", format_number(impact * 100.0, 0))
}

/// Millions with two decimals and a dot separator, as fed to the summary prompt.
pub fn format_millions(amount: f64) -> String {
    format!("{:.2}", amount / 1_000_000.0)
}
