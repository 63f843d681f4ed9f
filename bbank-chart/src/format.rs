/// Format a number with comma thousands separators: 1234567 → "1,234,567",
/// 1234.5 → "1,234.5". At most two decimals are kept.
pub fn thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = format!("{:.2}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    let sign = if value < 0.0 && rounded != "0.00" { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}

/// Plotly d3-format string for a value axis.
pub fn tick_format(values: &[f64]) -> &'static str {
    if values.iter().all(|v| v.fract() == 0.0) {
        ",d"
    } else {
        ",.1f"
    }
}
