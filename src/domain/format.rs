use chrono::DateTime;

/// Groups thousands with a space: 2000000 -> "2 000 000".
pub fn money(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if amount < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

pub fn mileage(km: i64) -> String {
    if km == 0 {
        "New".to_string()
    } else {
        format!("{} km", money(km))
    }
}

/// Unix seconds -> "2024-03-01 14:05".
pub fn date_time(ts: i64) -> String {
    DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}
