// src/domain/price.rs

/// Render a whole-unit price as `$` followed by comma-grouped digits.
///
/// Groups are counted from the least-significant digit, so `1000` becomes
/// `$1,000` and `1234567` becomes `$1,234,567`.
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    formatted.push('$');

    for (index, digit) in digits.chars().enumerate() {
        let remaining = digits.len() - index;
        if index > 0 && remaining % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }

    formatted
}
