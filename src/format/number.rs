/// Fixed-point decimal with between `min_digits` and `max_digits` fraction digits.
///
/// Trailing zeros beyond `min_digits` are dropped, as is a bare decimal point:
/// `format_decimal(3.0, 0, 1)` is "3", `format_decimal(3.25, 0, 1)` is "3.2".
/// Always uses '.' and no digit grouping.
pub fn format_decimal(value: f64, min_digits: usize, max_digits: usize) -> String {
    let max_digits = max_digits.max(min_digits);
    let mut text = format!("{:.*}", max_digits, value);

    if let Some(point) = text.find('.') {
        let keep = point + 1 + min_digits;
        while text.len() > keep && text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }

    // "-0" reads badly for sizes that rounded away
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text.remove(0);
    }

    text
}
