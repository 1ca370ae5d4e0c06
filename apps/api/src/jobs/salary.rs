//! Salary floor extraction from free-text salary strings.

/// Returns the first number in `text`, or `None` when it holds no digits.
///
/// A number is a run of ASCII digits; `,` is accepted as a thousands
/// separator when followed by exactly three digits, and a trailing `k`/`K`
/// multiplies by 1000. So `"$80,000 - $95,000"` yields `80000` and
/// `"$80k-$95k"` yields `80000`. Values that overflow `u64` yield `None`.
pub fn salary_floor(text: &str) -> Option<u64> {
    let bytes = text.as_bytes();
    let start = bytes.iter().position(u8::is_ascii_digit)?;

    let mut value: u64 = 0;
    let mut i = start;
    while i < bytes.len() {
        let b = bytes[i];
        if b.is_ascii_digit() {
            value = value.checked_mul(10)?.checked_add(u64::from(b - b'0'))?;
            i += 1;
        } else if b == b',' && is_thousands_group(&bytes[i + 1..]) {
            i += 1;
        } else {
            break;
        }
    }

    match bytes.get(i) {
        Some(b'k') | Some(b'K') => value.checked_mul(1000),
        _ => Some(value),
    }
}

fn is_thousands_group(rest: &[u8]) -> bool {
    rest.len() >= 3
        && rest[..3].iter().all(u8::is_ascii_digit)
        && !rest.get(3).is_some_and(u8::is_ascii_digit)
}
