//! Per-chunk integer parsing.
//!
//! Each worker scans its chunk line by line and parses the leading integer
//! token of every line. Parsing works directly on the byte slice with no
//! per-line allocation. A line that yields no integer is dropped silently:
//! it is counted nowhere, which means malformed input can silently
//! undercount (a deliberate simplification of this engine).

/// Parse every line of `chunk` into an ordered sequence of samples.
///
/// Order within the chunk is preserved; downstream steps are
/// order-independent across chunks.
pub fn parse_chunk(chunk: &[u8]) -> Vec<i64> {
    let mut samples = Vec::new();
    for line in chunk.split(|&b| b == b'\n') {
        if let Some(value) = parse_leading_int(line) {
            samples.push(value);
        }
    }
    samples
}

/// Parse the leading integer token of a line, `strtol`-style.
///
/// Skips leading whitespace, accepts an optional sign, then consumes digits
/// until the first non-digit byte. Returns `None` when no digit is found or
/// the value overflows `i64` (the line is then treated as malformed).
#[inline]
pub fn parse_leading_int(line: &[u8]) -> Option<i64> {
    let mut i = 0;
    while i < line.len() && matches!(line[i], b' ' | b'\t' | b'\r') {
        i += 1;
    }

    let negative = match line.get(i) {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };

    let mut value: i64 = 0;
    let mut digits = 0usize;
    while let Some(&b) = line.get(i) {
        if !b.is_ascii_digit() {
            break;
        }
        let digit = (b - b'0') as i64;
        value = value.checked_mul(10)?;
        value = if negative {
            value.checked_sub(digit)?
        } else {
            value.checked_add(digit)?
        };
        digits += 1;
        i += 1;
    }

    if digits == 0 {
        return None;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_integers() {
        assert_eq!(parse_leading_int(b"42"), Some(42));
        assert_eq!(parse_leading_int(b"0"), Some(0));
        assert_eq!(parse_leading_int(b"-17"), Some(-17));
        assert_eq!(parse_leading_int(b"+8"), Some(8));
    }

    #[test]
    fn test_parse_leading_whitespace() {
        assert_eq!(parse_leading_int(b"  123"), Some(123));
        assert_eq!(parse_leading_int(b"\t\t-5"), Some(-5));
        assert_eq!(parse_leading_int(b"9\r"), Some(9));
    }

    #[test]
    fn test_parse_stops_at_first_non_digit() {
        // Leading token only: trailing content on the line is ignored.
        assert_eq!(parse_leading_int(b"12 extra columns"), Some(12));
        assert_eq!(parse_leading_int(b"3.75"), Some(3));
        assert_eq!(parse_leading_int(b"100abc"), Some(100));
    }

    #[test]
    fn test_parse_malformed_lines() {
        assert_eq!(parse_leading_int(b""), None);
        assert_eq!(parse_leading_int(b"   "), None);
        assert_eq!(parse_leading_int(b"abc"), None);
        assert_eq!(parse_leading_int(b"x12"), None);
        assert_eq!(parse_leading_int(b"-"), None);
        assert_eq!(parse_leading_int(b"+"), None);
    }

    #[test]
    fn test_parse_extremes() {
        assert_eq!(
            parse_leading_int(b"9223372036854775807"),
            Some(i64::MAX)
        );
        assert_eq!(
            parse_leading_int(b"-9223372036854775808"),
            Some(i64::MIN)
        );
        // Overflowing tokens are malformed, not saturated.
        assert_eq!(parse_leading_int(b"9223372036854775808"), None);
        assert_eq!(parse_leading_int(b"99999999999999999999999"), None);
    }

    #[test]
    fn test_parse_chunk_preserves_order() {
        let chunk = b"3\n1\n4\n1\n5\n";
        assert_eq!(parse_chunk(chunk), vec![3, 1, 4, 1, 5]);
    }

    #[test]
    fn test_parse_chunk_skips_garbage_lines() {
        let chunk = b"10\nnot a number\n20\n\n30\n";
        assert_eq!(parse_chunk(chunk), vec![10, 20, 30]);
    }

    #[test]
    fn test_parse_chunk_empty() {
        assert_eq!(parse_chunk(b""), Vec::<i64>::new());
    }
}
