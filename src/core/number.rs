use crate::domain::model::Amount;
use regex::Regex;
use std::sync::OnceLock;

fn numeric_prefix() -> &'static Regex {
    static PREFIX: OnceLock<Regex> = OnceLock::new();
    PREFIX.get_or_init(|| {
        Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
            .expect("numeric prefix pattern is valid")
    })
}

/// Lenient float parsing: skips leading whitespace and reads the longest
/// numeric prefix, so `"42abc"` is 42 and `"abc"` is `None`.
pub fn parse_lenient(text: &str) -> Option<f64> {
    let trimmed = text.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let matched = numeric_prefix().find(trimmed)?.as_str();

    let (negative, unsigned) = match matched.as_bytes().first() {
        Some(b'-') => (true, &matched[1..]),
        Some(b'+') => (false, &matched[1..]),
        _ => (false, matched),
    };

    let value = if unsigned == "Infinity" {
        f64::INFINITY
    } else {
        unsigned.parse::<f64>().ok()?
    };

    Some(if negative { -value } else { value })
}

/// 把 Amount 轉成可格式化的數字；缺值或非數字回傳 None
pub fn to_number(amount: &Amount) -> Option<f64> {
    let value = match amount {
        Amount::Missing => return None,
        Amount::Number(n) => *n,
        Amount::Text(text) => parse_lenient(text)?,
    };
    if value.is_nan() {
        None
    } else {
        Some(value)
    }
}

/// Rounds a finite, non-negative value to `digits` fraction digits, half away
/// from zero, working on its shortest decimal representation. Returns the
/// integer and fraction digit strings.
pub fn round_half_expand(value: f64, digits: usize) -> (String, String) {
    let shortest = format!("{}", value.abs());
    let (int_part, frac_part) = match shortest.split_once('.') {
        Some((i, f)) => (i, f),
        None => (shortest.as_str(), ""),
    };

    if frac_part.len() <= digits {
        let mut frac = frac_part.to_string();
        frac.extend(std::iter::repeat('0').take(digits - frac_part.len()));
        return (int_part.to_string(), frac);
    }

    let round_up = frac_part.as_bytes()[digits] >= b'5';
    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .map(|b| b - b'0')
        .collect();

    if round_up {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, 1);
        }
    }

    let rendered: String = kept.iter().map(|d| char::from(b'0' + d)).collect();
    let split_at = rendered.len() - digits;
    let (int_digits, frac_digits) = rendered.split_at(split_at);
    (int_digits.to_string(), frac_digits.to_string())
}

/// 依語系的分組規則插入千分位符號
pub fn group_integer(
    digits: &str,
    separator: char,
    primary: usize,
    secondary: usize,
    min_grouping: usize,
) -> String {
    if primary == 0 || digits.len() < primary + min_grouping {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - primary);
    let mut groups = vec![tail];
    let mut rest = head;
    while rest.len() > secondary {
        let (h, t) = rest.split_at(rest.len() - secondary);
        groups.push(t);
        rest = h;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }

    groups.reverse();
    groups.join(&separator.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lenient_prefixes() {
        assert_eq!(parse_lenient("42"), Some(42.0));
        assert_eq!(parse_lenient("  3.5"), Some(3.5));
        assert_eq!(parse_lenient("42abc"), Some(42.0));
        assert_eq!(parse_lenient(".5"), Some(0.5));
        assert_eq!(parse_lenient("-.25"), Some(-0.25));
        assert_eq!(parse_lenient("1e3"), Some(1000.0));
        assert_eq!(parse_lenient("1e"), Some(1.0));
        assert_eq!(parse_lenient("+7."), Some(7.0));
        assert_eq!(parse_lenient("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_lenient("1,234.5"), Some(1.0));
        // 只認 ASCII 數字，其他數字系統的字元視為數字結尾
        assert_eq!(parse_lenient("5\u{663}"), Some(5.0));
        assert_eq!(parse_lenient("12\u{ff13}"), Some(12.0));
        assert_eq!(parse_lenient("1.5\u{663}"), Some(1.5));
        assert_eq!(parse_lenient("\u{663}"), None);
    }

    #[test]
    fn test_parse_lenient_rejects_non_numeric() {
        assert_eq!(parse_lenient("abc"), None);
        assert_eq!(parse_lenient(""), None);
        assert_eq!(parse_lenient("   "), None);
        assert_eq!(parse_lenient("$5"), None);
        assert_eq!(parse_lenient("NaN"), None);
        assert_eq!(parse_lenient("infinity"), None);
    }

    #[test]
    fn test_to_number() {
        assert_eq!(to_number(&Amount::Missing), None);
        assert_eq!(to_number(&Amount::Number(f64::NAN)), None);
        assert_eq!(to_number(&Amount::Text("12".to_string())), Some(12.0));
    }

    #[test]
    fn test_round_half_expand() {
        assert_eq!(round_half_expand(1234.5, 2), ("1234".into(), "50".into()));
        assert_eq!(round_half_expand(1.005, 2), ("1".into(), "01".into()));
        assert_eq!(round_half_expand(2.5, 0), ("3".into(), "".into()));
        assert_eq!(round_half_expand(0.125, 2), ("0".into(), "13".into()));
        assert_eq!(round_half_expand(9.999, 2), ("10".into(), "00".into()));
        assert_eq!(round_half_expand(0.0004, 3), ("0".into(), "000".into()));
        assert_eq!(round_half_expand(1e21, 2), ("1000000000000000000000".into(), "00".into()));
    }

    #[test]
    fn test_group_integer() {
        assert_eq!(group_integer("1234567", ',', 3, 3, 1), "1,234,567");
        assert_eq!(group_integer("123", ',', 3, 3, 1), "123");
        assert_eq!(group_integer("1234567", ',', 3, 2, 1), "12,34,567");
        assert_eq!(group_integer("1234", '.', 3, 3, 2), "1234");
        assert_eq!(group_integer("12345", '.', 3, 3, 2), "12.345");
    }
}
