// crates/clusterviz-core/src/color/key.rs

use std::fmt;

/// Canonical form of a lookup key.
///
/// Anything that reads as an integer collapses to `Int`, so `"3"`, `3u8` and
/// `3.0f64` all land in the same assignment slot. Everything else is kept as
/// text, verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorKey {
    Int(i64),
    Text(String),
}

impl ColorKey {
    /// Normalize a textual key. Total: never fails.
    pub fn from_text(raw: &str) -> Self {
        match parse_int(raw) {
            Some(v) => ColorKey::Int(v),
            None => ColorKey::Text(raw.to_string()),
        }
    }

    /// Normalize a float key: finite values truncate toward zero.
    pub fn from_f64(v: f64) -> Self {
        if v.is_finite() {
            let t = v.trunc();
            if t >= i64::MIN as f64 && t < i64::MAX as f64 {
                return ColorKey::Int(t as i64);
            }
        }
        ColorKey::Text(format!("{v}"))
    }

    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ColorKey::Int(v) => Some(*v),
            ColorKey::Text(_) => None,
        }
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorKey::Int(v) => write!(f, "{v}"),
            ColorKey::Text(s) => f.write_str(s),
        }
    }
}

/// Decimal integer literal: optional surrounding whitespace, optional sign,
/// digits with single underscores allowed between them.
fn parse_int(raw: &str) -> Option<i64> {
    let s = raw.trim();
    let (neg, digits) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    if digits.is_empty() || digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
        return None;
    }
    let mut acc: i64 = 0;
    for c in digits.chars() {
        if c == '_' {
            continue;
        }
        let d = c.to_digit(10)? as i64;
        // Accumulate negatively so i64::MIN parses.
        acc = acc.checked_mul(10)?.checked_sub(d)?;
    }
    if neg {
        Some(acc)
    } else {
        acc.checked_neg()
    }
}

impl From<&str> for ColorKey {
    fn from(v: &str) -> Self {
        ColorKey::from_text(v)
    }
}

impl From<String> for ColorKey {
    fn from(v: String) -> Self {
        match parse_int(&v) {
            Some(i) => ColorKey::Int(i),
            None => ColorKey::Text(v),
        }
    }
}

impl From<&String> for ColorKey {
    fn from(v: &String) -> Self {
        ColorKey::from_text(v)
    }
}

impl From<&ColorKey> for ColorKey {
    fn from(v: &ColorKey) -> Self {
        v.clone()
    }
}

impl From<bool> for ColorKey {
    fn from(v: bool) -> Self {
        ColorKey::Int(v as i64)
    }
}

impl From<f64> for ColorKey {
    fn from(v: f64) -> Self {
        ColorKey::from_f64(v)
    }
}

impl From<f32> for ColorKey {
    fn from(v: f32) -> Self {
        ColorKey::from_f64(v as f64)
    }
}

macro_rules! lossless_int_key {
    ($($t:ty),*) => {$(
        impl From<$t> for ColorKey {
            #[inline]
            fn from(v: $t) -> Self {
                ColorKey::Int(v as i64)
            }
        }
    )*};
}

macro_rules! wide_int_key {
    ($($t:ty),*) => {$(
        impl From<$t> for ColorKey {
            fn from(v: $t) -> Self {
                match i64::try_from(v) {
                    Ok(i) => ColorKey::Int(i),
                    Err(_) => ColorKey::Text(v.to_string()),
                }
            }
        }
    )*};
}

lossless_int_key!(i8, i16, i32, i64, u8, u16, u32);
wide_int_key!(u64, usize, isize, i128, u128);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_strings_collapse_to_int() {
        assert_eq!(ColorKey::from("7"), ColorKey::Int(7));
        assert_eq!(ColorKey::from(" -12 "), ColorKey::Int(-12));
        assert_eq!(ColorKey::from("+5"), ColorKey::Int(5));
        assert_eq!(ColorKey::from("1_000"), ColorKey::Int(1000));
        assert_eq!(ColorKey::from("-9223372036854775808"), ColorKey::Int(i64::MIN));
    }

    #[test]
    fn non_integer_strings_stay_verbatim() {
        assert_eq!(ColorKey::from("3.0"), ColorKey::Text("3.0".into()));
        assert_eq!(ColorKey::from(" pion "), ColorKey::Text(" pion ".into()));
        assert_eq!(ColorKey::from(""), ColorKey::Text(String::new()));
        assert_eq!(ColorKey::from("-"), ColorKey::Text("-".into()));
        assert_eq!(ColorKey::from("1__0"), ColorKey::Text("1__0".into()));
        assert_eq!(ColorKey::from("_1"), ColorKey::Text("_1".into()));
        assert_eq!(
            ColorKey::from("99999999999999999999"),
            ColorKey::Text("99999999999999999999".into())
        );
    }

    #[test]
    fn floats_truncate_when_finite() {
        assert_eq!(ColorKey::from(3.0f64), ColorKey::Int(3));
        assert_eq!(ColorKey::from(-2.9f64), ColorKey::Int(-2));
        assert_eq!(ColorKey::from(7.5f32), ColorKey::Int(7));
        assert_eq!(ColorKey::from(f64::NAN), ColorKey::Text("NaN".into()));
        assert_eq!(ColorKey::from(f64::INFINITY), ColorKey::Text("inf".into()));
    }

    #[test]
    fn integer_types_agree() {
        assert_eq!(ColorKey::from(3u8), ColorKey::from(3i64));
        assert_eq!(ColorKey::from(3usize), ColorKey::from("3"));
        assert_eq!(ColorKey::from(true), ColorKey::Int(1));
        assert_eq!(ColorKey::from(u64::MAX), ColorKey::Text(u64::MAX.to_string()));
    }
}
