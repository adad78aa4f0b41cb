//! Quoted display forms for offending values.
//!
//! Error messages show the object that failed to decode or validate in a form
//! that keeps its type visible: strings are quoted, numbers are not, so
//! `failed validating '42'` and `failed validating 42` stay distinguishable.

use serde_json::Value;

/// Produces the display form of a value inside an error message.
///
/// # Example
///
/// ```rust
/// use xmlschema_errors::Describe;
///
/// assert_eq!("abc".describe(), "'abc'");
/// assert_eq!(42i32.describe(), "42");
/// assert_eq!(Some(true).describe(), "true");
/// ```
pub trait Describe {
    /// Returns the value formatted for an error message.
    fn describe(&self) -> String;
}

/// Wraps `text` in quotes, escaping backslashes, the quote character and
/// control characters.
///
/// Single quotes are used unless the text contains a single quote and no
/// double quote, in which case it is wrapped in double quotes instead.
pub fn quote(text: &str) -> String {
    let delimiter = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push(delimiter);
    for c in text.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c == delimiter => {
                quoted.push('\\');
                quoted.push(c);
            }
            c if c.is_control() => quoted.push_str(&format!("\\x{:02x}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push(delimiter);
    quoted
}

impl Describe for str {
    fn describe(&self) -> String {
        quote(self)
    }
}

impl Describe for String {
    fn describe(&self) -> String {
        quote(self)
    }
}

impl Describe for char {
    fn describe(&self) -> String {
        let mut buf = [0u8; 4];
        quote(self.encode_utf8(&mut buf))
    }
}

macro_rules! describe_plain {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Describe for $ty {
                fn describe(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

describe_plain!(bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl Describe for Value {
    fn describe(&self) -> String {
        match self {
            Value::String(s) => quote(s),
            other => other.to_string(),
        }
    }
}

impl<T: Describe> Describe for Option<T> {
    fn describe(&self) -> String {
        match self {
            Some(value) => value.describe(),
            None => "None".to_string(),
        }
    }
}

impl<T: Describe + ?Sized> Describe for &T {
    fn describe(&self) -> String {
        (**self).describe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("it's"), r#""it's""#);
        assert_eq!(quote(r#"say "hi""#), r#"'say "hi"'"#);
        assert_eq!(quote(r#"it's "x""#), r#"'it\'s "x"'"#);
        assert_eq!(quote("a\\b"), r"'a\\b'");
        assert_eq!(quote("line\nbreak"), r"'line\nbreak'");
        assert_eq!(quote("\u{1}"), r"'\x01'");
        assert_eq!(quote("héllo"), "'héllo'");
    }

    #[test]
    fn test_plain_values() {
        assert_eq!((-3i64).describe(), "-3");
        assert_eq!(1.5f64.describe(), "1.5");
        assert_eq!(false.describe(), "false");
        assert_eq!('x'.describe(), "'x'");
    }

    #[test]
    fn test_json_values() {
        assert_eq!(json!("x").describe(), "'x'");
        assert_eq!(json!(7).describe(), "7");
        assert_eq!(json!([1, "a"]).describe(), r#"[1,"a"]"#);
        assert_eq!(json!(null).describe(), "null");
    }

    #[test]
    fn test_option() {
        assert_eq!(None::<i32>.describe(), "None");
        assert_eq!(Some("v").describe(), "'v'");
    }
}
