//! Construction from loosely typed input.
//!
//! [`Point::convert`] is the single entry point for point-like values that
//! cross in from the outside world. Typed shapes go through the `From`
//! impls; anything else arrives as a [`serde_json::Value`] and is matched on
//! shape, with each coordinate coerced to a number the way a scripting host's
//! unary `+` would.

use serde_json::Value;

use crate::errors::PointError;
use crate::log::debug;
use crate::types::Point;

/// The shapes accepted by [`Point::convert`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointLike<'a> {
    /// Already a point; returned as-is.
    Point(Point),
    /// An ordered `[x, y]` pair.
    Pair([f64; 2]),
    /// Untyped input: `[x, y]` or `{"x": .., "y": ..}`.
    Loose(&'a Value),
}

impl From<Point> for PointLike<'_> {
    fn from(p: Point) -> Self {
        PointLike::Point(p)
    }
}

impl From<[f64; 2]> for PointLike<'_> {
    fn from(pair: [f64; 2]) -> Self {
        PointLike::Pair(pair)
    }
}

impl From<(f64, f64)> for PointLike<'_> {
    fn from((x, y): (f64, f64)) -> Self {
        PointLike::Pair([x, y])
    }
}

impl<'a> From<&'a Value> for PointLike<'a> {
    fn from(value: &'a Value) -> Self {
        PointLike::Loose(value)
    }
}

impl Point {
    /// Build a point from any accepted point-like shape.
    ///
    /// Fails with [`PointError::InvalidFormat`] when a loose value is neither
    /// a two-element array nor an object carrying both `x` and `y`. A
    /// coordinate that does not coerce to a number becomes NaN rather than
    /// an error.
    pub fn convert<'a>(value: impl Into<PointLike<'a>>) -> Result<Point, PointError> {
        match value.into() {
            PointLike::Point(p) => Ok(p),
            PointLike::Pair(pair) => Ok(Point::from(pair)),
            PointLike::Loose(value) => from_loose(value),
        }
    }
}

impl TryFrom<&Value> for Point {
    type Error = PointError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        from_loose(value)
    }
}

fn from_loose(value: &Value) -> Result<Point, PointError> {
    let result = match value {
        Value::Array(items) if items.len() == 2 => {
            Ok(Point::new(to_number(&items[0]), to_number(&items[1])))
        }
        Value::Array(items) => Err(PointError::invalid_format(format!(
            "an array of {} elements",
            items.len()
        ))),
        Value::Object(map) => match (map.get("x"), map.get("y")) {
            (Some(x), Some(y)) => Ok(Point::new(to_number(x), to_number(y))),
            (None, Some(_)) => Err(PointError::invalid_format("an object without `x`")),
            (Some(_), None) => Err(PointError::invalid_format("an object without `y`")),
            (None, None) => Err(PointError::invalid_format("an object without `x` and `y`")),
        },
        Value::Null => Err(PointError::invalid_format("null")),
        Value::Bool(_) => Err(PointError::invalid_format("a boolean")),
        Value::Number(_) => Err(PointError::invalid_format("a number")),
        Value::String(_) => Err(PointError::invalid_format("a string")),
    };

    if result.is_err() {
        debug!(?result, "convert: rejected input");
    }
    result
}

/// Numeric coercion of an arbitrary value, unary-plus style.
pub(crate) fn to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => string_to_number(s),
        Value::Array(items) => match items.as_slice() {
            [] => 0.0,
            [single] => single_element_to_number(single),
            _ => f64::NAN,
        },
        Value::Object(_) => f64::NAN,
    }
}

// A one-element array coerces through its string form, so a nested null
// reads as the empty string.
fn single_element_to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(_) => f64::NAN,
        other => to_number(other),
    }
}

/// Parse a string as a number, the lenient way: surrounding whitespace is
/// ignored, an empty string is zero, and anything unparseable is NaN.
pub(crate) fn string_to_number(s: &str) -> f64 {
    let t = s.trim_matches(is_numeric_whitespace);
    if t.is_empty() {
        return 0.0;
    }

    match t {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(radix_value) = parse_radix_literal(t) {
        return radix_value;
    }

    // `str::parse` also accepts "inf" and "nan" spellings; those are not
    // numeric literals here.
    let is_decimal = t
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !is_decimal {
        return f64::NAN;
    }
    t.parse::<f64>().unwrap_or(f64::NAN)
}

/// Whitespace and line terminators skipped around a numeric string. Unlike
/// `char::is_whitespace` this includes the byte-order mark and excludes
/// U+0085.
fn is_numeric_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// `0x`, `0o` and `0b` prefixed unsigned literals. Returns `None` when `t`
/// has no such prefix, `Some(NaN)` when the digits are invalid.
fn parse_radix_literal(t: &str) -> Option<f64> {
    let bytes = t.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let digits = &t[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    // Accumulate in f64 so long literals lose precision instead of overflowing.
    let mut acc = 0.0_f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => acc = acc * f64::from(radix) + f64::from(d),
            None => return Some(f64::NAN),
        }
    }
    Some(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn convert_existing_point_is_identity() {
        let p = Point::new(20.0, 30.0);
        assert_eq!(Point::convert(p), Ok(p));
    }

    #[test]
    fn convert_typed_pairs() {
        assert_eq!(Point::convert([20.0, 30.0]), Ok(Point::new(20.0, 30.0)));
        assert_eq!(Point::convert((20.0, 30.0)), Ok(Point::new(20.0, 30.0)));
    }

    #[test]
    fn convert_loose_array_and_object() {
        assert_eq!(Point::convert(&json!([20, 30])), Ok(Point::new(20.0, 30.0)));
        assert_eq!(Point::convert(&json!(["20", " 30 "])), Ok(Point::new(20.0, 30.0)));
        assert_eq!(
            Point::convert(&json!({ "x": 20, "y": 30 })),
            Ok(Point::new(20.0, 30.0))
        );
        assert_eq!(
            Point::convert(&json!({ "x": "1.5", "y": null, "z": 9 })),
            Ok(Point::new(1.5, 0.0))
        );
    }

    #[test]
    fn convert_rejects_unrecognised_shapes() {
        for (value, found) in [
            (json!("somestring"), "a string"),
            (json!(null), "null"),
            (json!(42), "a number"),
            (json!(true), "a boolean"),
            (json!([1, 2, 3]), "an array of 3 elements"),
            (json!([]), "an array of 0 elements"),
            (json!({ "x": 1 }), "an object without `y`"),
            (json!({ "y": 1 }), "an object without `x`"),
            (json!({}), "an object without `x` and `y`"),
        ] {
            assert_eq!(
                Point::convert(&value),
                Err(PointError::InvalidFormat {
                    found: found.to_string()
                }),
                "input: {value}"
            );
        }
    }

    #[test]
    fn convert_unparseable_coordinate_is_nan() {
        let p = Point::convert(&json!(["abc", 1])).unwrap();
        assert!(p.x.is_nan());
        assert_eq!(p.y, 1.0);
    }

    #[test]
    fn try_from_matches_convert() {
        let value = json!({ "x": -3, "y": 4.5 });
        assert_eq!(Point::try_from(&value), Point::convert(&value));
    }

    #[test]
    fn string_coercion() {
        assert_eq!(string_to_number("20"), 20.0);
        assert_eq!(string_to_number("  -1.5e2\n"), -150.0);
        assert_eq!(string_to_number(".5"), 0.5);
        assert_eq!(string_to_number(""), 0.0);
        assert_eq!(string_to_number("   "), 0.0);
        assert_eq!(string_to_number("Infinity"), f64::INFINITY);
        assert_eq!(string_to_number("-Infinity"), f64::NEG_INFINITY);
        assert_eq!(string_to_number("0x1F"), 31.0);
        assert_eq!(string_to_number("0o17"), 15.0);
        assert_eq!(string_to_number("0b101"), 5.0);
        assert!(string_to_number("inf").is_nan());
        assert!(string_to_number("NaN").is_nan());
        assert!(string_to_number("12px").is_nan());
        assert!(string_to_number("0x").is_nan());
        assert!(string_to_number("0xZZ").is_nan());
        assert!(string_to_number(".").is_nan());
    }

    #[test]
    fn string_coercion_whitespace_set() {
        assert_eq!(string_to_number("\u{feff}5"), 5.0);
        assert_eq!(string_to_number("\u{a0}5\u{3000}"), 5.0);
        assert_eq!(string_to_number("\u{2028}-2\u{2029}"), -2.0);
        assert!(string_to_number("\u{85}5").is_nan());
        assert!(string_to_number("5\u{85}").is_nan());
        assert_eq!(
            Point::convert(&json!(["\u{feff}5", "\u{85}5"])).map(|p| p.x),
            Ok(5.0)
        );
    }

    #[test]
    fn value_coercion() {
        assert_eq!(to_number(&json!(null)), 0.0);
        assert_eq!(to_number(&json!(true)), 1.0);
        assert_eq!(to_number(&json!(false)), 0.0);
        assert_eq!(to_number(&json!([])), 0.0);
        assert_eq!(to_number(&json!(["7"])), 7.0);
        assert_eq!(to_number(&json!([null])), 0.0);
        assert!(to_number(&json!([1, 2])).is_nan());
        assert!(to_number(&json!({ "a": 1 })).is_nan());
    }
}
