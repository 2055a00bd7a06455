use datatest_stable::Utf8Path;
use point_geometry::{Point, PointError};
use serde_json::Value;

/// Each fixture is a JSON object with an `input` and either:
/// - `expected`: `[x, y]`, where `null` stands for a NaN coordinate
/// - `error`: the expected `found` description of an `InvalidFormat` error
fn test_convert_fixture(path: &Utf8Path) -> datatest_stable::Result<()> {
    let source = std::fs::read_to_string(path)?;
    let fixture: Value = serde_json::from_str(&source)?;

    let input = fixture
        .get("input")
        .ok_or_else(|| format!("{path}: fixture has no `input`"))?;
    let result = Point::convert(input);

    match (fixture.get("expected"), fixture.get("error")) {
        (Some(expected), None) => {
            let p = result.map_err(|e| format!("{path}: unexpected error: {e}"))?;
            let [ex, ey] = expected_coords(expected)
                .ok_or_else(|| format!("{path}: `expected` must be [x, y]"))?;
            check_coord(path, "x", p.x, ex);
            check_coord(path, "y", p.y, ey);
        }
        (None, Some(Value::String(found))) => match result {
            Err(PointError::InvalidFormat { found: actual }) => {
                assert_eq!(&actual, found, "{path}: wrong error description");
            }
            Ok(p) => panic!("{path}: expected an error, got {p}"),
        },
        _ => return Err(format!("{path}: fixture needs exactly one of `expected` or `error`").into()),
    }

    Ok(())
}

fn expected_coords(value: &Value) -> Option<[Option<f64>; 2]> {
    match value.as_array()?.as_slice() {
        [x, y] => Some([x.as_f64(), y.as_f64()]),
        _ => None,
    }
}

fn check_coord(path: &Utf8Path, axis: &str, actual: f64, expected: Option<f64>) {
    match expected {
        Some(e) => assert_eq!(actual, e, "{path}: {axis} mismatch"),
        None => assert!(actual.is_nan(), "{path}: {axis} should be NaN, got {actual}"),
    }
}

datatest_stable::harness! {
    { test = test_convert_fixture, root = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/convert"), pattern = r"\.json$" },
}
