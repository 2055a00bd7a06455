use point_geometry::{Mat2, Point};
use std::f64::consts::FRAC_PI_2;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // First argument is a JSON point: `[x, y]` or `{"x": .., "y": ..}`.
    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| r#"{"x": "2", "y": 3}"#.to_string());
    let value: serde_json::Value =
        serde_json::from_str(&input).map_err(|e| miette::miette!("Invalid JSON: {}", e))?;

    let p = Point::convert(&value)?;
    let pivot = Point::new(2.0, 2.0);

    println!("input          {p}");
    println!("mag            {}", p.mag());
    println!("angle          {}", p.angle());
    println!("unit           {}", p.unit());
    println!("perp           {}", p.perp());
    println!("rotate 90°     {}", p.rotate(FRAC_PI_2).round());
    println!("around {pivot}  {}", p.rotate_around(FRAC_PI_2, &pivot).round());
    println!("shear          {}", p.mat_mult(Mat2::from_rows([1.0, 1.0], [0.0, 1.0])));

    let mut q = p;
    q.mult_in_place(2.0).add_in_place(&pivot).round_in_place();
    println!("2p + pivot     {q}");

    Ok(())
}
