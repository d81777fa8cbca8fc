//! Walk a sparse matrix document and report timing and shape

use spiralwalk::{input::parse_matrix, BoundingShape, SpiralWalker, WalkerConfig};
use std::time::Instant;

const DOCUMENT: &str = "[[2, 3, 4, 8], null, [1, 0, 6, 10], [5, -7], []]";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Parsing matrix document...");
    let start = Instant::now();
    let matrix = parse_matrix::<i32>(DOCUMENT)?;
    let parse_time = start.elapsed();
    println!("Parsed in {:.3}ms", parse_time.as_secs_f64() * 1000.0);

    let shape = BoundingShape::of(&matrix);
    println!("\nMatrix Information:");
    println!("   Rows: {}", shape.row_count);
    println!("   Width: {}", shape.width);
    println!("   Cells walked: {}", shape.theoretical_total);

    for (separator, placeholder) in [(", ", "-"), (" ", "_"), (" | ", "null")] {
        let walker = SpiralWalker::new(
            WalkerConfig::default()
                .with_separator(separator)
                .with_null_value_replacement(placeholder),
        )?;

        let start_walk = Instant::now();
        let walk = walker.walk(&matrix);
        let walk_time = start_walk.elapsed();

        println!(
            "\n{:?} / {:?} ({} placeholders, {:.3}ms):",
            separator,
            placeholder,
            walk.placeholders(),
            walk_time.as_secs_f64() * 1000.0
        );
        println!("   {walk}");
    }

    Ok(())
}
