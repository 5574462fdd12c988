//! Renders a price slider field into standalone markup.
//!
//! Usage:
//! ```bash
//! cargo run --example price_slider
//! ```

use indexmap::IndexMap;
use rangefield::render::{FieldProperties, PageContext};
use rangefield::RangeField;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // Custom breakpoints: most of the catalogue sits under 100€, so the
    // lower half of the slider covers 0..100 and the rest is compressed.
    let mut breakpoints = IndexMap::new();
    breakpoints.insert("50%".to_string(), 100.0);

    let mut field = RangeField::new(
        "price",
        Some("Maximum price"),
        25.0,
        0.0,
        1000.0,
        breakpoints,
        None,
    );
    field
        .set_step(5.0)
        .set_snap(true)
        .set_density(5)
        .set_format("€", 2);

    let mut page = PageContext::new();
    let markup = field.field(&mut page, FieldProperties::new())?;

    println!("{markup}");
    Ok(())
}
