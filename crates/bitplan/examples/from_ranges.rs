//! Build a draw.io document from bit ranges constructed in code.
//!
//! Run with `cargo run -p bitplan --example from_ranges > ipv6.drawio`.

use bitplan::{export::drawio, layout, semantic::BitRange};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let ranges = vec![
        BitRange::new(0, 3, "Version")?,
        BitRange::new(4, 11, "Traffic Class")?,
        BitRange::new(12, 31, "Flow Label")?,
        BitRange::new(32, 47, "Payload Length")?,
        BitRange::new(48, 55, "Next Header")?,
        BitRange::new(56, 63, "Hop Limit")?,
    ];

    let blocks = layout::layout(&ranges);
    print!("{}", drawio::generate(&blocks)?);

    Ok(())
}
