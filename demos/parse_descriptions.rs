//! Parses a handful of catalog descriptions and prints the structured
//! result of each.
//!
//! Run with: `cargo run --example parse_descriptions`

use packparse::DescriptionParser;

fn main() {
    let descriptions = [
        "12-PK 12 FL OZ Coca Cola Cans",
        "Pack of 35 Nestle Water Bottles 16.9 oz",
        "8 x 500ml Pepsi Max Bottles",
        "2L Store Brand Root Beer",
        "Generic Snack Bag",
    ];

    let parser = DescriptionParser::new();

    for description in descriptions {
        let record = parser.parse(description);
        println!("{:<42} => {}", description, record);
    }
}
