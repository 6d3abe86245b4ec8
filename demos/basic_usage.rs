// ============================================================================
// Basic Usage Example
// ============================================================================

use roman_numeral::prelude::*;
use std::sync::Arc;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Roman Numeral Example ===\n");

    // Free functions
    println!("Encoding...");
    for value in [1, 4, 14, 1994, 2024, 3999] {
        match encode(value) {
            Ok(numeral) => println!("  {:>4} -> {}", value, numeral),
            Err(e) => println!("  {:>4} -> error: {}", value, e),
        }
    }

    println!("\nDecoding...");
    for numeral in ["XIV", "mcmxciv", "IIII", "MCMXQ", ""] {
        match decode(numeral) {
            Ok(value) => println!("  {:<9} -> {}", numeral, value),
            Err(e) => println!("  {:<9} -> error: {}", numeral, e),
        }
    }

    // Converter with strict grammar and logging
    println!("\n=== Strict Converter ===");
    let converter = ConverterBuilder::new("demo")
        .strict()
        .build(Arc::new(LoggingEventHandler))
        .unwrap();

    for numeral in ["MMXXIV", "IIII", "IC", "MMMM"] {
        match converter.decode(numeral) {
            Ok(value) => println!("  {:<6} -> {}", numeral, value),
            Err(e) => println!("  {:<6} rejected: {}", numeral, e),
        }
    }

    // Lowercase page numbers
    println!("\n=== Page Numbers ===");
    let pages = ConverterBuilder::minuscule_preset("pages")
        .build(Arc::new(NoOpEventHandler))
        .unwrap();
    let numbered: Vec<String> = (1..=10).filter_map(|page| pages.encode(page).ok()).collect();
    println!("  {}", numbered.join(" "));

    // Value type
    println!("\n=== Roman Value ===");
    let year: Roman = "MCMXCIV".parse().unwrap();
    let later = year.checked_add(Roman::new(30).unwrap()).unwrap();
    println!("  {} + XXX = {}", year, later);
    println!("  {:?}", later);

    let stats = converter.stats();
    println!(
        "\nStrict converter: {} decoded, {} rejected",
        stats.decoded, stats.rejected
    );
}
