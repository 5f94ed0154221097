//! Error handling example for picker-core
//!
//! Shows the recoverable failures a host can hit.

use picker_core::{DefaultCatalog, PickerConfig, PickerController, PickerError, Result};

fn main() -> Result<()> {
    println!("=== Country Picker Error Handling Example ===\n");

    // Example 1: Missing catalog file
    println!("--- Example 1: Loading a catalog that does not exist ---");
    match DefaultCatalog::load_from_path("does/not/exist.json") {
        Ok(c) => println!("  unexpectedly loaded {} countries", c.len()),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    let catalog = DefaultCatalog::bundled()?;

    // Example 2: Unknown preferred codes
    println!("--- Example 2: Unknown preferred code ---");
    let config = PickerConfig::default().with_preferred("Preferred", &["NG", "XX"]);
    match PickerController::new(catalog, config) {
        Ok(_) => println!("  built"),
        Err(PickerError::UnknownCountryCode(code)) => println!("  ✗ unknown code {code}"),
        Err(e) => return Err(e),
    }
    let lenient = catalog.resolve_codes_lossy(&["NG", "XX"]);
    println!("  lossy resolution kept {} country", lenient.len());
    println!();

    // Example 3: Stale fast-scroll title
    println!("--- Example 3: Fast-scroll title that is not in the index ---");
    let picker = PickerController::new(catalog, PickerConfig::default())?;
    let section = match picker.section_for_index_title("Ω") {
        Ok(s) => s,
        Err(PickerError::TitleNotFound(title)) => {
            println!("  ✗ no section {title:?}, staying at the top");
            0
        }
        Err(e) => return Err(e),
    };
    println!("  showing section {section}");
    println!();

    // Example 4: Out-of-range rows
    println!("--- Example 4: Out-of-range row ---");
    if let Err(e) = picker.country_for_row(0, 10_000) {
        println!("  ✗ {e}");
    }

    Ok(())
}
