//! Basic usage example for picker-core
//!
//! Builds a picker over the bundled catalog, walks its sections and runs a
//! few searches the way a list screen would while the user types.

use picker_core::{CaseMode, DefaultCatalog, PickerConfig, PickerController, Result};

fn main() -> Result<()> {
    println!("=== Country Picker Basic Usage ===\n");

    let catalog = DefaultCatalog::bundled()?;
    println!("Catalog: {} countries\n", catalog.len());

    // Example 1: Preferred section on top
    println!("--- Example 1: Sections ---");
    let config = PickerConfig::default()
        .with_preferred("Preferred", &["NG", "GH", "KE"])
        .show_phone_code(true);
    let mut picker = PickerController::new(catalog, config)?;
    for section in 0..picker.number_of_sections().min(3) {
        let title = picker.title_for_header(section)?.unwrap_or_default();
        println!("{title}:");
        for row in 0..picker.number_of_rows(section)? {
            println!("  {}", picker.cell(section, row, None)?.title);
        }
    }
    println!("... {} sections in total\n", picker.number_of_sections());

    // Example 2: Fast-scroll strip
    println!("--- Example 2: Fast-scroll titles ---");
    if let Some(titles) = picker.section_index_titles() {
        println!("{}", titles.join(" "));
    }
    println!("'S' jumps to section {}\n", picker.section_for_index_title("S")?);

    // Example 3: Typing "Sai"
    println!("--- Example 3: Search as you type ---");
    for query in ["S", "Sa", "Sai"] {
        picker.update_search(query);
        println!("{query:>4} -> {} hits", picker.search_results().len());
    }
    for country in picker.search_results() {
        println!("  - {}", country.name());
    }
    println!();

    // Example 4: Folded search
    println!("--- Example 4: Case/accent-insensitive search ---");
    let folded = PickerConfig::default().search_case(CaseMode::Folded);
    let mut picker = PickerController::new(catalog, folded)?;
    picker.update_search("cote");
    for country in picker.search_results() {
        println!("  - {}", country.name());
    }
    println!();

    // Example 5: Selection
    println!("--- Example 5: Selecting a row ---");
    picker.update_search("ghan");
    let chosen = picker.select(0, 0, &mut |c: &picker_core::DefaultCountry| {
        println!("  host notified: {} ({})", c.name(), c.phone_code());
    })?;
    println!("  selected: {}", chosen.code());

    println!("\n=== Example completed successfully ===");
    Ok(())
}
