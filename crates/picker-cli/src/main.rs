//! country-picker: terminal host for picker-core
//!
//! Drives the picker controller the way a list screen would: builds the
//! sections once, prints them or the fast-scroll strip, runs a search as if
//! it had been typed, and selects a row.
//!
//! Usage examples
//! --------------
//!
//! - Show all sections, Nigeria and Ghana pinned on top
//!   $ country-picker --preferred NG,GH --preferred-title Preferred sections
//!
//! - Search (exact prefix, or case/accent-insensitive)
//!   $ country-picker search Ca
//!   $ country-picker --folded search cote
//!
//! - Select the first search hit
//!   $ country-picker select 0 0 --search Nig
//!
//! Logging goes to stderr; set `RUST_LOG` or pass `-v`.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use picker_core::{
    CaseMode, Country, DefaultBackend, DefaultCatalog, PickerConfig, PickerController,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .with(filter)
        .init();
}

fn load_catalog(input: Option<&str>) -> anyhow::Result<DefaultCatalog> {
    match input {
        Some(path) => DefaultCatalog::load_from_path(path)
            .with_context(|| format!("failed to load catalog from {path}")),
        None => Ok(DefaultCatalog::bundled()
            .context("bundled catalog is corrupt")?
            .clone()),
    }
}

fn build_config(args: &CliArgs) -> anyhow::Result<PickerConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {path}"))?;
            PickerConfig::from_json_str(&text).with_context(|| format!("invalid config {path}"))?
        }
        None => PickerConfig::default(),
    };

    if let Some(codes) = &args.preferred {
        config.preferred_codes = codes
            .split(',')
            .map(|x| x.trim())
            .filter(|x| !x.is_empty())
            .map(str::to_string)
            .collect();
        if config.preferred_title.is_none() {
            config.preferred_title = Some("Preferred".to_string());
        }
    }
    if let Some(title) = &args.preferred_title {
        config.preferred_title = Some(title.clone());
    }
    config.show_only_preferred |= args.only_preferred;
    config.show_phone_code |= args.phone_code;
    if args.folded {
        config.search_case = CaseMode::Folded;
    }
    Ok(config)
}

fn print_rows(picker: &PickerController<DefaultBackend>, section: usize) -> anyhow::Result<()> {
    for row in 0..picker.number_of_rows(section)? {
        let cell = picker.cell(section, row, None)?;
        let flag = cell.flag.unwrap_or_default();
        println!("  [{section}:{row}] {flag} {}", cell.title);
    }
    Ok(())
}

fn country_json(country: &Country<DefaultBackend>) -> serde_json::Value {
    serde_json::json!({
        "name": country.name(),
        "code": country.code(),
        "phone_code": country.phone_code(),
        "flag": country.flag().map(str::to_string).or_else(|| country.flag_emoji()),
    })
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let catalog = load_catalog(args.input.as_deref())?;
    let config = build_config(&args)?;
    tracing::debug!(countries = catalog.len(), ?config, "starting picker");
    let mut picker = PickerController::new(&catalog, config)?;

    match args.command {
        Commands::Sections => {
            for section in 0..picker.number_of_sections() {
                if let Some(title) = picker.title_for_header(section)? {
                    println!("{title}");
                }
                print_rows(&picker, section)?;
            }
        }

        Commands::Titles => {
            let titles = picker.section_index_titles().unwrap_or_default();
            println!("{}", titles.join(" "));
        }

        Commands::Jump { title } => {
            let section = picker
                .section_for_index_title(&title)
                .with_context(|| format!("no section titled {title:?}"))?;
            println!("{section}");
        }

        Commands::Search { query } => {
            picker.update_search(&query);
            if picker.search_results().is_empty() {
                println!("No countries found matching: {query}");
            } else {
                print_rows(&picker, 0)?;
            }
        }

        Commands::Select {
            section,
            row,
            search,
        } => {
            if let Some(query) = search {
                picker.update_search(&query);
            }
            let mut report = |c: &Country<DefaultBackend>| {
                println!("{}", country_json(c));
            };
            picker
                .select(section, row, &mut report)
                .with_context(|| format!("no row {row} in section {section}"))?;
        }

        Commands::Snapshot { out } => {
            catalog
                .save_as(&out)
                .with_context(|| format!("failed to write snapshot {out}"))?;
            println!("Wrote {} countries to {out}", catalog.len());
        }
    }

    Ok(())
}
