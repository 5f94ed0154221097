use clap::{Parser, Subcommand};

/// CLI arguments for country-picker
#[derive(Debug, Parser)]
#[command(
    name = "country-picker",
    version,
    about = "Browse, search and pick from a sectioned country list"
)]
pub struct CliArgs {
    /// Catalog file: JSON, JSON.gz or a .bin snapshot (default: bundled catalog)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Picker configuration as JSON; flags below override its values
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Comma-separated ISO2 codes for the preferred section (e.g. NG,GH,KE)
    #[arg(short = 'p', long = "preferred", global = true)]
    pub preferred: Option<String>,

    /// Title of the preferred section
    #[arg(long = "preferred-title", global = true)]
    pub preferred_title: Option<String>,

    /// Show and search only the preferred section
    #[arg(long = "only-preferred", global = true)]
    pub only_preferred: bool,

    /// Append dialing codes to country names
    #[arg(long = "phone-code", global = true)]
    pub phone_code: bool,

    /// Case- and accent-insensitive search
    #[arg(long = "folded", global = true)]
    pub folded: bool,

    /// Log debug output to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print every section with its countries
    Sections,

    /// Print the fast-scroll index titles
    Titles,

    /// Resolve a fast-scroll title to its section number
    Jump {
        /// Section title (e.g. N)
        title: String,
    },

    /// Search countries by name prefix
    Search {
        /// Prefix as typed into the search bar
        query: String,
    },

    /// Select a row and print the chosen country as JSON
    Select {
        /// Section number (0 while searching)
        section: usize,
        /// Row number within the section
        row: usize,
        /// Select from the results of this search instead of the sections
        #[arg(short = 's', long = "search")]
        search: Option<String>,
    },

    /// Write the catalog as a bincode snapshot for faster loading
    Snapshot {
        /// Output path (e.g. catalog.bin)
        out: String,
    },
}
