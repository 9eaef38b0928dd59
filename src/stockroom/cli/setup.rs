use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use stockroom::codec::is_encodable_name;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "stockroom", bin_name = "stockroom", version = get_version())]
#[command(
    about = "Menu-driven inventory register backed by a plain text file",
    long_about = "Menu-driven inventory register backed by a plain text file.\n\n\
                  Run without a subcommand for the interactive menu."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file (default: inventory.txt in the working directory)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Do not print advisory messages about the catalog file
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a product
    #[command(alias = "a")]
    Add {
        #[arg(allow_negative_numbers = true)]
        id: i64,
        #[arg(value_parser = parse_name)]
        name: String,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
        #[arg(allow_negative_numbers = true)]
        price: f64,
    },

    /// List products in insertion order
    #[command(alias = "ls")]
    List,

    /// Replace a product; omitted fields keep their current value
    #[command(alias = "u")]
    Update {
        #[arg(allow_negative_numbers = true)]
        old_id: i64,

        /// New product ID
        #[arg(long, allow_negative_numbers = true)]
        id: Option<i64>,

        /// New name
        #[arg(long, value_parser = parse_name)]
        name: Option<String>,

        /// New quantity
        #[arg(long, allow_negative_numbers = true)]
        quantity: Option<i64>,

        /// New unit price
        #[arg(long, allow_negative_numbers = true)]
        price: Option<f64>,
    },

    /// Delete a product
    #[command(alias = "rm")]
    Delete {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },

    /// List products sorted by name or price
    Sorted {
        #[arg(value_enum)]
        by: SortField,
    },

    /// Print product count, total quantity and total stock value
    Summary,
}

/// Names go into the catalog file verbatim, so the field separator and line
/// breaks are refused here rather than at save time.
fn parse_name(s: &str) -> Result<String, String> {
    if is_encodable_name(s.trim()) {
        Ok(s.to_string())
    } else {
        Err("name must not contain commas or line breaks".to_string())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortField {
    Name,
    Price,
}
