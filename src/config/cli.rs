use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "smashly")]
#[command(about = "Compare up to three padel rackets from the Smashly catalog")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Path to a TOML config file")]
    pub config: Option<String>,

    #[arg(long, global = true, env = "SMASHLY_API_URL")]
    pub api_base_url: Option<String>,

    #[arg(long, global = true, env = "SMASHLY_DATA_DIR")]
    pub data_dir: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Show the comparison badge and the side-by-side table
    Show,
    /// Add a racket by exact name
    Add {
        nombre: String,
        #[arg(long, help = "Do not query the catalog; build the entry from flags")]
        offline: bool,
        #[arg(long)]
        marca: Option<String>,
        #[arg(long, value_parser = parse_price)]
        precio: Option<f64>,
    },
    /// Remove a racket by exact name
    Remove { nombre: String },
    /// Remove every racket
    Clear,
    /// Exit with status 0 if the racket is in the comparison, 1 otherwise
    Contains { nombre: String },
    /// Browse the catalog
    Catalog {
        #[arg(long)]
        marca: Option<String>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Export the comparison
    Export {
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
        #[arg(long, help = "Write to this file instead of stdout")]
        output: Option<String>,
    },
}

fn parse_price(raw: &str) -> Result<f64, String> {
    let precio: f64 = raw.parse().map_err(|e| format!("invalid price: {}", e))?;
    if !precio.is_finite() || precio < 0.0 {
        return Err(format!("price must be a finite, non-negative number: {}", raw));
    }
    Ok(precio)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}
