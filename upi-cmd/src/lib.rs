//! Command implementations for the UPI CLI.
//!
//! Provides subcommands for calling the analysis backend and for inspecting
//! the neighborhood options the page would show.

use clap::Subcommand;
use upi_core::config::DEFAULT_BASE_URL;

pub mod analyze;
pub mod neighborhoods;

#[derive(Subcommand)]
pub enum Command {
    /// Run one neighborhood analysis against the backend's /chat route
    Analyze {
        /// Backend base URL
        #[arg(long, env = "UPI_API_BASE", default_value = DEFAULT_BASE_URL)]
        base_url: String,

        /// Neighborhood to analyze; without it a bare GET /chat is sent
        #[arg(short, long)]
        neighborhood: Option<String>,

        /// Historical air quality index
        #[arg(long, default_value_t = 70.0)]
        aqi: f64,

        /// Grocery stores within 2 miles
        #[arg(long, default_value_t = 1.0)]
        stores: f64,

        /// Tree canopy cover (%)
        #[arg(long, default_value_t = 75.0)]
        cover: f64,
    },

    /// Check that the backend is up (GET /health)
    Health {
        /// Backend base URL
        #[arg(long, env = "UPI_API_BASE", default_value = DEFAULT_BASE_URL)]
        base_url: String,
    },

    /// List the dropdown options from a community-area CSV (path or http(s) URL)
    Neighborhoods {
        /// CSV file path or URL
        #[arg(short, long)]
        csv: String,

        /// Column to read instead of COMMUNITY/GEOG
        #[arg(long)]
        column: Option<String>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Analyze {
            base_url,
            neighborhood,
            aqi,
            stores,
            cover,
        } => {
            let input = analyze::build_input(neighborhood, aqi, stores, cover);
            analyze::run_analyze(&base_url, input.as_ref()).await
        }
        Command::Health { base_url } => analyze::run_health(&base_url).await,
        Command::Neighborhoods { csv, column } => {
            neighborhoods::run_neighborhoods(&csv, column.as_deref()).await
        }
    }
}
