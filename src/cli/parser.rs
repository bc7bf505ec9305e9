use clap::{Parser, Subcommand};

/// Command-line interface definition for geopunch
/// CLI application to track attendance inside a geofenced area
#[derive(Parser)]
#[command(
    name = "geopunch",
    version = env!("CARGO_PKG_VERSION"),
    about = "A geofenced punch clock: check in near the target location and track elapsed time",
    long_about = None
)]
pub struct Cli {
    /// Override config file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init {
        /// Geofence center as "LAT,LON" (decimal degrees)
        #[arg(long = "target", help = "Geofence center as LAT,LON")]
        target: Option<String>,

        /// Geofence radius in meters
        #[arg(long = "radius", help = "Geofence radius in meters")]
        radius: Option<f64>,
    },

    /// Manage the configuration file (view or edit the geofence)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "target", help = "Set the geofence center (LAT,LON)")]
        target: Option<String>,

        #[arg(long = "radius", help = "Set the geofence radius in meters")]
        radius: Option<f64>,
    },

    /// Test whether a location is inside the configured geofence
    Check {
        /// Current position as "LAT,LON"; falls back to GEOPUNCH_LAT/LON
        #[arg(long = "at", help = "Current position as LAT,LON")]
        at: Option<String>,

        #[arg(long = "json", help = "Print the result as JSON")]
        json: bool,
    },

    /// Compute the great-circle distance between two points
    Distance {
        /// First point as "LAT,LON"
        from: String,

        /// Second point as "LAT,LON"
        to: String,
    },

    /// Check in, tick elapsed time, and check out
    Track {
        /// Current position as "LAT,LON"; falls back to GEOPUNCH_LAT/LON
        #[arg(long = "at", help = "Current position as LAT,LON")]
        at: Option<String>,

        /// Check out automatically after this many seconds instead of
        /// waiting for Enter
        #[arg(long = "for", value_name = "SECS", help = "Auto check-out after SECS seconds")]
        auto_secs: Option<u64>,

        #[arg(long = "json", help = "Print the final session summary as JSON")]
        json: bool,
    },
}
