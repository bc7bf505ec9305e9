use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{GeoPoint, GeofenceTarget};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file with the geofence target
pub fn handle(cmd: &Commands, cli: &Cli) -> AppResult<()> {
    if let Commands::Init { target, radius } = cmd {
        let geofence = match (target, radius) {
            (Some(t), r) => {
                let center = GeoPoint::parse(t)?;
                Some(GeofenceTarget::new(center, r.unwrap_or(100.0)))
            }
            (None, Some(_)) => {
                return Err(AppError::Config(
                    "--radius requires --target".to_string(),
                ));
            }
            (None, None) => None,
        };

        let already = Config::exists_at(cli.config.as_deref());
        let path = Config::init_all(cli.config.as_deref(), geofence)?;
        let cfg = Config::load(path.to_str())?;

        println!("⚙️  Initializing geopunch…");
        println!("📄 Config file : {}", path.display());
        println!(
            "📍 Target      : {} (radius {:.0} m)",
            cfg.target().center,
            cfg.radius_meters
        );
        if already {
            println!("ℹ️  Existing configuration kept unchanged");
        }
    }

    Ok(())
}
