use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::GeoPoint;
use crate::ui::messages::success;

/// Handle the `config` command: print the current file or update the
/// geofence target in place.
pub fn handle(cmd: &Commands, cfg: &Config, cli: &Cli) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        target,
        radius,
    } = cmd
    {
        if *print_config {
            let path = cli
                .config
                .clone()
                .unwrap_or_else(|| Config::config_file().display().to_string());
            println!("📄 {}", path);
            print!("{}", cfg.to_yaml()?);
            return Ok(());
        }

        if target.is_none() && radius.is_none() {
            return Err(AppError::Config(
                "nothing to do: pass --print, --target or --radius".to_string(),
            ));
        }

        let mut updated = Config::load(cli.config.as_deref())?;

        if let Some(t) = target {
            let center = GeoPoint::parse(t)?;
            updated.latitude = center.latitude;
            updated.longitude = center.longitude;
        }

        if let Some(r) = radius {
            if *r <= 0.0 {
                return Err(AppError::InvalidRadius(r.to_string()));
            }
            updated.radius_meters = *r;
        }

        updated.save(cli.config.as_deref())?;
        success(format!(
            "Geofence set to {} (radius {:.0} m)",
            updated.target().center,
            updated.radius_meters
        ));
    }

    Ok(())
}
