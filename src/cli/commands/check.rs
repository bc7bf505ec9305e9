use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::location;
use crate::models::GeoPoint;
use crate::ui::messages::{success, warning};
use serde_json::json;

/// Handle the `check` command: one-shot geofence admission test, without
/// starting a session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check { at, json } = cmd {
        let explicit = match at {
            Some(s) => Some(GeoPoint::parse(s)?),
            None => None,
        };
        let position = location::resolve(explicit)?;

        let target = cfg.target();
        let distance = target.distance_to(&position);
        let within = target.contains(&position);

        if *json {
            let report = json!({
                "position": { "latitude": position.latitude, "longitude": position.longitude },
                "distance_meters": distance,
                "radius_meters": target.radius_meters,
                "within_range": within,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        println!("📍 Position : {}", position);
        println!("🎯 Target   : {} (radius {:.0} m)", target.center, target.radius_meters);
        println!("📏 Distance : {:.2} m", distance);

        if within {
            success("Within range: check-in would be accepted");
        } else {
            warning("Out of range: check-in would be rejected");
        }
    }

    Ok(())
}
