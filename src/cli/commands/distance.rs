use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::models::GeoPoint;

/// Handle the `distance` command: haversine distance between two points.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Distance { from, to } = cmd {
        let a = GeoPoint::parse(from)?;
        let b = GeoPoint::parse(to)?;
        println!("{:.2} m", a.distance_meters(&b));
    }

    Ok(())
}
