use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Ticker, Tracker};
use crate::errors::{AppError, AppResult};
use crate::location;
use crate::models::GeoPoint;
use crate::ui::messages::success;
use crate::utils::time::format_hms;
use chrono::Local;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// Handle the `track` command: the full check-in / tick / check-out cycle.
///
/// The session lives for this invocation only. Check-in is gated by the
/// configured geofence; while running, a ticker redraws the elapsed time
/// every `tick_interval_secs`; check-out happens on Enter (or after
/// `--for SECS`), freezing the duration.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Track { at, auto_secs, json } = cmd {
        let explicit = match at {
            Some(s) => Some(GeoPoint::parse(s)?),
            None => None,
        };
        let position = location::resolve(explicit)?;

        let tracker = Arc::new(Mutex::new(Tracker::new(cfg.target())));

        // ------------------------------------------------
        // 1. Check in (geofence gate)
        // ------------------------------------------------
        let check_in = {
            let mut t = tracker.lock().map_err(|_| poisoned())?;
            t.request_check_in(position, Local::now())?
        };
        success(format!(
            "Checked in at {} ({:.2} m from target)",
            check_in.at.format("%H:%M:%S"),
            check_in.distance_meters
        ));

        // ------------------------------------------------
        // 2. Tick while running
        // ------------------------------------------------
        let interval = Duration::from_secs(cfg.tick_interval_secs.max(1));
        let mut ticker = Ticker::spawn(Arc::clone(&tracker), interval, |elapsed| {
            print!("\r⏱  {} ", elapsed);
            let _ = io::stdout().flush();
        });

        match auto_secs {
            Some(secs) => thread::sleep(Duration::from_secs(*secs)),
            None => {
                println!("Press Enter to check out…");
                let mut line = String::new();
                io::stdin().read_line(&mut line)?;
            }
        }

        // ------------------------------------------------
        // 3. Check out (cancels the ticker)
        // ------------------------------------------------
        ticker.stop();
        let now = Local::now();
        let duration = {
            let mut t = tracker.lock().map_err(|_| poisoned())?;
            t.check_out(now)?
        };
        println!();
        success(format!("Checked out at {}", now.format("%H:%M:%S")));
        println!("⏱  Duration: {}", format_hms(duration));

        if *json {
            let t = tracker.lock().map_err(|_| poisoned())?;
            let summary = t.summary(now);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}

fn poisoned() -> AppError {
    AppError::Other("tracker lock poisoned".to_string())
}
