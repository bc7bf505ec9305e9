#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn gp() -> Command {
    cargo_bin_cmd!("geopunch")
}

/// Create a unique test config path inside the system temp dir and remove
/// any existing file
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_geopunch.conf", name));
    let cfg_path = path.to_string_lossy().to_string();
    fs::remove_file(&cfg_path).ok();
    cfg_path
}

/// The office target the crate ships configured for.
pub const TARGET_LAT: f64 = 23.023095634068248;
pub const TARGET_LON: f64 = 72.54406814249094;

pub fn target_arg() -> String {
    format!("{},{}", TARGET_LAT, TARGET_LON)
}
