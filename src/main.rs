//! geopunch main entrypoint.

use geopunch::run;

fn main() {
    if let Err(e) = run() {
        geopunch::ui::messages::error(e);
        std::process::exit(1);
    }
}
