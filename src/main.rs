//! rPairTime main entrypoint.

use rpairtime::run;
use rpairtime::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
