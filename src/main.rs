//! subtracker main entrypoint.

use subtracker::run;
use subtracker::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
