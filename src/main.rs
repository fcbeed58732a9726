//! EaaS main entrypoint.

use eaas::run;
use eaas::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
