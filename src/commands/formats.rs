//! Formats command implementation

use crate::config::Config;
use crate::error::Result;

/// Print the registered format names, one per line.
pub fn run(config: &Config) -> Result<()> {
    for name in config.registry().names() {
        println!("{}", name);
    }
    Ok(())
}
