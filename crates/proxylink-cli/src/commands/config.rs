//! Config command implementation.

use crate::cli::ConfigArgs;
use crate::config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the config command.
///
/// Prints the effective configuration, then warns if the engine would reject it.
pub fn execute_config(args: ConfigArgs, formatter: &Formatter) -> Result<()> {
    let config = config::resolve(&args.engine)?;
    print!("{}", config.to_toml_string()?);

    if let Err(e) = config.validate() {
        eprintln!("{}", formatter.warning(&e.to_string()));
    }

    Ok(())
}
