// src/pipeline/validate.rs

use crate::error::Result;
use crate::models::Config;

/// Validate configuration and report the effective settings.
pub fn run_validate(config: &Config) -> Result<()> {
    log::info!("Validating configuration...");

    match config.validate() {
        Ok(()) => {
            log::info!("✓ Config OK");
            log::info!(
                "    parser.year: {}",
                config
                    .parser
                    .year
                    .map_or_else(|| "from notice title".to_string(), |y| y.to_string())
            );
            log::info!("    parser.clause_policy: {:?}", config.parser.clause_policy);
            log::info!(
                "    output: {}/{}_<year>.json",
                config.output.dir.display(),
                config.output.file_prefix
            );
            Ok(())
        }
        Err(e) => {
            log::error!("Config validation failed: {}", e);
            Err(e)
        }
    }
}
