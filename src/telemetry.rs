use crate::error::ReadinessError;
use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber. `RUST_LOG` wins over the CLI flags.
pub fn init(verbose: u8, quiet: bool) -> Result<(), ReadinessError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let level = level_for(verbose, quiet);
            EnvFilter::try_new(format!("readiness={level}"))
                .map_err(|e| ReadinessError::Telemetry(e.to_string()))?
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| ReadinessError::Telemetry(e.to_string()))
}

fn level_for(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
