use tracing::{error, info};

use crate::application::PostalConverter;
use crate::domain::error::Result;
use crate::infrastructure::config::ConfigService;

/// Load configuration, convert both datasets, and report the outcome.
///
/// Returns the process exit code.
pub fn run() -> i32 {
    let _ = dotenvy::dotenv();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .try_init();

    match convert() {
        Ok(()) => 0,
        Err(err) => {
            error!(error = %err, "Postal conversion failed");
            1
        }
    }
}

fn convert() -> Result<()> {
    let config = ConfigService::new().load()?;
    info!(
        general = %config.general_input.display(),
        business = %config.business_input.display(),
        output = %config.output.display(),
        "Starting postal conversion"
    );

    let report = PostalConverter::default().convert_files(&config)?;
    info!("{}", report.summary());
    Ok(())
}
