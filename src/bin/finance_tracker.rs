use std::{io, path::Path};

use finance_tracker::{
    cli::demo,
    config::{ConfigManager, TrackerConfig},
    init,
    utils::build_info,
};

fn main() {
    init();
    tracing::info!("{}", build_info::current().describe());

    let config = match ConfigManager::new().and_then(|manager| manager.load()) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(error = %err, "using default configuration");
            TrackerConfig::default()
        }
    };

    let stdout = io::stdout();
    demo::run(
        Path::new(demo::SCRATCH_FILE),
        config.default_date,
        &mut stdout.lock(),
    );
}
