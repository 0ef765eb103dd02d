use anyhow::Result;

use primegram::AnagramChecker;
use primegram::config::CheckerConfig;
use primegram::demo;
use primegram::utils::{logging, output::OutputStyle};

fn main() -> Result<()> {
    let config = CheckerConfig::default();
    OutputStyle::apply_color_setting(config.general.color);
    logging::init(&config.general.log_level)?;

    let checker = AnagramChecker::new();
    let stdout = std::io::stdout();
    if !demo::run_reported(&checker, &mut stdout.lock()) {
        std::process::exit(1);
    }

    Ok(())
}
