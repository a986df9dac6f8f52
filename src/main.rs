use anyhow::Context;
use atm_sim::utils::{logger, validation::Validate};
use atm_sim::{CliConfig, ConfigProvider, Console, Money, Session};
use clap::Parser;
use std::io::IsTerminal;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let settings = match cli.settings().and_then(|settings| {
        settings.validate()?;
        Ok(settings)
    }) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    logger::init_cli_logger(cli.verbose, settings.log_level(), settings.json_logs());

    tracing::info!("🏧 Starting atm-sim");
    if let Some(path) = &cli.config {
        tracing::info!("📁 Configuration loaded from {}", path.display());
    }
    tracing::debug!("Settings: {:?}", settings);

    let session = Session::from_config(&settings);

    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();
    let console =
        Console::new(session, stdin.lock(), std::io::stdout().lock()).with_prompt(interactive);

    let summary = console.run().context("console input/output failed")?;

    match summary.balance {
        Some(balance) => tracing::info!(
            "✅ Session ended after {} commands with balance {}",
            summary.commands,
            Money(balance)
        ),
        None => tracing::info!(
            "Session ended after {} commands without logging in",
            summary.commands
        ),
    }

    Ok(())
}
