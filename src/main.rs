use clap::Parser;
use smashly::app::session;
use smashly::config::TomlConfig;
use smashly::utils::error::ErrorSeverity;
use smashly::utils::logger;
use smashly::{AppSettings, CliConfig, ConsoleNotifier, HttpCatalog, SmashlyApp};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 先讀設定檔，日誌選項可能在裡面
    let file_config = match cli.config.as_deref().map(TomlConfig::from_file).transpose() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let verbose = cli.verbose || file_config.as_ref().is_some_and(|c| c.verbose());
    if cli.json_logs || file_config.as_ref().is_some_and(|c| c.json_logs()) {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    let settings = match AppSettings::resolve(
        file_config.as_ref(),
        cli.api_base_url.as_deref(),
        cli.data_dir.as_deref(),
    ) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let store = session::open_store(&settings, ConsoleNotifier);
    let catalog = HttpCatalog::new(settings.catalog_settings());
    let mut app = SmashlyApp::new(store, catalog);

    let mut stdout = std::io::stdout();
    match app.run(cli.command, &mut stdout).await {
        Ok(outcome) => {
            let code = outcome.exit_code();
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 1,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 3,
                ErrorSeverity::Critical => 4,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
