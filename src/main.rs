use anyhow::Context;
use clap::Parser;
use tamagoji::utils::{logger, validation::Validate};
use tamagoji::{
    CliConfig, FileActivityLog, JsonFileStore, Menu, PetEngine, PetManager, RandDice, SystemClock,
    TomlConfig,
};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入配置，命令列參數優先
    let mut config = match TomlConfig::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };
    cli.apply_overrides(&mut config);

    // 初始化日誌
    if config.logging.json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.logging.verbose);
    }
    tracing::debug!("Resolved config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let dice = match config.simulation.seed {
        Some(seed) => {
            tracing::info!("Random events seeded with {}", seed);
            RandDice::seeded(seed)
        }
        None => RandDice::from_entropy(),
    };
    let engine = PetEngine::new(dice).with_event_clamping(config.simulation.clamp_random_events);

    let store = JsonFileStore::new(&config.storage.data_file);
    let log = FileActivityLog::new(&config.storage.log_file, Box::new(SystemClock));
    tracing::debug!(
        "Pets in {}, activity log in {}",
        store.path().display(),
        log.path().display()
    );
    let mut manager = PetManager::open(store, log, engine, Box::new(SystemClock));

    let stdin = std::io::stdin();
    let mut menu = Menu::new(stdin.lock(), std::io::stdout());
    menu.run(&mut manager).context("console I/O failed")?;

    Ok(())
}
