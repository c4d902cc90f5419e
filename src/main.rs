use clap::Parser;
use milestone_days::core::milestones::is_default_milestone;
use milestone_days::core::share;
use milestone_days::utils::error::ErrorSeverity;
use milestone_days::utils::{logger, validation::Validate};
use milestone_days::{CliConfig, MilestoneEngine, OutputFormat, Session, TomlConfig};

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.format == Some(OutputFormat::Json) {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    // 載入 TOML 配置，沒有指定時使用預設值
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match TomlConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            }
        }
        None => TomlConfig::default(),
    };

    // 應用命令列覆蓋設定
    cli.apply_to(&mut config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(&cli, &config) {
        tracing::error!(
            "❌ Calculation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        std::process::exit(exit_code(e.severity()));
    }
}

/// 只有成功才回傳 0；嚴格模式下被拒絕的新增/移除也算失敗
fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Low => 4,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn run(cli: &CliConfig, config: &TomlConfig) -> milestone_days::Result<()> {
    let mut session = Session::from_settings(config)?;

    for &age in &cli.add {
        session.add_milestone(age)?;
    }
    for &age in &cli.remove {
        session.remove_milestone(age)?;
    }

    if cli.list {
        print_milestones(&session);
        return Ok(());
    }

    if cli.none || !cli.only.is_empty() {
        session.toggle_all(false);
    }
    for &age in &cli.only {
        if !session.set_selected(age, true) {
            tracing::warn!("⚠️ Milestone {} is not in the set; add it with --add", age);
        }
    }

    // 分享連結中的日期一樣要經過驗證
    let birth_input = match &cli.from_url {
        Some(link) => share::birth_param(link)?.unwrap_or_default(),
        None => cli.birth_input().unwrap_or_default().to_string(),
    };

    let engine = MilestoneEngine::from_settings(config)?;
    let report = engine.run(&birth_input, &session.selected_ages())?;

    let output = report.render(config.output_format())?;
    print!("{}", output);
    Ok(())
}

fn print_milestones(session: &Session) {
    for &age in session.list_current() {
        let marker = if session.selection().is_selected(age) { "x" } else { " " };
        let kind = if is_default_milestone(age) { "default" } else { "custom" };
        println!("[{}] {:>3}  {}", marker, age, kind);
    }
}
