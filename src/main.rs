/// panelkit demo entry point
///
/// Usage: `panelkit-demo [config.json]`. Without an argument the config at the
/// default path is used if present, otherwise the built-in defaults.
fn main() {
    if let Err(e) = run() {
        eprintln!("panelkit-demo error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), panelkit::ConfigError> {
    use panelkit::{AppConfig, Session};

    let path = std::env::args_os()
        .nth(1)
        .map(std::path::PathBuf::from)
        .or_else(|| AppConfig::default_path().filter(|p| p.exists()));
    let config = match &path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::default(),
    };

    // The log level comes from the config, so the logger starts after loading
    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .parse_default_env()
        .init();

    match &path {
        Some(path) => log::info!("Loaded configuration from {:?}", path),
        None => log::info!("Using built-in configuration"),
    }

    let mut session = Session::from_config(&config)?;
    let boot = session.idle();
    log::info!("boot frame: {} draw commands", boot.commands.len());

    for (step, frame) in session.run(&config.presses).iter().enumerate() {
        log::info!(
            "press {} at {:?}: expanded={} selected={:?} offset={} painted={} ({} commands)",
            step + 1,
            frame.press,
            frame.expanded,
            frame.selected,
            frame.scroll_offset,
            frame.painted,
            frame.commands.len()
        );
        for event in &frame.events {
            log::info!("  event: {:?}", event);
        }
        for command in &frame.commands {
            log::debug!("  {:?}", command);
        }
    }

    let combo = session.combo();
    log::info!(
        "final selection: {} (value {})",
        combo.selected_text(),
        combo.selected_value_raw()
    );
    Ok(())
}
