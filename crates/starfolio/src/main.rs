use std::io::stdout;

use clap::Parser;
use color_eyre::eyre::eyre;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use starfolio::{app::App, logging, texture::TextureLoader};
use starfolio_config::{CliArgs, Config, default_config_path, default_data_dir};
use tracing::info;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    let config_path = args.config.clone().or_else(default_config_path);
    let loaded = match &config_path {
        Some(path) => Config::load_optional(path)?,
        None => None,
    };
    let from_file = loaded.is_some();
    let mut config = loaded.unwrap_or_default();
    config.apply_cli_overrides(&args);

    if args.write_config {
        let path = config_path.ok_or_else(|| eyre!("no config directory; pass --config"))?;
        config.save(&path)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let log_path = logging::init(default_data_dir().as_deref(), &config.log.level);
    match &config_path {
        Some(path) if from_file => info!("Loaded config from {}", path.display()),
        Some(path) => info!("No config at {}, using defaults", path.display()),
        None => info!("No config directory, using defaults"),
    }
    info!(
        version = env!("CARGO_PKG_VERSION"),
        log = ?log_path,
        variant = ?config.variant,
        language = %config.language,
        "starting starfolio"
    );

    let app = App::new(&config);
    let _texture_threads = if config.textures.enabled {
        TextureLoader::new(&config.textures).spawn(app.background().texture_slots())
    } else {
        info!("texture loading disabled");
        Vec::new()
    };

    let terminal = ratatui::init();
    let result = execute!(stdout(), EnableMouseCapture)
        .map_err(Into::into)
        .and_then(|()| app.run(terminal));
    let released = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();
    info!("shutting down");

    result?;
    released?;
    Ok(())
}
