//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use starfolio_core::{BackgroundStyle, Language, Variant};

use crate::Config;

/// Terminal portfolio with an animated starfield.
///
/// Flags override values from `config.toml`.
#[derive(Parser, Debug, Default)]
#[command(name = "starfolio", version, about)]
pub struct CliArgs {
    /// Presentation variant (one-page, routed).
    #[arg(long)]
    pub variant: Option<Variant>,

    /// Starting language (PT, EN, ES).
    #[arg(long)]
    pub lang: Option<Language>,

    /// Background style (auto, cosmos, twinkle, none).
    #[arg(long)]
    pub background: Option<BackgroundStyle>,

    /// Target frames per second.
    #[arg(long)]
    pub fps: Option<u32>,

    /// Seed for the background RNG.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip planet texture downloads.
    #[arg(long)]
    pub no_textures: bool,

    /// Log filter (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to the config file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the effective config, flags included, to the config path and exit.
    #[arg(long)]
    pub write_config: bool,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(variant) = args.variant {
            self.variant = variant;
        }
        if let Some(lang) = args.lang {
            self.language = lang;
        }
        if let Some(background) = args.background {
            self.background = background;
        }
        if let Some(fps) = args.fps {
            self.animation.fps = fps;
        }
        if let Some(seed) = args.seed {
            self.animation.seed = Some(seed);
        }
        if args.no_textures {
            self.textures.enabled = false;
        }
        if let Some(ref level) = args.log_level {
            self.log.level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            variant: Some(Variant::Routed),
            lang: Some(Language::En),
            seed: Some(7),
            no_textures: true,
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.variant, Variant::Routed);
        assert_eq!(config.language, Language::En);
        assert_eq!(config.animation.seed, Some(7));
        assert!(!config.textures.enabled);
        // Non-overridden fields retain defaults
        assert_eq!(config.animation.fps, 60);
        assert_eq!(config.background, BackgroundStyle::Auto);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::parse_from([
            "starfolio",
            "--variant",
            "routed",
            "--lang",
            "es",
            "--background",
            "twinkle",
            "--fps",
            "30",
            "--no-textures",
        ]);
        assert_eq!(args.variant, Some(Variant::Routed));
        assert_eq!(args.lang, Some(Language::Es));
        assert_eq!(args.background, Some(BackgroundStyle::Twinkle));
        assert_eq!(args.fps, Some(30));
        assert!(args.no_textures);
        assert!(!args.write_config);
    }

    #[test]
    fn test_write_config_flag() {
        let args = CliArgs::parse_from(["starfolio", "--write-config", "--config", "/tmp/sf.toml"]);
        assert!(args.write_config);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/sf.toml")));
    }

    #[test]
    fn test_rejects_unknown_language() {
        assert!(CliArgs::try_parse_from(["starfolio", "--lang", "fr"]).is_err());
    }
}
