//! Application-wide configuration constants and runtime settings.

use crate::prelude::*;
use clap::Parser;
use serde::Deserialize;

pub const NAME: &str = concat!("Image Slider ", env!("CARGO_PKG_VERSION"));
/// Default window width.
pub const WIN_WIDTH: f32 = 960.0;
/// Default window height.
pub const WIN_HEIGHT: f32 = 720.0;
/// Default page size sent as `limit`.
pub const DEFAULT_LIMIT: u32 = 5;
/// Default page number sent as `page`.
pub const DEFAULT_PAGE: u32 = 1;
/// Number of decoded images to keep in cache.
pub const CACHE_SIZE: usize = 20;
/// Seconds between slides in autoplay mode.
pub const DEFAULT_AUTOPLAY_SECS: f32 = 5.0;
pub const AUTOPLAY_RANGE: std::ops::RangeInclusive<f32> = 1.0..=60.0;
/// How long info and warning messages stay in the bottom bar.
pub const STATUS_TIMEOUT: Duration = Duration::from_secs(3);
pub const ERROR_STATUS_TIMEOUT: Duration = Duration::from_secs(8);
/// Slides around the current one whose pixels are fetched ahead of time.
pub const PRELOAD_SLIDES: usize = 5;
/// Diameter of an indicator dot.
pub const INDICATOR_SIZE: f32 = 14.0;

/// Command line arguments.
#[derive(Debug, Default, Parser)]
#[command(name = "image_slider", version, about = "Browse a paginated image list one slide at a time")]
pub struct Cli {
    /// Endpoint returning a JSON array of images.
    pub url: Option<String>,
    /// Page number to request.
    #[arg(long)]
    pub page: Option<u32>,
    /// Page size to request.
    #[arg(long)]
    pub limit: Option<u32>,
    /// TOML settings file.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Enable autoplay, advancing every SECS seconds.
    #[arg(long, value_name = "SECS")]
    pub autoplay: Option<f32>,
}

/// Settings as they may appear in the TOML file; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    url: Option<String>,
    page: Option<u32>,
    limit: Option<u32>,
    autoplay: Option<bool>,
    autoplay_interval_secs: Option<f32>,
    image_cache_size: Option<usize>,
}

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub url: String,
    pub page: u32,
    pub limit: u32,
    pub autoplay: bool,
    pub autoplay_interval_secs: f32,
    pub image_cache_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            url: String::new(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            autoplay: false,
            autoplay_interval_secs: DEFAULT_AUTOPLAY_SECS,
            image_cache_size: CACHE_SIZE,
        }
    }
}

impl Settings {
    /// Defaults, overlaid by the settings file named on the command line,
    /// overlaid by the remaining command line flags.
    pub fn resolve(cli: &Cli) -> Result<Self, AppError> {
        let mut settings = Self::default();
        if let Some(path) = &cli.config {
            let text = std::fs::read_to_string(path)?;
            settings.apply_file(&text)?;
            log::info!("Loaded settings from {}", path.display());
        }

        if let Some(url) = &cli.url {
            settings.url = url.clone();
        }
        if let Some(page) = cli.page {
            settings.page = page;
        }
        if let Some(limit) = cli.limit {
            settings.limit = limit;
        }
        if let Some(secs) = cli.autoplay {
            settings.autoplay = true;
            settings.autoplay_interval_secs = secs;
        }

        settings.validate()?;
        Ok(settings)
    }

    fn apply_file(&mut self, text: &str) -> Result<(), AppError> {
        let file: SettingsFile = toml::from_str(text)?;
        if let Some(url) = file.url {
            self.url = url;
        }
        if let Some(page) = file.page {
            self.page = page;
        }
        if let Some(limit) = file.limit {
            self.limit = limit;
        }
        if let Some(autoplay) = file.autoplay {
            self.autoplay = autoplay;
        }
        if let Some(secs) = file.autoplay_interval_secs {
            self.autoplay_interval_secs = secs;
        }
        if let Some(size) = file.image_cache_size {
            self.image_cache_size = size;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.page == 0 {
            return Err(AppError::InvalidSetting("page must be at least 1".into()));
        }
        if self.limit == 0 {
            return Err(AppError::InvalidSetting("limit must be at least 1".into()));
        }
        if self.image_cache_size == 0 {
            return Err(AppError::InvalidSetting(
                "image_cache_size must be at least 1".into(),
            ));
        }
        if !AUTOPLAY_RANGE.contains(&self.autoplay_interval_secs) {
            return Err(AppError::InvalidSetting(format!(
                "autoplay interval must be between {} and {} seconds",
                AUTOPLAY_RANGE.start(),
                AUTOPLAY_RANGE.end()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_documented_values() {
        let settings = Settings::resolve(&Cli::default()).expect("defaults are valid");
        assert_eq!(settings.url, "");
        assert_eq!(settings.page, 1);
        assert_eq!(settings.limit, 5);
        assert!(!settings.autoplay);
    }

    #[test]
    fn file_values_are_overridden_by_flags() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            "url = \"https://api.example/images\"\npage = 2\nlimit = 10\nimage_cache_size = 4"
        )
        .expect("write settings");

        let cli = Cli {
            limit: Some(3),
            config: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let settings = Settings::resolve(&cli).expect("valid settings");
        assert_eq!(settings.url, "https://api.example/images");
        assert_eq!(settings.page, 2);
        assert_eq!(settings.limit, 3);
        assert_eq!(settings.image_cache_size, 4);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut settings = Settings::default();
        let err = settings.apply_file("colour = \"red\"").unwrap_err();
        assert!(matches!(err, AppError::SettingsParse(_)));
    }

    #[test]
    fn zero_limit_is_rejected() {
        let cli = Cli {
            limit: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            Settings::resolve(&cli),
            Err(AppError::InvalidSetting(_))
        ));
    }

    #[test]
    fn autoplay_flag_enables_autoplay() {
        let cli = Cli {
            autoplay: Some(3.0),
            ..Default::default()
        };
        let settings = Settings::resolve(&cli).expect("valid settings");
        assert!(settings.autoplay);
        assert_eq!(settings.autoplay_interval_secs, 3.0);

        let cli = Cli {
            autoplay: Some(0.5),
            ..Default::default()
        };
        assert!(Settings::resolve(&cli).is_err());
    }

    #[test]
    fn cli_parses_positional_url() {
        let cli = Cli::parse_from(["image_slider", "https://api.example/images", "--limit", "3"]);
        assert_eq!(cli.url.as_deref(), Some("https://api.example/images"));
        assert_eq!(cli.limit, Some(3));
        assert_eq!(cli.page, None);
    }
}
