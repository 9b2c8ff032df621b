use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

/// The order in which a theme lists comments under an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentOrder {
    Asc,
    Desc,
}

/// Presentation knobs for the fragment renderers, loaded from the theme's
/// `theme.yaml`. Every field has a default, so a missing or empty file
/// behaves like [`ThemeConfig::default`].
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Avatar width and height in pixels.
    pub avatar_size: u32,

    /// Reading speed for the estimated-reading-time fragment.
    pub words_per_minute: u64,

    /// How many page numbers to show on either side of the current page in
    /// the posts navigation.
    pub pagination_mid_size: usize,

    /// The `chrono` format string for human-readable entry dates.
    pub date_format: String,

    pub comment_order: CommentOrder,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            avatar_size: 60,
            words_per_minute: 250,
            pagination_mid_size: 2,
            date_format: "%B %-d, %Y".to_owned(),
            comment_order: CommentOrder::Asc,
        }
    }
}

impl ThemeConfig {
    /// Searches `dir` and its parent directories for a `theme.yaml` and
    /// loads it.
    pub fn from_directory(dir: &Path) -> Result<ThemeConfig> {
        let path = dir.join("theme.yaml");
        if path.exists() {
            match ThemeConfig::from_file(&path) {
                Ok(config) => Ok(config),
                Err(e) => Err(anyhow!("Loading theme configuration: {:?}", e)),
            }
        } else {
            match dir.parent() {
                Some(dir) => ThemeConfig::from_directory(dir),
                None => Err(anyhow!(
                    "Could not find `theme.yaml` in any parent directory"
                )),
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<ThemeConfig> {
        let file = match File::open(path) {
            Err(e) => {
                return Err(anyhow!(
                    "Opening theme file `{}`: {}",
                    path.display(),
                    e
                ))
            }
            Ok(file) => file,
        };
        Ok(serde_yaml::from_reader(file)?)
    }
}
