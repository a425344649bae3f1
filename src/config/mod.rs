// config/mod.rs — Global configuration loader

use serde::Deserialize;

/// Structure of the global `config.toml`, merged under explicit CLI flags.
#[derive(Deserialize, Default, Debug)]
pub struct GlobalConfig {
    /// Default library type: `"dll"` or `"static"`.
    pub library_type: Option<String>,
    /// Default reusability-score cutoff applied to scored records.
    pub min_score: Option<u8>,
    /// Always print the rejection report.
    pub show_rejections: Option<bool>,
}

impl GlobalConfig {
    /// Load the global configuration, falling back to defaults when the file
    /// is missing or malformed.
    pub fn load() -> Self {
        if let Some(mut path) = dirs::config_dir() {
            path.push("utilex");
            path.push("config.toml");

            if path.exists() {
                if let Ok(content) = std::fs::read_to_string(&path) {
                    match toml::from_str(&content) {
                        Ok(config) => return config,
                        Err(e) => eprintln!("[WARN] Failed to parse {}: {}", path.display(), e),
                    }
                }
            }
        }
        Self::default()
    }
}
