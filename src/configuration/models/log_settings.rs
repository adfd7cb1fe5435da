use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LogSettings {
    /// Filter directives in `env_logger` syntax, e.g. `info` or `boundary_meter=debug`
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings { level: default_level() }
    }
}
