//! Централизованная конфигурация для construct-matchers
//!
//! Controls how matcher messages are rendered. A process-wide instance is
//! available through [`Config::global`], but every formatting entry point
//! also accepts an explicit `Config`.

use std::sync::OnceLock;

/// Глобальная конфигурация (синглтон)
static GLOBAL_CONFIG: OnceLock<Config> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Wrap received/expected values and hints in ANSI colours
    pub colors: bool,

    /// Nesting depth after which arrays and objects print as `[Array]` / `[Object]`
    pub print_max_depth: usize,

    /// Printed values at or above this many characters are re-rendered with half the depth
    pub print_max_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            colors: false,
            print_max_depth: 10,
            print_max_length: 10_000,
        }
    }
}

impl Config {
    /// Создать конфигурацию из переменных окружения
    ///
    /// `NO_COLOR` wins over `FORCE_COLOR`. `FORCE_COLOR=0` keeps colours off.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(val) = lookup("FORCE_COLOR") {
            config.colors = val != "0" && val != "false";
        }

        if lookup("NO_COLOR").is_some_and(|val| !val.is_empty()) {
            config.colors = false;
        }

        if let Some(val) = lookup("MATCHERS_PRINT_MAX_DEPTH") {
            if let Ok(parsed) = val.parse() {
                config.print_max_depth = parsed;
            }
        }

        if let Some(val) = lookup("MATCHERS_PRINT_MAX_LENGTH") {
            if let Ok(parsed) = val.parse() {
                config.print_max_length = parsed;
            }
        }

        config
    }

    /// Получить глобальный экземпляр конфигурации
    ///
    /// Falls back to [`Config::from_env`] on first access.
    pub fn global() -> &'static Config {
        GLOBAL_CONFIG.get_or_init(Config::from_env)
    }

    /// # Errors
    ///
    /// Returns an error if the global config was already initialized
    pub fn init() -> Result<(), &'static str> {
        Self::init_with(Self::default())
    }

    /// # Errors
    ///
    /// Returns an error if the global config was already initialized
    pub fn init_from_env() -> Result<(), &'static str> {
        Self::init_with(Self::from_env())
    }

    /// # Errors
    ///
    /// Returns an error if the global config was already initialized
    pub fn init_with(config: Config) -> Result<(), &'static str> {
        GLOBAL_CONFIG
            .set(config)
            .map_err(|_| "Config already initialized")?;
        tracing::debug!("matcher config initialized");
        Ok(())
    }

    pub fn is_initialized() -> bool {
        GLOBAL_CONFIG.get().is_some()
    }
}
