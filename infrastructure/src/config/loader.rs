//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Prefix of environment overrides, e.g. `NODESEQ_CONSENSUS__MAX_ATTEMPTS=3`
pub const ENV_PREFIX: &str = "NODESEQ_";

const PROJECT_FILES: [&str; 2] = ["nodeseq.toml", ".nodeseq.toml"];

/// Config files that take part in a load, lowest priority first
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    pub global: Option<PathBuf>,
    pub project: Option<PathBuf>,
    pub explicit: Option<PathBuf>,
}

impl ConfigSources {
    /// Sources found on this machine plus an explicit `--config` path
    pub fn discover(config_path: Option<&Path>) -> Self {
        Self {
            global: ConfigLoader::global_config_path().filter(|p| p.exists()),
            project: ConfigLoader::project_config_path(Path::new(".")),
            explicit: config_path.map(Path::to_path_buf),
        }
    }
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::load_from(&ConfigSources::discover(config_path))
    }

    /// Load from the given files, then apply `NODESEQ_*` environment overrides
    pub fn load_from(sources: &ConfigSources) -> Result<FileConfig, Box<figment::Error>> {
        Self::files_figment(sources)
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)
    }

    fn files_figment(sources: &ConfigSources) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in [&sources.global, &sources.project].into_iter().flatten() {
            figment = figment.merge(Toml::file(path));
        }

        // An explicit path must exist; a missing file is an error, not a no-op
        if let Some(path) = &sources.explicit {
            figment = figment.merge(Toml::file_exact(path));
        }

        figment
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/nodeseq/config.toml if set,
    /// otherwise falls back to ~/.config/nodeseq/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("nodeseq").join("config.toml"))
    }

    /// Get the project-level config file in `dir` (if it exists)
    pub fn project_config_path(dir: &Path) -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        println!("  [     ] Env:     {}* variables", ENV_PREFIX);

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<5}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path(Path::new(".")) {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./nodeseq.toml or ./.nodeseq.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}
