//! Simple CLI configuration loader for waypoint
//!
//! Implements single-source priority loading with flag overrides:
//! 1. --config file/dir (highest priority)
//! 2. Current working directory: ./waypoint.json or ./.waypoint/config.json
//! 3. User config: $XDG_CONFIG_HOME/waypoint/config.json or the platform config dir
//! 4. Built-in default site (no files)

use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use waypoint_core::{BasePath, BuildProfile, HistoryMode, RouterConfig, SiteConfig};

/// File name looked up in the working directory and in config directories
const CONFIG_FILE_NAME: &str = "waypoint.json";

/// CLI configuration loader
pub struct CliConfigLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
    /// Flag overrides
    mode_override: Option<HistoryMode>,
    base_override: Option<String>,
    /// Build profile selecting the base path
    profile: BuildProfile,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self {
            config_override: None,
            mode_override: None,
            base_override: None,
            profile: BuildProfile::default(),
        }
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Set history mode override
    pub fn with_mode_override(mut self, mode: HistoryMode) -> Self {
        self.mode_override = Some(mode);
        self
    }

    /// Set base path override; applies regardless of profile
    pub fn with_base_override(mut self, base: String) -> Self {
        self.base_override = Some(base);
        self
    }

    /// Set the build profile
    pub fn with_profile(mut self, profile: BuildProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn profile(&self) -> BuildProfile {
        self.profile
    }

    /// Load the site configuration with flag overrides applied
    pub fn load_site(&self) -> Result<SiteConfig> {
        // Step 1: Find and load base configuration
        let mut config = if let Some(override_path) = &self.config_override {
            // Use explicit config override
            self.load_from_path(override_path).with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    override_path.display()
                )
            })?
        } else {
            // Search in priority order
            self.search_and_load()?
        };

        // Step 2: Apply flag overrides
        if let Some(mode) = self.mode_override {
            config = config.with_history_mode(mode);
        }

        Ok(config)
    }

    /// Load and resolve the router configuration
    pub fn load(&self) -> Result<RouterConfig> {
        let site = self.load_site()?;
        let mut router_config = site
            .router_config(self.profile)
            .map_err(|e| anyhow!("Configuration validation failed: {}", e))?;

        if let Some(base) = &self.base_override {
            let base = BasePath::parse(base)
                .with_context(|| format!("Invalid base path override: {}", base))?;
            router_config = router_config.with_base(base);
        }

        debug!(
            profile = %self.profile,
            mode = %router_config.history_mode,
            base = %router_config.base,
            routes = router_config.table.len(),
            "Loaded router configuration"
        );
        Ok(router_config)
    }

    /// Search for config in priority order
    fn search_and_load(&self) -> Result<SiteConfig> {
        // 1. Current working directory
        if let Some(config) = self.try_load_cwd()? {
            return Ok(config);
        }

        // 2. User config directory
        if let Some(config) = self.try_load_user_dir()? {
            return Ok(config);
        }

        // 3. Built-in site
        debug!("No config file found, using built-in site");
        Ok(SiteConfig::default())
    }

    /// Try loading from current working directory
    fn try_load_cwd(&self) -> Result<Option<SiteConfig>> {
        let cwd = std::env::current_dir()?;

        // Try ./waypoint.json first
        let waypoint_json = cwd.join(CONFIG_FILE_NAME);
        if waypoint_json.exists() {
            return Ok(Some(self.load_file(&waypoint_json)?));
        }

        // Try ./.waypoint/config.json
        let dir_config = cwd.join(".waypoint").join("config.json");
        if dir_config.exists() {
            return Ok(Some(self.load_file(&dir_config)?));
        }

        Ok(None)
    }

    /// Try loading from the user config directory
    fn try_load_user_dir(&self) -> Result<Option<SiteConfig>> {
        if let Some(config_dir) = self.get_config_dir() {
            let config_path = config_dir.join("waypoint").join("config.json");
            if config_path.exists() {
                return Ok(Some(self.load_file(&config_path)?));
            }
        }
        Ok(None)
    }

    /// Load configuration from a specific path (file or directory)
    fn load_from_path(&self, path: &Path) -> Result<SiteConfig> {
        if path.is_file() {
            self.load_file(path)
        } else if path.is_dir() {
            let config_file = path.join(CONFIG_FILE_NAME);
            if config_file.exists() {
                self.load_file(&config_file)
            } else {
                Err(anyhow!(
                    "No {} found in directory: {}",
                    CONFIG_FILE_NAME,
                    path.display()
                ))
            }
        } else {
            Err(anyhow!("Config path does not exist: {}", path.display()))
        }
    }

    /// Load a single config file
    fn load_file(&self, path: &Path) -> Result<SiteConfig> {
        debug!(path = %path.display(), "Reading config file");
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        SiteConfig::from_json(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Get the user config directory, honouring XDG_CONFIG_HOME
    fn get_config_dir(&self) -> Option<PathBuf> {
        match std::env::var_os("XDG_CONFIG_HOME") {
            Some(xdg_config) if !xdg_config.is_empty() => Some(PathBuf::from(xdg_config)),
            _ => dirs::config_dir(),
        }
    }
}

impl Default for CliConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
