use crate::error::{ClaiError, Result};
use crate::store::{Artifact, Store};
use tracing::debug;

pub const MODEL_ENV: &str = "GPTMOD";
pub const SYSMSG_ENV: &str = "GPTMSG";

// ---------------------------------------------------------------------------
// Setting
// ---------------------------------------------------------------------------

/// A value that can be overridden per directory and defaulted per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    Model,
    SystemMessage,
}

impl Setting {
    pub fn artifact(self) -> Artifact {
        match self {
            Setting::Model => Artifact::Model,
            Setting::SystemMessage => Artifact::SystemMessage,
        }
    }

    pub fn env_var(self) -> &'static str {
        match self {
            Setting::Model => MODEL_ENV,
            Setting::SystemMessage => SYSMSG_ENV,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Setting::Model => "model",
            Setting::SystemMessage => "system message",
        }
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Process-wide fallbacks, normally sourced from `GPTMOD` / `GPTMSG`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Defaults {
    pub model: Option<String>,
    pub system_message: Option<String>,
}

impl Defaults {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary lookup. Blank values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |setting: Setting| {
            lookup(setting.env_var())
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        Self {
            model: read(Setting::Model),
            system_message: read(Setting::SystemMessage),
        }
    }

    pub fn get(&self, setting: Setting) -> Option<&str> {
        match setting {
            Setting::Model => self.model.as_deref(),
            Setting::SystemMessage => self.system_message.as_deref(),
        }
    }
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Effective values for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub model: String,
    pub system_message: String,
}

impl Settings {
    /// Resolve both settings, model first.
    pub fn resolve(store: &Store, defaults: &Defaults) -> Result<Self> {
        Ok(Self {
            model: resolve(store, defaults, Setting::Model)?,
            system_message: resolve(store, defaults, Setting::SystemMessage)?,
        })
    }
}

/// Directory override first, then the process default.
pub fn resolve(store: &Store, defaults: &Defaults, setting: Setting) -> Result<String> {
    if let Some(value) = store.load_setting(setting)?.present() {
        debug!(setting = setting.label(), %value, "using directory override");
        return Ok(value);
    }
    match defaults.get(setting) {
        Some(value) => Ok(value.to_string()),
        None => Err(ClaiError::MissingSetting {
            setting: setting.label(),
            env: setting.env_var(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn defaults(model: Option<&str>, sysmsg: Option<&str>) -> Defaults {
        Defaults {
            model: model.map(str::to_string),
            system_message: sysmsg.map(str::to_string),
        }
    }

    #[test]
    fn falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path());
        let settings = Settings::resolve(&store, &defaults(Some("m1"), Some("s1"))).unwrap();
        assert_eq!(settings.model, "m1");
        assert_eq!(settings.system_message, "s1");
    }

    #[test]
    fn override_beats_default() {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path());
        store.save_setting(Setting::Model, "m2").unwrap();
        let settings = Settings::resolve(&store, &defaults(Some("m1"), Some("s1"))).unwrap();
        assert_eq!(settings.model, "m2");
        assert_eq!(settings.system_message, "s1");
    }

    #[test]
    fn override_without_default() {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path());
        store.save_setting(Setting::Model, "m2").unwrap();
        store.save_setting(Setting::SystemMessage, "s2").unwrap();
        let settings = Settings::resolve(&store, &Defaults::default()).unwrap();
        assert_eq!(settings.model, "m2");
        assert_eq!(settings.system_message, "s2");
    }

    #[test]
    fn missing_model_names_env_var() {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path());
        let err = Settings::resolve(&store, &defaults(None, Some("s1"))).unwrap_err();
        assert!(matches!(
            err,
            ClaiError::MissingSetting {
                setting: "model",
                env: "GPTMOD"
            }
        ));
    }

    #[test]
    fn missing_system_message_names_env_var() {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path());
        let err = Settings::resolve(&store, &defaults(Some("m1"), None)).unwrap_err();
        assert!(err.to_string().contains("GPTMSG"));
    }

    #[test]
    fn resolution_has_no_side_effects() {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path());
        let _ = Settings::resolve(&store, &Defaults::default());
        assert!(!store.dir().exists());
    }

    #[test]
    fn corrupted_override_falls_back() {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path());
        store.ensure_workspace().unwrap();
        std::fs::write(store.path(Artifact::Model), [0xc3, 0x28]).unwrap();
        let model = resolve(&store, &defaults(Some("m1"), None), Setting::Model).unwrap();
        assert_eq!(model, "m1");
    }

    #[test]
    fn blank_env_values_are_unset() {
        let d = Defaults::from_lookup(|name| match name {
            "GPTMOD" => Some("   ".to_string()),
            "GPTMSG" => Some(" be brief \n".to_string()),
            _ => None,
        });
        assert_eq!(d.model, None);
        assert_eq!(d.system_message.as_deref(), Some("be brief"));
    }
}
