use crate::domain::{BumpAlias, BumpIndex};
use crate::error::{AutotagError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

pub const NUM_COMPONENTS: &str = "numComponents";
pub const RELEASE_TRIGGER: &str = "releaseTrigger";
pub const DEFAULT_BUMP: &str = "defaultBump";
pub const MAXIMUM_BUMP: &str = "maximumBump";
pub const DO_TAG: &str = "doTag";
pub const DO_PUSH: &str = "doPush";

/// Every recognised setting name
pub const OPTION_KEYS: [&str; 6] = [
    NUM_COMPONENTS,
    RELEASE_TRIGGER,
    DEFAULT_BUMP,
    MAXIMUM_BUMP,
    DO_TAG,
    DO_PUSH,
];

const SETTINGS_FILE_NAME: &str = "autotag.toml";

/// Flat key/value settings, as found in the environment or a settings file
pub type Settings = HashMap<String, String>;

/// When a run produces a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseTrigger {
    /// Every run with new commits releases
    Always,
    /// Only runs where a commit label requests a release
    Commit,
}

impl ReleaseTrigger {
    pub fn name(&self) -> &'static str {
        match self {
            ReleaseTrigger::Always => "always",
            ReleaseTrigger::Commit => "commit",
        }
    }
}

impl fmt::Display for ReleaseTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validated release policy, built once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyConfig {
    pub num_components: usize,
    pub release_trigger: ReleaseTrigger,
    pub default_bump: BumpIndex,
    pub maximum_bump: BumpIndex,
    pub do_tag: bool,
    pub do_push: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        PolicyConfig {
            num_components: 3,
            release_trigger: ReleaseTrigger::Always,
            default_bump: BumpAlias::Minor.index(),
            maximum_bump: BumpAlias::Major.index(),
            do_tag: true,
            do_push: true,
        }
    }
}

/// Resolves flat settings into a [`PolicyConfig`].
///
/// Missing keys fall back to their defaults; any present but invalid value is
/// rejected with [`AutotagError::Validation`].
pub fn resolve_options(settings: &Settings) -> Result<PolicyConfig> {
    let get = |key: &str, default: &'static str| -> String {
        settings
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    };

    let num_components = parse_num_components(&get(NUM_COMPONENTS, "3"))?;
    let release_trigger = parse_release_trigger(&get(RELEASE_TRIGGER, "always"))?;
    let default_bump = parse_bump_alias(DEFAULT_BUMP, &get(DEFAULT_BUMP, "minor"), num_components)?;
    let maximum_bump = parse_bump_alias(MAXIMUM_BUMP, &get(MAXIMUM_BUMP, "major"), num_components)?;
    let do_tag = parse_flag(DO_TAG, &get(DO_TAG, "true"))?;
    let do_push = parse_flag(DO_PUSH, &get(DO_PUSH, "true"))?;

    Ok(PolicyConfig {
        num_components,
        release_trigger,
        default_bump,
        maximum_bump,
        do_tag,
        do_push,
    })
}

fn parse_num_components(value: &str) -> Result<usize> {
    match value.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(AutotagError::validation(
            NUM_COMPONENTS,
            value,
            "a positive integer",
        )),
    }
}

fn parse_release_trigger(value: &str) -> Result<ReleaseTrigger> {
    match value {
        "always" => Ok(ReleaseTrigger::Always),
        "commit" => Ok(ReleaseTrigger::Commit),
        _ => Err(AutotagError::validation(
            RELEASE_TRIGGER,
            value,
            "one of: always, commit",
        )),
    }
}

/// Resolve a bump alias, which must name a component the version actually has.
fn parse_bump_alias(key: &str, value: &str, num_components: usize) -> Result<BumpIndex> {
    let usable: Vec<&str> = BumpAlias::ALL
        .iter()
        .take(num_components)
        .map(|alias| alias.name())
        .collect();

    match BumpAlias::from_name(value) {
        Some(alias) if alias.index() < num_components => Ok(alias.index()),
        _ => Err(AutotagError::validation(
            key,
            value,
            format!("one of: {}", usable.join(", ")),
        )),
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(AutotagError::validation(key, value, "true or false")),
    }
}

/// Loads settings from a file (if any) overlaid with environment variables.
///
/// Environment variables use the setting names verbatim (e.g. `doPush=false`)
/// and take precedence over the file.
pub fn load_settings(config_path: Option<&str>) -> Result<Settings> {
    let mut settings = load_settings_file(config_path)?;
    settings.extend(env_settings());
    Ok(settings)
}

/// Reads every recognised setting present in the process environment.
pub fn env_settings() -> Settings {
    OPTION_KEYS
        .iter()
        .filter_map(|key| {
            std::env::var(key)
                .ok()
                .map(|value| (key.to_string(), value))
        })
        .collect()
}

/// Loads settings from a TOML file.
///
/// Attempts to load the file in the following order:
/// 1. Custom path provided as parameter
/// 2. `autotag.toml` in current directory
/// 3. `autotag.toml` in the user config directory
/// 4. Empty settings if no file found
///
/// # Returns
/// * `Ok(Settings)` - Settings from the file, stringified
/// * `Err` - If a file exists but cannot be read, parsed, or holds unknown keys
pub fn load_settings_file(config_path: Option<&str>) -> Result<Settings> {
    let content = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(SETTINGS_FILE_NAME).exists() {
        fs::read_to_string(SETTINGS_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(SETTINGS_FILE_NAME);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Settings::new());
        }
    } else {
        return Ok(Settings::new());
    };

    parse_settings(&content)
}

/// Settings file contents, keyed by the same names as the environment
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct SettingsFile {
    num_components: Option<SettingValue>,
    release_trigger: Option<SettingValue>,
    default_bump: Option<SettingValue>,
    maximum_bump: Option<SettingValue>,
    do_tag: Option<SettingValue>,
    do_push: Option<SettingValue>,
}

/// A scalar setting value; validation happens in [`resolve_options`]
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SettingValue {
    Text(String),
    Integer(i64),
    Flag(bool),
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Text(s) => write!(f, "{}", s),
            SettingValue::Integer(i) => write!(f, "{}", i),
            SettingValue::Flag(b) => write!(f, "{}", b),
        }
    }
}

impl SettingsFile {
    fn into_settings(self) -> Settings {
        [
            (NUM_COMPONENTS, self.num_components),
            (RELEASE_TRIGGER, self.release_trigger),
            (DEFAULT_BUMP, self.default_bump),
            (MAXIMUM_BUMP, self.maximum_bump),
            (DO_TAG, self.do_tag),
            (DO_PUSH, self.do_push),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| (key.to_string(), value.to_string())))
        .collect()
    }
}

/// Parses a flat TOML table of settings.
///
/// Strings, integers and booleans are accepted and stringified, so that
/// `doPush = false` and `doPush = "false"` mean the same thing. Unknown keys
/// are rejected.
pub fn parse_settings(content: &str) -> Result<Settings> {
    let file: SettingsFile =
        toml::from_str(content).map_err(|e| AutotagError::config(e.to_string()))?;
    Ok(file.into_settings())
}
