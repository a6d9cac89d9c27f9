//! TOML profiles and token resolution.
//!
//! Profiles name the two Oasis services (directory backend and auth
//! service). Tokens resolve through a chain: env var, profile-named env
//! var, system keyring, plaintext config. Flag overrides from
//! `GlobalOpts` win over everything.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use oasis_api::TransportConfig;
use oasis_core::DirectoryConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

pub const KEYRING_SERVICE: &str = "oasis-cli";

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named service profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    30
}

/// A named pair of service endpoints, plus optional stored identity.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Profile {
    /// Directory backend base URL.
    pub api_url: String,

    /// Auth service base URL.
    pub auth_url: String,

    /// Email used for the last sign-in (prefills prompts).
    pub email: Option<String>,

    /// Session token (plaintext — prefer keyring or env var).
    pub token: Option<String>,

    /// Environment variable name containing the session token.
    pub token_env: Option<String>,

    /// Override request timeout.
    pub timeout: Option<u64>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("org", "oasis", "oasis-cli").map_or_else(
        || {
            let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
            p.push(".config");
            p.push("oasis-cli");
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

// ── Config loading / saving ─────────────────────────────────────────

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, CliError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(config_path()))
        .merge(Env::prefixed("OASIS_").split("_"));

    Ok(figment.extract()?)
}

/// Load config, returning a default if the file doesn't exist or is broken.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), CliError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg).map_err(|e| CliError::Validation {
        field: "config".into(),
        reason: e.to_string(),
    })?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

// ── Profile resolution ──────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Translate config + global flags into a `DirectoryConfig`.
///
/// Both service URLs may come entirely from flags, in which case no
/// config file is required at all.
pub fn resolve(global: &GlobalOpts, config: &Config) -> Result<DirectoryConfig, CliError> {
    let profile_name = active_profile_name(global, config);
    let profile = config.profiles.get(&profile_name);

    // Flags win over the profile; a missing profile is fine as long as
    // both URLs arrive by flag or env.
    let api_url_str = global
        .api_url
        .clone()
        .or_else(|| profile.map(|p| p.api_url.clone()).filter(|u| !u.is_empty()));
    let auth_url_str = global
        .auth_url
        .clone()
        .or_else(|| profile.map(|p| p.auth_url.clone()).filter(|u| !u.is_empty()));

    let (Some(api_url_str), Some(auth_url_str)) = (api_url_str, auth_url_str) else {
        if !config.profiles.is_empty() && profile.is_none() {
            let mut names: Vec<&str> = config.profiles.keys().map(String::as_str).collect();
            names.sort_unstable();
            return Err(CliError::ProfileNotFound {
                name: profile_name,
                available: names.join(", "),
            });
        }
        return Err(CliError::NoConfig {
            path: config_path().display().to_string(),
        });
    };

    let api_url = parse_url("api_url", &api_url_str)?;
    let auth_url = parse_url("auth_url", &auth_url_str)?;

    let timeout = profile
        .and_then(|p| p.timeout)
        .map_or(global.timeout, |profile_timeout| {
            // An explicit --timeout wins; clap's default is 30.
            if global.timeout == 30 {
                profile_timeout
            } else {
                global.timeout
            }
        });

    Ok(DirectoryConfig {
        api_url,
        auth_url,
        transport: TransportConfig {
            timeout: Duration::from_secs(timeout),
        },
        token: resolve_token(profile, &profile_name),
    })
}

fn parse_url(field: &str, value: &str) -> Result<url::Url, CliError> {
    value.parse().map_err(|_| CliError::Validation {
        field: field.into(),
        reason: format!("invalid URL: {value}"),
    })
}

// ── Token resolution ────────────────────────────────────────────────

/// Resolve a session token from the credential chain.
///
/// Order: `OASIS_TOKEN` env var, the profile's `token_env` variable,
/// the system keyring, plaintext `token` in the config file. Browsing
/// works without one, so absence is not an error here.
pub fn resolve_token(profile: Option<&Profile>, profile_name: &str) -> Option<SecretString> {
    if let Ok(val) = std::env::var("OASIS_TOKEN") {
        return Some(SecretString::from(val));
    }

    if let Some(env_name) = profile.and_then(|p| p.token_env.as_ref()) {
        if let Ok(val) = std::env::var(env_name) {
            return Some(SecretString::from(val));
        }
    }

    if let Ok(entry) = keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/token")) {
        if let Ok(secret) = entry.get_password() {
            return Some(SecretString::from(secret));
        }
    }

    profile
        .and_then(|p| p.token.clone())
        .map(SecretString::from)
}

/// Store a token in the system keyring for the given profile.
pub fn store_token(profile_name: &str, token: &str) -> Result<(), keyring::Error> {
    keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/token"))?.set_password(token)
}

/// Remove the stored token for the given profile, if any.
pub fn delete_token(profile_name: &str) -> Result<(), keyring::Error> {
    match keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/token"))?
        .delete_credential()
    {
        Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{ColorMode, OutputFormat};

    fn global(api: Option<&str>, auth: Option<&str>) -> GlobalOpts {
        GlobalOpts {
            profile: None,
            api_url: api.map(String::from),
            auth_url: auth.map(String::from),
            output: OutputFormat::Table,
            color: ColorMode::Auto,
            verbose: 0,
            quiet: false,
            yes: false,
            timeout: 30,
        }
    }

    #[test]
    fn flags_alone_are_enough() {
        let config = Config::default();
        let resolved = resolve(
            &global(Some("http://api.test"), Some("http://auth.test")),
            &config,
        )
        .unwrap();
        assert_eq!(resolved.api_url.as_str(), "http://api.test/");
        assert_eq!(resolved.auth_url.as_str(), "http://auth.test/");
    }

    #[test]
    fn missing_everything_is_no_config() {
        let config = Config::default();
        assert!(matches!(
            resolve(&global(None, None), &config),
            Err(CliError::NoConfig { .. })
        ));
    }

    #[test]
    fn unknown_profile_lists_available_ones() {
        let mut config = Config::default();
        config.profiles.insert(
            "prod".into(),
            Profile {
                api_url: "http://api.test".into(),
                auth_url: "http://auth.test".into(),
                ..Profile::default()
            },
        );
        let mut opts = global(None, None);
        opts.profile = Some("staging".into());
        match resolve(&opts, &config) {
            Err(CliError::ProfileNotFound { name, available }) => {
                assert_eq!(name, "staging");
                assert_eq!(available, "prod");
            }
            other => panic!("expected ProfileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn profile_timeout_applies_when_flag_is_default() {
        let mut config = Config::default();
        config.profiles.insert(
            "default".into(),
            Profile {
                api_url: "http://api.test".into(),
                auth_url: "http://auth.test".into(),
                timeout: Some(90),
                ..Profile::default()
            },
        );
        let resolved = resolve(&global(None, None), &config).unwrap();
        assert_eq!(resolved.transport.timeout, Duration::from_secs(90));
    }

    #[test]
    fn bad_url_is_a_validation_error() {
        let config = Config::default();
        assert!(matches!(
            resolve(&global(Some("not a url"), Some("http://auth.test")), &config),
            Err(CliError::Validation { field, .. }) if field == "api_url"
        ));
    }
}
