//! Config subcommand handlers.

use dialoguer::Input;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Profile};
use crate::error::CliError;
use crate::output;

use super::util;

pub async fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            let config_path = config::config_path();
            eprintln!("Oasis CLI — configuration wizard");
            eprintln!("  Config path: {}\n", config_path.display());

            let profile_name: String = Input::new()
                .with_prompt("Profile name")
                .default("default".into())
                .interact_text()
                .map_err(util::prompt_err)?;

            let api_url: String = Input::new()
                .with_prompt("Directory backend URL")
                .default("https://oasis-api.now.sh".into())
                .interact_text()
                .map_err(util::prompt_err)?;

            let auth_url: String = Input::new()
                .with_prompt("Auth service URL")
                .default("https://oasis-auth.now.sh".into())
                .interact_text()
                .map_err(util::prompt_err)?;

            for (field, value) in [("api_url", &api_url), ("auth_url", &auth_url)] {
                if value.parse::<url::Url>().is_err() {
                    return Err(CliError::Validation {
                        field: field.into(),
                        reason: format!("invalid URL: {value}"),
                    });
                }
            }

            let mut cfg = config::load_config_or_default();
            cfg.default_profile = Some(profile_name.clone());
            cfg.profiles.insert(
                profile_name.clone(),
                Profile {
                    api_url,
                    auth_url,
                    ..Profile::default()
                },
            );
            config::save_config(&cfg)?;

            eprintln!("\nConfiguration written to {}", config_path.display());
            eprintln!("  Active profile: {profile_name}");
            eprintln!("\n  Browse anonymously:  oasis resources list");
            eprintln!("  Sign in for more:    oasis auth login");

            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = config::load_config_or_default();
            let out = output::render_single(
                &global.output,
                &cfg,
                |c| format!("{c:#?}"),
                |_| "config".into(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Set <key> <value> ───────────────────────────────────────
        ConfigCommand::Set { key, value } => {
            let mut cfg = config::load_config_or_default();
            let profile_name = config::active_profile_name(global, &cfg);

            let profile = cfg.profiles.entry(profile_name.clone()).or_default();

            match key.as_str() {
                "api_url" | "api-url" => profile.api_url = value,
                "auth_url" | "auth-url" => profile.auth_url = value,
                "email" => profile.email = Some(value),
                "token_env" | "token-env" => profile.token_env = Some(value),
                "timeout" => {
                    profile.timeout = Some(value.parse().map_err(|_| CliError::Validation {
                        field: "timeout".into(),
                        reason: "must be a number (seconds)".into(),
                    })?);
                }
                other => {
                    return Err(CliError::Validation {
                        field: other.into(),
                        reason: format!(
                            "unknown config key '{other}'. Valid keys: api_url, auth_url, \
                             email, token_env, timeout"
                        ),
                    });
                }
            }

            config::save_config(&cfg)?;
            eprintln!("Set {key} on profile '{profile_name}'");
            Ok(())
        }

        // ── Profiles ────────────────────────────────────────────────
        ConfigCommand::Profiles => {
            let cfg = config::load_config_or_default();
            let default = cfg.default_profile.as_deref().unwrap_or("default");
            if cfg.profiles.is_empty() {
                eprintln!("No profiles configured. Run: oasis config init");
            } else {
                let mut names: Vec<&String> = cfg.profiles.keys().collect();
                names.sort_unstable();
                for name in names {
                    let marker = if name == default { " *" } else { "" };
                    println!("{name}{marker}");
                }
            }
            Ok(())
        }

        // ── Use <name> ──────────────────────────────────────────────
        ConfigCommand::Use { name } => {
            let mut cfg = config::load_config_or_default();

            if !cfg.profiles.contains_key(&name) {
                let available: Vec<_> = cfg.profiles.keys().cloned().collect();
                return Err(CliError::ProfileNotFound {
                    name,
                    available: if available.is_empty() {
                        "(none)".into()
                    } else {
                        available.join(", ")
                    },
                });
            }

            cfg.default_profile = Some(name.clone());
            config::save_config(&cfg)?;
            eprintln!("Default profile set to '{name}'");
            Ok(())
        }
    }
}
