//! Auth command handlers: sign-in, registration, token lifecycle.

use dialoguer::Input;
use secrecy::{ExposeSecret, SecretString};

use oasis_core::Directory;

use crate::cli::{AuthArgs, AuthCommand, GlobalOpts};
use crate::config;
use crate::error::CliError;

use super::util;

pub async fn handle(
    directory: &Directory,
    args: AuthArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let cfg = config::load_config_or_default();
    let profile_name = config::active_profile_name(global, &cfg);

    match args.command {
        AuthCommand::Login { email } => {
            let stored_email = cfg
                .profiles
                .get(&profile_name)
                .and_then(|p| p.email.clone());
            let email = prompt_email(email, stored_email)?;
            let password = prompt_password()?;

            let token = directory.login(&email, &password).await?;
            persist_token(&profile_name, &email, &token)?;

            if !global.quiet {
                eprintln!("Signed in as {email}");
            }
            Ok(())
        }

        AuthCommand::Register { email } => {
            let email = prompt_email(email, None)?;
            let password = prompt_password()?;

            let token = directory.register(&email, &password).await?;
            persist_token(&profile_name, &email, &token)?;

            if !global.quiet {
                eprintln!("Account created; signed in as {email}");
            }
            Ok(())
        }

        AuthCommand::Verify => {
            if directory.verify().await? {
                if !global.quiet {
                    eprintln!("Token is valid");
                }
                Ok(())
            } else {
                Err(CliError::AuthFailed {
                    message: "stored token is no longer valid".into(),
                })
            }
        }

        AuthCommand::Logout => {
            config::delete_token(&profile_name).map_err(keyring_err)?;

            // Also scrub any plaintext token left in the config file.
            let mut cfg = config::load_config_or_default();
            if let Some(profile) = cfg.profiles.get_mut(&profile_name) {
                if profile.token.take().is_some() {
                    config::save_config(&cfg)?;
                }
            }

            if !global.quiet {
                eprintln!("Signed out of profile '{profile_name}'");
            }
            Ok(())
        }
    }
}

fn prompt_email(flag: Option<String>, stored: Option<String>) -> Result<String, CliError> {
    if let Some(email) = flag {
        return Ok(email);
    }
    let mut input = Input::new().with_prompt("Email");
    if let Some(stored) = stored {
        input = input.default(stored);
    }
    input.interact_text().map_err(util::prompt_err)
}

fn prompt_password() -> Result<SecretString, CliError> {
    let password = rpassword::prompt_password("Password: ").map_err(util::prompt_err)?;
    if password.is_empty() {
        return Err(CliError::Validation {
            field: "password".into(),
            reason: "password cannot be empty".into(),
        });
    }
    Ok(SecretString::from(password))
}

/// Store the token in the keyring and remember the email on the profile.
fn persist_token(
    profile_name: &str,
    email: &str,
    token: &SecretString,
) -> Result<(), CliError> {
    config::store_token(profile_name, token.expose_secret()).map_err(keyring_err)?;

    let mut cfg = config::load_config_or_default();
    if let Some(profile) = cfg.profiles.get_mut(profile_name) {
        profile.email = Some(email.into());
        config::save_config(&cfg)?;
    }
    Ok(())
}

fn keyring_err(e: keyring::Error) -> CliError {
    CliError::Validation {
        field: "keyring".into(),
        reason: format!("keyring access failed: {e}"),
    }
}
