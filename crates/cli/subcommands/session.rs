use color_eyre::Result;
use colored::*;
use inquire::{Password, Text};
use spinners::{Spinner, Spinners};

use crate::context::GlobalContext;

pub async fn login(
    mut ctx: GlobalContext,
    url: Option<String>,
    username: Option<String>,
) -> Result<()> {
    if let Some(url) = url {
        ctx.config.base_url = url.trim_end_matches('/').to_string();
        ctx.api = lab_api::Client::new(&ctx.config.base_url)?;
    }

    let username = match username {
        Some(username) => username,
        None => {
            let mut prompt = Text::new("Username:");
            if let Some(last) = ctx.config.username.as_deref() {
                prompt = prompt.with_default(last);
            }

            prompt.prompt()?
        }
    };

    let password = Password::new("Password:")
        .without_confirmation()
        .prompt()?;

    let mut spinner = Spinner::new(Spinners::Dots, "Logging in ...".into());

    match ctx.api.login(&username, &password).await {
        Ok(response) => {
            spinner.stop_and_persist("✅", format!("Logged in as {}", username.yellow()));

            ctx.config.update_auth(&username, response.token);
            ctx.config.write()?;

            Ok(())
        }
        Err(e) => {
            spinner.stop_and_persist("❌", "Login failed".into());

            Err(e.into())
        }
    }
}

pub async fn logout(mut ctx: GlobalContext) -> Result<()> {
    if !ctx.config.is_logged_in() {
        println!("Not logged in.");
        return Ok(());
    }

    ctx.config.clear_auth();
    ctx.config.write()?;

    println!("Logged out.");

    Ok(())
}
