use color_eyre::{eyre::eyre, Result};
use colored::*;
use config::Config;
use inquire::Text;

pub async fn reset(current: Option<Config>) -> Result<Config> {
    let current = current.unwrap_or_default();

    let base_url = Text::new("Lab API base url:")
        .with_help_message("e.g https://lab.example.com")
        .with_default(&current.base_url)
        .prompt()?;

    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(eyre!(
            "Invalid url {}, it must start with http:// or https://",
            base_url.yellow()
        ));
    }

    let config = Config {
        base_url: base_url.trim_end_matches('/').to_string(),
        ..current
    };

    config.write()?;
    println!("Configuration saved to {}", Config::path()?.display());

    Ok(config)
}

pub fn show(config: &Config) -> Result<()> {
    let masked = Config {
        token: config.token.as_ref().map(|_| "********".to_string()),
        ..config.clone()
    };

    println!("{}", serde_json::to_string_pretty(&masked)?);

    Ok(())
}
