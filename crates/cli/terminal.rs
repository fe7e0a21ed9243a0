//! Terminal implementations of the browser collaborators.

use async_trait::async_trait;
use browser::{AlertService, Navigator, Page, Record, SessionService};
use colored::*;
use config::Config;
use inquire::Confirm;
use serde_json::Value;

pub struct StoredSession {
    logged_in: bool,
}

impl StoredSession {
    pub fn new(config: &Config) -> Self {
        Self {
            logged_in: config.is_logged_in(),
        }
    }
}

impl SessionService for StoredSession {
    fn is_logged_in(&self) -> bool {
        self.logged_in
    }
}

pub struct TerminalAlerts {
    assume_yes: bool,
}

impl TerminalAlerts {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

#[async_trait]
impl AlertService for TerminalAlerts {
    async fn show_alert(&self, message: &str, title: &str) {
        match title {
            "" => println!("{}", message.green()),
            "Error" => eprintln!("{}: {}", title.red().bold(), message),
            _ => println!("{}: {}", title.bold(), message),
        }
    }

    async fn confirm(&self, message: &str, _title: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        match Confirm::new(message).with_default(false).prompt() {
            Ok(answer) => answer,
            Err(e) => {
                tracing::debug!("confirmation aborted: {e}");
                false
            }
        }
    }
}

pub struct TerminalNavigator;

#[async_trait]
impl Navigator for TerminalNavigator {
    async fn set_root(&self, page: Page) {
        match page {
            Page::Login => println!(
                "{} run {} first.",
                "You are not logged in,".yellow(),
                "`labdesk login`".bold()
            ),
            other => println!("{other}"),
        }
    }

    async fn push(&self, page: Page, item: Record) {
        termimad::print_text(&render_details(page, &item));
    }
}

fn page_title(page: Page) -> &'static str {
    match page {
        Page::Login => "Login",
        Page::EquipmentDetails => "Equipment",
        Page::LabAssistantDetails => "Lab assistant",
        Page::StaffDetails => "Staff",
    }
}

/// Single line rendering of a field value. Embedded records show their name.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        Value::Object(_) => match serde_json::from_value::<Record>(value.clone()) {
            Ok(record) => record.display_name(),
            Err(_) => value.to_string(),
        },
        other => other.to_string(),
    }
}

/// Markdown table with every field of `item`.
pub fn render_details(page: Page, item: &Record) -> String {
    let mut markdown = format!(
        "# {} {}\n\n|field|value|\n|:-|:-|\n|_id|{}|\n",
        page_title(page),
        item.display_name(),
        item.id
    );

    for (key, value) in &item.fields {
        let value = display_value(value).replace('|', "\\|");
        markdown.push_str(&format!("|{key}|{value}|\n"));
    }

    markdown
}
