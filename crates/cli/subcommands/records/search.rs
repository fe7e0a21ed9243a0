use browser::{Topic, TypeFilter};
use color_eyre::{eyre::eyre, Result};
use spinners::{Spinner, Spinners};

use crate::{context::GlobalContext, utils};

pub async fn search(
    ctx: GlobalContext,
    topic: Option<Topic>,
    query: Option<String>,
    equipment_type: Option<TypeFilter>,
    json: bool,
) -> Result<()> {
    let mut browser = ctx.browser(None);
    browser.set_topic(topic.unwrap_or(ctx.default_topic));
    browser.set_search_value(query.unwrap_or_default());
    browser.set_equipment_type(equipment_type.unwrap_or_default());

    if !super::guard(&mut browser).await {
        return Ok(());
    }

    let mut spinner = Spinner::new(Spinners::Dots, "Searching ...".into());
    let updated = browser.refresh().await;
    spinner.stop_with_newline();

    if !updated {
        return Err(eyre!("unable to load {}", browser.state().topic));
    }

    global_utils::print_dbg!(browser.state());

    if json {
        println!("{}", serde_json::to_string_pretty(browser.results())?);
        return Ok(());
    }

    utils::print_results(&browser);

    Ok(())
}

pub fn types() {
    for label in TypeFilter::options() {
        println!("{label}");
    }
}
