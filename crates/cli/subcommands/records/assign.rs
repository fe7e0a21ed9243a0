use color_eyre::Result;
use lab_api::models::Collection;

use crate::{context::GlobalContext, utils};

pub async fn assign(ctx: GlobalContext, equipment_id: String, query: Option<String>) -> Result<()> {
    if !super::guard(&mut ctx.browser(None)).await {
        return Ok(());
    }

    let equipment = utils::find_record(&ctx.api, Collection::Equipments, &equipment_id).await?;

    let mut browser = ctx.browser(Some(equipment));
    browser.set_search_value(query.unwrap_or_default());

    if !super::enter(&mut browser).await {
        return Ok(());
    }

    let Some(staff) = utils::pick_record("Pick the staff to assign:", browser.results())? else {
        println!("Operation aborted.");
        return Ok(());
    };

    browser.assign_staff(&staff).await?;

    Ok(())
}
