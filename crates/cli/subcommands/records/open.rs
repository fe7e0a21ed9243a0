use browser::Topic;
use color_eyre::Result;

use crate::{context::GlobalContext, utils};

pub async fn open(ctx: GlobalContext, topic: Topic, id: String) -> Result<()> {
    let mut browser = ctx.browser(None);
    browser.set_topic(topic);

    if !super::guard(&mut browser).await {
        return Ok(());
    }

    let record = utils::find_record(&ctx.api, topic.collection(), &id).await?;
    browser.open_details(&record).await;

    Ok(())
}
