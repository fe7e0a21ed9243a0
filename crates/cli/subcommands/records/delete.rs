use browser::{DeleteOutcome, Record, RecordId, Topic};
use color_eyre::{eyre::eyre, Result};
use colored::*;

use crate::context::GlobalContext;

pub async fn delete(ctx: GlobalContext, topic: Topic, id: String) -> Result<()> {
    let mut browser = ctx.browser(None);
    browser.set_topic(topic);

    if !super::enter(&mut browser).await {
        return Ok(());
    }

    let wanted = RecordId::from(id.as_str());
    let item = browser
        .results()
        .iter()
        .find(|r| r.id == wanted)
        .cloned()
        .unwrap_or_else(|| Record::new(wanted));

    report(browser.delete_entry(&item).await)
}

pub(crate) fn report(outcome: DeleteOutcome) -> Result<()> {
    match outcome {
        DeleteOutcome::Cancelled => println!("Operation aborted."),
        DeleteOutcome::Rejected => println!("{}", "Nothing was deleted.".yellow()),
        DeleteOutcome::Failed => return Err(eyre!("delete failed")),
        DeleteOutcome::Deleted {
            unassigned,
            failed_updates,
        } => {
            println!("{}", "Entry deleted.".green());

            if unassigned > 0 {
                println!("Freed {unassigned} equipment(s).");
            }

            if failed_updates > 0 {
                println!(
                    "{}",
                    format!("{failed_updates} equipment(s) could not be freed.").yellow()
                );
            }
        }
    }

    Ok(())
}
