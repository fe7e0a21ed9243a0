use browser::{Topic, TypeFilter};
use color_eyre::Result;
use inquire::{Select, Text};
use strum::IntoEnumIterator;

use crate::{context::GlobalContext, utils};

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
enum Action {
    Search,
    #[strum(to_string = "Change topic")]
    ChangeTopic,
    #[strum(to_string = "Filter by type")]
    FilterType,
    #[strum(to_string = "Open details")]
    Open,
    #[strum(to_string = "Delete entry")]
    Delete,
    #[strum(to_string = "Assign staff")]
    Assign,
    Quit,
}

fn actions(topic: Topic) -> Vec<Action> {
    Action::iter()
        .filter(|action| match action {
            Action::FilterType | Action::Assign => topic == Topic::Equipments,
            _ => true,
        })
        .collect()
}

pub async fn browse(ctx: GlobalContext, topic: Option<Topic>) -> Result<()> {
    let mut browser = ctx.browser(None);
    browser.set_topic(topic.unwrap_or(ctx.default_topic));

    if !super::enter(&mut browser).await {
        return Ok(());
    }

    loop {
        println!();
        utils::print_results(&browser);

        let Some(action) =
            Select::new("What next?", actions(browser.state().topic)).prompt_skippable()?
        else {
            break;
        };

        match action {
            Action::Search => {
                let value = Text::new("Search:")
                    .with_default(&browser.state().search_value)
                    .prompt()?;

                browser.set_search_value(value);
                browser.refresh().await;
            }
            Action::ChangeTopic => {
                let label = Select::new("Topic:", Topic::labels()).prompt()?;

                browser.set_topic(Topic::parse(label)?);
                browser.refresh().await;
            }
            Action::FilterType => {
                let label = Select::new("Equipment type:", TypeFilter::options()).prompt()?;

                browser.set_equipment_type(label.parse()?);
                browser.refresh().await;
            }
            Action::Open => {
                if let Some(record) = utils::pick_record("Open:", browser.results())? {
                    browser.open_details(&record).await;
                }
            }
            Action::Delete => {
                if let Some(record) = utils::pick_record("Delete:", browser.results())? {
                    let outcome = browser.delete_entry(&record).await;

                    // failures were already alerted
                    if let Err(e) = super::delete::report(outcome) {
                        tracing::debug!("{e}");
                    }
                }
            }
            Action::Assign => {
                let Some(equipment) = utils::pick_record("Equipment:", browser.results())? else {
                    continue;
                };

                let mut assigning = ctx.browser(Some(equipment));

                if super::enter(&mut assigning).await {
                    if let Some(staff) =
                        utils::pick_record("Pick the staff to assign:", assigning.results())?
                    {
                        assigning.assign_staff(&staff).await?;
                    }
                }

                browser.refresh().await;
            }
            Action::Quit => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn equipment_only_actions() {
        let equipments = actions(Topic::Equipments);
        let staff = actions(Topic::Staff);

        assert!(equipments.contains(&Action::FilterType));
        assert!(equipments.contains(&Action::Assign));
        assert!(!staff.contains(&Action::FilterType));
        assert!(!staff.contains(&Action::Assign));
        assert_eq!(staff.last(), Some(&Action::Quit));
    }
}
