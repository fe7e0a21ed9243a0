use browser::{Record, RecordBrowser, RecordId, Topic};
use colored::*;
use color_eyre::{eyre::eyre, Result};
use inquire::{InquireError, Select};
use lab_api::models::Collection;

/// Looks a record up by id. The API only searches by name, so this lists the
/// whole collection.
pub(crate) async fn find_record(
    api: &lab_api::Client,
    collection: Collection,
    id: &str,
) -> Result<Record> {
    let wanted = RecordId::from(id);
    let records = api.get_entries_by_name("", collection).await?;

    records
        .into_iter()
        .find(|r| r.id == wanted || r.id.to_string() == id)
        .ok_or_else(|| eyre!("no {collection} record with id {id}"))
}

pub(crate) fn record_label(record: &Record) -> String {
    let mut label = format!("#{} {}", record.id, record.display_name());

    if let Some(kind) = record.kind() {
        label.push_str(&format!(" [{kind}]"));
    }

    label
}

pub(crate) fn print_results(browser: &RecordBrowser) {
    let state = browser.state();
    let results = browser.results();

    let filter = match state.topic {
        Topic::Equipments => format!(", {}", state.equipment_type),
        _ => String::new(),
    };

    println!(
        "{} ({} found{filter})",
        state.topic.to_string().bold(),
        results.len()
    );

    for record in results {
        let assigned = match (state.topic, record.staff()) {
            (Topic::Equipments, Some(staff)) => {
                format!(" -> {}", crate::terminal::display_value(staff)).dimmed().to_string()
            }
            _ => String::new(),
        };

        println!("  {}{assigned}", record_label(record));
    }
}

/// Lets the user pick one of `records`. `None` when the list is empty or
/// the prompt was cancelled.
pub(crate) fn pick_record(prompt: &str, records: &[Record]) -> Result<Option<Record>> {
    if records.is_empty() {
        println!("{}", "Nothing to pick from.".yellow());
        return Ok(None);
    }

    let labels: Vec<String> = records.iter().map(record_label).collect();

    match Select::new(prompt, labels).raw_prompt() {
        Ok(choice) => Ok(records.get(choice.index).cloned()),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn label_includes_type() {
        let laptop = Record::new(1).with_field("name", "XPS").with_field("type", "Laptop");
        let staff = Record::new("s1").with_field("name", "Ada");

        assert_eq!(record_label(&laptop), "#1 XPS [Laptop]");
        assert_eq!(record_label(&staff), "#s1 Ada");
    }

    #[test]
    fn empty_pick_is_none() {
        assert!(pick_record("Pick:", &[]).unwrap().is_none());
    }
}
