use std::{fmt, str::FromStr};

use lab_api::models::{Collection, Record};
use strum::IntoEnumIterator;

use crate::BrowserError;

/// Record category shown by the browser.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Topic {
    #[default]
    #[strum(to_string = "Equipments", serialize = "equipment")]
    Equipments,

    #[strum(
        to_string = "Lab Assistants",
        serialize = "lab-assistants",
        serialize = "assistants"
    )]
    LabAssistants,

    #[strum(to_string = "Staff")]
    Staff,
}

impl Topic {
    /// Lenient lookup: anything that is not a known topic label is treated
    /// as `Staff`. Text input from users goes through `FromStr` instead.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Equipments" => Self::Equipments,
            "Lab Assistants" => Self::LabAssistants,
            _ => Self::Staff,
        }
    }

    pub fn parse(value: &str) -> crate::Result<Self> {
        Self::from_str(value).map_err(|_| BrowserError::UnknownTopic(value.to_string()))
    }

    pub fn collection(&self) -> Collection {
        match self {
            Self::Equipments => Collection::Equipments,
            Self::LabAssistants => Collection::Users,
            Self::Staff => Collection::Staff,
        }
    }

    pub fn details_page(&self) -> Page {
        match self {
            Self::Equipments => Page::EquipmentDetails,
            Self::LabAssistants => Page::LabAssistantDetails,
            Self::Staff => Page::StaffDetails,
        }
    }

    pub fn labels() -> Vec<&'static str> {
        Self::iter().map(|t| t.into()).collect()
    }
}

impl From<Topic> for &'static str {
    fn from(value: Topic) -> Self {
        match value {
            Topic::Equipments => "Equipments",
            Topic::LabAssistants => "Lab Assistants",
            Topic::Staff => "Staff",
        }
    }
}

/// Equipment categories, in the order they are offered to users.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum EquipmentType {
    Laptop,
    Desktop,
    Monitor,
    Printer,
    Projector,
    Tablet,
    Phone,
    Network,
    Other,
}

impl EquipmentType {
    pub fn labels() -> Vec<&'static str> {
        Self::iter().map(|t| t.into()).collect()
    }
}

/// Client-side filter on the equipment `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(EquipmentType),
}

impl TypeFilter {
    pub const ALL_LABEL: &'static str = "All Types";

    /// `All Types` followed by every equipment type.
    pub fn options() -> Vec<&'static str> {
        let mut options = vec![Self::ALL_LABEL];
        options.extend(EquipmentType::labels());

        options
    }

    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Self::All => true,
            Self::Only(kind) => {
                let label: &'static str = (*kind).into();
                record.kind().as_deref() == Some(label)
            }
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(Self::ALL_LABEL),
            Self::Only(kind) => write!(f, "{kind}"),
        }
    }
}

impl FromStr for TypeFilter {
    type Err = BrowserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(Self::ALL_LABEL) || s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }

        EquipmentType::from_str(s)
            .map(Self::Only)
            .map_err(|_| BrowserError::UnknownEquipmentType(s.to_string()))
    }
}

/// Navigation destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Page {
    Login,
    EquipmentDetails,
    LabAssistantDetails,
    StaffDetails,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn resolves_collections() {
        assert_eq!(Topic::Equipments.collection(), Collection::Equipments);
        assert_eq!(Topic::LabAssistants.collection(), Collection::Users);
        assert_eq!(Topic::Staff.collection(), Collection::Staff);
    }

    #[test]
    fn resolves_detail_pages() {
        assert_eq!(Topic::Equipments.details_page().to_string(), "equipment-details");
        assert_eq!(
            Topic::LabAssistants.details_page().to_string(),
            "lab-assistant-details"
        );
        assert_eq!(Topic::Staff.details_page().to_string(), "staff-details");
        assert_eq!(Page::Login.as_ref(), "login");
    }

    #[test]
    fn strict_parse_rejects_unknown_topics() {
        assert_eq!(Topic::parse("Lab Assistants"), Ok(Topic::LabAssistants));
        assert_eq!(Topic::parse("lab-assistants"), Ok(Topic::LabAssistants));
        assert_eq!(Topic::parse("staff"), Ok(Topic::Staff));
        assert_eq!(
            Topic::parse("Rooms"),
            Err(BrowserError::UnknownTopic("Rooms".into()))
        );
    }

    /// Unknown labels silently land on `Staff`. Kept on purpose for callers
    /// that hand over raw labels; this test pins the behavior.
    #[test]
    fn lenient_label_falls_back_to_staff() {
        assert_eq!(Topic::from_label("Equipments"), Topic::Equipments);
        assert_eq!(Topic::from_label("Lab Assistants"), Topic::LabAssistants);
        assert_eq!(Topic::from_label("Rooms"), Topic::Staff);
        assert_eq!(Topic::from_label("Rooms").collection(), Collection::Staff);
    }

    #[test]
    fn topic_labels_round_trip() {
        assert_eq!(Topic::labels(), vec!["Equipments", "Lab Assistants", "Staff"]);

        for topic in Topic::iter() {
            assert_eq!(Topic::parse(&topic.to_string()), Ok(topic));
        }
    }

    #[test]
    fn type_options_start_with_sentinel() {
        let options = TypeFilter::options();

        assert_eq!(options[0], "All Types");
        assert_eq!(options[1], "Laptop");
        assert_eq!(options.len(), EquipmentType::labels().len() + 1);
    }

    #[test]
    fn type_filter_parsing() {
        assert_eq!("All Types".parse::<TypeFilter>(), Ok(TypeFilter::All));
        assert_eq!(
            "monitor".parse::<TypeFilter>(),
            Ok(TypeFilter::Only(EquipmentType::Monitor))
        );
        assert!("Microscope".parse::<TypeFilter>().is_err());
        assert_eq!(TypeFilter::Only(EquipmentType::Laptop).to_string(), "Laptop");
    }

    #[test]
    fn type_filter_compares_stringified_type() {
        let laptop = Record::new(1).with_field("type", "Laptop");
        let lower = Record::new(2).with_field("type", "laptop");
        let untyped = Record::new(3);
        let filter = TypeFilter::Only(EquipmentType::Laptop);

        assert!(filter.matches(&laptop));
        assert!(!filter.matches(&lower));
        assert!(!filter.matches(&untyped));
        assert!(TypeFilter::All.matches(&untyped));
    }
}
