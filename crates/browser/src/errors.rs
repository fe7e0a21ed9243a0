use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BrowserError {
    #[error("unknown topic `{0}`, expected one of: Equipments, Lab Assistants, Staff")]
    UnknownTopic(String),

    #[error("unknown equipment type `{0}`")]
    UnknownEquipmentType(String),

    #[error("no equipment selected for staff assignment")]
    NoEquipmentContext,
}
