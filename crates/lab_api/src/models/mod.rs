pub mod record;
pub mod session;

pub use record::*;

/// Backing collections exposed by the lab API.
#[derive(
    Hash,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::AsRefStr,
    strum::Display,
    strum::EnumString,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    #[strum(serialize = "equipments")]
    Equipments,

    #[strum(serialize = "users")]
    Users,

    #[strum(serialize = "staff")]
    Staff,
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use super::Collection;

    #[test]
    fn collection_path_segments() {
        assert_eq!(Collection::Equipments.as_ref(), "equipments");
        assert_eq!(Collection::Users.to_string(), "users");
        assert_eq!(Collection::from_str("staff").unwrap(), Collection::Staff);
        assert!(Collection::from_str("rooms").is_err());
    }
}
