//! User configuration module for loading participant nicknames from environment variables.
//!
//! Nicknames are optional and override the participant names from config.toml
//! when displaying reports.

use crate::entities::Group;
use std::collections::HashMap;

/// Gets a mapping of participant IDs to their configured nicknames from environment variables.
///
/// Reads `PARTICIPANT_ID_1`, `PARTICIPANT_ID_2`, `PARTICIPANT_NICKNAME_1` and
/// `PARTICIPANT_NICKNAME_2`. Only includes entries where both the id and the
/// nickname are configured.
#[must_use]
pub fn get_participant_nicknames() -> HashMap<String, String> {
    nicknames_from(|key| std::env::var(key).ok())
}

/// Builds the nickname map from an arbitrary variable lookup.
pub fn nicknames_from<F>(lookup: F) -> HashMap<String, String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut nicknames = HashMap::new();
    for slot in 1..=2 {
        if let (Some(id), Some(nickname)) = (
            lookup(&format!("PARTICIPANT_ID_{slot}")),
            lookup(&format!("PARTICIPANT_NICKNAME_{slot}")),
        ) {
            nicknames.insert(id, nickname);
        }
    }
    nicknames
}

/// Replaces participant display names in `group` with configured nicknames.
pub fn apply_nicknames(group: &mut Group, nicknames: &HashMap<String, String>) {
    for participant in &mut group.participants {
        if let Some(nickname) = nicknames.get(&participant.id) {
            participant.name.clone_from(nickname);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::couple_group;

    #[test]
    fn test_nicknames_require_both_values() {
        let nicknames = nicknames_from(|key| match key {
            "PARTICIPANT_ID_1" => Some("u1".to_string()),
            "PARTICIPANT_NICKNAME_1" => Some("Marchino".to_string()),
            "PARTICIPANT_ID_2" => Some("u2".to_string()),
            _ => None,
        });
        assert_eq!(nicknames.len(), 1);
        assert_eq!(nicknames.get("u1").map(String::as_str), Some("Marchino"));
    }

    #[test]
    fn test_apply_nicknames() {
        let mut group = couple_group();
        let nicknames = HashMap::from([("u2".to_string(), "Giuli".to_string())]);
        apply_nicknames(&mut group, &nicknames);
        assert_eq!(group.display_name("u1"), "Marco");
        assert_eq!(group.display_name("u2"), "Giuli");
    }
}
