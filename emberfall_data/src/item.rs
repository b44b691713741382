//! Item records and their attribute modifiers.
//!
//! Items live in a master table keyed by unique name. Players reference them
//! by name; the store resolves those references to shared records at load
//! time. An item's modifiers only count toward a holder's totals while the
//! item is flagged as equipped.

use crate::attributes::AbilityScores;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// An item that can modify its holder's attributes while equipped.
///
/// `kind` is a free-form category tag ("Weapon", "Armor", "Potion", ...).
/// Wire field names follow the persisted table format, with `kind` stored
/// under `Type`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Item {
    /// Unique name within the item table.
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Category tag, e.g. "Weapon", "Armor", "Potion".
    #[serde(rename = "Type")]
    pub kind: String,
    /// Whether the item's modifiers currently apply to its holder.
    #[serde(default)]
    pub is_equipped: bool,
    /// Attribute deltas applied while equipped.
    #[serde(default)]
    pub attribute_modifiers: AbilityScores,
}

impl Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mods = if self.attribute_modifiers.is_empty() {
            "None".to_string()
        } else {
            self.attribute_modifiers
                .iter()
                .map(|(attr, value)| format!("{attr}: {value}"))
                .collect::<Vec<_>>()
                .join(", ")
        };
        write!(
            f,
            "{} (Type: {}, Equipped: {}) | Modifiers: {}",
            self.name, self.kind, self.is_equipped, mods
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::Attribute;

    fn longsword() -> Item {
        Item {
            name: "Longsword".into(),
            description: "A well-balanced blade.".into(),
            kind: "Weapon".into(),
            is_equipped: true,
            attribute_modifiers: AbilityScores::new().with(Attribute::Attack, 3),
        }
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let json = serde_json::to_value(longsword()).unwrap();
        assert_eq!(json["Name"], "Longsword");
        assert_eq!(json["Type"], "Weapon");
        assert_eq!(json["IsEquipped"], true);
        assert_eq!(json["AttributeModifiers"]["Attack"], 3);
    }

    #[test]
    fn deserializes_with_sparse_fields() {
        let item: Item =
            serde_json::from_str(r#"{"Name": "Torch", "Type": "Tool"}"#).unwrap();
        assert_eq!(item.name, "Torch");
        assert!(!item.is_equipped);
        assert!(item.attribute_modifiers.is_empty());
        assert_eq!(item.description, "");
    }

    #[test]
    fn display_lists_modifiers() {
        let rendered = longsword().to_string();
        assert!(rendered.contains("Longsword"));
        assert!(rendered.contains("Attack: 3"));

        let plain = Item {
            name: "Rock".into(),
            kind: "Junk".into(),
            ..Item::default()
        };
        assert!(plain.to_string().contains("Modifiers: None"));
    }
}
