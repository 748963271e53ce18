//! Badge display metadata.

use serde::Serialize;

/// Display metadata for a single technology badge.
///
/// Serializes to the record shape the web renderer consumes:
/// `{"name": ..., "iconName": ..., "className": ...}`, with `className`
/// omitted entirely when absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    /// Human-readable display label (e.g. "Node.js").
    pub name: &'static str,

    /// Identifier the external icon-resolution collaborator uses to locate
    /// the visual asset. Opaque here; never validated against real assets.
    pub icon_name: &'static str,

    /// Optional styling directives applied by the renderer, opaque to this
    /// crate. Absent for most badges.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<&'static str>,
}

impl Badge {
    /// Badge with no styling override.
    pub const fn new(name: &'static str, icon_name: &'static str) -> Self {
        Self {
            name,
            icon_name,
            class_name: None,
        }
    }

    /// Badge with a styling override.
    pub const fn with_class(
        name: &'static str,
        icon_name: &'static str,
        class_name: &'static str,
    ) -> Self {
        Self {
            name,
            icon_name,
            class_name: Some(class_name),
        }
    }
}

impl std::fmt::Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
