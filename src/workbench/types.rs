use std::fmt;
use std::str::FromStr;

use crate::errors::{WorkbenchError, WorkbenchResult};
use crate::models::{BotId, ItemField, ListKind};

/// Which table of the selected bot is on screen.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum View {
    #[default]
    Electronics,
    Mechanical,
}

impl View {
    pub fn list_kind(self) -> ListKind {
        match self {
            View::Electronics => ListKind::Electronics,
            View::Mechanical => ListKind::Mechanical,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Electronics => write!(f, "Electronics Components"),
            View::Mechanical => write!(f, "Mechanical Components"),
        }
    }
}

impl FromStr for View {
    type Err = WorkbenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "electronics" => Ok(View::Electronics),
            "mechanical" => Ok(View::Mechanical),
            other => Err(WorkbenchError::UnknownView(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Sidebar
    AddBotClicked,
    BotSelected(BotId),
    ClearSelection,
    EditBotNameClicked(BotId),
    BotNameChanged(BotId, String),
    BotNameSubmitted,

    // View switcher
    ViewSelected(View),

    // Table editing, applied to the selected bot
    CellChanged {
        kind: ListKind,
        item_id: String,
        field: ItemField,
        value: String,
    },
    AddRowClicked(ListKind),
    // Enter pressed inside a table input
    RowSubmitted(ListKind),
    DeleteRowClicked {
        kind: ListKind,
        item_id: String,
    },
    ClearRowsClicked(ListKind),
}

impl Message {
    /// Builds a [`Message::CellChanged`] from the column and table names a view
    /// layer reports, rejecting names that do not belong together.
    pub fn cell_changed(
        kind: &str,
        item_id: impl Into<String>,
        field: &str,
        value: impl Into<String>,
    ) -> WorkbenchResult<Self> {
        let kind: ListKind = kind.parse()?;
        let field = field.parse::<ItemField>()?.ensure_in(kind)?;
        Ok(Message::CellChanged {
            kind,
            item_id: item_id.into(),
            field,
            value: value.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_changed_from_names() {
        let message = Message::cell_changed("mechanical", "m1", "weight", "2.5").unwrap();
        assert_eq!(
            message,
            Message::CellChanged {
                kind: ListKind::Mechanical,
                item_id: "m1".to_string(),
                field: ItemField::Weight,
                value: "2.5".to_string(),
            }
        );
    }

    #[test]
    fn test_cell_changed_rejects_bad_names() {
        assert_eq!(
            Message::cell_changed("electronics", "e1", "material", "Steel"),
            Err(WorkbenchError::FieldNotInList {
                field: ItemField::Material,
                kind: ListKind::Electronics,
            })
        );
        assert_eq!(
            Message::cell_changed("pneumatics", "p1", "name", "x"),
            Err(WorkbenchError::UnknownListKind("pneumatics".to_string()))
        );
        assert!(matches!(
            Message::cell_changed("electronics", "e1", "voltage", "12"),
            Err(WorkbenchError::UnknownField(_))
        ));
    }

    #[test]
    fn test_view_names() {
        assert_eq!("mechanical".parse::<View>(), Ok(View::Mechanical));
        assert_eq!(View::default(), View::Electronics);
        assert_eq!(View::Mechanical.list_kind(), ListKind::Mechanical);
        assert_eq!(
            "chart".parse::<View>(),
            Err(WorkbenchError::UnknownView("chart".to_string()))
        );
    }
}
