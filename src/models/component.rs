// src/models/component.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{ELECTRONICS_ID_PREFIX, MECHANICAL_ID_PREFIX};
use crate::errors::{WorkbenchError, WorkbenchResult};

/// Which of a bot's two component tables an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Electronics,
    Mechanical,
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListKind::Electronics => write!(f, "electronics"),
            ListKind::Mechanical => write!(f, "mechanical"),
        }
    }
}

impl FromStr for ListKind {
    type Err = WorkbenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "electronics" => Ok(ListKind::Electronics),
            "mechanical" => Ok(ListKind::Mechanical),
            other => Err(WorkbenchError::UnknownListKind(other.to_string())),
        }
    }
}

/// An editable column of a component table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemField {
    Name,
    Link,
    Qty,
    Comments,
    Material,
    Weight,
}

impl ItemField {
    /// Whether items of `kind` carry this field.
    pub fn applies_to(self, kind: ListKind) -> bool {
        match (self, kind) {
            (ItemField::Name | ItemField::Qty, _) => true,
            (ItemField::Link | ItemField::Comments, ListKind::Electronics) => true,
            (ItemField::Material | ItemField::Weight, ListKind::Mechanical) => true,
            _ => false,
        }
    }

    pub fn ensure_in(self, kind: ListKind) -> WorkbenchResult<Self> {
        if self.applies_to(kind) {
            Ok(self)
        } else {
            Err(WorkbenchError::FieldNotInList { field: self, kind })
        }
    }
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ItemField::Name => "name",
            ItemField::Link => "link",
            ItemField::Qty => "qty",
            ItemField::Comments => "comments",
            ItemField::Material => "material",
            ItemField::Weight => "weight",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ItemField {
    type Err = WorkbenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(ItemField::Name),
            "link" => Ok(ItemField::Link),
            "qty" => Ok(ItemField::Qty),
            "comments" => Ok(ItemField::Comments),
            "material" => Ok(ItemField::Material),
            "weight" => Ok(ItemField::Weight),
            other => Err(WorkbenchError::UnknownField(other.to_string())),
        }
    }
}

/// A row of the electronics table. Quantities are kept as typed text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElectronicsItem {
    pub id: String,
    pub name: String,
    pub link: String,
    pub qty: String,
    pub comments: String,
}

/// A row of the mechanical table. `qty` and `weight` (per unit, kg) are raw
/// text and only interpreted by the aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MechanicalItem {
    pub id: String,
    pub name: String,
    pub material: String,
    pub qty: String,
    pub weight: String,
}

/// Behaviour shared by the rows of both tables, so the store can edit either
/// list with the same code.
pub trait Component: Clone {
    const ID_PREFIX: &'static str;

    /// A row with the given id and every other field empty.
    fn empty(id: String) -> Self;

    fn id(&self) -> &str;

    /// Replaces `field`. Returns false when this kind of row has no such field.
    fn set_field(&mut self, field: ItemField, value: String) -> bool;
}

impl Component for ElectronicsItem {
    const ID_PREFIX: &'static str = ELECTRONICS_ID_PREFIX;

    fn empty(id: String) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn set_field(&mut self, field: ItemField, value: String) -> bool {
        let slot = match field {
            ItemField::Name => &mut self.name,
            ItemField::Link => &mut self.link,
            ItemField::Qty => &mut self.qty,
            ItemField::Comments => &mut self.comments,
            ItemField::Material | ItemField::Weight => return false,
        };
        *slot = value;
        true
    }
}

impl Component for MechanicalItem {
    const ID_PREFIX: &'static str = MECHANICAL_ID_PREFIX;

    fn empty(id: String) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn set_field(&mut self, field: ItemField, value: String) -> bool {
        let slot = match field {
            ItemField::Name => &mut self.name,
            ItemField::Material => &mut self.material,
            ItemField::Qty => &mut self.qty,
            ItemField::Weight => &mut self.weight,
            ItemField::Link | ItemField::Comments => return false,
        };
        *slot = value;
        true
    }
}
