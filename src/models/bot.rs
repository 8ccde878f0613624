// src/models/bot.rs

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::component::{Component, ElectronicsItem, ListKind, MechanicalItem};
use crate::constants::{BOT_NAME_PREFIX, SEED_ELECTRONICS_ID, SEED_MECHANICAL_ID};

/// Opaque bot identifier handed out by an [`IdGenerator`](crate::repositories::ids::IdGenerator).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BotId(String);

impl BotId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A robot build record. Rows are shared behind `Arc` so a new snapshot
/// reuses every row it did not touch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bot {
    pub id: BotId,
    pub name: String,
    pub electronics: Vec<Arc<ElectronicsItem>>,
    pub mechanical: Vec<Arc<MechanicalItem>>,
}

impl Bot {
    /// A freshly created bot: numbered default name and one empty row per table.
    pub fn seeded(id: BotId, number: usize) -> Self {
        Self {
            id,
            name: format!("{} {}", BOT_NAME_PREFIX, number),
            electronics: vec![Arc::new(ElectronicsItem::empty(SEED_ELECTRONICS_ID.to_string()))],
            mechanical: vec![Arc::new(MechanicalItem::empty(SEED_MECHANICAL_ID.to_string()))],
        }
    }

    pub fn items_len(&self, kind: ListKind) -> usize {
        match kind {
            ListKind::Electronics => self.electronics.len(),
            ListKind::Mechanical => self.mechanical.len(),
        }
    }

    pub fn mechanical_items(&self) -> impl Iterator<Item = &MechanicalItem> + '_ {
        self.mechanical.iter().map(Arc::as_ref)
    }

    pub fn electronics_items(&self) -> impl Iterator<Item = &ElectronicsItem> + '_ {
        self.electronics.iter().map(Arc::as_ref)
    }
}

/// Ties a row type to the list it lives in on a [`Bot`].
pub trait BotList: Component {
    fn list(bot: &Bot) -> &[Arc<Self>];

    /// A copy of `bot` whose list of this kind is `items`; the other list is shared.
    fn with_list(bot: &Bot, items: Vec<Arc<Self>>) -> Bot;
}

impl BotList for ElectronicsItem {
    fn list(bot: &Bot) -> &[Arc<Self>] {
        &bot.electronics
    }

    fn with_list(bot: &Bot, items: Vec<Arc<Self>>) -> Bot {
        Bot {
            id: bot.id.clone(),
            name: bot.name.clone(),
            electronics: items,
            mechanical: bot.mechanical.clone(),
        }
    }
}

impl BotList for MechanicalItem {
    fn list(bot: &Bot) -> &[Arc<Self>] {
        &bot.mechanical
    }

    fn with_list(bot: &Bot, items: Vec<Arc<Self>>) -> Bot {
        Bot {
            id: bot.id.clone(),
            name: bot.name.clone(),
            electronics: bot.electronics.clone(),
            mechanical: items,
        }
    }
}
