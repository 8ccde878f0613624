pub mod bot;
pub mod component;

pub use bot::{Bot, BotId, BotList};
pub use component::{Component, ElectronicsItem, ItemField, ListKind, MechanicalItem};
