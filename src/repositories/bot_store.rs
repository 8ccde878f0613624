// src/repositories/bot_store.rs

use std::sync::Arc;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::ids::IdGenerator;
use crate::models::{Bot, BotId, BotList, ElectronicsItem, ItemField, ListKind, MechanicalItem};

/// Immutable snapshot of every bot in the session.
///
/// Every operation returns a new snapshot and leaves `self` untouched. Bots and
/// rows that an operation does not touch are shared with the previous snapshot,
/// and an operation naming an unknown bot or row returns an equal snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BotStore {
	bots: Vec<Arc<Bot>>,
}

impl BotStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn bots(&self) -> &[Arc<Bot>] {
		&self.bots
	}

	pub fn bot(&self, bot_id: &BotId) -> Option<&Bot> {
		self.bots.iter().find(|bot| &bot.id == bot_id).map(Arc::as_ref)
	}

	pub fn len(&self) -> usize {
		self.bots.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bots.is_empty()
	}

	/// Appends a seeded bot named after its position and returns its id.
	pub fn create_bot<G: IdGenerator + ?Sized>(&self, ids: &mut G) -> (Self, BotId) {
		let mut bot_id = ids.next_id();
		while self.bot(&bot_id).is_some() {
			warn!("Id generator repeated bot id {}, drawing another", bot_id);
			bot_id = ids.next_id();
		}

		let bot = Bot::seeded(bot_id.clone(), self.bots.len() + 1);
		debug!("Created bot {} as '{}'", bot_id, bot.name);

		let mut bots = self.bots.clone();
		bots.push(Arc::new(bot));
		(Self { bots }, bot_id)
	}

	/// Any string is accepted, including the empty one.
	pub fn rename_bot(&self, bot_id: &BotId, name: impl Into<String>) -> Self {
		let name = name.into();
		self.update_bot(bot_id, "rename_bot", |bot| {
			Some(Bot {
				id: bot.id.clone(),
				name,
				electronics: bot.electronics.clone(),
				mechanical: bot.mechanical.clone(),
			})
		})
	}

	/// Stores `value` verbatim; numeric columns are not validated here.
	pub fn set_item_field(
		&self,
		bot_id: &BotId,
		kind: ListKind,
		item_id: &str,
		field: ItemField,
		value: impl Into<String>,
	) -> Self {
		let value = value.into();
		self.update_bot(bot_id, "set_item_field", |bot| match kind {
			ListKind::Electronics => set_field_in::<ElectronicsItem>(bot, item_id, field, value),
			ListKind::Mechanical => set_field_in::<MechanicalItem>(bot, item_id, field, value),
		})
	}

	pub fn add_item(&self, bot_id: &BotId, kind: ListKind) -> Self {
		self.update_bot(bot_id, "add_item", |bot| match kind {
			ListKind::Electronics => Some(add_to::<ElectronicsItem>(bot)),
			ListKind::Mechanical => Some(add_to::<MechanicalItem>(bot)),
		})
	}

	pub fn delete_item(&self, bot_id: &BotId, kind: ListKind, item_id: &str) -> Self {
		self.update_bot(bot_id, "delete_item", |bot| match kind {
			ListKind::Electronics => delete_from::<ElectronicsItem>(bot, item_id),
			ListKind::Mechanical => delete_from::<MechanicalItem>(bot, item_id),
		})
	}

	pub fn clear_list(&self, bot_id: &BotId, kind: ListKind) -> Self {
		self.update_bot(bot_id, "clear_list", |bot| match kind {
			ListKind::Electronics => Some(ElectronicsItem::with_list(bot, Vec::new())),
			ListKind::Mechanical => Some(MechanicalItem::with_list(bot, Vec::new())),
		})
	}

	/// Swaps in the bot returned by `edit`; `None` from `edit` keeps the snapshot.
	fn update_bot(
		&self,
		bot_id: &BotId,
		operation: &str,
		edit: impl FnOnce(&Bot) -> Option<Bot>,
	) -> Self {
		let Some(pos) = self.bots.iter().position(|bot| &bot.id == bot_id) else {
			debug!("{}: no bot with id {}, snapshot unchanged", operation, bot_id);
			return self.clone();
		};

		match edit(&self.bots[pos]) {
			Some(bot) => {
				let mut bots = self.bots.clone();
				bots[pos] = Arc::new(bot);
				Self { bots }
			}
			None => {
				debug!("{}: nothing to change on bot {}", operation, bot_id);
				self.clone()
			}
		}
	}
}

fn set_field_in<T: BotList>(
	bot: &Bot,
	item_id: &str,
	field: ItemField,
	value: String,
) -> Option<Bot> {
	let items = T::list(bot);
	let pos = items.iter().position(|item| item.id() == item_id)?;

	let mut item = (*items[pos]).clone();
	if !item.set_field(field, value) {
		return None;
	}

	let mut next = items.to_vec();
	next[pos] = Arc::new(item);
	Some(T::with_list(bot, next))
}

fn add_to<T: BotList>(bot: &Bot) -> Bot {
	let items = T::list(bot);
	let mut next = items.to_vec();
	next.push(Arc::new(T::empty(fresh_item_id(items))));
	T::with_list(bot, next)
}

fn delete_from<T: BotList>(bot: &Bot, item_id: &str) -> Option<Bot> {
	let items = T::list(bot);
	if !items.iter().any(|item| item.id() == item_id) {
		return None;
	}

	let next = items
		.iter()
		.filter(|item| item.id() != item_id)
		.cloned()
		.collect();
	Some(T::with_list(bot, next))
}

/// `<prefix><n>` with `n` counting up from `len + 1` until unused in `items`.
fn fresh_item_id<T: BotList>(items: &[Arc<T>]) -> String {
	let mut n = items.len() + 1;
	loop {
		let candidate = format!("{}{}", T::ID_PREFIX, n);
		if !items.iter().any(|item| item.id() == candidate) {
			return candidate;
		}
		n += 1;
	}
}
