// src/repositories/ids.rs

use uuid::Uuid;

use crate::constants::SEQUENTIAL_BOT_ID_PREFIX;
use crate::models::BotId;

/// Source of fresh bot ids, injected into
/// [`BotStore::create_bot`](super::bot_store::BotStore::create_bot).
///
/// `create_bot` draws again whenever an id is already taken in the store, so an
/// implementation must eventually yield an unused id. One that keeps returning
/// taken ids makes `create_bot` spin forever.
pub trait IdGenerator {
	fn next_id(&mut self) -> BotId;
}

/// Deterministic counter: `bot-1`, `bot-2`, ...
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
	issued: u64,
}

impl SequentialIds {
	pub fn new() -> Self {
		Self::default()
	}
}

impl IdGenerator for SequentialIds {
	fn next_id(&mut self) -> BotId {
		self.issued += 1;
		BotId::new(format!("{}{}", SEQUENTIAL_BOT_ID_PREFIX, self.issued))
	}
}

/// Time-sortable UUID v7 ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
	fn next_id(&mut self) -> BotId {
		BotId::new(Uuid::now_v7().to_string())
	}
}
