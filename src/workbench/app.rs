use log::{debug, info};

use crate::models::BotId;
use crate::repositories::bot_store::BotStore;
use crate::repositories::ids::{IdGenerator, UuidIds};
use super::constants::APP_TITLE;
use super::state::WorkbenchState;
use super::types::{Message, View};

/// Headless controller behind the bot workbench screen.
///
/// A view layer renders from [`Workbench::state`] and reports user input as
/// [`Message`]s; each message installs at most one new store snapshot.
pub struct Workbench<G: IdGenerator = UuidIds> {
	state: WorkbenchState,
	ids: G,
}

impl Workbench<UuidIds> {
	pub fn new() -> Self {
		Self::with_ids(UuidIds)
	}
}

impl Default for Workbench<UuidIds> {
	fn default() -> Self {
		Self::new()
	}
}

impl<G: IdGenerator> Workbench<G> {
	pub fn with_ids(ids: G) -> Self {
		Self {
			state: WorkbenchState::new(),
			ids,
		}
	}

	pub fn state(&self) -> &WorkbenchState {
		&self.state
	}

	pub fn store(&self) -> &BotStore {
		&self.state.store
	}

	/// Window title: the selected bot and the table on screen, or just the
	/// application name.
	pub fn title(&self) -> String {
		match self.state.selected_bot() {
			Some(bot) => format!("{} - {} - {}", bot.name, self.state.view, APP_TITLE),
			None => String::from(APP_TITLE),
		}
	}

	pub fn update(&mut self, message: Message) {
		match message {
			Message::AddBotClicked => {
				let (store, bot_id) = self.state.store.create_bot(&mut self.ids);
				self.state.store = store;
				info!("Added bot {} ({} in session)", bot_id, self.state.store.len());
				self.state.selected_bot = Some(bot_id);
				self.state.view = View::Electronics;
				self.state.editing_bot = None;
			}

			Message::BotSelected(bot_id) => {
				debug!("Selected bot {}", bot_id);
				self.state.selected_bot = Some(bot_id);
				self.state.view = View::Electronics;
			}

			Message::ClearSelection => {
				self.state.clear_selection();
			}

			Message::EditBotNameClicked(bot_id) => {
				self.state.editing_bot = Some(bot_id);
			}

			Message::BotNameChanged(bot_id, name) => {
				self.state.store = self.state.store.rename_bot(&bot_id, name);
			}

			Message::BotNameSubmitted => {
				self.state.editing_bot = None;
			}

			Message::ViewSelected(view) => {
				self.state.view = view;
			}

			Message::CellChanged {
				kind,
				item_id,
				field,
				value,
			} => {
				self.edit_selected(|store, bot_id| {
					store.set_item_field(bot_id, kind, &item_id, field, value)
				});
			}

			Message::AddRowClicked(kind) | Message::RowSubmitted(kind) => {
				self.edit_selected(|store, bot_id| store.add_item(bot_id, kind));
			}

			Message::DeleteRowClicked { kind, item_id } => {
				self.edit_selected(|store, bot_id| store.delete_item(bot_id, kind, &item_id));
			}

			Message::ClearRowsClicked(kind) => {
				info!("Clearing {} rows", kind);
				self.edit_selected(|store, bot_id| store.clear_list(bot_id, kind));
			}
		}
	}

	/// Installs the snapshot `edit` derives for the selected bot.
	fn edit_selected(&mut self, edit: impl FnOnce(&BotStore, &BotId) -> BotStore) {
		match &self.state.selected_bot {
			Some(bot_id) => self.state.store = edit(&self.state.store, bot_id),
			None => debug!("Table edit ignored: no bot selected"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::models::{ItemField, ListKind};
	use crate::repositories::ids::SequentialIds;

	fn workbench() -> Workbench<SequentialIds> {
		Workbench::with_ids(SequentialIds::new())
	}

	#[test]
	fn test_add_bot_selects_it() {
		let mut app = workbench();
		app.update(Message::ViewSelected(View::Mechanical));
		app.update(Message::AddBotClicked);

		let state = app.state();
		assert_eq!(state.selected_bot, Some(BotId::new("bot-1")));
		assert_eq!(state.view, View::Electronics);
		assert_eq!(
			app.title(),
			"New Bot 1 - Electronics Components - Combat Robot Build Tracker"
		);

		app.update(Message::ViewSelected(View::Mechanical));
		assert_eq!(
			app.title(),
			"New Bot 1 - Mechanical Components - Combat Robot Build Tracker"
		);
	}

	#[test]
	fn test_edits_without_selection_are_ignored() {
		let mut app = workbench();
		app.update(Message::AddBotClicked);
		app.update(Message::ClearSelection);
		let before = app.store().clone();

		app.update(Message::AddRowClicked(ListKind::Electronics));
		app.update(Message::ClearRowsClicked(ListKind::Mechanical));

		assert_eq!(app.store(), &before);
		assert_eq!(app.title(), APP_TITLE);
		assert!(app.state().mechanical_summary().is_none());
	}

	#[test]
	fn test_rename_flow() {
		let mut app = workbench();
		app.update(Message::AddBotClicked);
		let bot_id = BotId::new("bot-1");

		app.update(Message::EditBotNameClicked(bot_id.clone()));
		assert!(app.state().is_editing(&bot_id));

		app.update(Message::BotNameChanged(bot_id.clone(), "Tombstone".to_string()));
		app.update(Message::BotNameSubmitted);

		assert!(!app.state().is_editing(&bot_id));
		assert_eq!(app.state().selected_bot().unwrap().name, "Tombstone");
	}

	#[test]
	fn test_selecting_resets_view() {
		let mut app = workbench();
		app.update(Message::AddBotClicked);
		app.update(Message::AddBotClicked);
		app.update(Message::ViewSelected(View::Mechanical));
		app.update(Message::BotSelected(BotId::new("bot-1")));

		assert_eq!(app.state().view, View::Electronics);
		assert_eq!(app.state().selected_bot().unwrap().name, "New Bot 1");

		app.update(Message::BotSelected(BotId::new("missing")));
		assert!(app.state().selected_bot().is_none());
	}

	#[test]
	fn test_mechanical_edits_feed_summary() {
		let mut app = workbench();
		app.update(Message::AddBotClicked);
		app.update(Message::ViewSelected(View::Mechanical));
		for (field, value) in [
			(ItemField::Material, "Steel"),
			(ItemField::Qty, "2"),
			(ItemField::Weight, "1.5"),
		] {
			app.update(Message::CellChanged {
				kind: ListKind::Mechanical,
				item_id: "m1".to_string(),
				field,
				value: value.to_string(),
			});
		}
		app.update(Message::RowSubmitted(ListKind::Mechanical));

		let summary = app.state().mechanical_summary().unwrap();
		assert_eq!(summary.total_weight, 3.0);
		assert_eq!(summary.material_weight("Steel"), Some(3.0));
		assert_eq!(app.state().selected_bot().unwrap().mechanical.len(), 2);

		app.update(Message::DeleteRowClicked {
			kind: ListKind::Mechanical,
			item_id: "m1".to_string(),
		});
		let summary = app.state().mechanical_summary().unwrap();
		assert_eq!(summary.total_weight, 0.0);
	}
}
