use crate::metrics::{aggregate, MechanicalSummary};
use crate::models::{Bot, BotId, ListKind};
use crate::repositories::bot_store::BotStore;
use super::constants::{NO_CHART_DATA_TEXT, NO_ELECTRONICS_TEXT, NO_SELECTION_PROMPT};
use super::types::View;

#[derive(Debug, Clone, Default)]
pub struct WorkbenchState {
    // Current snapshot; replaced wholesale on every edit
    pub store: BotStore,

    // Presentation state
    pub selected_bot: Option<BotId>,
    pub view: View,
    pub editing_bot: Option<BotId>,
}

impl WorkbenchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected bot, if the selection still names a bot in the snapshot.
    pub fn selected_bot(&self) -> Option<&Bot> {
        self.selected_bot.as_ref().and_then(|id| self.store.bot(id))
    }

    /// Metrics of the selected bot's mechanical table, computed on every call.
    pub fn mechanical_summary(&self) -> Option<MechanicalSummary> {
        self.selected_bot().map(|bot| aggregate(bot.mechanical_items()))
    }

    /// Text shown in place of empty content on the current screen.
    pub fn placeholder(&self) -> Option<&'static str> {
        let Some(bot) = self.selected_bot() else {
            return Some(NO_SELECTION_PROMPT);
        };
        let kind = self.view.list_kind();
        match kind {
            ListKind::Electronics if bot.items_len(kind) == 0 => Some(NO_ELECTRONICS_TEXT),
            ListKind::Mechanical if aggregate(bot.mechanical_items()).by_material.is_empty() => {
                Some(NO_CHART_DATA_TEXT)
            }
            _ => None,
        }
    }

    pub fn is_editing(&self, bot_id: &BotId) -> bool {
        self.editing_bot.as_ref() == Some(bot_id)
    }

    pub fn clear_selection(&mut self) {
        self.selected_bot = None;
        self.editing_bot = None;
    }
}
