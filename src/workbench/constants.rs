pub const APP_TITLE: &str = "Combat Robot Build Tracker";
pub const NO_SELECTION_PROMPT: &str = "Select a bot from the left or add a new one to get started!";
pub const NO_ELECTRONICS_TEXT: &str = "No electronics components added yet.";
pub const NO_CHART_DATA_TEXT: &str = "No data for chart";
