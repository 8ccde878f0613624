// src/constants.rs

pub const BOT_NAME_PREFIX: &str = "New Bot";       // Followed by the 1-based creation number
pub const SEED_ELECTRONICS_ID: &str = "e1";        // Row every new bot starts with
pub const SEED_MECHANICAL_ID: &str = "m1";
pub const ELECTRONICS_ID_PREFIX: &str = "e";
pub const MECHANICAL_ID_PREFIX: &str = "m";
pub const SEQUENTIAL_BOT_ID_PREFIX: &str = "bot-";

pub const WEIGHT_UNIT: &str = "kg";
pub const WEIGHT_DECIMALS: usize = 2;              // Total weight shown as "8.00 kg"
pub const PERCENTAGE_DECIMALS: usize = 1;          // Material shares shown as "37.5%"

pub const DEFAULT_LOG_FILTER: &str = "info";
