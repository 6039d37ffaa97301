use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct BotConfig {
    /// Fixed seed for reproducible bot play; a fresh one is drawn when unset.
    pub seed: Option<u64>,
}

impl Validate for BotConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
