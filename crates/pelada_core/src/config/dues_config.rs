use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Calendar months (1-12) that carry a monthly fee.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DuesConfig {
    pub first_billed_month: u32,
    pub last_billed_month: u32,
}

impl Default for DuesConfig {
    fn default() -> Self {
        Self {
            first_billed_month: 3,
            last_billed_month: 12,
        }
    }
}
