//! Unique identifiers for engine entities

use serde::{Deserialize, Serialize};

/// Unique identifier for a risk scenario within a register
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ScenarioId(pub u32);
