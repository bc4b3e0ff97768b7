mod factor;
mod ids;
mod results;
mod scenario;

pub use factor::{Distribution, RiskFactor, WEIGHT_SUM_TOLERANCE, factor_names};
pub use ids::ScenarioId;
pub use results::{LevelCounts, REPORTED_PERCENTILES, SimulationResult, TrialBatch};
pub use scenario::RiskScenario;
