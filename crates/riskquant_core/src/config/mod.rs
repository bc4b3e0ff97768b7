//! Scenario Builder
//!
//! Fluent API for assembling risk scenarios with named factors and
//! validation at build time.
//!
//! # Example
//!
//! ```ignore
//! use riskquant_core::config::ScenarioBuilder;
//!
//! let scenario = ScenarioBuilder::new("Ransomware outage")
//!     .category("Cyber")
//!     .likelihood_uniform(2.0, 4.0)
//!     .impact_uniform(4.0, 5.0)
//!     .financial_base(500_000.0)
//!     .default_multiplier()
//!     .build()?;
//! ```

mod builder;

pub use builder::ScenarioBuilder;
