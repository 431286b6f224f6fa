//! Financial Planner
//!
//! The planner wizard's fixed step sequence with a bounded cursor, and the
//! deterministic risk-profile scoring behind the planner results.

pub mod risk;
pub mod steps;

pub use risk::{risk_profile, PlannerInputs, RiskLevel, RiskProfile};
pub use steps::{StepCursor, WizardStep, WIZARD_STEPS};
