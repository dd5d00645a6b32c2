pub mod plan_fixtures;
pub mod plans;
