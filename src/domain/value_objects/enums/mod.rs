pub mod operators;
pub mod plan_types;
