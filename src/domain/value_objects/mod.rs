pub mod enums;
pub mod plans;
