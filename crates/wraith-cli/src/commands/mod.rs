//! CLI command implementations

pub mod check;
pub mod doctor;
pub mod dump;
pub mod get;
pub mod json_output;
pub mod reset;
pub mod set;
