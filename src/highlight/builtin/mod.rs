//! Built-in dialect rule sets
//!
//! One constructor per dialect. The registration order inside each
//! constructor is the application order and is part of the contract.

mod schema;
mod script;

pub use schema::schema_rules;
pub use script::script_rules;
