//----------------------------------------
// analysis mod
//----------------------------------------
pub mod design;
pub mod error;
pub mod parameters;
pub mod types;
