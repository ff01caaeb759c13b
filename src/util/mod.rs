//----------------------------------------
// util mod
//----------------------------------------
pub mod error;
pub mod root_find;
