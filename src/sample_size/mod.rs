//----------------------------------------
// sample_size mod
//----------------------------------------
pub mod compute_ss;
pub mod seed;
pub mod types;
