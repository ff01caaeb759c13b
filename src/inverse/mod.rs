//----------------------------------------
// inverse mod
//----------------------------------------
//! Solving the power function the other way round: power at a fixed
//! sample size, and the smallest effect a fixed sample size can detect.
pub mod achieved_power;
pub mod mdes;
pub mod types;
