//----------------------------------------
// distribution mod
//----------------------------------------
pub mod central;
pub mod error;
pub mod noncentral_chi_sq;
pub mod noncentral_f;
pub mod noncentral_t;
mod poisson_mixture;
pub mod std_normal;
