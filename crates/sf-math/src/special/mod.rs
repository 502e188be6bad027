//! Special-function backends.

pub mod beta;
pub mod erf;
pub mod gamma;
pub mod hypergeometric;
pub mod owens_t;
pub mod powm1;

pub use beta::{beta_density, ibeta, ibeta_derivative, ibeta_inv, ibeta_inva, ibeta_invb, ibeta_pair, ibetac, ibetac_inv};
pub use erf::{erf_inv, normal_cdf, normal_ln_sf, normal_pdf, normal_sf};
pub use gamma::{gamma_p, gamma_q, ln_gamma_signed};
pub use hypergeometric::{hyp1f1, hyp_pfq};
pub use owens_t::owens_t;
pub use powm1::powm1;
