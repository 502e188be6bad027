//! Distribution kernels.
//!
//! One parameter struct per family. Constructors reject parameters outside
//! the family's support with [`Signal::Domain`](sf_core::Signal::Domain);
//! evaluation methods return
//! [`BackendResult`](sf_core::operation::BackendResult) and never report.
//! Moments are plain values and are only meaningful where the facade's
//! existence thresholds allow them.

pub mod beta;
pub mod binomial;
pub mod cauchy;
pub mod fisher_f;
pub mod hypergeometric;
pub mod inverse_gaussian;
pub mod landau;
pub mod moments;
pub mod negative_binomial;
pub mod non_central_chi_squared;
pub mod non_central_f;
pub mod non_central_t;
pub mod poisson_mixture;
pub mod quantile;
pub mod skew_normal;

pub use beta::BetaDistribution;
pub use binomial::BinomialDistribution;
pub use cauchy::CauchyDistribution;
pub use fisher_f::FisherFDistribution;
pub use hypergeometric::HypergeometricDistribution;
pub use inverse_gaussian::InverseGaussianDistribution;
pub use landau::LandauDistribution;
pub use negative_binomial::NegativeBinomialDistribution;
pub use non_central_chi_squared::NonCentralChiSquaredDistribution;
pub use non_central_f::NonCentralFDistribution;
pub use non_central_t::NonCentralTDistribution;
pub use quantile::{Tail, Target};
pub use skew_normal::SkewNormalDistribution;
