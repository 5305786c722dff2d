//! DNS Provider implementations

#[cfg(feature = "route53")]
mod route53;

#[cfg(feature = "route53")]
pub use route53::Route53Provider;
