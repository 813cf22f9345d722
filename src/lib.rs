//! Retirement outlook engine: present values of savings and pension, a weighted
//! portfolio profile, expected and adverse retirement income and the probability of
//! the adverse case, plus the site's time-value calculators.

pub mod api;
pub mod core;
