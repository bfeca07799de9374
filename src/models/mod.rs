//! Option pricing models.
//!
//! Only the closed-form Black-Scholes model lives here. It is a leaf: it knows
//! nothing about validation, configuration or presentation.

pub mod bs;
