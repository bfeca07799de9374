//! Presentation adapter: turns valuation outputs into things people look at.
//!
//! Nothing in here feeds back into pricing; the core never depends on it.

#[cfg(feature = "plot")]
pub mod chart;
pub mod format;

#[cfg(feature = "plot")]
pub use chart::{render_svg, ChartStyle};
pub use format::ResultLabels;
