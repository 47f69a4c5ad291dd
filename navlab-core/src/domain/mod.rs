//! Domain types for NavLab

pub mod nav;
pub mod period;
pub mod raw;
pub mod scheme;

pub use nav::{NavPoint, NavSeries};
pub use period::Period;
pub use raw::{parse_nav_date, RawNav, RawNavRecord};
pub use scheme::SchemeMeta;

/// Scheme identifier type alias
pub type SchemeCode = String;
