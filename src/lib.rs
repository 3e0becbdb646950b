//! Bhoomi Units - Indian Land-Area Conversion
//!
//! Converts land-area quantities between standard and regional Indian
//! units, with conversion factors that vary by state. Every conversion
//! passes through square feet as the common base unit.
//!
//! Units:
//! - Standard (global factor): sqft, sqm, sqyd, acre, hectare, cent,
//!   guntha, gaj, ankanam, lecha, kanal, marla
//! - Regional (state-dependent): bigha, pucca_bigha, kachha_bigha,
//!   katha, biswa, vigha
//!
//! Regional units have no universal size, so the engine requires an
//! explicit state for every conversion and resolves each unit's factor
//! as state override first, global catalog second. Failures come back
//! as classified [`ConversionError`] values, never panics.

mod convert;
mod format;
mod region;
mod unit;

pub use convert::{
    convert, convert_text, parse_quantity, resolve_factor, ConversionError, ConversionRequest,
};
pub use format::{convert_display, format_quantity, Conversion};
pub use region::{is_known_region, is_placeholder, overrides_for, REGIONS, UNSELECTED};
pub use unit::{Unit, UnitCatalog, UNITS};
