//! unitref Units - Unit catalog and conversion arithmetic
//!
//! Every category converts through a private base unit. Units carry their
//! mapping as plain `Transform` data.
//!
//! Categories:
//! - Length (m, km, cm, mi, ft, in, ly, etc.)
//! - Temperature (°C, °F, K, °R)
//! - Area (m², km², ha, ac, etc.)
//! - Volume (L, mL, m³, gal, cup, tsp, etc.)
//! - Weight (kg, g, lb, oz, st, etc.)
//! - Time (s, ms, min, h, d, yr, etc.)
//! - Speed (m/s, km/h, mph, kn, Ma, c)
//! - Energy (J, kJ, cal, kWh, eV, BTU, etc.)
//! - Power (W, kW, MW, hp, BTU/h, etc.)
//! - Pressure (Pa, kPa, bar, psi, atm, Torr, mmHg)
//! - Force (N, kN, dyn, lbf, kgf)
//! - Data (b, B, KB, MB, KiB, MiB, etc.)
//! - Angle (°, rad, gon, rev, etc.)
//! - Fuel (km/L, mpg, L/100km)

mod category;
mod common;
mod convert;
mod format;
mod transform;
mod unit;
mod units;

pub use category::{CategoryId, CategoryInfo, Group, UnknownCategory};
pub use common::CommonConversion;
pub use convert::{convert, conversion_factor, generate_conversion_table, TableRow, TABLE_INPUTS};
pub use format::format_number;
pub use transform::Transform;
pub use unit::Unit;
pub use units::{Catalog, CATALOG};
