//! Space-group-level reference data: the asymmetric units of the 230 space
//! groups.

pub mod asymmetric_unit;
