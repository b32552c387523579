//! # xtalsym: crystallographic symmetry analysis
//!
//! `xtalsym` determines the symmetry of a periodic atomic structure from its
//! unit cell:
//! - enumeration of the integer rotations that leave the lattice metric
//!   invariant (the holohedral point group of the lattice),
//! - classification of a rotation set against the 32 crystallographic point
//!   groups (Hermann–Mauguin and Schoenflies symbols, Laue class, holohedry,
//!   centrosymmetry, chirality),
//! - construction of a canonical coordinate basis and determination and
//!   correction of the centering type, and
//! - membership tests of fractional coordinates against the asymmetric units
//!   of the 230 space groups.
//!
//! All computations are pure functions of their inputs and work on immutable
//! value types; the only process-wide state consists of read-only reference
//! tables (rotation-axis catalog, two-fold operation table, point-group
//! records) initialized once before first use.
//!
//! Cell reduction (Delaunay/primitive), space-group operation solving, and
//! structure parsing are external collaborators: this crate consumes a
//! (reduced) cell matrix and exposes the classification results they need.

pub mod auxiliary;
pub mod drivers;
pub mod io;
pub mod spacegroup;
pub mod symmetry;
