//!
//! A loading engine for cylindrical pipe stock.
//!
//! Smaller pipes are telescoped into the bore of larger ones (Matryoshka nesting),
//! the resulting bundles are packed onto trucks and each truck is checked against
//! payload and axle-load regulations.
//!

/// Everything related to the gap clearance required to insert one pipe into another
pub mod clearance;

/// Entities to model pipe loading problems
pub mod entities;

/// Recursive telescoping of pipes into bundles
pub mod nesting;

/// Geometric formulas and circle packing of pipe cross-sections
pub mod geometry;

/// Assignment of bundles to trucks
pub mod packing;

/// Center of gravity and axle load compliance
pub mod compliance;

/// Importing orders and exporting results
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
