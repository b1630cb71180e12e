//! # Mesh Operations
//!
//! Surface generation from curves: profile sweeps and ring extrusion.

pub mod ring;
pub mod sweep;

pub use ring::{extrude_ring, RingParams};
pub use sweep::sweep_profile;
