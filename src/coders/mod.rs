//! Stock genome representations.
//!
//! - [`BinaryCoder`]: fixed-length bit strings, decoded as-is
//! - [`Binary2FloatCoder`] / [`GrayBinary2FloatCoder`]: bit fields mapped
//!   onto real intervals (plain binary or reflected Gray code)
//! - [`FloatCoder`]: fixed-length real vectors, decoded as-is
//! - [`AdaptiveFloatCoder`]: real vectors whose genes carry their own
//!   mutation step size, for [`AdaptiveMutation`](crate::variation::AdaptiveMutation)
//!
//! Flat coders override [`Coder::copy_genome`](crate::core::Coder::copy_genome)
//! with a plain vector copy.

mod binary;
mod float;

pub use binary::{Binary2FloatCoder, BinaryCoder, GrayBinary2FloatCoder};
pub use float::{AdaptiveFloatCoder, AdaptiveGene, FloatCoder};
