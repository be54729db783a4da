//! Bit-string coders.

use crate::core::Coder;
use crate::error::ConfigError;
use rand::{Rng, RngCore};

/// Fixed-length bit strings; the genome is the phenome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryCoder {
    genome_size: usize,
}

impl BinaryCoder {
    /// Creates a coder for genomes of `genome_size` bits.
    pub fn new(genome_size: usize) -> Self {
        Self { genome_size }
    }

    /// Number of bits per genome.
    pub fn genome_size(&self) -> usize {
        self.genome_size
    }
}

impl Coder for BinaryCoder {
    type Genome = Vec<bool>;
    type Phenome = Vec<bool>;

    fn create_random_genome(&self, rng: &mut dyn RngCore) -> Vec<bool> {
        (0..self.genome_size).map(|_| rng.random_bool(0.5)).collect()
    }

    fn decode_genome(&self, genome: &Vec<bool>) -> Vec<bool> {
        genome.clone()
    }

    fn copy_genome(&self, genome: &Vec<bool>) -> Vec<bool> {
        genome.to_vec()
    }
}

/// Widest field that still fits a `u64` accumulator.
const MAX_FIELD_BITS: usize = 63;

/// How a bit field is read as an unsigned integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BitOrder {
    Plain,
    Gray,
}

/// Bit strings split into fields, each mapped linearly onto a real interval.
///
/// A field of `b` bits with integer value `i` decodes to
/// `i / 2^b * (hi - lo) + lo`, so the upper bound itself is never reached.
#[derive(Debug, Clone, PartialEq)]
pub struct Binary2FloatCoder {
    bits: BinaryCoder,
    bits_per_float: Vec<usize>,
    float_bounds: Vec<(f64, f64)>,
    order: BitOrder,
}

impl Binary2FloatCoder {
    /// Creates a coder with one field per `(bits, bounds)` pair.
    ///
    /// # Errors
    /// Returns an error if the two lists differ in length, or a field has
    /// no bits or more than 63.
    pub fn new(
        bits_per_float: Vec<usize>,
        float_bounds: Vec<(f64, f64)>,
    ) -> Result<Self, ConfigError> {
        Self::with_order(bits_per_float, float_bounds, BitOrder::Plain)
    }

    fn with_order(
        bits_per_float: Vec<usize>,
        float_bounds: Vec<(f64, f64)>,
        order: BitOrder,
    ) -> Result<Self, ConfigError> {
        if bits_per_float.len() != float_bounds.len() {
            return Err(ConfigError::LengthMismatch {
                name: "float_bounds",
                expected: bits_per_float.len(),
                actual: float_bounds.len(),
            });
        }
        for &bits in &bits_per_float {
            if bits == 0 {
                return Err(ConfigError::CountTooSmall {
                    name: "bits_per_float",
                    min: 1,
                    value: bits,
                });
            }
            if bits > MAX_FIELD_BITS {
                return Err(ConfigError::CountTooLarge {
                    name: "bits_per_float",
                    max: MAX_FIELD_BITS,
                    value: bits,
                });
            }
        }
        let total = bits_per_float.iter().sum();
        Ok(Self {
            bits: BinaryCoder::new(total),
            bits_per_float,
            float_bounds,
            order,
        })
    }

    fn field_value(&self, field: &[bool]) -> u64 {
        match self.order {
            BitOrder::Plain => field
                .iter()
                .fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit)),
            BitOrder::Gray => {
                let mut value = 0u64;
                let mut prev = false;
                for &gray in field {
                    let bit = gray ^ prev;
                    value = (value << 1) | u64::from(bit);
                    prev = bit;
                }
                value
            }
        }
    }
}

impl Coder for Binary2FloatCoder {
    type Genome = Vec<bool>;
    type Phenome = Vec<f64>;

    fn create_random_genome(&self, rng: &mut dyn RngCore) -> Vec<bool> {
        self.bits.create_random_genome(rng)
    }

    fn decode_genome(&self, genome: &Vec<bool>) -> Vec<f64> {
        let mut offset = 0;
        self.bits_per_float
            .iter()
            .zip(&self.float_bounds)
            .map(|(&n_bits, &(lo, hi))| {
                let field = &genome[offset..offset + n_bits];
                offset += n_bits;
                let max_value = (1u64 << n_bits) as f64;
                (self.field_value(field) as f64 / max_value) * (hi - lo) + lo
            })
            .collect()
    }

    fn copy_genome(&self, genome: &Vec<bool>) -> Vec<bool> {
        genome.to_vec()
    }
}

/// [`Binary2FloatCoder`] whose fields are read as reflected Gray code.
#[derive(Debug, Clone, PartialEq)]
pub struct GrayBinary2FloatCoder(Binary2FloatCoder);

impl GrayBinary2FloatCoder {
    /// Creates a Gray-coded coder with one field per `(bits, bounds)` pair.
    ///
    /// # Errors
    /// Returns an error if the two lists differ in length, or a field has
    /// no bits or more than 63.
    pub fn new(
        bits_per_float: Vec<usize>,
        float_bounds: Vec<(f64, f64)>,
    ) -> Result<Self, ConfigError> {
        Binary2FloatCoder::with_order(bits_per_float, float_bounds, BitOrder::Gray).map(Self)
    }
}

impl Coder for GrayBinary2FloatCoder {
    type Genome = Vec<bool>;
    type Phenome = Vec<f64>;

    fn create_random_genome(&self, rng: &mut dyn RngCore) -> Vec<bool> {
        self.0.create_random_genome(rng)
    }

    fn decode_genome(&self, genome: &Vec<bool>) -> Vec<f64> {
        self.0.decode_genome(genome)
    }

    fn copy_genome(&self, genome: &Vec<bool>) -> Vec<bool> {
        genome.to_vec()
    }
}
