//! Byte encoding: a bijection between the 256 byte values and small multiples
//! of the generator.

use crate::{Curve, Error, Point, Result};
use std::collections::HashMap;

/// Internal constant for the number of entries in a [`CodeTable`].
const TABLE_SIZE: usize = 256;

/// Lookup table mapping each byte to a distinct non-identity point `k·G`.
///
/// Bytes are assigned in signed order: `0x80` (-128) gets `1·G`, `0x81` gets
/// `2·G`, and so on up to `0x7f` (127), which gets `256·G`. The generator's
/// order must therefore exceed 256.
#[derive(Clone, Debug)]
pub struct CodeTable {
    /// `points[i]` is `(i + 1)·G`, the encoding of byte `i - 128`.
    points: Vec<Point>,

    /// Inverse of `points`.
    bytes: HashMap<Point, u8>,
}

impl CodeTable {
    /// Compute the table for the given curve's generator.
    pub fn new(curve: &Curve) -> Result<Self> {
        let generator = curve.generator();
        let mut points = Vec::with_capacity(TABLE_SIZE);
        let mut bytes = HashMap::with_capacity(TABLE_SIZE);

        // offset 0 is always the identity, so scanning starts at 1·G
        let mut multiple = generator.clone();

        while points.len() < TABLE_SIZE {
            if multiple.is_infinity() {
                log::debug!(
                    "generator order {} leaves no room for {TABLE_SIZE} byte encodings",
                    points.len() + 1
                );
                return Err(Error::SubgroupTooSmall);
            }

            bytes.insert(multiple.clone(), byte_for_slot(points.len()));
            let next = curve.add(&multiple, generator);
            points.push(multiple);
            multiple = next;
        }

        log::debug!("built byte encoding table for generator {generator}");
        Ok(Self { points, bytes })
    }

    /// Returns the point encoding `byte`.
    pub fn point(&self, byte: u8) -> &Point {
        &self.points[slot_for_byte(byte)]
    }

    /// Returns the byte encoded by `point`, if any.
    pub fn byte(&self, point: &Point) -> Option<u8> {
        self.bytes.get(point).copied()
    }

    /// Iterate over `(byte, point)` pairs in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Point)> {
        self.points
            .iter()
            .enumerate()
            .map(|(slot, point)| (byte_for_slot(slot), point))
    }
}

/// Position of `byte` in the table when bytes are read as signed integers.
fn slot_for_byte(byte: u8) -> usize {
    usize::from(byte.wrapping_add(128))
}

fn byte_for_slot(slot: usize) -> u8 {
    (slot as u8).wrapping_add(128)
}

impl Curve {
    /// Returns the byte encoding table, building it on first use.
    pub fn code_table(&self) -> Result<&CodeTable> {
        self.code_table.get_or_try_init(|| CodeTable::new(self))
    }

    /// Map a byte to its point on the curve.
    pub fn encode(&self, byte: u8) -> Result<Point> {
        Ok(self.code_table()?.point(byte).clone())
    }

    /// Map a point back to the byte it encodes.
    ///
    /// Fails with [`Error::UnmappableByte`] for any point outside the table,
    /// which indicates a corrupted ciphertext or mismatched key.
    pub fn decode(&self, point: &Point) -> Result<u8> {
        self.code_table()?
            .byte(point)
            .ok_or(Error::UnmappableByte)
    }
}
