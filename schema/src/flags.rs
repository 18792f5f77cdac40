//! Property flag sets.
//!
//! Wire layout: `B - 1` one bits, a zero bit, then `7 * B` flag bits where
//! stream bit `i` is ordinal `i`. `B` is the smallest byte count covering the
//! highest set ordinal, so clearing trailing properties shrinks the encoding.

use std::fmt;

use bitstream::{BitError, BitReader, BitWriter};

use crate::error::{SchemaError, SchemaResult};
use crate::property::Property;

const WORDS: usize = 4;

/// Largest byte count a flag set may claim on the wire.
const MAX_FLAG_BYTES: usize = PropertyFlags::CAPACITY.div_ceil(7);

/// Ascending set of property ordinals.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PropertyFlags([u64; WORDS]);

impl PropertyFlags {
    /// Number of ordinals the set can hold.
    pub const CAPACITY: usize = WORDS * 64;

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self([0; WORDS])
    }

    /// Creates a set holding every defined property.
    #[must_use]
    pub fn all() -> Self {
        Property::all().collect()
    }

    /// Adds `property`.
    pub fn set(&mut self, property: Property) {
        self.set_ordinal(property.ordinal());
    }

    /// Removes `property`.
    pub fn clear(&mut self, property: Property) {
        let (word, bit) = split(property.ordinal());
        self.0[word] &= !(1 << bit);
    }

    /// Returns `true` if `property` is in the set.
    #[must_use]
    pub const fn test(&self, property: Property) -> bool {
        self.test_ordinal(property.ordinal())
    }

    /// Returns `true` if the raw ordinal is in the set.
    #[must_use]
    pub const fn test_ordinal(&self, ordinal: u16) -> bool {
        let (word, bit) = split(ordinal);
        word < WORDS && self.0[word] & (1 << bit) != 0
    }

    /// Adds or removes `property` depending on `value`.
    pub fn assign(&mut self, property: Property, value: bool) {
        if value {
            self.set(property);
        } else {
            self.clear(property);
        }
    }

    /// Returns the set of properties in either set.
    #[must_use]
    pub const fn union(&self, other: &Self) -> Self {
        let mut out = [0; WORDS];
        let mut i = 0;
        while i < WORDS {
            out[i] = self.0[i] | other.0[i];
            i += 1;
        }
        Self(out)
    }

    /// Returns the set of properties in both sets.
    #[must_use]
    pub const fn intersection(&self, other: &Self) -> Self {
        let mut out = [0; WORDS];
        let mut i = 0;
        while i < WORDS {
            out[i] = self.0[i] & other.0[i];
            i += 1;
        }
        Self(out)
    }

    /// Returns the properties in `self` but not in `other`.
    #[must_use]
    pub const fn difference(&self, other: &Self) -> Self {
        let mut out = [0; WORDS];
        let mut i = 0;
        while i < WORDS {
            out[i] = self.0[i] & !other.0[i];
            i += 1;
        }
        Self(out)
    }

    /// Returns `true` if every member of `self` is in `other`.
    #[must_use]
    pub const fn is_subset(&self, other: &Self) -> bool {
        self.difference(other).is_empty()
    }

    /// Returns `true` if no property is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        let mut i = 0;
        while i < WORDS {
            if self.0[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Number of properties in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        let mut count = 0;
        let mut i = 0;
        while i < WORDS {
            count += self.0[i].count_ones() as usize;
            i += 1;
        }
        count
    }

    /// Highest ordinal in the set.
    #[must_use]
    pub fn highest_ordinal(&self) -> Option<u16> {
        self.0.iter().enumerate().rev().find_map(|(word, bits)| {
            (*bits != 0).then(|| {
                // word < 4 and the bit index < 64, so this fits in u16
                let bit = 63 - bits.leading_zeros() as usize;
                (word * 64 + bit) as u16
            })
        })
    }

    /// Highest property in the set.
    #[must_use]
    pub fn highest(&self) -> Option<Property> {
        self.highest_ordinal().and_then(Property::from_ordinal)
    }

    /// Iterates members in ascending ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = Property> + '_ {
        (0..Self::CAPACITY)
            .filter_map(|ordinal| u16::try_from(ordinal).ok())
            .filter(|&ordinal| self.test_ordinal(ordinal))
            .filter_map(Property::from_ordinal)
    }

    /// Number of bytes [`encode`](Self::encode) produces.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        self.highest_ordinal()
            .map_or(1, |highest| (usize::from(highest) + 1).div_ceil(7))
    }

    /// Encodes the set in its minimal byte count.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        let len = self.encoded_len();
        let mut writer = BitWriter::with_capacity(len);
        writer.write_length_prefix(len);
        for ordinal in 0..7 * len {
            let set = u16::try_from(ordinal).is_ok_and(|ordinal| self.test_ordinal(ordinal));
            writer.write_bit(set);
        }
        writer.finish()
    }

    /// Decodes a set, returning it and the number of bytes consumed.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Bitstream`] if the input is truncated or the
    /// length prefix is too long, and [`SchemaError::OrdinalOutOfRange`] if
    /// a set bit names an ordinal at or above `max_ordinal`.
    pub fn decode(bytes: &[u8], max_ordinal: usize) -> SchemaResult<(Self, usize)> {
        let max_ordinal = max_ordinal.min(Self::CAPACITY);
        let mut reader = BitReader::new(bytes);
        let len = reader.read_length_prefix(MAX_FLAG_BYTES)?;
        if len > bytes.len() {
            return Err(SchemaError::Bitstream(BitError::UnexpectedEof {
                requested: len * 8,
                available: bytes.len() * 8,
            }));
        }

        let mut flags = Self::new();
        for ordinal in 0..7 * len {
            if !reader.read_bit()? {
                continue;
            }
            if ordinal >= max_ordinal {
                return Err(SchemaError::OrdinalOutOfRange {
                    ordinal,
                    max: max_ordinal,
                });
            }
            // ordinal < CAPACITY here
            flags.set_ordinal(ordinal as u16);
        }
        Ok((flags, len))
    }

    fn set_ordinal(&mut self, ordinal: u16) {
        let (word, bit) = split(ordinal);
        self.0[word] |= 1 << bit;
    }
}

const fn split(ordinal: u16) -> (usize, u32) {
    ((ordinal / 64) as usize, (ordinal % 64) as u32)
}

impl FromIterator<Property> for PropertyFlags {
    fn from_iter<I: IntoIterator<Item = Property>>(iter: I) -> Self {
        let mut flags = Self::new();
        flags.extend(iter);
        flags
    }
}

impl Extend<Property> for PropertyFlags {
    fn extend<I: IntoIterator<Item = Property>>(&mut self, iter: I) {
        for property in iter {
            self.set(property);
        }
    }
}

impl fmt::Debug for PropertyFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Property::name)).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_is_one_zero_byte() {
        let flags = PropertyFlags::new();
        assert!(flags.is_empty());
        assert_eq!(flags.encode(), vec![0x00]);
        assert_eq!(flags.encoded_len(), 1);
    }

    #[test]
    fn first_ordinal_sets_top_value_bit() {
        let flags: PropertyFlags = [Property::SimulationOwner].into_iter().collect();
        // prefix "0", then ordinal 0 as the next bit
        assert_eq!(flags.encode(), vec![0b0100_0000]);
    }

    #[test]
    fn ordinal_seven_needs_two_bytes() {
        let flags: PropertyFlags = [Property::Href].into_iter().collect();
        assert_eq!(Property::Href.ordinal(), 7);
        // prefix "10", 7 clear bits, then bit 7 set
        assert_eq!(flags.encode(), vec![0b1000_0000, 0b0100_0000]);
    }

    #[test]
    fn set_clear_test() {
        let mut flags = PropertyFlags::new();
        flags.set(Property::Color);
        flags.set(Property::Intensity);
        assert!(flags.test(Property::Color));
        assert_eq!(flags.len(), 2);
        flags.clear(Property::Color);
        assert!(!flags.test(Property::Color));
        assert_eq!(flags.highest(), Some(Property::Intensity));
    }

    #[test]
    fn set_algebra() {
        let a: PropertyFlags = [Property::Name, Property::Color].into_iter().collect();
        let b: PropertyFlags = [Property::Color, Property::Alpha].into_iter().collect();
        assert_eq!(a.union(&b).len(), 3);
        assert_eq!(
            a.intersection(&b).iter().collect::<Vec<_>>(),
            vec![Property::Color]
        );
        assert_eq!(
            a.difference(&b).iter().collect::<Vec<_>>(),
            vec![Property::Name]
        );
        assert!(a.intersection(&b).is_subset(&a));
    }

    #[test]
    fn iteration_is_ascending() {
        let flags: PropertyFlags = [Property::RingEndAngle, Property::Name, Property::Intensity]
            .into_iter()
            .collect();
        let order: Vec<_> = flags.iter().collect();
        assert_eq!(
            order,
            vec![Property::Name, Property::Intensity, Property::RingEndAngle]
        );
    }

    #[test]
    fn all_fits_capacity() {
        let all = PropertyFlags::all();
        assert_eq!(all.len(), Property::COUNT);
        assert!(Property::COUNT <= PropertyFlags::CAPACITY);
        let (decoded, consumed) = PropertyFlags::decode(&all.encode(), Property::COUNT).unwrap();
        assert_eq!(decoded, all);
        assert_eq!(consumed, all.encoded_len());
    }

    #[test]
    fn decode_rejects_ordinal_out_of_range() {
        let flags: PropertyFlags = [Property::Alpha].into_iter().collect();
        let err = PropertyFlags::decode(&flags.encode(), 10).unwrap_err();
        assert_eq!(
            err,
            SchemaError::OrdinalOutOfRange {
                ordinal: usize::from(Property::Alpha.ordinal()),
                max: 10
            }
        );
    }

    #[test]
    fn decode_truncated() {
        let flags: PropertyFlags = [Property::Alpha].into_iter().collect();
        let bytes = flags.encode();
        let err = PropertyFlags::decode(&bytes[..bytes.len() - 1], Property::COUNT).unwrap_err();
        assert!(err.is_truncation());
    }

    #[test]
    fn decode_rejects_long_prefix() {
        let bytes = [0xFF; 40];
        let err = PropertyFlags::decode(&bytes, Property::COUNT).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::Bitstream(BitError::InvalidLengthPrefix { .. })
        ));
    }

    #[test]
    fn decode_ignores_trailing_bytes() {
        let flags: PropertyFlags = [Property::Visible].into_iter().collect();
        let mut bytes = flags.encode();
        bytes.push(0xEE);
        let (decoded, consumed) = PropertyFlags::decode(&bytes, Property::COUNT).unwrap();
        assert_eq!(decoded, flags);
        assert_eq!(consumed, 1);
    }

    #[test]
    fn debug_lists_names() {
        let flags: PropertyFlags = [Property::Color, Property::Intensity].into_iter().collect();
        assert_eq!(format!("{flags:?}"), r#"{"color", "intensity"}"#);
    }
}
