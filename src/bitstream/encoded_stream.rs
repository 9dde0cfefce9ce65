use std::fmt::{Display, Formatter};

use crate::error::{HuffmanError, Result};

use super::bitreader::BitReader;
use super::bitwriter::BitWriter;

/// Concatenated codes of an input sequence, packed MSB-first.
///
/// `bit_len` is exact. Bits of the final byte past `bit_len` are zero and carry no data.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct EncodedStream {
    bytes: Vec<u8>,
    bit_len: usize,
}

impl EncodedStream {
    /// Wrap already packed bytes holding `bit_len` data bits.
    pub fn from_parts(bytes: Vec<u8>, bit_len: usize) -> Result<Self> {
        if bit_len > bytes.len() * 8 {
            return Err(HuffmanError::InvalidInput(format!(
                "bit length {} exceeds {} packed bytes",
                bit_len,
                bytes.len()
            )));
        }
        Ok(Self { bytes, bit_len })
    }

    /// Built by the BitWriter, which always pads exactly to `bit_len`.
    pub(super) fn packed(bytes: Vec<u8>, bit_len: usize) -> Self {
        debug_assert_eq!(bytes.len(), (bit_len + 7) / 8);
        Self { bytes, bit_len }
    }

    /// Parse a string of '0' and '1' characters.
    pub fn from_bit_str(bits: &str) -> Result<Self> {
        let mut bw = BitWriter::new(bits.len() / 8 + 1);
        for ch in bits.chars() {
            match ch {
                '0' => bw.out_bit(false),
                '1' => bw.out_bit(true),
                other => return Err(HuffmanError::InvalidBit(other)),
            }
        }
        Ok(bw.finish())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    /// Iterate over the data bits in order.
    pub fn bits(&self) -> BitReader<'_> {
        BitReader::new(self)
    }
}

impl Display for EncodedStream {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for bit in self.bits() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}
