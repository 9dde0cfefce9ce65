//! BitReader: walks the bits of an EncodedStream in order.
//!
//! Stops after exactly `bit_len` bits, so the zero padding of the final byte is never returned.
//!

use super::encoded_stream::EncodedStream;

const BIT_MASK: u8 = 0xff;

/// Reads the bits of an in-memory stream.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
    bit_index: usize,
    remaining: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(stream: &'a EncodedStream) -> Self {
        Self {
            buffer: stream.as_bytes(),
            cursor: 0,
            bit_index: 0,
            remaining: stream.bit_len(),
        }
    }

    /// Return bit as Option<usize> (1 or 0), or None if there is no more data to read
    pub fn bit(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let bit =
            (self.buffer[self.cursor] & BIT_MASK >> self.bit_index) >> (7 - self.bit_index);
        self.bit_index += 1;
        self.bit_index %= 8;
        if self.bit_index == 0 {
            self.cursor += 1;
        }
        self.remaining -= 1;
        Some(bit as usize)
    }

    /// Return Option<Bool> *true* if the next bit is 1, *false* if 0, consuming the bit,
    /// or None if there is no more data to read
    pub fn bool_bit(&mut self) -> Option<bool> {
        self.bit().map(|bit| bit == 1)
    }

    /// Bits consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor * 8 + self.bit_index
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        self.bool_bit()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for BitReader<'_> {}
