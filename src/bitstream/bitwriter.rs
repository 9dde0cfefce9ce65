use crate::huffman_coding::code_table::Code;

use super::encoded_stream::EncodedStream;

/// Packs variable length codes into a bitstream, MSB-first.
pub struct BitWriter {
    /// Output buffer holding the completed bytes.
    output: Vec<u8>,
    /// Private queue to hold bits that are waiting to be put as bytes into the output buffer.
    queue: u64,
    /// Count of valid bits in the queue.
    q_bits: u8,
    /// Total bits written so far.
    bit_len: usize,
}

impl BitWriter {
    /// Create a new BitWriter with room for `capacity` bytes of output.
    pub fn new(capacity: usize) -> Self {
        Self {
            output: Vec::with_capacity(capacity),
            queue: 0,
            q_bits: 0,
            bit_len: 0,
        }
    }

    /// Number of bits written so far.
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Move full bytes from the queue to the output buffer once the queue is nearly full.
    fn push_queue(&mut self) {
        if self.q_bits > 56 {
            while self.q_bits > 7 {
                let byte = (self.queue >> (self.q_bits - 8)) as u8;
                self.output.push(byte);
                self.q_bits -= 8;
            }
        }
    }

    /// Put a single bit on the stream.
    pub fn out_bit(&mut self, bit: bool) {
        self.push_queue();
        self.queue <<= 1;
        self.queue |= bit as u64;
        self.q_bits += 1;
        self.bit_len += 1;
    }

    /// Put every bit of a code on the stream, first bit first.
    pub fn out_code(&mut self, code: &Code) {
        code.bits().iter().for_each(|&bit| self.out_bit(bit));
    }

    /// Flush the queue, padding the last partial byte with 0s in the least significant bits,
    /// and hand back the finished stream.
    pub fn finish(mut self) -> EncodedStream {
        // First push out all the full bytes
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte);
            self.q_bits -= 8;
        }
        // Then push out the remaining bits
        if self.q_bits > 0 {
            let mut byte = (self.queue & (0xff >> (8 - self.q_bits)) as u64) as u8;
            byte <<= 8 - self.q_bits;
            self.output.push(byte);
            self.q_bits = 0;
        }
        EncodedStream::packed(self.output, self.bit_len)
    }
}
