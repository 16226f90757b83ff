//! # Traits
//!
//! These are the seams of the crate: [`BlockSink`] is how structured blocks leave the
//! plot3d reader, and [`Array`] / [`Numeric`] describe how a data array is rendered
//! into a `DataArray` element of an unstructured grid file.

use crate::array::Precision;
use num_traits::ops::bytes::ToBytes;

/// Receives every completed block from a [`Plot3DReader`](crate::Plot3DReader)
///
/// The return value is a continuation flag for the current block only: returning
/// `false` skips the sinks registered after this one for _this_ block, but the
/// reader still parses the next block and hands it to every sink from the start.
///
/// Closures are sinks through the blanket implementation:
///
/// ```ignore
/// let mut reader = plot3d_vtk::Plot3DReader::new(config);
/// reader.add_3d_consumer(|block: plot3d_vtk::MeshBlock3D| {
///     println!("block with extent {:?}", block.extent());
///     true
/// });
/// ```
pub trait BlockSink<B> {
    fn consume(&mut self, block: B) -> bool;
}

impl<B, F> BlockSink<B> for F
where
    F: FnMut(B) -> bool,
{
    fn consume(&mut self, block: B) -> bool {
        self(block)
    }
}

/// A single value that can be stored in a data array
pub trait Numeric: Copy + ToBytes {
    const PRECISION: Precision;

    /// append the little endian bytes of this value to `bytes`
    fn extend_le_bytes(&self, bytes: &mut Vec<u8>) {
        bytes.extend_from_slice(self.to_le_bytes().as_ref());
    }

    /// render this value as decimal text. `digits` is the number of significant digits
    /// for floating point values; `None` gives the shortest text that reads back to the
    /// same value.
    fn format_ascii(&self, digits: Option<usize>) -> String;
}

/// describes how a data array is laid out when it is written to a vtk file
///
/// Implemented for slices of scalars (`[f64]`, `[i64]`) and slices of 3-vectors
/// (`[[f64; 3]]`).
pub trait Array {
    /// number of tuples in the array
    fn length(&self) -> usize;

    fn components(&self) -> usize {
        1
    }

    fn precision(&self) -> Precision;

    /// inline ascii text for the array, one tuple per line
    fn ascii_body(&self, digits: Option<usize>) -> String;

    /// the raw little endian values of the array without any header
    fn extend_le_bytes(&self, bytes: &mut Vec<u8>);

    /// number of raw bytes (not encoded in base64 / ascii) that are contained in this array
    fn payload_bytes(&self) -> usize {
        self.length() * self.components() * self.precision().size_of()
    }

    /// the binary form of the array: an 8 byte little endian header with the
    /// payload length followed by the payload itself
    fn binary_payload(&self) -> Vec<u8> {
        let payload_bytes = self.payload_bytes();
        let mut bytes = Vec::with_capacity(crate::array::HEADER_BYTES + payload_bytes);
        bytes.extend_from_slice(&(payload_bytes as u64).to_le_bytes());
        self.extend_le_bytes(&mut bytes);
        bytes
    }
}
