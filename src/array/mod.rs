//! container types and encodings for data arrays written to vtk files
//!
//! Every array is written in one of three forms (see [`Encoding`](crate::Encoding)):
//! inline ascii text, inline base64 or base64 deferred to the `AppendedData` trailer.
//! Both binary forms share the byte layout produced by
//! [`Array::binary_payload`](crate::Array::binary_payload): an 8 byte `UInt64` header
//! holding the payload length, followed by the little endian values.

mod scalar;
mod vector;

/// size of the length header that precedes every binary payload
pub const HEADER_BYTES: usize = std::mem::size_of::<u64>();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// The vtk `type` attribute of a data array
pub enum Precision {
    Int64,
    Float64,
}

impl Precision {
    pub fn to_str(&self) -> &'static str {
        match self {
            Self::Int64 => "Int64",
            Self::Float64 => "Float64",
        }
    }

    /// number of bytes of a single packed value
    pub fn size_of(&self) -> usize {
        match self {
            Self::Int64 => std::mem::size_of::<i64>(),
            Self::Float64 => std::mem::size_of::<f64>(),
        }
    }
}
