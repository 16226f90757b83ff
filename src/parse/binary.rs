use super::error::BinaryError;
use super::record::framed;
use super::{fill_component, point_count, BlockSource, FloatPrecision};
use crate::prelude::*;
use crate::utils::Endian;

/// Reads a plot3d file written as fortran unformatted records
///
/// Integers are always 4 bytes wide, coordinates are 4 or 8 bytes depending on the
/// configured precision.
pub(crate) struct BinarySource<R> {
    reader: R,
    endian: Endian,
    precision: FloatPrecision,
}

impl<R: Read> BinarySource<R> {
    pub(crate) fn new(reader: R, endian: Endian, precision: FloatPrecision) -> Self {
        Self {
            reader,
            endian,
            precision,
        }
    }

    fn float_width(&self) -> usize {
        match self.precision {
            FloatPrecision::F32 => 4,
            FloatPrecision::F64 => 8,
        }
    }
}

impl<R: Read> BlockSource for BinarySource<R> {
    fn read_block_count(&mut self) -> Result<usize, ParseError> {
        let endian = self.endian;
        let count = framed(&mut self.reader, endian, |record| Ok(endian.read_i32(record)?))?;

        if count < 1 {
            return Err(BinaryError::BlockCount(count).into());
        }

        Ok(count as usize)
    }

    fn read_extents(&mut self, dims: usize, blocks: usize) -> Result<Vec<[usize; 3]>, ParseError> {
        let endian = self.endian;

        framed(&mut self.reader, endian, |record| {
            let mut extents = Vec::new();

            for _ in 0..blocks {
                let mut extent = [1; 3];

                for value in extent.iter_mut().take(dims) {
                    let raw = endian.read_i32(record)?;

                    if raw < 0 {
                        return Err(BinaryError::NegativeExtent(raw).into());
                    }

                    *value = raw as usize;
                }

                if point_count(extent).is_none() {
                    return Err(BinaryError::ExtentTooLarge(extent).into());
                }

                extents.push(extent);
            }

            Ok(extents)
        })
    }

    fn read_block(&mut self, extent: [usize; 3], dims: usize) -> Result<MeshBlock3D, ParseError> {
        let endian = self.endian;
        let precision = self.precision;

        let points = point_count(extent).ok_or(BinaryError::ExtentTooLarge(extent))?;
        let expected = points * dims * self.float_width();

        framed(&mut self.reader, endian, |record| {
            log::trace!(
                "coordinate record of {} bytes for {} points",
                record.length(),
                points
            );

            // the block is only allocated once the record agrees with the extents
            if record.length() as usize != expected {
                return Err(BinaryError::CoordinateRecord {
                    expected,
                    found: record.length(),
                }
                .into());
            }

            let mut block = MeshBlock3D::new(extent);

            for axis in 0..dims {
                fill_component(&mut block, axis, || {
                    let value = match precision {
                        FloatPrecision::F32 => f64::from(endian.read_f32(record)?),
                        FloatPrecision::F64 => endian.read_f64(record)?,
                    };
                    Ok(value)
                })?;
            }

            Ok(block)
        })
    }
}
