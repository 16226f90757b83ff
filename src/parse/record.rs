//! fortran style record framing: `[length: u32] payload [length: u32]`

use super::error::{BinaryError, RecordMismatch};
use crate::prelude::*;
use crate::utils::Endian;

use std::io;

/// An open record on a binary stream
///
/// The leading length is read when the record is opened. Values inside the record are
/// read through the `Read` implementation, which passes straight through to the
/// underlying stream. [`Record::close`] reads the trailing length and checks it against
/// the leading one.
#[must_use = "a record must be closed to check its trailing length"]
pub(crate) struct Record<'r, R: Read> {
    reader: &'r mut R,
    endian: Endian,
    length: u32,
    closed: bool,
}

impl<'r, R: Read> Record<'r, R> {
    pub(crate) fn open(reader: &'r mut R, endian: Endian) -> io::Result<Self> {
        let length = endian.read_u32(&mut *reader)?;
        log::trace!("opened record of {} bytes", length);

        Ok(Self {
            reader,
            endian,
            length,
            closed: false,
        })
    }

    /// number of payload bytes announced by the leading length
    pub(crate) fn length(&self) -> u32 {
        self.length
    }

    pub(crate) fn close(mut self) -> Result<(), BinaryError> {
        self.closed = true;
        let close = self.endian.read_u32(&mut *self.reader)?;

        if close != self.length {
            return Err(RecordMismatch::new(self.length, close).into());
        }

        Ok(())
    }
}

impl<R: Read> Read for Record<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}

impl<R: Read> Drop for Record<'_, R> {
    fn drop(&mut self) {
        if !self.closed {
            log::warn!(
                "record of {} bytes dropped before its trailing length was read",
                self.length
            );
        }
    }
}

/// run `f` inside a single record. The record is only closed (and its trailing length
/// checked) if `f` succeeds.
pub(crate) fn framed<R, T, F>(reader: &mut R, endian: Endian, f: F) -> Result<T, ParseError>
where
    R: Read,
    F: FnOnce(&mut Record<'_, R>) -> Result<T, ParseError>,
{
    let mut record = Record::open(reader, endian)?;
    let value = f(&mut record)?;
    record.close()?;
    Ok(value)
}
