use super::error::{AsciiError, AsciiErrorKind};
use super::{fill_component, point_count, BlockSource};
use crate::prelude::*;
use crate::utils;

use std::collections::VecDeque;

/// Reads a plot3d file written as text. Tracks the current line so that errors can
/// point to where the file went wrong.
pub(crate) struct AsciiSource<R> {
    reader: R,
    /// number of lines consumed so far
    line: usize,
    /// coordinate tokens left over from the most recent line. These carry over into the
    /// next block when a block ends part way through a line
    pending: VecDeque<String>,
}

impl<R: BufRead> AsciiSource<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            pending: VecDeque::new(),
        }
    }

    fn error(&self, kind: AsciiErrorKind) -> ParseError {
        AsciiError::new(self.line, kind).into()
    }

    fn next_line(&mut self) -> Result<String, ParseError> {
        let mut line = String::new();

        let bytes = self
            .reader
            .read_line(&mut line)
            .map_err(|err| AsciiError::new(self.line + 1, AsciiErrorKind::Io(err)))?;

        if bytes == 0 {
            return Err(AsciiError::new(self.line + 1, AsciiErrorKind::UnexpectedEof).into());
        }

        self.line += 1;
        Ok(line)
    }

    fn next_float(&mut self) -> Result<f64, ParseError> {
        while self.pending.is_empty() {
            let line = self.next_line()?;
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }

        // the loop above only exits with at least one pending token
        let token = self.pending.pop_front().unwrap_or_default();

        utils::parse_float(&token).ok_or_else(|| self.error(AsciiErrorKind::BadFloat(token)))
    }
}

impl<R: BufRead> BlockSource for AsciiSource<R> {
    fn read_block_count(&mut self) -> Result<usize, ParseError> {
        let line = self.next_line()?;
        let count = utils::leading_integer(&line);

        if count < 1 {
            return Err(self.error(AsciiErrorKind::BlockCount(count)));
        }

        Ok(count as usize)
    }

    fn read_extents(&mut self, dims: usize, blocks: usize) -> Result<Vec<[usize; 3]>, ParseError> {
        let mut extents = Vec::new();

        for _ in 0..blocks {
            let line = self.next_line()?;
            let tokens = utils::tokenise(&line);

            if tokens.len() < dims {
                return Err(self.error(AsciiErrorKind::TooFewExtents {
                    expected: dims,
                    found: tokens.len(),
                }));
            }

            let mut extent = [1; 3];

            for (axis, token) in tokens.iter().take(dims).enumerate() {
                let value = utils::integer_prefix(token)
                    .ok_or_else(|| self.error(AsciiErrorKind::BadInteger(token.to_string())))?;

                if value < 0 {
                    return Err(self.error(AsciiErrorKind::NegativeExtent(value)));
                }

                extent[axis] = value as usize;
            }

            if point_count(extent).is_none() {
                return Err(self.error(AsciiErrorKind::ExtentTooLarge(extent)));
            }

            extents.push(extent);
        }

        Ok(extents)
    }

    fn read_block(&mut self, extent: [usize; 3], dims: usize) -> Result<MeshBlock3D, ParseError> {
        let points = point_count(extent)
            .ok_or_else(|| self.error(AsciiErrorKind::ExtentTooLarge(extent)))?;

        // collected first so a truncated file fails before the block is allocated
        let mut values = Vec::new();
        for _ in 0..points * dims {
            values.push(self.next_float()?);
        }

        let mut block = MeshBlock3D::new(extent);
        let mut values = values.into_iter();
        for axis in 0..dims {
            fill_component(&mut block, axis, || Ok(values.next().unwrap_or_default()))?;
        }

        Ok(block)
    }
}
