//! reading plot3d mesh files
//!
//! A [`Plot3DReader`] is configured once with a [`ReaderConfig`], has any number of block
//! consumers registered with it, and is then handed an input stream. Every block in the
//! file is read in turn and passed to the consumers registered for the configured
//! dimensionality.

mod ascii;
mod binary;
mod error;
mod record;

pub use error::{AsciiError, AsciiErrorKind, BinaryError, ParseError, RecordMismatch};

use crate::prelude::*;
use ascii::AsciiSource;
use binary::BinarySource;

/// whether the plot3d file is stored as text or as fortran unformatted records
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum FileFormat {
    Ascii,
    #[default]
    Binary,
}

/// width of the coordinate values in a binary plot3d file
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum FloatPrecision {
    F32,
    #[default]
    F64,
}

/// Settings for a [`Plot3DReader`]. These are fixed for the lifetime of the reader
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ReaderConfig {
    /// either 2 or 3. Any other value is rejected when parsing starts
    pub dimensions: usize,
    pub format: FileFormat,
    /// the file holds exactly one block and the block count is left out
    pub single_block: bool,
    /// byte order of binary files. Unused for ascii files
    pub endian: Endian,
    /// coordinate width of binary files. Unused for ascii files
    pub precision: FloatPrecision,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            dimensions: 3,
            format: FileFormat::Binary,
            single_block: false,
            endian: Endian::Little,
            precision: FloatPrecision::F64,
        }
    }
}

/// the pieces of a plot3d file that differ between the ascii and binary layouts
pub(crate) trait BlockSource {
    fn read_block_count(&mut self) -> Result<usize, ParseError>;

    /// `[i, j, k]` extents of every block. `k` is always 1 for 2D files
    fn read_extents(&mut self, dims: usize, blocks: usize) -> Result<Vec<[usize; 3]>, ParseError>;

    /// read every X, then every Y, then (3D only) every Z coordinate of a block with the
    /// given extent. `extent` has already passed [`point_count`]
    fn read_block(&mut self, extent: [usize; 3], dims: usize) -> Result<MeshBlock3D, ParseError>;
}

/// number of points in a block, or `None` if a block of that extent could never be held
/// in memory
pub(crate) fn point_count(extent: [usize; 3]) -> Option<usize> {
    let [ni, nj, nk] = extent;
    let points = ni.checked_mul(nj).and_then(|n| n.checked_mul(nk))?;
    let bytes = points.checked_mul(std::mem::size_of::<[f64; 3]>())?;

    if bytes > isize::MAX as usize {
        return None;
    }

    Some(points)
}

/// set one component (`0 = x`, `1 = y`, `2 = z`) of every point in the block, with `i`
/// varying fastest and `k` slowest
pub(crate) fn fill_component<F>(
    block: &mut MeshBlock3D,
    axis: usize,
    mut next_value: F,
) -> Result<(), ParseError>
where
    F: FnMut() -> Result<f64, ParseError>,
{
    let [ni, nj, nk] = block.extent();

    for k in 0..nk {
        for j in 0..nj {
            for i in 0..ni {
                block.coord_mut([i, j, k])[axis] = next_value()?;
            }
        }
    }

    Ok(())
}

/// Reads plot3d files and hands every block to the registered consumers
///
/// ## Example
///
/// ```ignore
/// use plot3d_vtk::{FileFormat, MeshBlock2D, Plot3DReader, ReaderConfig};
///
/// let config = ReaderConfig {
///     dimensions: 2,
///     format: FileFormat::Ascii,
///     single_block: true,
///     ..Default::default()
/// };
///
/// let mut blocks = Vec::new();
/// let mut reader = Plot3DReader::new(config);
/// reader.add_2d_consumer(|block: MeshBlock2D| {
///     blocks.push(block);
///     true
/// });
///
/// reader.parse("2 2\n0\n1\n0\n1\n0\n0\n1\n1\n".as_bytes())?;
/// ```
pub struct Plot3DReader<'a> {
    config: ReaderConfig,
    consumers_2d: Vec<Box<dyn BlockSink<MeshBlock2D> + 'a>>,
    consumers_3d: Vec<Box<dyn BlockSink<MeshBlock3D> + 'a>>,
}

impl<'a> Plot3DReader<'a> {
    pub fn new(config: ReaderConfig) -> Self {
        Self {
            config,
            consumers_2d: Vec::new(),
            consumers_3d: Vec::new(),
        }
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// register a consumer for the blocks of 2D files. Consumers are called in the order
    /// they are added
    pub fn add_2d_consumer<S>(&mut self, sink: S)
    where
        S: BlockSink<MeshBlock2D> + 'a,
    {
        self.consumers_2d.push(Box::new(sink));
    }

    /// register a consumer for the blocks of 3D files. Consumers are called in the order
    /// they are added
    pub fn add_3d_consumer<S>(&mut self, sink: S)
    where
        S: BlockSink<MeshBlock3D> + 'a,
    {
        self.consumers_3d.push(Box::new(sink));
    }

    /// Read every block from `input` and dispatch it to the consumers, returning the
    /// number of blocks read
    ///
    /// A consumer returning `false` only skips the remaining consumers for the current
    /// block. The next block is read regardless and offered to every consumer again.
    ///
    /// Any malformed input ends the parse with an error. Blocks that were dispatched
    /// before the error stay with their consumers.
    pub fn parse<R: BufRead>(&mut self, input: R) -> Result<usize, Error> {
        let dims = self.config.dimensions;

        if dims != 2 && dims != 3 {
            return Err(ConfigError::InvalidDimensions(dims).into());
        }

        match self.config.format {
            FileFormat::Ascii => self.read_blocks(AsciiSource::new(input)),
            FileFormat::Binary => self.read_blocks(BinarySource::new(
                input,
                self.config.endian,
                self.config.precision,
            )),
        }
    }

    fn read_blocks<S: BlockSource>(&mut self, mut source: S) -> Result<usize, Error> {
        let dims = self.config.dimensions;

        let block_count = if self.config.single_block {
            1
        } else {
            source.read_block_count()?
        };

        log::debug!("reading {} block(s) of a {}D plot3d file", block_count, dims);

        let extents = source.read_extents(dims, block_count)?;

        for (index, extent) in extents.into_iter().enumerate() {
            log::trace!("reading block {} with extent {:?}", index, extent);

            let block = source.read_block(extent, dims)?;

            self.dispatch(index, block);
        }

        Ok(block_count)
    }

    fn dispatch(&mut self, index: usize, block: MeshBlock3D) {
        if self.config.dimensions == 3 {
            fan_out(&mut self.consumers_3d, index, block);
        } else {
            fan_out(&mut self.consumers_2d, index, block.to_2d());
        }
    }
}

fn fan_out<'a, B: Clone>(consumers: &mut [Box<dyn BlockSink<B> + 'a>], index: usize, block: B) {
    for (position, consumer) in consumers.iter_mut().enumerate() {
        if !consumer.consume(block.clone()) {
            log::debug!(
                "consumer {} skipped the remaining consumers for block {}",
                position,
                index
            );
            break;
        }
    }
}
