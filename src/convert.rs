//! writing plot3d blocks straight into an `UnstructuredGrid` file

use crate::prelude::*;

/// A block consumer that writes every block it receives as one piece of an open
/// `UnstructuredGrid` file
///
/// Structured blocks are converted with [`UnstructuredMesh::from`]. The first error
/// raised while writing is kept and every following block is refused; the error is
/// returned from [`VtuSink::finish`].
pub struct VtuSink<'w, W: Write> {
    writer: &'w mut UnstructuredGridWriter<W>,
    error: Option<Error>,
    pieces: usize,
}

impl<'w, W: Write> VtuSink<'w, W> {
    pub fn new(writer: &'w mut UnstructuredGridWriter<W>) -> Self {
        Self {
            writer,
            error: None,
            pieces: 0,
        }
    }

    /// the number of pieces written, or the first error raised while writing
    pub fn finish(self) -> Result<usize, Error> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.pieces),
        }
    }

    fn write(&mut self, mesh: UnstructuredMesh) -> bool {
        if self.error.is_some() {
            return false;
        }

        match self.writer.write_piece(&UnstructuredDataset::from_mesh(mesh)) {
            Ok(()) => {
                self.pieces += 1;
                true
            }
            Err(err) => {
                log::warn!("failed to write piece {}: {}", self.pieces, err);
                self.error = Some(err);
                false
            }
        }
    }
}

impl<W: Write> BlockSink<MeshBlock3D> for VtuSink<'_, W> {
    fn consume(&mut self, block: MeshBlock3D) -> bool {
        self.write(UnstructuredMesh::from(&block))
    }
}

impl<W: Write> BlockSink<MeshBlock2D> for VtuSink<'_, W> {
    fn consume(&mut self, block: MeshBlock2D) -> bool {
        self.write(UnstructuredMesh::from(&block))
    }
}

/// Convert a plot3d file into an `UnstructuredGrid` file with one piece per block and
/// return the output once the file is closed
pub fn plot3d_to_vtu<R, W>(
    input: R,
    reader_config: &ReaderConfig,
    output: W,
    writer_config: &WriterConfig,
) -> Result<W, Error>
where
    R: BufRead,
    W: Write,
{
    let mut grid = VtkWriter::new(output, writer_config)?.open(GridType::UnstructuredGrid)?;
    let mut sink = VtuSink::new(&mut grid);

    let mut reader = Plot3DReader::new(*reader_config);
    if reader_config.dimensions == 2 {
        reader.add_2d_consumer(|block: MeshBlock2D| sink.consume(block));
    } else {
        reader.add_3d_consumer(|block: MeshBlock3D| sink.consume(block));
    }
    let blocks = reader.parse(input)?;
    drop(reader);

    let pieces = sink.finish()?;
    log::debug!("converted {} block(s) into {} piece(s)", blocks, pieces);

    grid.close()
}
