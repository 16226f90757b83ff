#![doc = include_str!("../README.md")]

mod appended;
pub mod array;
mod convert;
mod data;
pub mod mesh;
pub mod parse;
pub mod prelude;
mod traits;
mod utils;
mod write_vtk;

pub use traits::{Array, BlockSink, Numeric};

pub use data::UnstructuredDataset;

pub use mesh::{Cell, CellType, UnknownCellType, UnstructuredMesh};
pub use mesh::{MeshBlock2D, MeshBlock3D};

pub use array::Precision;
pub use parse::{FileFormat, FloatPrecision, Plot3DReader, ReaderConfig};
pub use utils::Endian;

pub use appended::{AppendedBuffer, AppendedData};
pub use convert::{plot3d_to_vtu, VtuSink};
pub use write_vtk::{Encoding, GridType, UnstructuredGridWriter, VtkWriter, WriterConfig};

pub use parse::ParseError;

pub use ndarray;

pub use quick_xml::reader::Reader;
pub use quick_xml::writer::Writer;

/// general purpose error enumeration for possible causes of failure.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("An io error occured: `{0}`")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Error while parsing plot3d file: {0}")]
    Parse(#[from] parse::ParseError),
    #[error("Could not write XML data to file: `{0}`")]
    XmlWrite(#[from] quick_xml::Error),
}

/// Settings that are rejected before any data is read or written.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("plot3d meshes must have 2 or 3 dimensions, got {0}")]
    InvalidDimensions(usize),
    #[error("grid type `{0}` is not supported, only UnstructuredGrid files can be written")]
    UnsupportedGridType(GridType),
    #[error("ascii encoding cannot be combined with appended data arrays")]
    AsciiAppended,
}
