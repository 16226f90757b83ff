//! Common traits and types that are useful for working with `plot3d_vtk`
#![allow(unused_imports)]

pub use crate::convert::{plot3d_to_vtu, VtuSink};
pub use crate::data::UnstructuredDataset;
pub use crate::mesh::{Cell, CellType, MeshBlock2D, MeshBlock3D, UnstructuredMesh};
pub use crate::parse::{FileFormat, FloatPrecision, Plot3DReader, ReaderConfig};
pub use crate::traits::{Array, BlockSink, Numeric};
pub use crate::utils::Endian;
pub use crate::write_vtk::{Encoding, GridType, UnstructuredGridWriter, VtkWriter, WriterConfig};

pub(crate) use crate::array::Precision;
pub(crate) use crate::parse::ParseError;
pub(crate) use crate::{ConfigError, Error};

pub(crate) use std::io::{BufRead, Read, Write};

pub(crate) use quick_xml::writer::Writer;

pub(crate) use derive_more::{Constructor, Deref, Display, From};

pub(crate) use ndarray::{Array2, Array3};
