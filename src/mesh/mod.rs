//! # Mesh Information
//!
//! Two families of meshes live here.
//!
//! _Structured_ blocks ([`MeshBlock2D`] and [`MeshBlock3D`]) are what a plot3d file is made
//! of: a rectangular grid of coordinates addressed by integer position. A block is
//! sized once with its extent and coordinates are then read or written by index; the
//! two dimensionalities are distinct types so a 2D index can never be used on a 3D block.
//! [`MeshBlock3D::to_2d`] narrows a single-plane 3D block to its 2D form.
//!
//! _Unstructured_ meshes ([`UnstructuredMesh`]) are what an `UnstructuredGrid` vtk file
//! describes: a list of points and a list of [`Cell`]s referencing those points by
//! index. A structured block can be converted into an unstructured mesh with `From`,
//! producing hexahedra (3D) or quads (a single plane).

mod cell_type;
mod dim_2;
mod dim_3;
mod unstructured;

pub use cell_type::{CellType, UnknownCellType};
pub use dim_2::MeshBlock2D;
pub use dim_3::MeshBlock3D;
pub use unstructured::{Cell, UnstructuredMesh};
