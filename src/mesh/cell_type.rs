use crate::prelude::*;

/// The vtk cell types that can appear in an unstructured grid, with their vtk ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum CellType {
    Vertex = 1,
    PolyVertex = 2,
    Line = 3,
    PolyLine = 4,
    Triangle = 5,
    TriangleStrip = 6,
    Polygon = 7,
    Pixel = 8,
    Quad = 9,
    Tetra = 10,
    Voxel = 11,
    Hexahedron = 12,
    Wedge = 13,
    Pyramid = 14,
    QuadraticEdge = 21,
    QuadraticTriangle = 22,
    QuadraticQuad = 23,
    QuadraticTetra = 24,
    QuadraticHexahedron = 25,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is not a known vtk cell type id")]
pub struct UnknownCellType(pub i64);

const ALL: [CellType; 19] = [
    CellType::Vertex,
    CellType::PolyVertex,
    CellType::Line,
    CellType::PolyLine,
    CellType::Triangle,
    CellType::TriangleStrip,
    CellType::Polygon,
    CellType::Pixel,
    CellType::Quad,
    CellType::Tetra,
    CellType::Voxel,
    CellType::Hexahedron,
    CellType::Wedge,
    CellType::Pyramid,
    CellType::QuadraticEdge,
    CellType::QuadraticTriangle,
    CellType::QuadraticQuad,
    CellType::QuadraticTetra,
    CellType::QuadraticHexahedron,
];

impl CellType {
    /// the id written to the `types` array of the `Cells` element
    pub fn id(&self) -> i64 {
        *self as i64
    }

    /// the name of the cell type as it appears in the vtk headers
    pub fn name(&self) -> &'static str {
        match self {
            Self::Vertex => "VTK_VERTEX",
            Self::PolyVertex => "VTK_POLY_VERTEX",
            Self::Line => "VTK_LINE",
            Self::PolyLine => "VTK_POLY_LINE",
            Self::Triangle => "VTK_TRIANGLE",
            Self::TriangleStrip => "VTK_TRIANGLE_STRIP",
            Self::Polygon => "VTK_POLYGON",
            Self::Pixel => "VTK_PIXEL",
            Self::Quad => "VTK_QUAD",
            Self::Tetra => "VTK_TETRA",
            Self::Voxel => "VTK_VOXEL",
            Self::Hexahedron => "VTK_HEXAHEDRON",
            Self::Wedge => "VTK_WEDGE",
            Self::Pyramid => "VTK_PYRAMID",
            Self::QuadraticEdge => "VTK_QUADRATIC_EDGE",
            Self::QuadraticTriangle => "VTK_QUADRATIC_TRIANGLE",
            Self::QuadraticQuad => "VTK_QUADRATIC_QUAD",
            Self::QuadraticTetra => "VTK_QUADRATIC_TETRA",
            Self::QuadraticHexahedron => "VTK_QUADRATIC_HEXAHEDRON",
        }
    }

    /// number of nodes in a cell of this type, `None` when the count varies per cell
    pub fn node_count(&self) -> Option<usize> {
        match self {
            Self::Vertex => Some(1),
            Self::Line => Some(2),
            Self::Triangle => Some(3),
            Self::Pixel | Self::Quad | Self::Tetra => Some(4),
            Self::Pyramid => Some(5),
            Self::Wedge | Self::QuadraticTriangle => Some(6),
            Self::Voxel | Self::Hexahedron | Self::QuadraticQuad => Some(8),
            Self::QuadraticEdge => Some(3),
            Self::QuadraticTetra => Some(10),
            Self::QuadraticHexahedron => Some(20),
            Self::PolyVertex | Self::PolyLine | Self::TriangleStrip | Self::Polygon => None,
        }
    }

    /// topological dimension of the cell
    pub fn dimensions(&self) -> usize {
        match self {
            Self::Vertex | Self::PolyVertex => 0,
            Self::Line | Self::PolyLine | Self::QuadraticEdge => 1,
            Self::Triangle
            | Self::TriangleStrip
            | Self::Polygon
            | Self::Pixel
            | Self::Quad
            | Self::QuadraticTriangle
            | Self::QuadraticQuad => 2,
            Self::Tetra
            | Self::Voxel
            | Self::Hexahedron
            | Self::Wedge
            | Self::Pyramid
            | Self::QuadraticTetra
            | Self::QuadraticHexahedron => 3,
        }
    }
}

impl TryFrom<i64> for CellType {
    type Error = UnknownCellType;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        ALL.iter()
            .copied()
            .find(|cell_type| cell_type.id() == id)
            .ok_or(UnknownCellType(id))
    }
}
