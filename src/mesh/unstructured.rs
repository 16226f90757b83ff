use super::CellType;
use crate::prelude::*;

/// A single cell of an unstructured mesh: its type and the indices of its nodes in
/// the point list of the owning [`UnstructuredMesh`]
#[derive(Debug, Clone, PartialEq, Constructor)]
pub struct Cell {
    pub cell_type: CellType,
    pub node_ids: Vec<usize>,
}

/// Points and the cells built on top of them
///
/// Node indices in the cells are not validated against the point list.
#[derive(Debug, Clone, Default, PartialEq, Constructor)]
pub struct UnstructuredMesh {
    pub points: Vec<[f64; 3]>,
    pub cells: Vec<Cell>,
}

impl UnstructuredMesh {
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    /// vtk type id of every cell
    pub fn cell_types(&self) -> Vec<i64> {
        self.cells.iter().map(|cell| cell.cell_type.id()).collect()
    }

    /// the running total of node counts after each cell
    pub fn offsets(&self) -> Vec<i64> {
        self.cells
            .iter()
            .scan(0i64, |total, cell| {
                *total += cell.node_ids.len() as i64;
                Some(*total)
            })
            .collect()
    }

    /// every cell's node indices, flattened in cell order
    pub fn connectivity(&self) -> Vec<i64> {
        self.cells
            .iter()
            .flat_map(|cell| cell.node_ids.iter().map(|&node| node as i64))
            .collect()
    }
}

impl From<&MeshBlock3D> for UnstructuredMesh {
    /// Points are numbered in file order (`i` fastest, then `j`, then `k`). A block with
    /// more than one point in every direction becomes hexahedra; a block that is a single
    /// `k` plane becomes quads. Any other block is written as points without cells.
    fn from(block: &MeshBlock3D) -> Self {
        let [ni, nj, nk] = block.extent();
        let points = block.points().collect();
        let index = |i: usize, j: usize, k: usize| (k * nj + j) * ni + i;

        let mut cells = Vec::new();

        if ni > 1 && nj > 1 && nk > 1 {
            cells.reserve((ni - 1) * (nj - 1) * (nk - 1));
            for k in 0..nk - 1 {
                for j in 0..nj - 1 {
                    for i in 0..ni - 1 {
                        let node_ids = vec![
                            index(i, j, k),
                            index(i + 1, j, k),
                            index(i + 1, j + 1, k),
                            index(i, j + 1, k),
                            index(i, j, k + 1),
                            index(i + 1, j, k + 1),
                            index(i + 1, j + 1, k + 1),
                            index(i, j + 1, k + 1),
                        ];
                        cells.push(Cell::new(CellType::Hexahedron, node_ids));
                    }
                }
            }
        } else if nk == 1 && ni > 1 && nj > 1 {
            cells = quads(ni, nj);
        }

        UnstructuredMesh { points, cells }
    }
}

impl From<&MeshBlock2D> for UnstructuredMesh {
    /// Quads over the block with every point placed at `z = 0`
    fn from(block: &MeshBlock2D) -> Self {
        let [ni, nj] = block.extent();
        let points = block.points().map(|[x, y]| [x, y, 0.0]).collect();

        let cells = if ni > 1 && nj > 1 {
            quads(ni, nj)
        } else {
            Vec::new()
        };

        UnstructuredMesh { points, cells }
    }
}

fn quads(ni: usize, nj: usize) -> Vec<Cell> {
    let index = |i: usize, j: usize| j * ni + i;
    let mut cells = Vec::with_capacity((ni - 1) * (nj - 1));

    for j in 0..nj - 1 {
        for i in 0..ni - 1 {
            let node_ids = vec![
                index(i, j),
                index(i + 1, j),
                index(i + 1, j + 1),
                index(i, j + 1),
            ];
            cells.push(Cell::new(CellType::Quad, node_ids));
        }
    }

    cells
}
