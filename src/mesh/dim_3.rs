use crate::prelude::*;

/// A structured block of 3D coordinates
///
/// Coordinates are addressed by `[i, j, k]` with `i < extent[0]`, `j < extent[1]` and
/// `k < extent[2]`. The storage is always exactly `extent[0] * extent[1] * extent[2]`
/// points; indexing outside of the extent panics.
///
/// The block dereferences to the underlying [`ndarray::Array3`] for read access.
#[derive(Debug, Clone, Default, PartialEq, Deref)]
pub struct MeshBlock3D {
    coords: Array3<[f64; 3]>,
}

impl MeshBlock3D {
    /// create a block with every coordinate at the origin
    pub fn new(extent: [usize; 3]) -> Self {
        let [ni, nj, nk] = extent;
        Self {
            coords: Array3::from_elem((ni, nj, nk), [0.0; 3]),
        }
    }

    /// resize the block. All coordinates are reset to the origin
    pub fn set_extent(&mut self, extent: [usize; 3]) {
        *self = Self::new(extent);
    }

    /// number of points in each of the `i`, `j` and `k` directions
    pub fn extent(&self) -> [usize; 3] {
        let (ni, nj, nk) = self.coords.dim();
        [ni, nj, nk]
    }

    pub fn num_points(&self) -> usize {
        self.coords.len()
    }

    /// ## Panics
    ///
    /// if `index` is outside of the extent of the block
    pub fn coord(&self, index: [usize; 3]) -> [f64; 3] {
        self.coords[index]
    }

    /// checked access to a coordinate
    pub fn get(&self, index: [usize; 3]) -> Option<&[f64; 3]> {
        self.coords.get(index)
    }

    /// ## Panics
    ///
    /// if `index` is outside of the extent of the block
    pub fn set_coord(&mut self, index: [usize; 3], coord: [f64; 3]) {
        self.coords[index] = coord;
    }

    /// ## Panics
    ///
    /// if `index` is outside of the extent of the block
    pub fn coord_mut(&mut self, index: [usize; 3]) -> &mut [f64; 3] {
        &mut self.coords[index]
    }

    /// all coordinates in file order: `k` outermost, then `j`, with `i` varying fastest
    pub fn points(&self) -> impl Iterator<Item = [f64; 3]> + '_ {
        // reversing the axes turns the row major (i, j, k) layout into (k, j, i)
        self.coords.t().into_iter().copied()
    }

    /// project the block down to 2D: the `k = 0` plane is kept and the Z coordinate
    /// of every point is dropped
    pub fn to_2d(&self) -> MeshBlock2D {
        let [ni, nj, nk] = self.extent();

        if nk == 0 {
            return MeshBlock2D::new([ni, 0]);
        }

        let mut block = MeshBlock2D::new([ni, nj]);
        for j in 0..nj {
            for i in 0..ni {
                let [x, y, _] = self.coords[[i, j, 0]];
                block.set_coord([i, j], [x, y]);
            }
        }

        block
    }
}

impl From<&MeshBlock2D> for MeshBlock3D {
    /// lift a 2D block into a single `k` plane at `z = 0`
    fn from(block: &MeshBlock2D) -> Self {
        let [ni, nj] = block.extent();
        let mut out = MeshBlock3D::new([ni, nj, 1]);

        for j in 0..nj {
            for i in 0..ni {
                let [x, y] = block.coord([i, j]);
                out.set_coord([i, j, 0], [x, y, 0.0]);
            }
        }

        out
    }
}
