use crate::prelude::*;

/// A structured block of 2D coordinates, addressed by `[i, j]`
///
/// Same contract as [`MeshBlock3D`](crate::MeshBlock3D): storage always matches the
/// extent and out of range indexing panics.
#[derive(Debug, Clone, Default, PartialEq, Deref)]
pub struct MeshBlock2D {
    coords: Array2<[f64; 2]>,
}

impl MeshBlock2D {
    /// create a block with every coordinate at the origin
    pub fn new(extent: [usize; 2]) -> Self {
        let [ni, nj] = extent;
        Self {
            coords: Array2::from_elem((ni, nj), [0.0; 2]),
        }
    }

    /// resize the block. All coordinates are reset to the origin
    pub fn set_extent(&mut self, extent: [usize; 2]) {
        *self = Self::new(extent);
    }

    pub fn extent(&self) -> [usize; 2] {
        let (ni, nj) = self.coords.dim();
        [ni, nj]
    }

    pub fn num_points(&self) -> usize {
        self.coords.len()
    }

    pub fn coord(&self, index: [usize; 2]) -> [f64; 2] {
        self.coords[index]
    }

    pub fn get(&self, index: [usize; 2]) -> Option<&[f64; 2]> {
        self.coords.get(index)
    }

    pub fn set_coord(&mut self, index: [usize; 2], coord: [f64; 2]) {
        self.coords[index] = coord;
    }

    pub fn coord_mut(&mut self, index: [usize; 2]) -> &mut [f64; 2] {
        &mut self.coords[index]
    }

    /// all coordinates with `i` varying fastest
    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.coords.t().into_iter().copied()
    }
}

#[test]
fn points_iterate_i_fastest() {
    let mut block = MeshBlock2D::new([2, 2]);
    block.set_coord([1, 0], [1.0, 0.0]);
    block.set_coord([0, 1], [0.0, 1.0]);
    block.set_coord([1, 1], [1.0, 1.0]);

    let points: Vec<_> = block.points().collect();
    assert_eq!(
        points,
        vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]]
    );
}

#[test]
fn coord_mut_writes_through() {
    let mut block = MeshBlock2D::new([1, 1]);
    block.coord_mut([0, 0])[1] = 4.0;
    assert_eq!(block.coord([0, 0]), [0.0, 4.0]);
    assert_eq!(block.num_points(), 1);
}
