use crate::prelude::*;
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone, PartialEq)]
/// Container for one piece of an `UnstructuredGrid` file
///
/// `UnstructuredDataset` holds the [`UnstructuredMesh`] together with any number of named
/// data arrays attached to its points or cells. Arrays are grouped by kind (integer,
/// scalar, 3-vector) and are written in that category order; within a category they are
/// written in order of their names.
///
/// The length of each point array must match the number of points in the mesh, and the
/// length of each cell array must match the number of cells. This is not checked when
/// the dataset is written.
pub struct UnstructuredDataset {
    pub mesh: UnstructuredMesh,
    pub integer_point_data: BTreeMap<String, Vec<i64>>,
    pub scalar_point_data: BTreeMap<String, Vec<f64>>,
    pub vector_point_data: BTreeMap<String, Vec<[f64; 3]>>,
    pub integer_cell_data: BTreeMap<String, Vec<i64>>,
    pub scalar_cell_data: BTreeMap<String, Vec<f64>>,
    pub vector_cell_data: BTreeMap<String, Vec<[f64; 3]>>,
}

impl UnstructuredDataset {
    /// Construct a dataset for a mesh without any data arrays
    pub fn from_mesh(mesh: UnstructuredMesh) -> Self {
        Self {
            mesh,
            ..Default::default()
        }
    }

    pub fn add_integer_point_data<T: Into<String>>(&mut self, name: T, values: Vec<i64>) {
        self.integer_point_data.insert(name.into(), values);
    }

    pub fn add_scalar_point_data<T: Into<String>>(&mut self, name: T, values: Vec<f64>) {
        self.scalar_point_data.insert(name.into(), values);
    }

    pub fn add_vector_point_data<T: Into<String>>(&mut self, name: T, values: Vec<[f64; 3]>) {
        self.vector_point_data.insert(name.into(), values);
    }

    pub fn add_integer_cell_data<T: Into<String>>(&mut self, name: T, values: Vec<i64>) {
        self.integer_cell_data.insert(name.into(), values);
    }

    pub fn add_scalar_cell_data<T: Into<String>>(&mut self, name: T, values: Vec<f64>) {
        self.scalar_cell_data.insert(name.into(), values);
    }

    pub fn add_vector_cell_data<T: Into<String>>(&mut self, name: T, values: Vec<[f64; 3]>) {
        self.vector_cell_data.insert(name.into(), values);
    }

    /// `true` if no data arrays are attached to the points or cells
    pub fn has_no_data(&self) -> bool {
        self.integer_point_data.is_empty()
            && self.scalar_point_data.is_empty()
            && self.vector_point_data.is_empty()
            && self.integer_cell_data.is_empty()
            && self.scalar_cell_data.is_empty()
            && self.vector_cell_data.is_empty()
    }
}

impl From<UnstructuredMesh> for UnstructuredDataset {
    fn from(mesh: UnstructuredMesh) -> Self {
        Self::from_mesh(mesh)
    }
}

#[test]
fn arrays_are_keyed_by_name() {
    let mut data = UnstructuredDataset::from(UnstructuredMesh::default());
    assert!(data.has_no_data());

    data.add_scalar_point_data("pressure", vec![1.0]);
    data.add_scalar_point_data("density", vec![2.0]);
    data.add_scalar_point_data("pressure", vec![3.0]);

    let names: Vec<_> = data.scalar_point_data.keys().cloned().collect();
    assert_eq!(names, vec!["density", "pressure"]);
    assert_eq!(data.scalar_point_data["pressure"], vec![3.0]);
    assert!(!data.has_no_data());
}
