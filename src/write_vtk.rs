use crate::appended::AppendedData;
use crate::prelude::*;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

/// the encoding to use when writing a dataarray
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// decimal text inside the `DataArray` element
    Ascii,
    /// base64 inside the `DataArray` element
    Base64,
    /// base64 in the `AppendedData` trailer, referenced by offset
    ///
    /// The offset attribute is written in lowercase (`offset`), which is the name vtk
    /// readers look for, rather than `Offset`.
    Appended,
}

impl Encoding {
    /// value of the `format` attribute of a `DataArray`
    pub fn to_str(&self) -> &'static str {
        match &self {
            Self::Ascii => "ascii",
            Self::Base64 => "binary",
            Self::Appended => "appended",
        }
    }

    pub fn from_flags(ascii: bool, appended: bool) -> Result<Self, ConfigError> {
        match (ascii, appended) {
            (true, true) => Err(ConfigError::AsciiAppended),
            (true, false) => Ok(Self::Ascii),
            (false, false) => Ok(Self::Base64),
            (false, true) => Ok(Self::Appended),
        }
    }
}

/// Settings for a [`VtkWriter`]
///
/// The default writes binary data to the appended section, with floats rendered as the
/// shortest text that reads back to the same value should ascii be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriterConfig {
    pub ascii: bool,
    pub appended: bool,
    /// number of significant digits for ascii floats. Small and large magnitudes switch
    /// to exponent notation (`1.5e-9`), the same way C's `%g` does
    pub precision: Option<usize>,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            ascii: false,
            appended: true,
            precision: None,
        }
    }
}

impl WriterConfig {
    pub fn encoding(&self) -> Result<Encoding, ConfigError> {
        Encoding::from_flags(self.ascii, self.appended)
    }
}

/// The vtk XML dataset types. Only `UnstructuredGrid` can be written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GridType {
    ImageData,
    RectilinearGrid,
    StructuredGrid,
    PolyData,
    UnstructuredGrid,
}

/// A vtk file that has not been opened yet
///
/// The configuration is checked when the writer is created, so an invalid encoding never
/// reaches the output. [`VtkWriter::open`] writes the document header and returns the
/// session that pieces are written through.
pub struct VtkWriter<W: Write> {
    writer: Writer<W>,
    encoding: Encoding,
    precision: Option<usize>,
}

impl<W: Write> VtkWriter<W> {
    pub fn new(output: W, config: &WriterConfig) -> Result<Self, Error> {
        let encoding = config.encoding()?;

        Ok(Self {
            writer: Writer::new_with_indent(output, b' ', 2),
            encoding,
            precision: config.precision,
        })
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn open(mut self, grid_type: GridType) -> Result<UnstructuredGridWriter<W>, Error> {
        if grid_type != GridType::UnstructuredGrid {
            return Err(ConfigError::UnsupportedGridType(grid_type).into());
        }

        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let grid_name = grid_type.to_string();

        let vtk_file = BytesStart::new("VTKFile").with_attributes([
            ("type", grid_name.as_str()),
            ("version", "1.0"),
            ("byte_order", "LittleEndian"),
            ("header_type", "UInt64"),
        ]);
        self.writer.write_event(Event::Start(vtk_file))?;

        self.writer
            .write_event(Event::Start(BytesStart::new(grid_name.as_str())))?;

        log::debug!(
            "opened {} file with {:?} data arrays",
            grid_name,
            self.encoding
        );

        Ok(UnstructuredGridWriter {
            writer: self.writer,
            encoding: self.encoding,
            precision: self.precision,
            appended: AppendedData::new(),
            pieces: 0,
        })
    }
}

/// An open `UnstructuredGrid` file
///
/// Any number of pieces can be written with [`write_piece`](Self::write_piece).
/// [`close`](Self::close) finishes the document, writing the appended data trailer if
/// any array was deferred to it, and hands back the output.
pub struct UnstructuredGridWriter<W: Write> {
    writer: Writer<W>,
    encoding: Encoding,
    precision: Option<usize>,
    appended: AppendedData,
    pieces: usize,
}

impl<W: Write> UnstructuredGridWriter<W> {
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn pieces_written(&self) -> usize {
        self.pieces
    }

    /// payloads waiting for the trailer
    pub fn appended(&self) -> &AppendedData {
        &self.appended
    }

    /// Write a single `Piece` element containing the mesh and every data array of
    /// `dataset`
    pub fn write_piece(&mut self, dataset: &UnstructuredDataset) -> Result<(), Error> {
        let mesh = &dataset.mesh;

        let num_points = mesh.num_points().to_string();
        let num_cells = mesh.num_cells().to_string();

        log::debug!(
            "writing piece {} with {} points and {} cells",
            self.pieces,
            num_points,
            num_cells
        );

        let piece = BytesStart::new("Piece").with_attributes([
            ("NumberOfPoints", num_points.as_str()),
            ("NumberOfCells", num_cells.as_str()),
        ]);
        self.writer.write_event(Event::Start(piece))?;

        self.start("Points")?;
        self.write_data_array("Points", mesh.points.as_slice())?;
        self.end("Points")?;

        self.start("Cells")?;
        self.write_data_array("types", mesh.cell_types().as_slice())?;
        self.write_data_array("offsets", mesh.offsets().as_slice())?;
        self.write_data_array("connectivity", mesh.connectivity().as_slice())?;
        self.end("Cells")?;

        self.start("PointData")?;
        for (name, values) in &dataset.integer_point_data {
            self.write_data_array(name, values.as_slice())?;
        }
        for (name, values) in &dataset.scalar_point_data {
            self.write_data_array(name, values.as_slice())?;
        }
        for (name, values) in &dataset.vector_point_data {
            self.write_data_array(name, values.as_slice())?;
        }
        self.end("PointData")?;

        self.start("CellData")?;
        for (name, values) in &dataset.integer_cell_data {
            self.write_data_array(name, values.as_slice())?;
        }
        for (name, values) in &dataset.scalar_cell_data {
            self.write_data_array(name, values.as_slice())?;
        }
        for (name, values) in &dataset.vector_cell_data {
            self.write_data_array(name, values.as_slice())?;
        }
        self.end("CellData")?;

        self.end("Piece")?;

        self.pieces += 1;

        Ok(())
    }

    /// Finish the document and return the output it was written to
    pub fn close(self) -> Result<W, Error> {
        let Self {
            mut writer,
            appended,
            pieces,
            ..
        } = self;

        writer.write_event(Event::End(BytesEnd::new("UnstructuredGrid")))?;

        appended.flush(&mut writer)?;

        writer.write_event(Event::End(BytesEnd::new("VTKFile")))?;

        log::debug!("closed UnstructuredGrid file after {} piece(s)", pieces);

        Ok(writer.into_inner())
    }

    fn start(&mut self, name: &str) -> Result<(), Error> {
        self.writer
            .write_event(Event::Start(BytesStart::new(name)))?;
        Ok(())
    }

    fn end(&mut self, name: &str) -> Result<(), Error> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    /// write a single array of data (such as x-velocity) in the encoding of this file
    fn write_data_array<A: Array + ?Sized>(&mut self, name: &str, array: &A) -> Result<(), Error> {
        let components = array.components().to_string();

        let mut header = BytesStart::new("DataArray").with_attributes([
            ("type", array.precision().to_str()),
            ("Name", name),
            ("NumberOfComponents", components.as_str()),
            ("format", self.encoding.to_str()),
        ]);

        match self.encoding {
            Encoding::Ascii => {
                let data = array.ascii_body(self.precision);
                self.writer.write_event(Event::Start(header))?;
                self.writer
                    .write_event(Event::Text(BytesText::new(&data)))?;
                self.end("DataArray")?;
            }
            Encoding::Base64 => {
                let data = base64::encode(array.binary_payload());
                self.writer.write_event(Event::Start(header))?;
                self.writer
                    .write_event(Event::Text(BytesText::new(&data)))?;
                self.end("DataArray")?;
            }
            Encoding::Appended => {
                let data = base64::encode(array.binary_payload());
                let offset = self.appended.submit(data.into_bytes()).to_string();
                header.push_attribute(("offset", offset.as_str()));
                self.writer.write_event(Event::Empty(header))?;
            }
        }

        Ok(())
    }
}
