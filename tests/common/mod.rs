#![allow(dead_code)]

use byteorder::{BigEndian, ByteOrder, LittleEndian, WriteBytesExt};
use plot3d_vtk::MeshBlock3D;
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// a block where every coordinate is distinct and easy to recognise
pub fn numbered_block(extent: [usize; 3], seed: f64) -> MeshBlock3D {
    let mut block = MeshBlock3D::new(extent);
    let [ni, nj, nk] = extent;

    for k in 0..nk {
        for j in 0..nj {
            for i in 0..ni {
                block.set_coord(
                    [i, j, k],
                    [seed + i as f64, seed + 10.0 * j as f64, seed + 100.0 * k as f64],
                );
            }
        }
    }

    block
}

fn component_values(block: &MeshBlock3D, axis: usize) -> Vec<f64> {
    let [ni, nj, nk] = block.extent();
    let mut values = Vec::new();
    for k in 0..nk {
        for j in 0..nj {
            for i in 0..ni {
                values.push(block.coord([i, j, k])[axis]);
            }
        }
    }
    values
}

pub fn ascii_file(blocks: &[MeshBlock3D], dims: usize, single_block: bool) -> String {
    let mut text = String::new();

    if !single_block {
        text.push_str(&format!("{}\n", blocks.len()));
    }

    for block in blocks {
        let extent = block.extent();
        let tokens: Vec<String> = extent[..dims].iter().map(|n| n.to_string()).collect();
        text.push_str(&tokens.join(" "));
        text.push('\n');
    }

    for block in blocks {
        for axis in 0..dims {
            for value in component_values(block, axis) {
                text.push_str(&format!("{}\n", value));
            }
        }
    }

    text
}

pub fn record<B: ByteOrder>(out: &mut Vec<u8>, payload: &[u8]) {
    out.write_u32::<B>(payload.len() as u32).unwrap();
    out.extend_from_slice(payload);
    out.write_u32::<B>(payload.len() as u32).unwrap();
}

pub fn binary_file<B: ByteOrder>(blocks: &[MeshBlock3D], dims: usize, single_block: bool) -> Vec<u8> {
    let mut out = Vec::new();

    if !single_block {
        let mut payload = Vec::new();
        payload.write_i32::<B>(blocks.len() as i32).unwrap();
        record::<B>(&mut out, &payload);
    }

    let mut payload = Vec::new();
    for block in blocks {
        for n in &block.extent()[..dims] {
            payload.write_i32::<B>(*n as i32).unwrap();
        }
    }
    record::<B>(&mut out, &payload);

    for block in blocks {
        let mut payload = Vec::new();
        for axis in 0..dims {
            for value in component_values(block, axis) {
                payload.write_f64::<B>(value).unwrap();
            }
        }
        record::<B>(&mut out, &payload);
    }

    out
}

pub fn binary_file_le(blocks: &[MeshBlock3D], dims: usize, single_block: bool) -> Vec<u8> {
    binary_file::<LittleEndian>(blocks, dims, single_block)
}

pub fn binary_file_be(blocks: &[MeshBlock3D], dims: usize, single_block: bool) -> Vec<u8> {
    binary_file::<BigEndian>(blocks, dims, single_block)
}

/// a `DataArray` element of a written vtk file
#[derive(Debug, Clone, Default)]
pub struct DataArrayElement {
    pub parent: String,
    pub name: String,
    pub data_type: String,
    pub components: usize,
    pub format: String,
    pub offset: Option<usize>,
    pub text: String,
}

fn attribute(start: &BytesStart, key: &str) -> Option<String> {
    start
        .attributes()
        .map(|attribute| attribute.unwrap())
        .find(|attribute| attribute.key.as_ref() == key.as_bytes())
        .map(|attribute| String::from_utf8(attribute.value.into_owned()).unwrap())
}

fn data_array(start: &BytesStart, parent: Option<&String>) -> DataArrayElement {
    DataArrayElement {
        parent: parent.cloned().unwrap_or_default(),
        name: attribute(start, "Name").unwrap(),
        data_type: attribute(start, "type").unwrap(),
        components: attribute(start, "NumberOfComponents")
            .unwrap()
            .parse()
            .unwrap(),
        format: attribute(start, "format").unwrap(),
        offset: attribute(start, "offset").map(|offset| offset.parse().unwrap()),
        text: String::new(),
    }
}

/// every `DataArray` in the document, in document order
pub fn data_arrays(xml: &str) -> Vec<DataArrayElement> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut parents: Vec<String> = Vec::new();
    let mut arrays = Vec::new();

    loop {
        match reader.read_event().unwrap() {
            Event::Start(start) => {
                let name = String::from_utf8(start.name().as_ref().to_vec()).unwrap();
                if name == "DataArray" {
                    arrays.push(data_array(&start, parents.last()));
                }
                parents.push(name);
            }
            Event::Empty(start) => {
                if start.name().as_ref() == b"DataArray" {
                    arrays.push(data_array(&start, parents.last()));
                }
            }
            Event::Text(text) => {
                if parents.last().map(String::as_str) == Some("DataArray") {
                    if let Some(array) = arrays.last_mut() {
                        array.text = text.unescape().unwrap().into_owned();
                    }
                }
            }
            Event::End(_) => {
                parents.pop();
            }
            Event::Eof => break,
            _ => (),
        }
    }

    arrays
}

/// names of every element that is opened, in document order
pub fn element_names(xml: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut names = Vec::new();

    loop {
        match reader.read_event().unwrap() {
            Event::Start(start) | Event::Empty(start) => {
                names.push(String::from_utf8(start.name().as_ref().to_vec()).unwrap());
            }
            Event::Eof => break,
            _ => (),
        }
    }

    names
}

/// values of an attribute on every element with the given name
pub fn attribute_values(xml: &str, element: &str, key: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut values = Vec::new();

    loop {
        match reader.read_event().unwrap() {
            Event::Start(start) | Event::Empty(start) => {
                if start.name().as_ref() == element.as_bytes() {
                    if let Some(value) = attribute(&start, key) {
                        values.push(value);
                    }
                }
            }
            Event::Eof => break,
            _ => (),
        }
    }

    values
}

/// the encoded content of the `AppendedData` element, without the leading `_`
pub fn appended_trailer(xml: &str) -> &str {
    let open = "<AppendedData encoding=\"base64\">_";
    let start = xml.find(open).unwrap() + open.len();
    let end = xml.find("</AppendedData>").unwrap();
    xml[start..end].trim_end()
}

/// parse whitespace separated values from the text of an ascii data array
pub fn ascii_values<T: std::str::FromStr>(text: &str) -> Vec<T>
where
    T::Err: std::fmt::Debug,
{
    text.split_whitespace()
        .map(|value| value.parse().unwrap())
        .collect()
}
