use crate::prelude::*;

use quick_xml::events::{BytesEnd, BytesStart, Event};

/// A single encoded data array waiting to be written to the `AppendedData` trailer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendedBuffer {
    offset: usize,
    bytes: Vec<u8>,
}

impl AppendedBuffer {
    /// position of the first byte of this buffer, counted from the first byte after
    /// the leading `_` of the trailer
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Collects the payloads of appended data arrays while a file is being written
///
/// Every buffer is given the offset it will have in the trailer when it is submitted.
/// Buffers are never changed after they are submitted, and [`AppendedData::flush`]
/// consumes the collection so that the trailer can only be written once.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AppendedData {
    buffers: Vec<AppendedBuffer>,
    length: usize,
}

impl AppendedData {
    pub fn new() -> Self {
        Self::default()
    }

    /// store `bytes` at the end of the trailer and return its offset
    pub fn submit(&mut self, bytes: Vec<u8>) -> usize {
        let offset = self.length;
        self.length += bytes.len();
        self.buffers.push(AppendedBuffer { offset, bytes });
        offset
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }

    pub fn buffers(&self) -> &[AppendedBuffer] {
        &self.buffers
    }

    /// total length of every buffer submitted so far. This is also the offset the next
    /// buffer will receive
    pub fn byte_length(&self) -> usize {
        self.length
    }

    /// Write the `AppendedData` element with every buffer in the order they were
    /// submitted. Nothing is written if no buffers were submitted.
    pub fn flush<W: Write>(self, writer: &mut Writer<W>) -> Result<(), Error> {
        if self.is_empty() {
            return Ok(());
        }

        log::debug!(
            "writing {} appended buffer(s), {} bytes in total",
            self.buffers.len(),
            self.length
        );

        let start = BytesStart::new("AppendedData").with_attributes([("encoding", "base64")]);
        writer.write_event(Event::Start(start))?;

        let inner = writer.inner();
        inner.write_all(b"_")?;
        for buffer in &self.buffers {
            inner.write_all(&buffer.bytes)?;
        }

        writer.write_event(Event::End(BytesEnd::new("AppendedData")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_running_totals() {
        let mut appended = AppendedData::new();

        assert_eq!(appended.submit(vec![0; 12]), 0);
        assert_eq!(appended.submit(vec![1; 4]), 12);
        assert_eq!(appended.submit(Vec::new()), 16);
        assert_eq!(appended.submit(vec![2; 8]), 16);

        assert_eq!(appended.byte_length(), 24);
        let offsets: Vec<_> = appended.buffers().iter().map(|b| b.offset()).collect();
        assert_eq!(offsets, vec![0, 12, 16, 16]);
    }

    #[test]
    fn empty_trailer_writes_nothing() {
        let mut output = Vec::new();
        let mut writer = Writer::new(&mut output);

        AppendedData::new().flush(&mut writer).unwrap();

        assert!(output.is_empty());
    }

    #[test]
    fn buffers_are_concatenated_after_underscore() {
        let mut output = Vec::new();
        let mut writer = Writer::new(&mut output);

        let mut appended = AppendedData::new();
        appended.submit(b"AAAA".to_vec());
        appended.submit(b"BBBB".to_vec());
        appended.flush(&mut writer).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(
            text,
            "<AppendedData encoding=\"base64\">_AAAABBBB</AppendedData>"
        );
    }
}
