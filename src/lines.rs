use std::io::BufRead;

use crate::error::{EnrichError, Result};

/// Line iterator over a record source.
///
/// Unlike `BufRead::lines`, bytes that are not valid UTF-8 do not end the
/// stream: they are replaced with U+FFFD and the line is handed to the
/// decoder like any other. Only real I/O errors are returned.
pub struct RecordLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> RecordLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for RecordLines<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => Some(Err(EnrichError::Read(e))),
        }
    }
}
