use std::io::{self, Write};

#[cfg(test)]
#[path = "./tests/response_tests.rs"]
mod tests;

/// A value in Redis protocol
#[derive(PartialEq, Debug, Clone)]
pub enum Response {
    /// No data
    Nil,
    /// A number
    Integer(i64),
    /// Binary data
    Data(Vec<u8>),
    /// A simple error string
    Error(String),
    /// A simple status string
    Status(String),
    /// An array of responses that may mix different types
    Array(Vec<Response>),
}

impl Response {
    /// Serializes the response into an array of bytes using Redis protocol.
    pub fn to_vec(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.encode_into(&mut buf);
        buf
    }

    /// Writes the serialized response to `w`.
    /// Nothing is flushed; that is up to the owner of `w`.
    pub fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.to_vec())
    }

    fn encode_into(&self, buf: &mut Vec<u8>) {
        match *self {
            Response::Nil => buf.extend_from_slice(b"$-1\r\n"),
            Response::Data(ref d) => {
                buf.extend_from_slice(format!("${}\r\n", d.len()).as_bytes());
                buf.extend_from_slice(d);
                buf.extend_from_slice(b"\r\n");
            }
            Response::Integer(i) => buf.extend_from_slice(format!(":{}\r\n", i).as_bytes()),
            Response::Error(ref d) => line(buf, b'-', d),
            Response::Status(ref d) => line(buf, b'+', d),
            Response::Array(ref a) => {
                ArrayHeader::new(a.len()).encode_into(buf);
                for el in a.iter() {
                    el.encode_into(buf);
                }
            }
        }
    }

    /// Returns true if and only if the response is an error.
    pub fn is_error(&self) -> bool {
        matches!(*self, Response::Error(_))
    }
}

fn line(buf: &mut Vec<u8>, prefix: u8, s: &str) {
    buf.push(prefix);
    buf.extend_from_slice(s.as_bytes());
    buf.extend_from_slice(b"\r\n");
}

impl From<&str> for Response {
    fn from(s: &str) -> Self {
        Response::Data(s.as_bytes().to_vec())
    }
}

impl From<String> for Response {
    fn from(s: String) -> Self {
        Response::Data(s.into_bytes())
    }
}

impl From<i64> for Response {
    fn from(i: i64) -> Self {
        Response::Integer(i)
    }
}

/// ArrayHeader is the `*<n>\r\n` prefix of an array.
///
/// It is used to stream an array whose elements are written one by one
/// instead of building a whole `Response::Array` in memory.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct ArrayHeader {
    pub n: usize,
}

impl ArrayHeader {
    pub fn new(n: usize) -> Self {
        ArrayHeader { n }
    }

    pub fn to_vec(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.encode_into(&mut buf);
        buf
    }

    pub fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.to_vec())
    }

    fn encode_into(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(format!("*{}\r\n", self.n).as_bytes());
    }
}
