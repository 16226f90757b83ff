use crate::prelude::*;

#[derive(Debug, thiserror::Error, From)]
pub enum ParseError {
    #[error("{0}")]
    Ascii(AsciiError),
    #[error("{0}")]
    Binary(BinaryError),
}

impl ParseError {
    /// the 1-based line at which an ascii file was malformed. Binary files have no lines
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Ascii(err) => Some(err.line()),
            Self::Binary(_) => None,
        }
    }
}

#[derive(Display, Debug, Constructor)]
#[display(fmt = "malformed ascii plot3d file at line {line}: {kind}")]
pub struct AsciiError {
    line: usize,
    kind: AsciiErrorKind,
}

impl AsciiError {
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn kind(&self) -> &AsciiErrorKind {
        &self.kind
    }
}

impl std::error::Error for AsciiError {}

#[derive(Display, Debug)]
pub enum AsciiErrorKind {
    #[display(fmt = "unexpected end of file")]
    UnexpectedEof,
    #[display(fmt = "expected {expected} extents, found {found}")]
    TooFewExtents { expected: usize, found: usize },
    #[display(fmt = "`{_0}` is not an integer")]
    BadInteger(String),
    #[display(fmt = "`{_0}` is not a floating point number")]
    BadFloat(String),
    #[display(fmt = "block count must be at least 1, got {_0}")]
    BlockCount(i64),
    #[display(fmt = "block extents cannot be negative, got {_0}")]
    NegativeExtent(i64),
    #[display(fmt = "block extents {_0:?} hold too many points")]
    ExtentTooLarge([usize; 3]),
    #[display(fmt = "{_0}")]
    Io(std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum BinaryError {
    #[error("malformed binary plot3d file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed binary plot3d file: {0}")]
    RecordMismatch(#[from] RecordMismatch),
    #[error("malformed binary plot3d file: block count must be at least 1, got {0}")]
    BlockCount(i32),
    #[error("malformed binary plot3d file: block extents cannot be negative, got {0}")]
    NegativeExtent(i32),
    #[error("malformed binary plot3d file: block extents {0:?} hold too many points")]
    ExtentTooLarge([usize; 3]),
    #[error("malformed binary plot3d file: coordinate record of {found} bytes, expected {expected} bytes")]
    CoordinateRecord { expected: usize, found: u32 },
}

#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, Constructor)]
#[display(
    fmt = "record opened with a length of {open} bytes but closed with a length of {close} bytes"
)]
pub struct RecordMismatch {
    pub open: u32,
    pub close: u32,
}

impl std::error::Error for RecordMismatch {}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        Self::Binary(BinaryError::Io(err))
    }
}

impl From<RecordMismatch> for ParseError {
    fn from(err: RecordMismatch) -> Self {
        Self::Binary(BinaryError::RecordMismatch(err))
    }
}

#[test]
fn messages_carry_context() {
    let err = ParseError::from(AsciiError::new(
        4,
        AsciiErrorKind::TooFewExtents {
            expected: 3,
            found: 2,
        },
    ));
    assert_eq!(err.line(), Some(4));
    assert_eq!(
        err.to_string(),
        "malformed ascii plot3d file at line 4: expected 3 extents, found 2"
    );

    let err = ParseError::from(RecordMismatch::new(12, 16));
    assert_eq!(err.line(), None);
    assert!(err.to_string().contains("12 bytes"));
}
