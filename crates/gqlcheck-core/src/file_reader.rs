use std::io;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, ReadContentError>;

/// Reads a GraphQL source file into a string.
///
/// The whole file must be valid UTF-8; the error for a file that is not
/// names the byte offset where decoding stopped.
pub fn read_content<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let path = file_path.as_ref();
    if !path.is_file() {
        return Err(ReadContentError::NotAFile(path.to_path_buf()));
    }

    let bytes = std::fs::read(path).map_err(|err| ReadContentError::Io {
        path: path.to_path_buf(),
        kind: err.kind(),
        message: err.to_string(),
    })?;

    String::from_utf8(bytes).map_err(|err| ReadContentError::InvalidUtf8 {
        path: path.to_path_buf(),
        valid_up_to: err.utf8_error().valid_up_to(),
    })
}

/// Why a source file could not be read.
///
/// I/O failures keep their [`io::ErrorKind`] and message rather than the
/// [`io::Error`] itself, so these errors compare and clone like the rest of
/// the load errors.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ReadContentError {
    #[error("{} is not valid UTF-8 (at byte {valid_up_to})", path.display())]
    InvalidUtf8 {
        path: PathBuf,
        valid_up_to: usize,
    },

    #[error("Failed to read {}: {message}", path.display())]
    Io {
        path: PathBuf,
        kind: io::ErrorKind,
        message: String,
    },

    #[error("{} is not a file", .0.display())]
    NotAFile(PathBuf),
}

impl ReadContentError {
    pub fn file_path(&self) -> &Path {
        match self {
            ReadContentError::InvalidUtf8 { path, .. }
            | ReadContentError::Io { path, .. }
            | ReadContentError::NotAFile(path) => path,
        }
    }
}
