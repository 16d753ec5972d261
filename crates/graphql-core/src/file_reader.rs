use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Loads a GraphQL source file (SDL or executable document) as a `String`.
/// Directories and other non-file paths are rejected up front so the error
/// names the actual problem rather than an OS-specific read failure.
pub fn read_content<P: AsRef<Path>>(
    file_path: P,
) -> Result<String, ReadContentError> {
    let path = file_path.as_ref();
    if !path.is_file() {
        return Err(ReadContentError::NotAFile(path.to_path_buf()));
    }

    std::fs::read_to_string(path).map_err(|source| ReadContentError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Debug, Error)]
pub enum ReadContentError {
    /// Includes content that isn't valid UTF-8, which surfaces as
    /// [`std::io::ErrorKind::InvalidData`].
    #[error("Could not read `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("`{}` is not a file", .0.display())]
    NotAFile(PathBuf),
}
impl PartialEq for ReadContentError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Io { path: a, source: a_err }, Self::Io { path: b, source: b_err }) =>
                a == b && a_err.kind() == b_err.kind(),
            (Self::NotAFile(a), Self::NotAFile(b)) => a == b,
            _ => false,
        }
    }
}
