use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    InputNotFound(PathBuf),
    /// An existing output file could not be removed
    OutputLocked(PathBuf),
    /// Saving failed because the target is held open elsewhere
    FileInUse(PathBuf),
    Zip(zip::result::ZipError),
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InputNotFound(path) => write!(f, "Input file '{}' not found.", path.display()),
            Error::OutputLocked(path) => write!(
                f,
                "Cannot delete {}. The file may be open in another program.",
                path.display()
            ),
            Error::FileInUse(path) => write!(
                f,
                "Cannot save {}. The file may be open in another program.",
                path.display()
            ),
            Error::Zip(e) => write!(f, "ZIP error: {e}"),
            Error::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<zip::result::ZipError> for Error {
    fn from(e: zip::result::ZipError) -> Self {
        Error::Zip(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
