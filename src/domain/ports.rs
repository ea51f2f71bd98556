use crate::utils::error::Result;

/// Byte-level file access for uploads and exports.
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
    /// Human-readable location of `path`, used in log and page output.
    fn location(&self, path: &str) -> String;
}
