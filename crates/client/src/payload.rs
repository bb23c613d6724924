//! Reading upload files into an encoded [`Payload`].

use std::io::ErrorKind;
use std::path::Path;

use moblog::{MoblogError, Payload};
use tokio::fs::File;
use tokio::io::AsyncReadExt;

/// Size of each read from the upload file.
pub const READ_CHUNK_SIZE: usize = 8 * 1024;

/// Reads the whole file at `path` and base64-encodes it.
///
/// The file is read in [`READ_CHUNK_SIZE`] chunks into one buffer, so files of
/// any size that fits in memory are supported. The handle is closed before
/// this returns, on success and on every error path.
pub async fn read_payload(path: impl AsRef<Path>) -> Result<Payload, MoblogError> {
    let path = path.as_ref();
    let io_error = |source| MoblogError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).await.map_err(io_error)?;
    let mut bytes = Vec::with_capacity(READ_CHUNK_SIZE);
    let mut chunk = vec![0u8; READ_CHUNK_SIZE];

    loop {
        let read = match file.read(&mut chunk).await {
            Ok(0) => break,
            Ok(read) => read,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(io_error(e)),
        };
        bytes.extend_from_slice(&chunk[..read]);
    }
    drop(file);

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read upload file");
    Ok(Payload::encode(&bytes))
}
