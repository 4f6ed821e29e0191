//! Binary table reader: open the frame, decompress, decode the IPC payload.

use std::io::Cursor;
use std::path::Path;

use polars::prelude::{DataFrame, IpcReader, SerReader};

use crate::codec;
use crate::error::{Error, Result};
use crate::frame;

pub fn read_path(path: impl AsRef<Path>) -> Result<DataFrame> {
    let bytes = std::fs::read(path)?;
    read(&bytes)
}

pub fn read(bytes: &[u8]) -> Result<DataFrame> {
    let (header, payload) = frame::open(bytes)?;
    let raw = codec::decompress(header.codec, payload)?;
    if raw.len() as u64 != header.uncompressed_len {
        return Err(Error::Codec(format!(
            "decompressed {} bytes, header says {}",
            raw.len(),
            header.uncompressed_len
        )));
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(codec = ?header.codec, bytes = raw.len(), "binary table read");

    Ok(IpcReader::new(Cursor::new(raw)).finish()?)
}
