//! Binary table writer: encode as Arrow IPC, compress, seal with a checksum.

use std::path::Path;

use polars::prelude::{DataFrame, IpcWriter, SerWriter};
use wrangle_core::config::BinaryCodec;

use crate::codec;
use crate::error::Result;
use crate::frame::{self, FrameHeader};

pub fn write_path(table: &DataFrame, path: impl AsRef<Path>, codec: BinaryCodec) -> Result<()> {
    std::fs::write(path, encode(table, codec)?)?;
    Ok(())
}

/// Serialize `table` into a sealed frame. The IPC payload keeps every column
/// type and every value, including NaN and infinite floats.
pub fn encode(table: &DataFrame, codec: BinaryCodec) -> Result<Vec<u8>> {
    let mut raw = Vec::new();
    let mut df = table.clone();
    IpcWriter::new(&mut raw).finish(&mut df)?;

    let packed = codec::compress(codec, &raw)?;
    let header = FrameHeader::new(codec, raw.len() as u64, packed.len() as u64);
    Ok(frame::seal(&header, &packed))
}
