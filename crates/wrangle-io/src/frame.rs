//! Binary table frame.
//!
//! Layout on disk:
//! [ magic: u32 ][ version: u16 ][ codec: u8 ][ reserved: u8 ]
//! [ uncompressed_len: u64 ][ compressed_len: u64 ]
//! [ payload bytes … ][ checksum: 32 bytes ]
//!
//! The payload is the table as an Arrow IPC file, compressed with `codec`.
//! The trailing checksum is blake3 over (header || payload).

use wrangle_core::config::BinaryCodec;

use crate::error::{Error, Result};

pub const MAGIC: u32 = 0x57525442; // "WRTB"
pub const VERSION: u16 = 1;
pub const HEADER_LEN: usize = 4 + 2 + 1 + 1 + 8 + 8;
pub const CHECKSUM_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameHeader {
    pub codec: BinaryCodec,
    pub uncompressed_len: u64,
    pub compressed_len: u64,
}

impl FrameHeader {
    pub fn new(codec: BinaryCodec, uncompressed_len: u64, compressed_len: u64) -> Self {
        Self {
            codec,
            uncompressed_len,
            compressed_len,
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN);
        out.extend_from_slice(&MAGIC.to_le_bytes());
        out.extend_from_slice(&VERSION.to_le_bytes());
        out.push(self.codec as u8);
        out.push(0u8); // reserved
        out.extend_from_slice(&self.uncompressed_len.to_le_bytes());
        out.extend_from_slice(&self.compressed_len.to_le_bytes());
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(Error::Codec("short header".into()));
        }
        let mut magic = [0u8; 4];
        magic.copy_from_slice(&bytes[0..4]);
        let mut version = [0u8; 2];
        version.copy_from_slice(&bytes[4..6]);
        if u32::from_le_bytes(magic) != MAGIC || u16::from_le_bytes(version) != VERSION {
            return Err(Error::Codec("bad magic/version".into()));
        }
        let codec = BinaryCodec::from_u8(bytes[6]).ok_or(Error::CodecUnsupported("unknown"))?;
        // bytes[7] reserved
        Ok(Self {
            codec,
            uncompressed_len: read_u64(&bytes[8..16]),
            compressed_len: read_u64(&bytes[16..24]),
        })
    }
}

fn read_u64(bytes: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(bytes);
    u64::from_le_bytes(buf)
}

/// Assemble `header || payload || checksum`.
pub fn seal(header: &FrameHeader, payload: &[u8]) -> Vec<u8> {
    let header_bytes = header.to_bytes();
    let mut hasher = blake3::Hasher::new();
    hasher.update(&header_bytes);
    hasher.update(payload);
    let checksum: [u8; 32] = hasher.finalize().into();

    let mut out = Vec::with_capacity(HEADER_LEN + payload.len() + CHECKSUM_LEN);
    out.extend_from_slice(&header_bytes);
    out.extend_from_slice(payload);
    out.extend_from_slice(&checksum);
    out
}

/// Validate a sealed frame and return its header and (still compressed) payload.
pub fn open(bytes: &[u8]) -> Result<(FrameHeader, &[u8])> {
    if bytes.len() < HEADER_LEN + CHECKSUM_LEN {
        return Err(Error::Codec(format!(
            "file too short for a table frame ({} bytes)",
            bytes.len()
        )));
    }
    let header = FrameHeader::from_bytes(&bytes[..HEADER_LEN])?;
    let body_end = bytes.len() - CHECKSUM_LEN;
    let payload = &bytes[HEADER_LEN..body_end];
    if payload.len() as u64 != header.compressed_len {
        return Err(Error::Codec(format!(
            "payload is {} bytes, header says {}",
            payload.len(),
            header.compressed_len
        )));
    }

    let mut hasher = blake3::Hasher::new();
    hasher.update(&bytes[..body_end]);
    if hasher.finalize().as_bytes() != &bytes[body_end..] {
        return Err(Error::ChecksumMismatch);
    }
    Ok((header, payload))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_layout_is_stable() {
        let h = FrameHeader::new(BinaryCodec::None, 10, 10);
        let bytes = h.to_bytes();
        assert_eq!(bytes.len(), HEADER_LEN);
        assert_eq!(&bytes[0..4], &MAGIC.to_le_bytes());
        assert_eq!(FrameHeader::from_bytes(&bytes).unwrap(), h);
    }

    #[test]
    fn open_detects_corruption() {
        let sealed = seal(&FrameHeader::new(BinaryCodec::None, 3, 3), b"abc");
        let (header, payload) = open(&sealed).unwrap();
        assert_eq!(header.compressed_len, 3);
        assert_eq!(payload, b"abc");

        let mut bad = sealed.clone();
        bad[HEADER_LEN] ^= 0xff;
        assert!(matches!(open(&bad), Err(Error::ChecksumMismatch)));
    }

    #[test]
    fn open_rejects_foreign_bytes() {
        let junk = vec![0u8; HEADER_LEN + CHECKSUM_LEN];
        assert!(matches!(open(&junk), Err(Error::Codec(_))));
        assert!(matches!(open(b"id,name\n"), Err(Error::Codec(_))));
    }
}
