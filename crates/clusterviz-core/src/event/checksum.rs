// crates/clusterviz-core/src/event/checksum.rs

/// Bytes appended after the hit records: crc32 then the 16-byte blake3 id.
pub const TRAILER_BYTES: usize = 4 + 16;

/// Append the integrity trailer: crc32 over `buf`, then blake3_16 over `buf` + crc.
pub fn seal(buf: &mut Vec<u8>) {
    let crc = crc32fast::hash(buf);
    buf.extend_from_slice(&crc.to_le_bytes());
    let id = content_id(buf);
    buf.extend_from_slice(&id);
}

/// Split off and verify the trailer, returning the record bytes it covers.
/// The error names whichever check failed first (blake3, then crc32).
pub fn unseal(bytes: &[u8]) -> Result<&[u8], &'static str> {
    let body_len = bytes
        .len()
        .checked_sub(TRAILER_BYTES)
        .ok_or("file too small")?;
    let (covered, id) = bytes.split_at(bytes.len() - 16);
    if content_id(covered) != id {
        return Err("blake3 mismatch");
    }
    let (body, crc) = covered.split_at(body_len);
    if crc32fast::hash(body).to_le_bytes() != crc {
        return Err("crc32 mismatch");
    }
    Ok(body)
}

/// First 16 bytes of the blake3 hash.
pub fn content_id(bytes: &[u8]) -> [u8; 16] {
    let mut out = [0u8; 16];
    out.copy_from_slice(&blake3::hash(bytes).as_bytes()[..16]);
    out
}

pub fn hex16(id: &[u8; 16]) -> String {
    id.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seal_then_unseal_returns_body() {
        let mut buf = b"EVT1body".to_vec();
        seal(&mut buf);
        assert_eq!(buf.len(), 8 + TRAILER_BYTES);
        assert_eq!(unseal(&buf).unwrap(), b"EVT1body");
    }

    #[test]
    fn tampered_crc_is_caught_by_blake3() {
        let mut buf = b"abc".to_vec();
        seal(&mut buf);
        buf[3] ^= 1;
        assert_eq!(unseal(&buf), Err("blake3 mismatch"));
        assert_eq!(unseal(&buf[..5]), Err("file too small"));
    }
}
