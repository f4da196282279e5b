// crates/clusterviz-core/src/event/format.rs

use crate::error::{Result, VizError};
use crate::event::checksum::{hex16, seal, unseal, TRAILER_BYTES};
use crate::event::hit::{Event, Hit};

const MAGIC: &[u8; 4] = b"EVT1";
const HIT_BYTES: usize = 8 * 4;

/// Binary event container.
/// Layout (little-endian):
/// MAGIC[4]
/// hit_count:u32
/// hits: repeated { x:f32 y:f32 z:f32 energy:f32 time:f32 cluster:i32 pdgid:i32 status:u32 }
/// crc32:u32          (over everything before crc32)
/// blake3_16:[16]     (over everything before blake3)
pub fn encode(e: &Event) -> Result<Vec<u8>> {
    let n = u32::try_from(e.len())
        .map_err(|_| VizError::EventFormat(format!("too many hits: {}", e.len())))?;

    let mut b = Vec::with_capacity(4 + 4 + e.len() * HIT_BYTES + TRAILER_BYTES);
    b.extend_from_slice(MAGIC);
    b.extend_from_slice(&n.to_le_bytes());

    for h in &e.hits {
        b.extend_from_slice(&h.x.to_le_bytes());
        b.extend_from_slice(&h.y.to_le_bytes());
        b.extend_from_slice(&h.z.to_le_bytes());
        b.extend_from_slice(&h.energy.to_le_bytes());
        b.extend_from_slice(&h.time.to_le_bytes());
        b.extend_from_slice(&h.cluster.to_le_bytes());
        b.extend_from_slice(&h.pdgid.to_le_bytes());
        b.extend_from_slice(&h.status.to_le_bytes());
    }

    seal(&mut b);
    Ok(b)
}

pub fn decode(bytes: &[u8]) -> Result<Event> {
    if bytes.len() < 4 || &bytes[0..4] != MAGIC {
        return Err(VizError::EventFormat("bad magic".into()));
    }
    if bytes.len() < 8 + TRAILER_BYTES {
        return Err(VizError::EventFormat("file too small".into()));
    }

    let records = unseal(bytes).map_err(|e| VizError::EventFormat(e.into()))?;

    let mut i = 4usize;
    let n = read_u32(records, &mut i)? as usize;
    let body = records.len() - i;
    if n.checked_mul(HIT_BYTES) != Some(body) {
        return Err(VizError::EventFormat(format!(
            "hit_count {n} does not match body of {body} bytes"
        )));
    }

    let mut hits = Vec::with_capacity(n);
    for _ in 0..n {
        hits.push(Hit {
            x: read_f32(records, &mut i)?,
            y: read_f32(records, &mut i)?,
            z: read_f32(records, &mut i)?,
            energy: read_f32(records, &mut i)?,
            time: read_f32(records, &mut i)?,
            cluster: read_u32(records, &mut i)? as i32,
            pdgid: read_u32(records, &mut i)? as i32,
            status: read_u32(records, &mut i)?,
        });
    }

    Ok(Event { hits })
}

/// Content id: hex of the blake3_16 trailer of the encoded event.
pub fn event_id_hex(e: &Event) -> Result<String> {
    let bytes = encode(e)?;
    event_id_16_from_encoded(&bytes).map(|id| hex16(&id))
}

/// The blake3_16 trailer of an already-encoded event (not verified).
pub fn event_id_16_from_encoded(bytes: &[u8]) -> Result<[u8; 16]> {
    if bytes.len() < 8 + TRAILER_BYTES {
        return Err(VizError::EventFormat("file too small".into()));
    }
    let mut id = [0u8; 16];
    id.copy_from_slice(&bytes[bytes.len() - 16..]);
    Ok(id)
}

fn read_u32(b: &[u8], i: &mut usize) -> Result<u32> {
    let end = *i + 4;
    let s = b
        .get(*i..end)
        .ok_or_else(|| VizError::EventFormat("unexpected eof".into()))?;
    *i = end;
    Ok(u32::from_le_bytes([s[0], s[1], s[2], s[3]]))
}

fn read_f32(b: &[u8], i: &mut usize) -> Result<f32> {
    read_u32(b, i).map(f32::from_bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Event {
        Event::new(vec![
            Hit {
                x: 1.5,
                y: -2.25,
                z: 300.0,
                energy: 0.125,
                time: 7.0,
                cluster: 4,
                pdgid: -11,
                status: 1 << 31,
            },
            Hit {
                x: 0.0,
                y: 0.0,
                z: 0.0,
                energy: 3.0,
                time: 0.5,
                cluster: -1,
                pdgid: 22,
                status: 0,
            },
        ])
    }

    #[test]
    fn decode_restores_hits() {
        let e = sample();
        let bytes = encode(&e).unwrap();
        assert_eq!(bytes.len(), 8 + 2 * HIT_BYTES + TRAILER_BYTES);
        assert_eq!(decode(&bytes).unwrap(), e);
    }

    #[test]
    fn corruption_is_detected() {
        let mut bytes = encode(&sample()).unwrap();
        bytes[10] ^= 0x40;
        let err = decode(&bytes).unwrap_err();
        assert!(format!("{err}").contains("mismatch"));
    }

    #[test]
    fn bad_magic_and_truncation() {
        assert!(decode(b"NOPE").is_err());
        assert!(decode(b"EVT1").is_err());
        let bytes = encode(&Event::default()).unwrap();
        assert_eq!(decode(&bytes).unwrap(), Event::default());
    }

    #[test]
    fn id_tracks_content() {
        let a = event_id_hex(&sample()).unwrap();
        let mut e = sample();
        assert_eq!(a, event_id_hex(&e).unwrap());
        e.hits[0].energy = 0.25;
        assert_ne!(a, event_id_hex(&e).unwrap());
        assert_eq!(a.len(), 32);
    }
}
