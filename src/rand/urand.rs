//! OS entropy via /dev/urandom, read on demand.

use std::fs::File;
use std::io::Read;

/// Read one u64 from /dev/urandom. Falls back to a fixed-point-free
/// transform of the current time if the device cannot be read, so the
/// seed is never a compile-time constant.
pub fn read_u64() -> u64 {
    let mut buf = [0u8; 8];
    if let Ok(mut f) = File::open("/dev/urandom")
        && f.read_exact(&mut buf).is_ok()
    {
        return u64::from_le_bytes(buf);
    }

    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    nanos.wrapping_mul(0x9e3779b97f4a7c15) | 1
}
