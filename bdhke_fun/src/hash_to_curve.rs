//! Domain separated try-and-increment hash to curve.
//!
//! The message is hashed once together with [`DOMAIN_SEPARATOR`]. Then a little
//! endian `u32` counter is appended to that hash and the result hashed again
//! until the output is the x-coordinate of a point with an even y-coordinate.
//! Each attempt succeeds with probability of roughly one half so we give up
//! after [`MAX_ATTEMPTS`] which will never happen in practice.
//!
//! Note that only `0x02` (even y) is ever tried as the prefix. Every ecash
//! implementation derives the same points this way so it can't be changed.
use crate::Error;
use secp256kfun::{Point, marker::*};
use sha2::{Digest, Sha256};

/// Prepended to every message before it is hashed.
///
/// Hex: `536563703235366b315f48617368546f43757276655f43617368755f`.
pub const DOMAIN_SEPARATOR: &[u8] = b"Secp256k1_HashToCurve_Cashu_";

/// The number of counter values tried before returning [`Error::NoValidPointFound`].
pub const MAX_ATTEMPTS: u32 = 1 << 16;

const EVEN_Y: u8 = 0x02;

/// Map `message` to a point on the curve.
///
/// Deterministic: the same message always maps to the same point.
///
/// # Examples
/// ```
/// use bdhke_fun::hash_to_curve;
/// let Y = hash_to_curve(b"test_message").unwrap();
/// assert_eq!(Y, hash_to_curve(b"test_message").unwrap());
/// ```
pub fn hash_to_curve(message: &[u8]) -> Result<Point, Error> {
    hash_to_curve_with_counter(message).map(|(point, _)| point)
}

/// Like [`hash_to_curve`] but also returns the counter value that produced the point.
pub fn hash_to_curve_with_counter(message: &[u8]) -> Result<(Point, u32), Error> {
    let msg_hash: [u8; 32] = Sha256::new()
        .chain_update(DOMAIN_SEPARATOR)
        .chain_update(message)
        .finalize()
        .into();
    try_and_increment(&msg_hash, MAX_ATTEMPTS, decode_even_y)
}

fn try_and_increment(
    msg_hash: &[u8; 32],
    max_attempts: u32,
    mut decode: impl FnMut([u8; 32]) -> Option<Point>,
) -> Result<(Point, u32), Error> {
    for counter in 0..max_attempts {
        let candidate: [u8; 32] = Sha256::new()
            .chain_update(msg_hash)
            .chain_update(counter.to_le_bytes())
            .finalize()
            .into();
        if let Some(point) = decode(candidate) {
            return Ok((point, counter));
        }
    }

    Err(Error::NoValidPointFound)
}

/// Decodes `x` as the x-coordinate of the point with an even y-coordinate.
///
/// Returns `None` if `x` is not a field element or `x³ + 7` has no square root.
pub(crate) fn decode_even_y(x: [u8; 32]) -> Option<Point> {
    let mut bytes = [EVEN_Y; 33];
    bytes[1..].copy_from_slice(&x);
    Point::<Normal, Public, NonZero>::from_bytes(bytes)
}
