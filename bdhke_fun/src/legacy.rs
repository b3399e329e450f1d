//! The deprecated hash to curve map used before domain separation was introduced.
//!
//! The message is hashed with SHA-256 and the hash is decoded as the x-coordinate of a point
//! with an even y-coordinate. If that fails the hash is hashed again and so on. There is no
//! domain separator and in its original form no bound on the number of iterations.
//!
//! Only use this to check signatures that were issued with it. New signatures should always use
//! [`hash_to_curve`](crate::hash_to_curve::hash_to_curve).
use crate::{Error, hash_to_curve::decode_even_y};
use secp256kfun::Point;
use sha2::{Digest, Sha256};

/// The number of iterations [`verify`](crate::verify) allows the legacy map before giving up.
pub const LEGACY_MAX_ITERATIONS: u32 = 1 << 16;

/// Map `message` to a point the way it was done before domain separation.
///
/// **HAZMAT**: The loop only stops once it decodes a point. Each iteration succeeds with
/// probability of about one half so it terminates for every message anyone will ever find but
/// nothing bounds it. Don't call this on untrusted input on a latency critical path; use
/// [`legacy_hash_to_curve_bounded`] there.
pub fn legacy_hash_to_curve(message: &[u8]) -> Point {
    let mut hash: [u8; 32] = Sha256::digest(message).into();
    loop {
        if let Some(point) = decode_even_y(hash) {
            return point;
        }
        hash = Sha256::digest(hash).into();
    }
}

/// Same as [`legacy_hash_to_curve`] but gives up after hashing `max_iterations` times.
///
/// For any message where [`legacy_hash_to_curve`] needs at most `max_iterations` hashes the two
/// functions return the same point.
pub fn legacy_hash_to_curve_bounded(message: &[u8], max_iterations: u32) -> Result<Point, Error> {
    let first: [u8; 32] = Sha256::digest(message).into();
    core::iter::successors(Some(first), |hash| Some(Sha256::digest(hash).into()))
        .take(max_iterations as usize)
        .find_map(decode_even_y)
        .ok_or(Error::LegacyIterationsExhausted {
            iterations: max_iterations,
        })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::hash_to_curve::hash_to_curve;

    #[test]
    fn bounded_agrees_with_unbounded() {
        for message in [&b""[..], b"test_message", &[0u8; 32]] {
            assert_eq!(
                legacy_hash_to_curve_bounded(message, LEGACY_MAX_ITERATIONS),
                Ok(legacy_hash_to_curve(message))
            );
        }
    }

    #[test]
    fn bounded_gives_up() {
        // sha256(0x00..02) does not decode so at least two iterations are needed
        let mut message = [0u8; 32];
        message[31] = 2;
        assert_eq!(
            legacy_hash_to_curve_bounded(&message, 1),
            Err(Error::LegacyIterationsExhausted { iterations: 1 })
        );
        assert_eq!(
            legacy_hash_to_curve_bounded(&message, 0),
            Err(Error::LegacyIterationsExhausted { iterations: 0 })
        );
    }

    #[test]
    fn no_domain_separation() {
        // the first iteration of the legacy map of the empty string is just sha256("")
        assert_eq!(
            legacy_hash_to_curve(b"").to_bytes()[1..],
            Sha256::digest(b"")[..]
        );
        assert_ne!(legacy_hash_to_curve(b""), hash_to_curve(b"").unwrap());
    }
}
