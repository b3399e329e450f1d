//! Blind Diffie-Hellman key exchange.
//!
//! The wallet maps its secret to a point `Y` and blinds it with a random `r` (`B_ = Y + r*G`).
//! The mint signs the blinded point with its secret key `k` (`C_ = k*B_`). The wallet removes the
//! blinding with the mint's public key `K = k*G` (`C = C_ - r*K`) which leaves `C = k*Y`. When the
//! secret is later disclosed the mint recomputes `k*Y` and compares it to `C`. It can't tell which
//! `B_` it was that it signed.
use crate::{
    Error,
    hash_to_curve::hash_to_curve,
    legacy::{LEGACY_MAX_ITERATIONS, legacy_hash_to_curve_bounded},
};
use secp256kfun::{G, Point, Scalar, g};

/// Blind `secret` with the blinding factor `r`.
///
/// Returns the blinded message `B_ = Y + r*G` where `Y` is [`hash_to_curve`] of `secret`, along with
/// `r` which you need to keep to unblind the signature. `r` must be sampled from a secure source of
/// randomness and never reused.
pub fn blind_message(secret: &[u8], r: Scalar) -> Result<(Point, Scalar), Error> {
    let Y = hash_to_curve(secret)?;
    let B_ = blind(Y, &r)?;
    Ok((B_, r))
}

/// Blind `secret` using the [legacy](crate::legacy) hash to curve map.
///
/// This is how tokens were blinded before domain separation. Signatures obtained this way are only
/// accepted by [`verify`] through its fallback path.
pub fn blind_message_legacy(secret: &[u8], r: Scalar) -> Result<(Point, Scalar), Error> {
    let Y = legacy_hash_to_curve_bounded(secret, LEGACY_MAX_ITERATIONS)?;
    let B_ = blind(Y, &r)?;
    Ok((B_, r))
}

fn blind(Y: Point, r: &Scalar) -> Result<Point, Error> {
    g!(Y + r * G)
        .normalize()
        .non_zero()
        .ok_or(Error::PointAtInfinity)
}

/// Sign the blinded message `B_` with the mint's secret key `k`: `C_ = k*B_`.
pub fn sign_blinded_message(B_: &Point, k: &Scalar) -> Point {
    g!(k * B_).normalize()
}

/// Remove the blinding from the blinded signature: `C = C_ - r*K`.
///
/// `r` must be the blinding factor passed to [`blind_message`] and `K` the mint's public key.
///
/// # Errors
///
/// Returns [`Error::PointAtInfinity`] if `C_ = r*K` which a mint can only do on purpose.
pub fn unblind_signature(C_: &Point, r: &Scalar, K: &Point) -> Result<Point, Error> {
    g!(C_ - r * K)
        .normalize()
        .non_zero()
        .ok_or(Error::PointAtInfinity)
}

/// Check that `C` is the mint's signature on `secret`.
///
/// `C` is accepted if it equals `k * hash_to_curve(secret)` or, failing that,
/// `k * legacy_hash_to_curve(secret)`. Every reason for rejecting collapses into `false`; use
/// [`verify_detailed`] to find out which.
pub fn verify(secret: &[u8], k: &Scalar, C: &Point) -> bool {
    hash_to_curve(secret).is_ok_and(|Y| is_signature(&Y, k, C))
        || legacy_hash_to_curve_bounded(secret, LEGACY_MAX_ITERATIONS)
            .is_ok_and(|Y| is_signature(&Y, k, C))
}

fn is_signature(Y: &Point, k: &Scalar, C: &Point) -> bool {
    g!(k * Y).normalize() == *C
}

/// The outcome of [`verify_detailed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    /// `C` is the signature of the domain separated hash of the secret.
    Valid,
    /// `C` only matched the legacy hash of the secret.
    ValidLegacy,
    /// `C` matched neither.
    Invalid {
        /// Set if the domain separated hash to curve failed.
        primary: Option<Error>,
        /// Set if the legacy hash to curve failed.
        legacy: Option<Error>,
    },
}

impl Verification {
    /// Whether either path accepted the signature.
    pub fn is_valid(&self) -> bool {
        matches!(self, Verification::Valid | Verification::ValidLegacy)
    }
}

/// Like [`verify`] but reports which path accepted the signature or why both rejected it.
///
/// Useful for tests and troubleshooting. Protocol code should stick to [`verify`].
pub fn verify_detailed(secret: &[u8], k: &Scalar, C: &Point) -> Verification {
    let primary = match hash_to_curve(secret) {
        Ok(Y) if is_signature(&Y, k, C) => return Verification::Valid,
        Ok(_) => None,
        Err(e) => Some(e),
    };

    let legacy = match legacy_hash_to_curve_bounded(secret, LEGACY_MAX_ITERATIONS) {
        Ok(Y) if is_signature(&Y, k, C) => return Verification::ValidLegacy,
        Ok(_) => None,
        Err(e) => Some(e),
    };

    Verification::Invalid { primary, legacy }
}
