/// Errors returned by the hash-to-curve maps and the blind signature operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// [`hash_to_curve`] tried every counter value without decoding a point.
    ///
    /// [`hash_to_curve`]: crate::hash_to_curve::hash_to_curve
    NoValidPointFound,
    /// The bounded legacy map hashed `iterations` times without decoding a point.
    LegacyIterationsExhausted {
        /// How many hashes were tried.
        iterations: u32,
    },
    /// A protocol step produced the point at infinity.
    PointAtInfinity,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use Error::*;
        match self {
            NoValidPointFound => write!(
                f,
                "no valid point found after {} attempts",
                crate::hash_to_curve::MAX_ATTEMPTS
            ),
            LegacyIterationsExhausted { iterations } => write!(
                f,
                "legacy hash to curve found no valid point after {} iterations",
                iterations
            ),
            PointAtInfinity => write!(
                f,
                "the result was the point at infinity which means the blinding factor or the blinded signature was malicious"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
