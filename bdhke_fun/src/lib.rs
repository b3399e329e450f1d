//! Blind Diffie-Hellman key exchange (BDHKE) for secp256k1.
//!
//! This is the blind signature scheme behind Cashu style ecash. A mint with secret key `k` signs
//! tokens without seeing them and can later check that a token it is shown was signed by it
//! without learning which signing request it came from.
//!
//! # Synopsis
//!
//! ```
//! use bdhke_fun::{blind_message, sign_blinded_message, unblind_signature, verify};
//! use secp256kfun::{g, Scalar, G};
//!
//! // the mint's key pair
//! let k = Scalar::random(&mut rand::thread_rng());
//! let K = g!(k * G).normalize();
//!
//! // the wallet blinds the secret of its token and sends B_ to the mint
//! let secret = b"407915bc212be61a77e3e6d2aeb4c727980bda51cd06a6afc29e2861768a7837";
//! let r = Scalar::random(&mut rand::thread_rng());
//! let (B_, r) = blind_message(secret, r).unwrap();
//!
//! // the mint signs it without learning the secret
//! let C_ = sign_blinded_message(&B_, &k);
//!
//! // the wallet removes the blinding factor
//! let C = unblind_signature(&C_, &r, &K).unwrap();
//!
//! // later on the token (secret, C) is redeemed
//! assert!(verify(secret, &k, &C));
//! ```
#![no_std]
#![allow(non_snake_case)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(missing_docs)]

#[cfg(feature = "std")]
#[macro_use]
extern crate std;

pub use secp256kfun as fun;

mod bdhke;
mod error;
pub mod hash_to_curve;
pub mod legacy;

pub use bdhke::{
    Verification, blind_message, blind_message_legacy, sign_blinded_message, unblind_signature,
    verify, verify_detailed,
};
pub use error::Error;
pub use hash_to_curve::{DOMAIN_SEPARATOR, hash_to_curve};
pub use legacy::legacy_hash_to_curve;
