#![allow(non_snake_case)]
use bdhke_fun::{
    blind_message, hash_to_curve, legacy_hash_to_curve, sign_blinded_message, unblind_signature,
    verify,
};
use criterion::{Criterion, criterion_group, criterion_main};
use secp256kfun::{G, Scalar, g};

const SECRET: &[u8; 64] = b"407915bc212be61a77e3e6d2aeb4c727980bda51cd06a6afc29e2861768a7837";

fn bench_hash_to_curve(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash_to_curve");
    group.bench_function("domain_separated", |b| b.iter(|| hash_to_curve(SECRET)));
    group.bench_function("legacy", |b| b.iter(|| legacy_hash_to_curve(SECRET)));
}

fn bench_protocol(c: &mut Criterion) {
    let mut group = c.benchmark_group("bdhke");
    let k = Scalar::random(&mut rand::thread_rng());
    let K = g!(k * G).normalize();
    let r = Scalar::random(&mut rand::thread_rng());
    let (B_, r) = blind_message(SECRET, r).unwrap();
    let C_ = sign_blinded_message(&B_, &k);
    let C = unblind_signature(&C_, &r, &K).unwrap();

    group.bench_function("blind", |b| {
        b.iter(|| blind_message(SECRET, r.clone()))
    });
    group.bench_function("sign", |b| b.iter(|| sign_blinded_message(&B_, &k)));
    group.bench_function("unblind", |b| b.iter(|| unblind_signature(&C_, &r, &K)));
    group.bench_function("verify", |b| b.iter(|| verify(SECRET, &k, &C)));

    // a signature that fails the primary check pays for the legacy map as well
    let wrong_C = g!(C + G).normalize().non_zero().unwrap();
    group.bench_function("verify_invalid", |b| {
        b.iter(|| verify(SECRET, &k, &wrong_C))
    });
}

criterion_group!(benches, bench_hash_to_curve, bench_protocol);
criterion_main!(benches);
