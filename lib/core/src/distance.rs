//! Distance between an item and a target key
//!
//! Both sides are first reduced to 64-bit hashes, combined with XOR and then
//! run through the MurmurHash3 64-bit finalizer. XOR makes the distance
//! symmetric; the finalizer makes a one-bit change in either input flip about
//! half of the output bits.

const FMIX_C1: u64 = 0xff51_afd7_ed55_8ccd;
const FMIX_C2: u64 = 0xc4ce_b9fe_1a85_ec53;

/// MurmurHash3 64-bit finalizer.
#[inline]
#[must_use]
pub fn fmix64(mut k: u64) -> u64 {
    k ^= k >> 33;
    k = k.wrapping_mul(FMIX_C1);
    k ^= k >> 33;
    k = k.wrapping_mul(FMIX_C2);
    k ^= k >> 33;
    k
}

/// Distance from an item hash to a target hash. Lower is more preferred.
#[inline]
#[must_use]
pub fn distance(x: u64, y: u64) -> u64 {
    fmix64(x ^ y)
}
