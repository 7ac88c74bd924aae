//! Content hash and the item identity capability

use crate::distance::fmix64;

const C1: u64 = 0x87c3_7b91_1142_53d5;
const C2: u64 = 0x4cf5_ad43_2745_937f;

/// Hash a byte key to 64 bits.
///
/// MurmurHash3 x64/128 with seed 0, truncated to its first 64-bit word.
/// Not cryptographic; collisions between distinct keys are not detected.
#[must_use]
pub fn hash(key: &[u8]) -> u64 {
    let mut h1: u64 = 0;
    let mut h2: u64 = 0;

    let mut blocks = key.chunks_exact(16);
    for block in &mut blocks {
        h1 ^= mix_k1(read_le(&block[..8]));
        h1 = h1
            .rotate_left(27)
            .wrapping_add(h2)
            .wrapping_mul(5)
            .wrapping_add(0x52dc_e729);

        h2 ^= mix_k2(read_le(&block[8..]));
        h2 = h2
            .rotate_left(31)
            .wrapping_add(h1)
            .wrapping_mul(5)
            .wrapping_add(0x3849_5ab5);
    }

    let tail = blocks.remainder();
    if tail.len() > 8 {
        h2 ^= mix_k2(read_le(&tail[8..]));
    }
    if !tail.is_empty() {
        h1 ^= mix_k1(read_le(&tail[..tail.len().min(8)]));
    }

    let len = key.len() as u64;
    h1 ^= len;
    h2 ^= len;
    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);
    h1 = fmix64(h1);
    h2 = fmix64(h2);
    h1.wrapping_add(h2)
}

#[inline]
fn mix_k1(k: u64) -> u64 {
    k.wrapping_mul(C1).rotate_left(31).wrapping_mul(C2)
}

#[inline]
fn mix_k2(k: u64) -> u64 {
    k.wrapping_mul(C2).rotate_left(33).wrapping_mul(C1)
}

/// Little-endian load of up to 8 bytes.
#[inline]
fn read_le(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .rev()
        .fold(0, |acc, &b| (acc << 8) | u64::from(b))
}

/// Anything that can present a stable 64-bit identity.
///
/// This is the only capability the ranking engine needs from an item or a
/// target key. The hash must be pure: the same value always yields the same
/// identity.
pub trait Hashable {
    fn hrw_hash(&self) -> u64;
}

/// A `u64` is its own identity.
impl Hashable for u64 {
    #[inline]
    fn hrw_hash(&self) -> u64 {
        *self
    }
}

impl Hashable for [u8] {
    fn hrw_hash(&self) -> u64 {
        hash(self)
    }
}

impl Hashable for Vec<u8> {
    fn hrw_hash(&self) -> u64 {
        hash(self)
    }
}

impl Hashable for str {
    fn hrw_hash(&self) -> u64 {
        hash(self.as_bytes())
    }
}

impl Hashable for String {
    fn hrw_hash(&self) -> u64 {
        hash(self.as_bytes())
    }
}

impl<T: Hashable + ?Sized> Hashable for &T {
    #[inline]
    fn hrw_hash(&self) -> u64 {
        (**self).hrw_hash()
    }
}

impl<T: Hashable + ?Sized> Hashable for Box<T> {
    #[inline]
    fn hrw_hash(&self) -> u64 {
        (**self).hrw_hash()
    }
}

/// A value paired with a precomputed identity.
///
/// Useful when the identity is expensive to derive, or is not a function of
/// the value at all (ranking by position, for example).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Keyed<T> {
    pub key: u64,
    pub value: T,
}

impl<T> Keyed<T> {
    pub fn new(key: u64, value: T) -> Self {
        Self { key, value }
    }

    /// Pair `value` with the content hash of `bytes`.
    pub fn from_bytes(bytes: &[u8], value: T) -> Self {
        Self { key: hash(bytes), value }
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T> Hashable for Keyed<T> {
    #[inline]
    fn hrw_hash(&self) -> u64 {
        self.key
    }
}
