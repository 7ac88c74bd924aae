//! Surrogate keys for primitive element types
//!
//! Primitive values do not carry an identity of their own, so one is derived
//! from their content: the big-endian encoding is written into a zero-padded
//! buffer of a fixed width per type and hashed with [`hrw_core::hash`].
//! The widths are part of the ranking contract; changing them reshuffles
//! every placement.
//!
//! | Type                  | Buffer |
//! |-----------------------|--------|
//! | `i8`, `u8`            | 1      |
//! | `i16`, `u16`          | 8      |
//! | `i32`, `u32`          | 16     |
//! | `isize`, `usize`      | 16     |
//! | `i64`, `u64`          | 32     |
//! | `str`, `String`       | UTF-8 bytes, unpadded |

use hrw_core::hash;

/// Derives a 64-bit identity from an element's value.
pub trait ValueKey {
    fn value_key(&self) -> u64;
}

macro_rules! impl_value_key {
    ($($ty:ty => $width:expr),* $(,)?) => {
        $(
            impl ValueKey for $ty {
                fn value_key(&self) -> u64 {
                    padded_key::<$width>(&self.to_be_bytes())
                }
            }
        )*
    };
}

impl_value_key! {
    i8 => 1,
    u8 => 1,
    i16 => 8,
    u16 => 8,
    i32 => 16,
    u32 => 16,
    i64 => 32,
    u64 => 32,
}

/// Pointer-sized integers are keyed as 64-bit values on every platform.
impl ValueKey for isize {
    fn value_key(&self) -> u64 {
        padded_key::<16>(&(*self as u64).to_be_bytes())
    }
}

impl ValueKey for usize {
    fn value_key(&self) -> u64 {
        padded_key::<16>(&(*self as u64).to_be_bytes())
    }
}

impl ValueKey for str {
    fn value_key(&self) -> u64 {
        hash(self.as_bytes())
    }
}

impl ValueKey for String {
    fn value_key(&self) -> u64 {
        hash(self.as_bytes())
    }
}

impl<T: ValueKey + ?Sized> ValueKey for &T {
    fn value_key(&self) -> u64 {
        (**self).value_key()
    }
}

fn padded_key<const N: usize>(bytes: &[u8]) -> u64 {
    let mut key = [0u8; N];
    key[..bytes.len()].copy_from_slice(bytes);
    hash(&key)
}

/// Identity for ranking by position: the hash of the little-endian position.
pub fn hashed_index_key(index: usize) -> u64 {
    hash(&(index as u64).to_le_bytes())
}
