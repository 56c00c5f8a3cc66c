//! Random number generation.
//!
//! A process-global generator seeded once from /dev/urandom and mixed with a
//! hardware cycle counter on every draw. Plenty for password sampling; no
//! cryptographic claim is made.

mod hw;
pub mod urand;

use core::cell::UnsafeCell;
use std::sync::LazyLock;

static RAND: LazyLock<Rand> = LazyLock::new(Rand::new);

pub struct Rand(UnsafeCell<u64>);
unsafe impl Sync for Rand {}

impl Rand {
    #[inline]
    pub fn new() -> Self {
        // Seed from the OS pool so runs are never trivially reproducible,
        // stirred with the cycle counter.
        Rand(UnsafeCell::new(urand::read_u64() ^ hw::entropy()))
    }

    /// Next value. Weyl-style state advance XORed with fresh counter
    /// entropy, then a SplitMix64 output finalizer.
    #[inline(always)]
    pub fn get() -> usize {
        let state = unsafe { *RAND.0.get() };
        let ent = hw::entropy();

        let new_state = state
            .rotate_left(17)
            .wrapping_add(0x9e3779b97f4a7c15)
            ^ ent;
        unsafe { *RAND.0.get() = new_state };

        let mut z = new_state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        (z ^ (z >> 31)) as usize
    }
}

/// Wipe the generator state. Called from the exit and crash handlers.
pub fn zeroize_state() {
    unsafe { std::ptr::write_volatile(RAND.0.get(), 0) }
}
