// tests/common/mod.rs
#![allow(dead_code)]

use std::collections::VecDeque;

use rand_core::RngCore;

/// Replays a fixed list of `u64` draws and counts how many were taken.
pub struct Scripted {
    values: VecDeque<u64>,
    pub draws: usize,
}

impl Scripted {
    pub fn new(values: &[u64]) -> Self {
        Self { values: values.iter().copied().collect(), draws: 0 }
    }
}

impl RngCore for Scripted {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.draws += 1;
        self.values.pop_front().expect("scripted generator exhausted")
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// Coin draws: top bit clear picks the ceiling, set picks the floor.
pub const COIN_HIGH: u64 = 0;
pub const COIN_LOW: u64 = 1 << 63;

/// Raw draw that `stoch::unit_f64` maps to `x` (exact for multiples of 2^-53).
pub fn unit(x: f64) -> u64 {
    ((x * (1u64 << 53) as f64) as u64) << 11
}
