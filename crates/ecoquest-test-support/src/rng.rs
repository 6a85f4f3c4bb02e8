//! Test RNG: scripted `DeterministicRng` implementations.

use ecoquest_core::rng::DeterministicRng;

/// Always draws the lowest value, so every pick lands on the first story or
/// quest in catalog order.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_u32_range(&mut self, min: u32, _max: u32) -> u32 {
        min
    }
}

/// Replays scripted draws in order, clamped into the requested range.
///
/// Tests pass catalog indices, e.g. `SequenceRng::new(vec![2, 0])` picks the
/// third story and then the first matching quest.
#[derive(Debug, Clone)]
pub struct SequenceRng {
    draws: Vec<u32>,
    next: usize,
}

impl SequenceRng {
    /// Scripts the given draws.
    #[must_use]
    pub fn new(draws: Vec<u32>) -> Self {
        Self { draws, next: 0 }
    }

    /// How many scripted draws have been taken.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.next
    }
}

impl DeterministicRng for SequenceRng {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        let Some(&draw) = self.draws.get(self.next) else {
            panic!("SequenceRng ran out after {} draws", self.next);
        };
        self.next += 1;
        draw.clamp(min, max)
    }
}
