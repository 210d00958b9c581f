use rand::rngs::ThreadRng;
use rand::Rng;
use std::collections::VecDeque;
use std::ops::Range;

/// Source of every random roll the engine makes.
///
/// Production code uses [`EngineRng::new_random`]; tests script the exact
/// outcomes with [`EngineRng::scripted`] so each roll is deterministic.
/// A scripted rng panics with the roll's reason when it runs dry, which
/// turns a missing test value into an immediate, readable failure.
#[derive(Debug)]
pub struct EngineRng {
    source: Source,
}

#[derive(Debug)]
enum Source {
    Thread(ThreadRng),
    Scripted(VecDeque<u32>),
}

impl EngineRng {
    pub fn new_random() -> Self {
        EngineRng {
            source: Source::Thread(rand::rng()),
        }
    }

    pub fn scripted(outcomes: Vec<u32>) -> Self {
        EngineRng {
            source: Source::Scripted(outcomes.into()),
        }
    }

    /// Draw a value from a half-open range.
    pub fn roll(&mut self, range: Range<u32>, reason: &str) -> u32 {
        match &mut self.source {
            Source::Thread(rng) => rng.random_range(range),
            Source::Scripted(outcomes) => {
                let outcome = outcomes.pop_front().unwrap_or_else(|| {
                    panic!("EngineRng exhausted! Tried to get a value for: '{}'.", reason)
                });
                #[cfg(test)]
                println!("[RNG] Consumed {} for: {}", outcome, reason);
                outcome
            }
        }
    }

    /// Pick a uniformly random element of a non-empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T], reason: &str) -> &'a T {
        let index = self.roll(0..items.len() as u32, reason) as usize;
        &items[index]
    }

    /// Number of scripted values not yet consumed. Zero for a thread-backed
    /// rng; tests use this to assert that an action consumed no rolls.
    pub fn scripted_remaining(&self) -> usize {
        match &self.source {
            Source::Thread(_) => 0,
            Source::Scripted(outcomes) => outcomes.len(),
        }
    }
}
