use rand::Rng;

/// Inclusive integer range used to vary obstacle heights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomRange {
    pub min: i32,
    pub max: i32,
}

impl RandomRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> i32 {
        rng.gen_range(self.min..=self.max)
    }
}
