//! Scrolling pipe pairs, recycled in place once they leave the screen.

use rand::Rng;
use tracing::trace;

use crate::config::GameConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObstaclePair {
    pub x: i32,
    pub upper_height: i32,
    pub lower_height: i32,
    /// Set when the gate was crossed; cleared only by `recycle`.
    pub scored: bool,
}

impl ObstaclePair {
    pub fn new(x: i32, upper_height: i32, config: &GameConfig) -> Self {
        Self {
            x,
            upper_height,
            lower_height: config.screen_height - upper_height - config.gap,
            scored: false,
        }
    }

    pub fn is_off_screen(&self, config: &GameConfig) -> bool {
        self.x <= -config.pipe_width
    }

    pub fn recycle<R: Rng>(&mut self, config: &GameConfig, rng: &mut R) {
        *self = Self::new(
            config.screen_width + config.pipe_width,
            config.upper_height_range.sample(rng),
            config,
        );
    }
}

/// Fixed-size set of pairs, addressed by index and never reallocated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObstacleField {
    pairs: Vec<ObstaclePair>,
}

impl ObstacleField {
    /// Pair `i` starts at `screen_width + (i + 1) * pipe_width + i * pipe_distance`.
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let pairs = (0..config.obstacle_count as i32)
            .map(|i| {
                let x = config.screen_width
                    + (i + 1) * config.pipe_width
                    + i * config.pipe_distance;
                ObstaclePair::new(x, config.upper_height_range.sample(rng), config)
            })
            .collect();
        Self { pairs }
    }

    pub fn from_pairs(pairs: Vec<ObstaclePair>) -> Self {
        Self { pairs }
    }

    pub fn pairs(&self) -> &[ObstaclePair] {
        &self.pairs
    }

    pub fn pairs_mut(&mut self) -> &mut [ObstaclePair] {
        &mut self.pairs
    }

    // Move first, then recycle whatever is now fully off-screen.
    pub fn advance<R: Rng>(&mut self, config: &GameConfig, rng: &mut R) {
        for (idx, pair) in self.pairs.iter_mut().enumerate() {
            pair.x -= config.scroll_speed;
            if pair.is_off_screen(config) {
                pair.recycle(config, rng);
                trace!(idx, upper_height = pair.upper_height, "recycled obstacle pair");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn in_range(config: &GameConfig, height: i32) -> bool {
        let range = config.upper_height_range;
        (range.min..=range.max).contains(&height)
    }

    fn assert_heights_fill_screen(field: &ObstacleField, config: &GameConfig) {
        for pair in field.pairs() {
            assert_eq!(
                pair.upper_height + config.gap + pair.lower_height,
                config.screen_height
            );
        }
    }

    #[test]
    fn test_initial_layout_is_staggered() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let field = ObstacleField::new(&config, &mut rng);

        assert_eq!(field.pairs().len(), 2);
        assert_eq!(field.pairs()[0].x, 452);
        assert_eq!(field.pairs()[1].x, 400 + 2 * 52 + 320);
        for pair in field.pairs() {
            assert!(in_range(&config, pair.upper_height));
            assert!(!pair.scored);
        }
        assert_heights_fill_screen(&field, &config);
    }

    #[test]
    fn test_lower_height_is_derived() {
        let config = GameConfig::default();
        let pair = ObstaclePair::new(452, 150, &config);
        assert_eq!(pair.lower_height, 470);
    }

    #[test]
    fn test_advance_scrolls_left() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut field = ObstacleField::new(&config, &mut rng);
        let before: Vec<i32> = field.pairs().iter().map(|p| p.x).collect();

        field.advance(&config, &mut rng);

        for (pair, x) in field.pairs().iter().zip(before) {
            assert_eq!(pair.x, x - 1);
        }
    }

    #[test]
    fn test_off_screen_pair_is_recycled() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut gone = ObstaclePair::new(-52, 110, &config);
        gone.scored = true;
        let mut field =
            ObstacleField::from_pairs(vec![gone, ObstaclePair::new(300, 120, &config)]);

        field.advance(&config, &mut rng);

        let recycled = &field.pairs()[0];
        assert_eq!(recycled.x, config.screen_width + 52);
        assert!(in_range(&config, recycled.upper_height));
        assert!(!recycled.scored);
        assert_eq!(field.pairs()[1].x, 299);
        assert_heights_fill_screen(&field, &config);
    }

    #[test]
    fn test_pair_recycles_on_the_step_it_leaves() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut field = ObstacleField::from_pairs(vec![ObstaclePair::new(-50, 110, &config)]);

        field.advance(&config, &mut rng);
        assert_eq!(field.pairs()[0].x, -51);

        field.advance(&config, &mut rng);
        assert_eq!(field.pairs()[0].x, 452);
    }

    #[test]
    fn test_invariant_holds_over_long_run() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut field = ObstacleField::new(&config, &mut rng);
        for _ in 0..5_000 {
            field.advance(&config, &mut rng);
            assert_heights_fill_screen(&field, &config);
        }
    }
}
