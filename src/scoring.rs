use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::collision::crosses_gate;
use crate::config::GameConfig;
use crate::frame::AudioCue;
use crate::obstacles::ObstacleField;

/// Award a point for every unscored pair whose gate the player is crossing this frame.
///
/// Each hit marks its pair scored and picks one of the two score cues at
/// random. Returns the cues in pair order.
pub fn score_gates<R: Rng>(
    field: &mut ObstacleField,
    score: &mut u32,
    config: &GameConfig,
    rng: &mut R,
) -> Vec<AudioCue> {
    let mut cues = Vec::new();
    for (idx, pair) in field.pairs_mut().iter_mut().enumerate() {
        if pair.scored || !crosses_gate(pair, config) {
            continue;
        }
        pair.scored = true;
        *score += 1;
        let cue = *AudioCue::SCORED.choose(rng).unwrap_or(&AudioCue::Scored1);
        debug!(idx, score = *score, ?cue, "gate passed");
        cues.push(cue);
    }
    cues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obstacles::ObstaclePair;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn aligned_x(config: &GameConfig) -> i32 {
        config.player_center_x() - config.pipe_width / 2
    }

    #[test]
    fn test_aligned_pair_scores_once() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut field =
            ObstacleField::from_pairs(vec![ObstaclePair::new(aligned_x(&config), 150, &config)]);
        let mut score = 0;

        let cues = score_gates(&mut field, &mut score, &config, &mut rng);
        assert_eq!(score, 1);
        assert_eq!(cues.len(), 1);
        assert!(AudioCue::SCORED.contains(&cues[0]));
        assert!(field.pairs()[0].scored);

        let cues = score_gates(&mut field, &mut score, &config, &mut rng);
        assert_eq!(score, 1);
        assert!(cues.is_empty());
    }

    #[test]
    fn test_unaligned_pair_does_not_score() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut field = ObstacleField::from_pairs(vec![ObstaclePair::new(
            aligned_x(&config) + 1,
            150,
            &config,
        )]);
        let mut score = 0;

        assert!(score_gates(&mut field, &mut score, &config, &mut rng).is_empty());
        assert_eq!(score, 0);
    }

    #[test]
    fn test_recycled_pair_scores_again() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut field =
            ObstacleField::from_pairs(vec![ObstaclePair::new(aligned_x(&config), 150, &config)]);
        let mut score = 0;
        score_gates(&mut field, &mut score, &config, &mut rng);

        field.pairs_mut()[0].recycle(&config, &mut rng);
        field.pairs_mut()[0].x = aligned_x(&config);
        score_gates(&mut field, &mut score, &config, &mut rng);

        assert_eq!(score, 2);
    }

    #[test]
    fn test_both_score_cues_are_used() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let mut seen = Vec::new();
        for _ in 0..64 {
            let mut field = ObstacleField::from_pairs(vec![ObstaclePair::new(
                aligned_x(&config),
                150,
                &config,
            )]);
            let mut score = 0;
            seen.extend(score_gates(&mut field, &mut score, &config, &mut rng));
        }
        assert!(seen.contains(&AudioCue::Scored1));
        assert!(seen.contains(&AudioCue::Scored2));
        assert!(!seen.contains(&AudioCue::GameOver));
    }
}
