use crate::config::GameConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicsOutcome {
    pub y: i32,
    pub floor_contact: bool,
}

/// Advance the player's vertical position by one fixed tick.
///
/// A jump replaces gravity for this frame only. The body is clamped to the
/// floor but not to the top edge.
pub fn step(y: i32, jump_requested: bool, config: &GameConfig) -> PhysicsOutcome {
    let mut y = if jump_requested {
        y - config.jump_impulse
    } else {
        y + config.gravity
    };

    let floor = config.floor_y();
    let floor_contact = y >= floor;
    if floor_contact {
        y = floor;
    }

    PhysicsOutcome { y, floor_contact }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravity_pulls_down_one_unit() {
        let config = GameConfig::default();
        let out = step(300, false, &config);
        assert_eq!(out.y, 301);
        assert!(!out.floor_contact);
    }

    #[test]
    fn test_jump_replaces_gravity() {
        let config = GameConfig::default();
        let out = step(300, true, &config);
        assert_eq!(out.y, 250);
    }

    #[test]
    fn test_jump_can_leave_top_edge() {
        let config = GameConfig::default();
        let out = step(10, true, &config);
        assert_eq!(out.y, -40);
        assert!(!out.floor_contact);
    }

    #[test]
    fn test_clamps_to_floor() {
        let config = GameConfig::default();
        let out = step(config.floor_y() - 1, false, &config);
        assert_eq!(out.y, config.floor_y());
        assert!(out.floor_contact);

        let config = GameConfig {
            gravity: 30,
            ..GameConfig::default()
        };
        let out = step(740, false, &config);
        assert_eq!(out.y, 750);
        assert!(out.floor_contact);
    }
}
