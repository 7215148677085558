//! Mapping from pointer/touch contact points to direction requests.

use crate::constants::TOUCH_DEAD_ZONE;
use crate::Direction;

/// Quadrant heuristic for touch-style input: compare the contact point
/// against the board center with a dead zone per axis. Each axis outside
/// its dead zone contributes one direction, so a diagonal contact yields
/// two requests (both are enqueued; the step logic arbitrates).
pub fn touch_directions(x: i32, y: i32, center_x: i32, center_y: i32) -> Vec<Direction> {
    let mut directions = Vec::new();
    if x < center_x - TOUCH_DEAD_ZONE {
        directions.push(Direction::Left);
    }
    if x > center_x + TOUCH_DEAD_ZONE {
        directions.push(Direction::Right);
    }
    if y < center_y - TOUCH_DEAD_ZONE {
        directions.push(Direction::Up);
    }
    if y > center_y + TOUCH_DEAD_ZONE {
        directions.push(Direction::Down);
    }
    directions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dead_zone_contact_yields_nothing() {
        assert!(touch_directions(100, 100, 100, 100).is_empty());
        assert!(touch_directions(150, 60, 100, 100).is_empty());
        assert!(touch_directions(50, 140, 100, 100).is_empty());
    }

    #[test]
    fn each_quadrant_maps_to_its_direction() {
        assert_eq!(touch_directions(10, 100, 100, 100), vec![Direction::Left]);
        assert_eq!(touch_directions(190, 100, 100, 100), vec![Direction::Right]);
        assert_eq!(touch_directions(100, 10, 100, 100), vec![Direction::Up]);
        assert_eq!(touch_directions(100, 190, 100, 100), vec![Direction::Down]);
    }

    #[test]
    fn diagonal_contact_yields_both_axes() {
        assert_eq!(
            touch_directions(10, 10, 100, 100),
            vec![Direction::Left, Direction::Up]
        );
        assert_eq!(
            touch_directions(190, 190, 100, 100),
            vec![Direction::Right, Direction::Down]
        );
    }

    #[test]
    fn threshold_is_exclusive() {
        assert!(touch_directions(50, 100, 100, 100).is_empty());
        assert_eq!(touch_directions(49, 100, 100, 100), vec![Direction::Left]);
    }
}
