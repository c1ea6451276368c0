//! Catch detection - classifying falling balls against the basket
//!
//! The basket has fixed pixel dimensions while balls track percent
//! coordinates, so every check converts through the live playfield size and
//! runs in pixel space.

use super::state::{Ball, Basket, Playfield};
use crate::pct_to_px;
use crate::tuning::Tuning;

/// How a ball relates to the basket after one integration step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Bottom edge inside the catch band, center over the basket
    Caught,
    /// Fully past the bottom without a catch
    Missed,
    /// Still in flight
    Falling,
}

/// Per-tick partition of the live ball set
#[derive(Debug, Default)]
pub struct Resolution {
    pub caught: Vec<Ball>,
    pub missed: Vec<Ball>,
    pub falling: Vec<Ball>,
}

/// Classify one ball against the basket's catch band.
///
/// Both comparisons are inclusive: a ball whose bottom edge sits exactly on
/// the band boundary, or whose center sits exactly on the basket's edge,
/// counts as caught. The tie favors the player and must stay exact across
/// playfield sizes.
pub fn classify(ball: &Ball, basket: &Basket, playfield: Playfield, tuning: &Tuning) -> Outcome {
    let center_y_px = pct_to_px(ball.pos.y, playfield.height_px);
    let bottom_px = center_y_px + tuning.ball_size_px / 2.0;
    let band_top_px = playfield.height_px - basket.height_px;

    if bottom_px >= band_top_px && bottom_px <= playfield.height_px {
        let center_x_px = pct_to_px(ball.pos.x, playfield.width_px);
        let basket_x_px = pct_to_px(basket.x, playfield.width_px);
        if (center_x_px - basket_x_px).abs() <= basket.width_px / 2.0 {
            return Outcome::Caught;
        }
    }

    // Live until the whole ball has cleared the bottom edge
    if center_y_px < playfield.height_px + tuning.ball_size_px {
        Outcome::Falling
    } else {
        Outcome::Missed
    }
}

/// Partition the advanced ball set into caught, missed, and still falling.
///
/// Balls never interact with each other; each is classified independently
/// and spawn order is preserved within each bucket.
pub fn resolve(
    balls: Vec<Ball>,
    basket: &Basket,
    playfield: Playfield,
    tuning: &Tuning,
) -> Resolution {
    let mut resolution = Resolution::default();
    for ball in balls {
        match classify(&ball, basket, playfield, tuning) {
            Outcome::Caught => resolution.caught.push(ball),
            Outcome::Missed => resolution.missed.push(ball),
            Outcome::Falling => resolution.falling.push(ball),
        }
    }
    resolution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::BallColor;
    use glam::Vec2;

    // 1000 x 500 px field with the stock 120x30 basket and 30 px ball:
    // catch band spans pixels 470..=500, basket at 50% covers 440..=560.
    fn field() -> Playfield {
        Playfield::new(1000.0, 500.0)
    }

    fn basket_at(x: f32) -> Basket {
        let mut basket = Basket::new(&Tuning::default());
        basket.x = x;
        basket
    }

    fn ball_at(x_pct: f32, y_pct: f32) -> Ball {
        Ball::new(1, Vec2::new(x_pct, y_pct), 2.0, BallColor::Red)
    }

    #[test]
    fn test_caught_at_exact_band_top_and_basket_edge() {
        let tuning = Tuning::default();
        // y=91%: center 455 px, bottom 470 px - exactly the band top.
        // x=44%: center 440 px - exactly the basket's left edge.
        let ball = ball_at(44.0, 91.0);
        assert_eq!(
            classify(&ball, &basket_at(50.0), field(), &tuning),
            Outcome::Caught
        );
    }

    #[test]
    fn test_caught_at_exact_right_edge() {
        let tuning = Tuning::default();
        // x=56%: center 560 px - exactly the basket's right edge
        let ball = ball_at(56.0, 91.0);
        assert_eq!(
            classify(&ball, &basket_at(50.0), field(), &tuning),
            Outcome::Caught
        );
    }

    #[test]
    fn test_caught_at_exact_band_bottom() {
        let tuning = Tuning::default();
        // y=97%: center 485 px, bottom 500 px - exactly the playfield bottom
        let ball = ball_at(50.0, 97.0);
        assert_eq!(
            classify(&ball, &basket_at(50.0), field(), &tuning),
            Outcome::Caught
        );
    }

    #[test]
    fn test_just_outside_basket_edge_falls_through() {
        let tuning = Tuning::default();
        let ball = ball_at(43.9, 91.0);
        assert_eq!(
            classify(&ball, &basket_at(50.0), field(), &tuning),
            Outcome::Falling
        );
    }

    #[test]
    fn test_just_above_band_keeps_falling() {
        let tuning = Tuning::default();
        // Bottom at 469.5 px, half a pixel above the band
        let ball = ball_at(50.0, 90.9);
        assert_eq!(
            classify(&ball, &basket_at(50.0), field(), &tuning),
            Outcome::Falling
        );
    }

    #[test]
    fn test_just_below_band_is_not_caught() {
        let tuning = Tuning::default();
        // Bottom at 500.5 px: past the band, but not yet fully past the field
        let ball = ball_at(50.0, 97.1);
        assert_eq!(
            classify(&ball, &basket_at(50.0), field(), &tuning),
            Outcome::Falling
        );
    }

    #[test]
    fn test_missed_once_fully_past_bottom() {
        let tuning = Tuning::default();
        // Center at 530 px = height + ball size: gone
        let ball = ball_at(50.0, 106.0);
        assert_eq!(
            classify(&ball, &basket_at(50.0), field(), &tuning),
            Outcome::Missed
        );
        // One ball width higher it is still live
        let ball = ball_at(50.0, 105.9);
        assert_eq!(
            classify(&ball, &basket_at(50.0), field(), &tuning),
            Outcome::Falling
        );
    }

    #[test]
    fn test_high_ball_is_falling_even_over_basket() {
        let tuning = Tuning::default();
        let ball = ball_at(50.0, 10.0);
        assert_eq!(
            classify(&ball, &basket_at(50.0), field(), &tuning),
            Outcome::Falling
        );
    }

    #[test]
    fn test_resolve_partitions_independently() {
        let tuning = Tuning::default();
        let basket = basket_at(50.0);
        let balls = vec![
            Ball::new(1, Vec2::new(50.0, 91.0), 2.0, BallColor::Red),
            Ball::new(2, Vec2::new(10.0, 106.0), 2.0, BallColor::Blue),
            Ball::new(3, Vec2::new(80.0, 30.0), 2.0, BallColor::Green),
            Ball::new(4, Vec2::new(52.0, 93.0), 2.0, BallColor::Yellow),
        ];

        let resolution = resolve(balls, &basket, field(), &tuning);

        assert_eq!(
            resolution.caught.iter().map(|b| b.id).collect::<Vec<_>>(),
            vec![1, 4]
        );
        assert_eq!(resolution.missed.len(), 1);
        assert_eq!(resolution.missed[0].id, 2);
        assert_eq!(resolution.falling.len(), 1);
        assert_eq!(resolution.falling[0].id, 3);
    }

    #[test]
    fn test_resolve_empty_set() {
        let tuning = Tuning::default();
        let resolution = resolve(Vec::new(), &basket_at(50.0), field(), &tuning);
        assert!(resolution.caught.is_empty());
        assert!(resolution.missed.is_empty());
        assert!(resolution.falling.is_empty());
    }
}
