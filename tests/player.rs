// tests/player.rs
use bevy_prng::WyRand;
use dda_sim::mechanics::curve;
use dda_sim::{Adjustment, DdaError, PlayerModel, WINDOW_SIZE};
use rand_core::SeedableRng;

fn rng(seed: u64) -> WyRand {
    WyRand::from_seed(seed.to_le_bytes())
}

fn model_with(actual_level: i32, window: &[i32]) -> PlayerModel {
    let mut p = PlayerModel::new(actual_level);
    for &l in window {
        p.push_temporary_level(l);
    }
    p
}

/* ──────────────────────────────────────────────────────────────────────────
1) Window
────────────────────────────────────────────────────────────────────────── */

#[test]
fn window_grows_to_capacity_then_slides() {
    let mut p = PlayerModel::new(3);
    for i in 1..=5 {
        p.push_temporary_level(i);
        assert_eq!(p.temporary_levels().len(), i as usize);
    }
    for i in 1..100 {
        p.push_temporary_level(i);
        assert_eq!(p.temporary_levels().len(), WINDOW_SIZE);
    }
    assert_eq!(p.window_snapshot(), vec![95, 96, 97, 98, 99]);
}

#[test]
fn oldest_level_is_evicted_first() {
    let mut p = model_with(0, &[1, 2, 3, 4, 5]);
    p.push_temporary_level(6);
    assert_eq!(p.window_snapshot(), vec![2, 3, 4, 5, 6]);
}

#[test]
fn estimate_is_window_mean() {
    let mut p = PlayerModel::new(0);
    p.push_temporary_level(1);
    assert_eq!(p.estimated_level().unwrap(), 1.0);
    p.push_temporary_level(2);
    assert_eq!(p.estimated_level().unwrap(), 1.5);
    p.push_temporary_level(3);
    assert_eq!(p.estimated_level().unwrap(), 2.0);
}

#[test]
fn estimate_handles_negative_levels() {
    let p = model_with(0, &[-1, -2, 0]);
    assert_eq!(p.estimated_level().unwrap(), -1.0);
}

#[test]
fn unseeded_model_has_no_estimate() {
    let p = PlayerModel::new(4);
    assert!(matches!(p.estimated_level(), Err(DdaError::EmptyWindow)));
}

#[test]
fn seeded_model_starts_with_one_level() {
    let p = PlayerModel::seeded(2, 5);
    assert_eq!(p.actual_level(), 2);
    assert_eq!(p.window_snapshot(), vec![5]);
    assert_eq!(p.estimated_level().unwrap(), 5.0);
}

/* ──────────────────────────────────────────────────────────────────────────
2) Hysteresis update
────────────────────────────────────────────────────────────────────────── */

#[test]
fn hard_win_pushes_challenge_plus_one() {
    let mut p = model_with(3, &[3]);
    assert_eq!(p.update_estimate(3, true).unwrap(), Adjustment::HardWin);
    assert_eq!(p.window_snapshot(), vec![3, 4]);
}

#[test]
fn easy_loss_pushes_challenge_minus_one() {
    let mut p = model_with(3, &[3]);
    assert_eq!(p.update_estimate(3, false).unwrap(), Adjustment::EasyLoss);
    assert_eq!(p.window_snapshot(), vec![3, 2]);
}

#[test]
fn easy_win_leaves_window_alone() {
    let mut p = model_with(3, &[3]);
    assert_eq!(p.update_estimate(2, true).unwrap(), Adjustment::Expected);
    assert_eq!(p.window_snapshot(), vec![3]);
}

#[test]
fn hard_loss_leaves_window_alone() {
    let mut p = model_with(3, &[3]);
    assert_eq!(p.update_estimate(4, false).unwrap(), Adjustment::Expected);
    assert_eq!(p.window_snapshot(), vec![3]);
}

#[test]
fn update_compares_against_fractional_estimate() {
    // estimate 4.5: challenge 4 is below it, challenge 5 above it
    let mut p = model_with(0, &[4, 5]);
    assert_eq!(p.update_estimate(4, true).unwrap(), Adjustment::Expected);
    assert_eq!(p.update_estimate(5, false).unwrap(), Adjustment::Expected);
    assert_eq!(p.update_estimate(5, true).unwrap(), Adjustment::HardWin);
    assert_eq!(p.window_snapshot(), vec![4, 5, 6]);
}

#[test]
fn only_surprising_outcomes_name_a_level_to_push() {
    assert_eq!(Adjustment::HardWin.temporary_level(4), Some(5));
    assert_eq!(Adjustment::EasyLoss.temporary_level(4), Some(3));
    assert_eq!(Adjustment::Expected.temporary_level(4), None);
}

#[test]
fn update_on_unseeded_model_fails_without_pushing() {
    let mut p = PlayerModel::new(3);
    assert!(matches!(p.update_estimate(3, true), Err(DdaError::EmptyWindow)));
    assert!(p.temporary_levels().is_empty());
}

/* ──────────────────────────────────────────────────────────────────────────
3) Resolving challenges
────────────────────────────────────────────────────────────────────────── */

fn check_loss_rate(challenge: i32, expected_difference: i32, expected_difficulty: f64, tol: f64) {
    let p = model_with(3, &[3]);
    let mut r = rng(42 + challenge as u64);
    let mut losses = 0;
    let mut difficulty = 0.0;
    for _ in 0..1000 {
        let o = p.resolve_challenge(challenge, &mut r);
        difficulty = o.difficulty;
        assert_eq!(o.difference, expected_difference);
        assert!((o.difficulty - expected_difficulty).abs() < tol, "difficulty {}", o.difficulty);
        assert!((0.0..1.0).contains(&o.random_value));
        assert_eq!(o.won, o.random_value > o.difficulty);
        if !o.won {
            losses += 1;
        }
    }
    let rate = losses as f64 / 1000.0;
    assert!((rate - difficulty).abs() < 0.1, "loss rate {rate} vs difficulty {difficulty}");
}

#[test]
fn even_challenge_is_a_coin_toss() {
    check_loss_rate(3, 0, 0.5, 0.001);
}

#[test]
fn harder_challenge_is_lost_more_often() {
    check_loss_rate(5, -2, 0.8, 0.05);
}

#[test]
fn resolving_does_not_touch_the_window() {
    let p = model_with(3, &[1, 2, 3]);
    let mut r = rng(7);
    for c in 0..10 {
        let _ = p.resolve_challenge(c, &mut r);
    }
    assert_eq!(p.window_snapshot(), vec![1, 2, 3]);
}

#[test]
fn difficulty_is_not_clamped() {
    let p = model_with(0, &[0]);
    let mut r = rng(9);

    // difference -4: loss chance above 1, never winnable
    let hard = p.resolve_challenge(4, &mut r);
    assert!((hard.difficulty - curve::loss_chance(-4)).abs() < 1e-12);
    assert!(hard.difficulty > 1.0);

    // difference 4: loss chance below 0, never losable
    let p = model_with(8, &[8]);
    let easy = p.resolve_challenge(4, &mut r);
    assert!(easy.difficulty < 0.0);

    for _ in 0..200 {
        assert!(!model_with(0, &[0]).resolve_challenge(4, &mut r).won);
        assert!(p.resolve_challenge(4, &mut r).won);
    }
}
