use gridrun::{place_unique, random_cell, respawn_one, GameConfig, Position, ScriptedRandom};
use rand::{rngs::SmallRng, SeedableRng};

#[test]
fn test_random_cell_within_grid() {
    let config = GameConfig::default();
    let mut rng = SmallRng::seed_from_u64(42);
    for _ in 0..1000 {
        assert!(config.contains(random_cell(&config, &mut rng)));
    }
}

#[test]
fn test_place_unique_skips_reserved_and_repeats() {
    let config = GameConfig::default();
    let reserved = [Position::new(0, 0)];
    // (0,0) reserved, (1,1) twice, then (2,2)
    let mut rng = ScriptedRandom::new([0, 0, 1, 1, 1, 1, 2, 2]);
    let placed = place_unique(&config, &mut rng, 2, &reserved);
    assert_eq!(placed, vec![Position::new(1, 1), Position::new(2, 2)]);
}

#[test]
fn test_place_unique_fills_small_grid() {
    let config = GameConfig { rows: 2, cols: 2, stars: 1, enemies: 1, ..GameConfig::default() };
    let mut rng = SmallRng::seed_from_u64(3);
    let reserved = [Position::new(1, 1)];
    let mut placed = place_unique(&config, &mut rng, 3, &reserved);
    placed.sort_by_key(|p| (p.row, p.col));
    assert_eq!(
        placed,
        vec![Position::new(0, 0), Position::new(0, 1), Position::new(1, 0)]
    );
}

#[test]
fn test_respawn_gives_up_after_attempts() {
    let config = GameConfig { respawn_attempts: 5, ..GameConfig::default() };
    let mut rng = ScriptedRandom::new([3]);
    assert_eq!(respawn_one(&config, &mut rng, &[Position::new(3, 3)]), None);
    assert_eq!(rng.draws(), 10);

    let mut rng = ScriptedRandom::new([3, 3, 4, 4]);
    assert_eq!(
        respawn_one(&config, &mut rng, &[Position::new(3, 3)]),
        Some(Position::new(4, 4))
    );
}
