use gridrun::{
    ConfigError, Direction, EnemyAction, GameConfig, GameEngine, GameStatus, Position,
    ScriptedRandom,
};

/// Enemies always stay put with this source (4 is the "stay" action).
fn still_enemies() -> ScriptedRandom {
    ScriptedRandom::new([4])
}

fn engine_at(
    player: (i32, i32),
    goal: (i32, i32),
    stars: &[(i32, i32)],
    enemies: &[(i32, i32)],
) -> GameEngine {
    GameEngine::with_layout(
        GameConfig::default(),
        player.into(),
        goal.into(),
        stars.iter().map(|&p| p.into()).collect(),
        enemies.iter().map(|&p| p.into()).collect(),
    )
    .unwrap()
}

#[test]
fn test_default_config_values() {
    let config = GameConfig::default();
    assert_eq!((config.rows, config.cols), (12, 30));
    assert_eq!((config.stars, config.enemies), (6, 3));
    assert_eq!(config.player_start(), Position::new(6, 15));
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_validation() {
    let empty = GameConfig { rows: 0, ..GameConfig::default() };
    assert_eq!(empty.validate(), Err(ConfigError::EmptyGrid));

    let crowded = GameConfig { rows: 2, cols: 2, stars: 2, enemies: 1, ..GameConfig::default() };
    assert_eq!(
        crowded.validate(),
        Err(ConfigError::TooManyEntities { needed: 5, cells: 4 })
    );

    let exact = GameConfig { rows: 2, cols: 2, stars: 1, enemies: 1, ..GameConfig::default() };
    assert!(exact.validate().is_ok());

    let no_interval = GameConfig { respawn_interval: 0, ..GameConfig::default() };
    assert_eq!(no_interval.validate(), Err(ConfigError::ZeroRespawnInterval));

    let mut rng = still_enemies();
    assert!(GameEngine::new(crowded, &mut rng).is_err());
}

#[test]
fn test_spawn_with_scripted_rng() {
    let config = GameConfig { rows: 3, cols: 3, stars: 1, enemies: 1, ..GameConfig::default() };
    // goal draws (1,1)=player then (0,0); star draws (0,0)=goal then (0,2); enemy (2,2)
    let mut rng = ScriptedRandom::new([1, 1, 0, 0, 0, 0, 0, 2, 2, 2]);
    let engine = GameEngine::new(config, &mut rng).unwrap();
    assert_eq!(engine.player(), Position::new(1, 1));
    assert_eq!(engine.goal(), Position::new(0, 0));
    assert_eq!(engine.stars(), &[Position::new(0, 2)]);
    assert_eq!(engine.enemies(), &[Position::new(2, 2)]);
    assert_eq!(engine.status(), GameStatus::Running);
    assert_eq!(rng.draws(), 10);
}

#[test]
fn test_move_up_one_cell() {
    let mut engine = engine_at((6, 15), (0, 0), &[], &[(11, 29)]);
    let report = engine.play_turn(Direction::Up, &mut still_enemies());
    assert!(report.moved);
    assert_eq!(engine.player(), Position::new(5, 15));
    assert_eq!(engine.turns(), 1);
    assert_eq!(report.status, GameStatus::Running);
}

#[test]
fn test_out_of_bounds_move_is_noop() {
    let mut engine = engine_at((0, 29), (11, 0), &[], &[(11, 29)]);
    let report = engine.play_turn(Direction::Up, &mut still_enemies());
    assert!(!report.moved);
    assert_eq!(engine.player(), Position::new(0, 29));
    let report = engine.play_turn(Direction::Right, &mut still_enemies());
    assert!(!report.moved);
    assert_eq!(engine.player(), Position::new(0, 29));
    // still a full turn
    assert_eq!(engine.turns(), 2);
}

#[test]
fn test_collect_star() {
    let config = GameConfig { respawn_attempts: 0, ..GameConfig::default() };
    let mut engine = GameEngine::with_layout(
        config,
        Position::new(6, 15),
        Position::new(0, 0),
        vec![Position::new(5, 15), Position::new(2, 2)],
        vec![Position::new(11, 29)],
    )
    .unwrap();
    let report = engine.play_turn(Direction::Up, &mut still_enemies());
    assert!(report.collected);
    assert_eq!(engine.score(), 1);
    assert_eq!(engine.stars(), &[Position::new(2, 2)]);
    assert!(!report.all_collected);
}

#[test]
fn test_reach_goal_wins_before_enemies_move() {
    let mut engine = engine_at((1, 0), (0, 0), &[], &[(0, 1)]);
    let mut rng = ScriptedRandom::new([2]);
    let report = engine.play_turn(Direction::Up, &mut rng);
    assert_eq!(report.status, GameStatus::Won);
    assert_eq!(engine.status(), GameStatus::Won);
    assert_eq!(rng.draws(), 0);
    assert_eq!(engine.enemies(), &[Position::new(0, 1)]);
    assert_eq!(engine.turns(), 0);
}

#[test]
fn test_enemy_catches_player() {
    let mut engine = engine_at((6, 15), (0, 0), &[], &[(4, 15)]);
    // 1 = move down
    let report = engine.play_turn(Direction::Up, &mut ScriptedRandom::new([1]));
    assert_eq!(report.status, GameStatus::LostToEnemyCollision);
    assert_eq!(engine.enemies(), &[Position::new(5, 15)]);
    assert_eq!(engine.turns(), 0);

    // nothing changes once the game is over
    let report = engine.play_turn(Direction::Down, &mut still_enemies());
    assert!(!report.moved);
    assert_eq!(engine.player(), Position::new(5, 15));
}

#[test]
fn test_enemy_never_enters_goal() {
    let mut engine = engine_at((6, 15), (0, 0), &[], &[(0, 1)]);
    // 2 = move left, onto the goal
    engine.move_enemies(&mut ScriptedRandom::new([2]));
    assert_eq!(engine.enemies(), &[Position::new(0, 1)]);
}

#[test]
fn test_enemy_stays_inside_grid() {
    let mut engine = engine_at((6, 15), (11, 0), &[], &[(0, 0), (11, 29)]);
    // up for the first enemy, right for the second
    engine.move_enemies(&mut ScriptedRandom::new([0, 3]));
    assert_eq!(engine.enemies(), &[Position::new(0, 0), Position::new(11, 29)]);
}

#[test]
fn test_enemy_actions_cover_five_choices() {
    assert_eq!(EnemyAction::from_index(0), EnemyAction::Move(Direction::Up));
    assert_eq!(EnemyAction::from_index(1), EnemyAction::Move(Direction::Down));
    assert_eq!(EnemyAction::from_index(2), EnemyAction::Move(Direction::Left));
    assert_eq!(EnemyAction::from_index(3), EnemyAction::Move(Direction::Right));
    assert_eq!(EnemyAction::from_index(4), EnemyAction::Stay);
    assert_eq!(EnemyAction::COUNT, 5);
}

#[test]
fn test_initial_overlap_detected_before_input() {
    let mut engine = engine_at((6, 15), (0, 0), &[], &[(6, 15)]);
    assert_eq!(engine.check_start_of_turn(), GameStatus::LostToInitialOverlap);
}

#[test]
fn test_start_on_goal_wins() {
    let mut engine = engine_at((0, 0), (0, 0), &[], &[(11, 29)]);
    assert_eq!(engine.check_start_of_turn(), GameStatus::Won);
}

#[test]
fn test_star_respawns_on_interval() {
    let mut engine = engine_at((6, 15), (0, 0), &[(1, 1)], &[(11, 29)]);
    // enemy stays (4), respawn draws row 4, col 4
    let report = engine.play_turn(Direction::Left, &mut still_enemies());
    assert_eq!(report.respawned, Some(Position::new(4, 4)));
    assert_eq!(engine.stars().len(), 2);
    assert_eq!(engine.turns(), 1);

    // turn 1 is not a respawn turn
    let report = engine.play_turn(Direction::Left, &mut still_enemies());
    assert_eq!(report.respawned, None);
    assert_eq!(engine.stars().len(), 2);
}

#[test]
fn test_respawn_skipped_when_every_draw_is_reserved() {
    let mut engine = engine_at((6, 15), (0, 0), &[], &[(11, 29)]);
    // the enemy steps up to (10,29); every respawn draw lands on the goal
    let mut rng = ScriptedRandom::new([0]);
    let report = engine.play_turn(Direction::Down, &mut rng);
    assert_eq!(report.respawned, None);
    assert!(engine.stars().is_empty());
    assert!(report.all_collected);
    // one enemy draw plus fifty respawn attempts of two draws each
    assert_eq!(rng.draws(), 1 + 2 * 50);
}

#[test]
fn test_respawn_not_above_target() {
    let config = GameConfig { stars: 1, ..GameConfig::default() };
    let mut engine = GameEngine::with_layout(
        config,
        Position::new(6, 15),
        Position::new(0, 0),
        vec![Position::new(1, 1)],
        vec![Position::new(11, 29)],
    )
    .unwrap();
    let report = engine.play_turn(Direction::Left, &mut still_enemies());
    assert_eq!(report.respawned, None);
    assert_eq!(engine.stars(), &[Position::new(1, 1)]);
}
