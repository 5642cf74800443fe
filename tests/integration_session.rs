use std::time::Duration;

use deskhop::layout::ResizeEdge;

use deskhop::{
    BehaviorKind, DirectionInput, GameEvent, GameSession, LevelConfig, PlayerController, Rect,
    Size, WindowConfig, WindowRegistry,
};

const RIGHT: DirectionInput = DirectionInput {
    up: false,
    down: false,
    left: false,
    right: true,
};

fn walk_right(player: &mut PlayerController, registry: &WindowRegistry, boundary: Rect, steps: usize) {
    for _ in 0..steps {
        player.step(RIGHT, Duration::from_millis(50), registry.windows(), boundary);
    }
}

fn floor_and_wall() -> WindowRegistry {
    let mut registry = WindowRegistry::new();
    registry
        .create_window(
            &WindowConfig::new("Floor", Rect::new(0, 0, 60, 20)).with_behavior(BehaviorKind::Walkable),
        )
        .unwrap();
    registry
        .create_window(&WindowConfig::new("Wall", Rect::new(20, 0, 10, 20)))
        .unwrap();
    registry
}

#[test]
fn wall_stops_the_player() {
    let registry = floor_and_wall();
    let boundary = Rect::new(0, 0, 60, 20);
    let mut player = PlayerController::new(12.0, Size::new(2.0, 2.0));
    player.center_in(Rect::new(8, 5, 6, 4), Size::new(2.0, 2.0));
    walk_right(&mut player, &registry, boundary, 60);
    assert!((player.rect().x - 18.0).abs() < 1e-6, "{:?}", player.rect());
}

#[test]
fn unblockable_walkable_window_opens_a_hole_in_the_wall() {
    let mut registry = floor_and_wall();
    registry
        .create_window(
            &WindowConfig::new("Portal", Rect::new(20, 5, 10, 5))
                .with_behaviors(&[BehaviorKind::Walkable, BehaviorKind::Unblockable]),
        )
        .unwrap();
    let boundary = Rect::new(0, 0, 60, 20);
    let mut player = PlayerController::new(12.0, Size::new(2.0, 2.0));
    player.center_in(Rect::new(8, 5, 6, 4), Size::new(2.0, 2.0));
    walk_right(&mut player, &registry, boundary, 60);
    assert!(player.rect().x > 30.0, "{:?}", player.rect());
    assert_eq!(player.rect().y, 6.0);
}

fn level(number: u32, goal: Rect) -> LevelConfig {
    LevelConfig::new(number, Rect::new(0, 0, 40, 10), goal)
        .with_player_size(Size::new(2.0, 2.0))
        .with_window(
            WindowConfig::new("Floor", Rect::new(0, 0, 40, 10))
                .with_behavior(BehaviorKind::Walkable)
                .start_window(),
        )
}

#[test]
fn reaching_goals_walks_through_every_level_then_ends() {
    let mut session =
        GameSession::new(vec![level(1, Rect::new(30, 4, 2, 2)), level(2, Rect::new(30, 4, 2, 2))])
            .unwrap();
    session.load_level(0).unwrap();

    let mut seen = Vec::new();
    for _ in 0..200 {
        seen.extend(session.tick(RIGHT, Duration::from_millis(50)));
        if session.is_finished() {
            break;
        }
    }
    assert_eq!(
        seen,
        vec![
            GameEvent::LevelCompleted(0),
            GameEvent::LevelLoaded(1),
            GameEvent::LevelCompleted(1),
            GameEvent::GameOver,
        ]
    );
    assert!(session.tick(RIGHT, Duration::from_millis(50)).is_empty());
}

#[test]
fn anchored_player_rides_a_moving_window() {
    let mut session = GameSession::new(vec![
        LevelConfig::new(1, Rect::new(0, 0, 80, 40), Rect::new(78, 38, 1, 1))
            .with_player_size(Size::new(2.0, 2.0))
            .with_window(
                WindowConfig::new("Raft", Rect::new(0, 0, 20, 10))
                    .with_behaviors(&[BehaviorKind::Walkable, BehaviorKind::Movable])
                    .follow_movement(true)
                    .start_window(),
            ),
    ])
    .unwrap();
    session.load_level(0).unwrap();
    let raft = session.player().anchor().unwrap();
    let before = session.player().rect();

    session
        .registry_mut()
        .set_rect(raft, Rect::new(30, 15, 20, 10), None)
        .unwrap();
    session.tick(DirectionInput::default(), Duration::from_millis(16));

    let after = session.player().rect();
    assert_eq!(after.x - before.x, 30.0);
    assert_eq!(after.y - before.y, 15.0);
    assert_eq!(session.player().anchor(), Some(raft));
}

fn raft_session(follow_resize: bool) -> GameSession {
    let mut session = GameSession::new(vec![
        LevelConfig::new(1, Rect::new(0, 0, 80, 40), Rect::new(78, 38, 1, 1))
            .with_player_size(Size::new(2.0, 2.0))
            .with_window(
                WindowConfig::new("Raft", Rect::new(0, 0, 20, 10))
                    .with_behaviors(&[BehaviorKind::Walkable, BehaviorKind::Resizable])
                    .follow_resize(follow_resize)
                    .start_window(),
            ),
    ])
    .unwrap();
    session.load_level(0).unwrap();
    session
}

#[test]
fn anchored_player_scales_with_a_resized_window() {
    let mut session = raft_session(true);
    let raft = session.player().anchor().unwrap();
    assert_eq!(session.player().rect(), Rect::new(9.0, 4.0, 2.0, 2.0));

    session
        .registry_mut()
        .set_rect(raft, Rect::new(0, 0, 40, 10), Some(ResizeEdge::Right))
        .unwrap();
    session.tick(DirectionInput::default(), Duration::from_millis(16));

    assert_eq!(session.player().rect(), Rect::new(18.0, 4.0, 4.0, 2.0));
    assert_eq!(session.player().anchor(), Some(raft));
}

#[test]
fn resize_is_ignored_without_follow_resize() {
    let mut session = raft_session(false);
    let raft = session.player().anchor().unwrap();

    session
        .registry_mut()
        .set_rect(raft, Rect::new(0, 0, 40, 10), Some(ResizeEdge::Right))
        .unwrap();
    session.tick(DirectionInput::default(), Duration::from_millis(16));

    assert_eq!(session.player().rect(), Rect::new(9.0, 4.0, 2.0, 2.0));
}

#[test]
fn cli_window_templates_join_every_level() {
    let mut session = GameSession::new(vec![level(1, Rect::new(30, 4, 2, 2))]).unwrap();
    session.set_extra_windows(vec!["Crate@10,2,4x4:passable".parse().unwrap()]);
    session.load_level(0).unwrap();
    assert_eq!(session.registry().len(), 2);
    session.restart_level().unwrap();
    assert_eq!(session.registry().len(), 2);
}
