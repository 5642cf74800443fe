use deskhop::layout::{ResizeEdge, intersects};
use deskhop::{BehaviorKind, HostSurface, Rect, RecordingHost, WindowConfig, WindowEvent, WindowRegistry};
use deskhop::host::HostCall;

fn desktop() -> WindowRegistry<RecordingHost> {
    WindowRegistry::with_host(RecordingHost::new())
}

#[test]
fn dragged_window_is_pushed_out_of_a_solid_one() {
    let mut registry = desktop();
    let a = registry
        .create_window(&WindowConfig::new("A", Rect::new(100, 100, 200, 200)))
        .unwrap();
    let b = registry
        .create_window(&WindowConfig::new("B", Rect::new(500, 100, 200, 200)))
        .unwrap();
    registry.take_events();

    let resolved = registry
        .set_rect(b, Rect::new(150, 100, 200, 200), None)
        .unwrap();
    assert_eq!(resolved, Rect::new(300, 100, 200, 200));
    assert!(!intersects(resolved, registry.window(a).unwrap().rect()));
    assert_eq!(
        registry.take_events(),
        vec![WindowEvent::Moved {
            id: b,
            before: Rect::new(500, 100, 200, 200),
            after: Rect::new(300, 100, 200, 200),
        }]
    );
}

#[test]
fn left_edge_resize_stops_at_the_blocker() {
    let mut registry = desktop();
    registry
        .create_window(&WindowConfig::new("A", Rect::new(100, 100, 200, 200)))
        .unwrap();
    let b = registry
        .create_window(&WindowConfig::new("B", Rect::new(320, 100, 200, 200)))
        .unwrap();

    let resolved = registry
        .set_rect(b, Rect::new(250, 100, 270, 200), Some(ResizeEdge::Left))
        .unwrap();
    assert_eq!(resolved, Rect::new(300, 100, 220, 200));
    assert!(resolved.width >= 0 && resolved.height >= 0);
}

#[test]
fn diagonal_resize_is_rejected_without_mutation() {
    let mut registry = desktop();
    let a = registry
        .create_window(&WindowConfig::new("A", Rect::new(0, 0, 20, 20)))
        .unwrap();
    registry.take_events();
    let err = registry
        .set_rect(a, Rect::new(0, 0, 30, 30), Some(ResizeEdge::BottomRight))
        .unwrap_err();
    assert_eq!(err.kind(), deskhop::ErrorKind::UnsupportedInput);
    assert_eq!(registry.window(a).unwrap().rect(), Rect::new(0, 0, 20, 20));
    assert!(registry.take_events().is_empty());
}

#[test]
fn unblockable_window_lands_exactly_where_asked() {
    let mut registry = desktop();
    registry
        .create_window(&WindowConfig::new("Wall", Rect::new(0, 0, 100, 100)))
        .unwrap();
    let ghost = registry
        .create_window(
            &WindowConfig::new("Ghost", Rect::new(200, 0, 20, 20))
                .with_behavior(BehaviorKind::Unblockable),
        )
        .unwrap();
    for proposed in [
        Rect::new(10, 10, 20, 20),
        Rect::new(-5, 90, 40, 40),
        Rect::new(0, 0, 100, 100),
    ] {
        assert_eq!(registry.set_rect(ghost, proposed, None).unwrap(), proposed);
        assert_eq!(registry.window(ghost).unwrap().rect(), proposed);
    }
}

#[test]
fn proposing_the_current_rect_is_silent() {
    let mut registry = desktop();
    let a = registry
        .create_window(&WindowConfig::new("A", Rect::new(5, 5, 10, 10)))
        .unwrap();
    registry.take_events();
    registry.host_mut().take_calls();

    assert_eq!(
        registry.set_rect(a, Rect::new(5, 5, 10, 10), None).unwrap(),
        Rect::new(5, 5, 10, 10)
    );
    assert!(registry.take_events().is_empty());
    assert!(registry.host().calls().is_empty());
}

#[test]
fn committed_geometry_reaches_the_host() {
    let mut registry = desktop();
    let a = registry
        .create_window(&WindowConfig::new("A", Rect::new(0, 0, 10, 10)))
        .unwrap();
    registry.set_rect(a, Rect::new(3, 4, 10, 10), None).unwrap();
    registry.on_close_requested(a).unwrap();
    assert_eq!(
        registry.host_mut().take_calls(),
        vec![
            HostCall::Create {
                id: a,
                title: "A".to_string(),
                rect: Rect::new(0, 0, 10, 10),
            },
            HostCall::Geometry {
                id: a,
                rect: Rect::new(3, 4, 10, 10),
            },
            HostCall::Destroy(a),
        ]
    );
}

#[test]
fn passable_windows_overlap_each_other_but_not_solid_ones() {
    let mut registry = desktop();
    let glass = registry
        .create_window(
            &WindowConfig::new("Glass", Rect::new(0, 0, 20, 20))
                .with_behavior(BehaviorKind::Passable),
        )
        .unwrap();
    let mist = registry
        .create_window(
            &WindowConfig::new("Mist", Rect::new(50, 0, 20, 20))
                .with_behavior(BehaviorKind::Passable),
        )
        .unwrap();
    let rock = registry
        .create_window(&WindowConfig::new("Rock", Rect::new(0, 50, 20, 20)))
        .unwrap();

    assert_eq!(
        registry.set_rect(mist, Rect::new(10, 0, 20, 20), None).unwrap(),
        Rect::new(10, 0, 20, 20)
    );
    let resolved = registry.set_rect(glass, Rect::new(0, 40, 20, 20), None).unwrap();
    assert!(!intersects(resolved, registry.window(rock).unwrap().rect()));
}

#[test]
fn focus_is_idempotent() {
    let mut registry = desktop();
    let a = registry
        .create_window(&WindowConfig::new("A", Rect::new(0, 0, 5, 5)))
        .unwrap();
    let b = registry
        .create_window(&WindowConfig::new("B", Rect::new(10, 0, 5, 5)))
        .unwrap();
    let c = registry
        .create_window(&WindowConfig::new("C", Rect::new(20, 0, 5, 5)))
        .unwrap();

    registry.on_focused(a).unwrap();
    let once: Vec<_> = registry.order().collect();
    registry.on_focused(a).unwrap();
    registry.on_focused(a).unwrap();
    let thrice: Vec<_> = registry.order().collect();
    assert_eq!(once, vec![b, c, a]);
    assert_eq!(once, thrice);
    assert_eq!(registry.focused(), Some(a));
}

#[test]
fn unknown_behavior_keys_still_create_the_window() {
    let mut registry = desktop();
    let config: WindowConfig = "Odd@0,0,10x10:walkable,sticky,movable".parse().unwrap();
    let id = registry.create_window(&config).unwrap();
    let window = registry.window(id).unwrap();
    assert!(window.is_walkable());
    assert!(window.has(BehaviorKind::Movable));
    assert_eq!(window.behavior_kinds().count(), 2);
}

#[test]
fn recording_host_is_a_host_surface() {
    fn assert_host<H: HostSurface>(_: &H) {}
    assert_host(&RecordingHost::new());
}

#[test]
fn templates_past_the_coordinate_range_are_refused() {
    let mut registry = desktop();
    let err = "Far@2147483000,0,1000x10".parse::<WindowConfig>().unwrap_err();
    assert_eq!(err.kind(), deskhop::ErrorKind::Configuration);
    let far = WindowConfig::new("Far", Rect::new(2_147_483_000, 0, 1000, 10));
    assert!(registry.create_window(&far).is_err());
    assert!(registry.is_empty());
}
