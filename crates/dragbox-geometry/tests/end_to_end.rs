//! Full pointer sessions through the `Panel` facade.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use dragbox_common::{
    BoundingBox, ElementHandle, PanelError, PanelEvent, PanelId, ParentSize, PointerButton,
    PointerEvent, StickId,
};
use dragbox_config::{DragboxConfig, PanelConfig};
use dragbox_geometry::{AttachContext, GroupScope, NoLayout, Panel, PanelProps};

fn parent() -> ParentSize {
    ParentSize::new(800.0, 600.0)
}

fn mount(panel: &mut Panel, group: Option<GroupScope>, props: PanelProps) -> ElementHandle {
    let element = ElementHandle::new();
    panel
        .on_attach(AttachContext {
            element,
            parent: Some(parent()),
            group,
            props,
        })
        .unwrap();
    element
}

fn events(panel: &mut Panel) -> Rc<RefCell<Vec<PanelEvent>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    panel.subscribe(move |e| sink.borrow_mut().push(e.clone()));
    log
}

/// Measure every mounted panel, the way a host would before a move tick.
fn measure(panels: &[&Panel]) -> HashMap<ElementHandle, BoundingBox> {
    panels
        .iter()
        .filter_map(|p| Some((p.element()?, p.state().bounding_box())))
        .collect()
}

#[test]
fn drag_is_clamped_to_parent() {
    let mut panel = Panel::new(PanelId(1), &PanelConfig::default());
    mount(&mut panel, None, PanelProps::new(0.0, 0.0, 100.0, 100.0));

    panel.pointer_down(PointerEvent::primary(50.0, 50.0)).unwrap();
    let rect = panel
        .pointer_move(PointerEvent::primary(950.0, 50.0), &NoLayout)
        .unwrap();

    assert_eq!(rect.left, 700.0);
    assert_eq!(rect.width, 100.0);
    assert_eq!(panel.state().insets().right, 0.0);
}

#[test]
fn aspect_locked_corner_resize_grows_height() {
    let config = PanelConfig {
        aspect_ratio: true,
        ..PanelConfig::default()
    };
    let mut panel = Panel::new(PanelId(1), &config);
    mount(&mut panel, None, PanelProps::new(0.0, 0.0, 100.0, 100.0));

    panel
        .stick_down(StickId::BottomRight, PointerEvent::primary(100.0, 100.0), false)
        .unwrap();
    let rect = panel
        .pointer_move(PointerEvent::primary(150.0, 100.0), &NoLayout)
        .unwrap();

    assert_eq!(rect.width, 150.0);
    assert_eq!(rect.height, 150.0);
}

#[test]
fn alignment_within_gap_snaps_and_beyond_gap_does_not() {
    let config = DragboxConfig::default();
    let group = GroupScope::new();

    let mut anchor = Panel::from_config(PanelId(1), &config);
    mount(&mut anchor, Some(group.clone()), PanelProps::new(400.0, 100.0, 80.0, 80.0));

    let mut moving = Panel::from_config(PanelId(2), &config);
    mount(&mut moving, Some(group.clone()), PanelProps::new(0.0, 0.0, 50.0, 50.0));

    moving.pointer_down(PointerEvent::primary(0.0, 0.0)).unwrap();

    let layout = measure(&[&anchor, &moving]);
    let rect = moving
        .pointer_move(PointerEvent::primary(0.0, 103.0), &layout)
        .unwrap();
    assert_eq!(rect.top, 100.0);
    assert_eq!(moving.checking(), &[anchor.element().unwrap()]);

    let layout = measure(&[&anchor, &moving]);
    let rect = moving
        .pointer_move(PointerEvent::primary(0.0, 108.0), &layout)
        .unwrap();
    assert_eq!(rect.top, 108.0);
    assert!(moving.guides().is_empty());
    assert!(moving.checking().is_empty());
}

#[test]
fn detached_candidate_drops_out_mid_drag() {
    let config = DragboxConfig::default();
    let group = GroupScope::new();

    let mut anchor = Panel::from_config(PanelId(1), &config);
    mount(&mut anchor, Some(group.clone()), PanelProps::new(400.0, 100.0, 80.0, 80.0));

    let mut moving = Panel::from_config(PanelId(2), &config);
    mount(&mut moving, Some(group.clone()), PanelProps::new(0.0, 0.0, 50.0, 50.0));

    moving.pointer_down(PointerEvent::primary(0.0, 0.0)).unwrap();
    let layout = measure(&[&anchor, &moving]);
    moving.pointer_move(PointerEvent::primary(0.0, 102.0), &layout);
    assert!(!moving.checking().is_empty());

    // The host still reports the stale box; membership is what counts.
    anchor.on_detach();
    let rect = moving
        .pointer_move(PointerEvent::primary(0.0, 102.0), &layout)
        .unwrap();

    assert_eq!(rect.top, 102.0);
    assert!(moving.checking().is_empty());
    assert_eq!(group.len(), 1);
    assert!(moving.pointer_up());
}

#[test]
fn attach_without_parent_is_an_error() {
    let mut panel = Panel::new(PanelId(3), &PanelConfig::default());
    let err = panel
        .on_attach(AttachContext {
            element: ElementHandle::new(),
            parent: None,
            group: None,
            props: PanelProps::default(),
        })
        .unwrap_err();

    assert!(matches!(err, PanelError::MissingParent(PanelId(3))));
    assert!(err.to_string().contains("panel-3"));
}

#[test]
fn non_primary_button_never_starts_a_session() {
    let mut panel = Panel::new(PanelId(1), &PanelConfig::default());
    mount(&mut panel, None, PanelProps::new(0.0, 0.0, 100.0, 100.0));
    let log = events(&mut panel);

    let secondary = PointerEvent {
        x: 0.0,
        y: 0.0,
        button: PointerButton::Secondary,
    };
    assert!(!panel.pointer_down(secondary).unwrap());
    assert!(!panel.stick_down(StickId::BottomRight, secondary, false).unwrap());
    assert!(panel
        .pointer_move(PointerEvent::primary(300.0, 300.0), &NoLayout)
        .is_none());

    assert_eq!(panel.rect().left, 0.0);
    assert_eq!(*log.borrow(), vec![PanelEvent::Activated]);
}

#[test]
fn resize_session_event_sequence() {
    let mut panel = Panel::new(PanelId(1), &PanelConfig::default());
    mount(&mut panel, None, PanelProps::new(100.0, 100.0, 200.0, 100.0));
    let log = events(&mut panel);

    panel
        .stick_down(StickId::TopLeft, PointerEvent::primary(100.0, 100.0), false)
        .unwrap();
    panel.pointer_move(PointerEvent::primary(90.0, 80.0), &NoLayout);
    panel.pointer_move(PointerEvent::primary(80.0, 60.0), &NoLayout);
    assert!(panel.pointer_cancel());

    let log = log.borrow();
    let kinds: Vec<&str> = log
        .iter()
        .map(|e| match e {
            PanelEvent::Resizing(_) => "resizing",
            PanelEvent::ResizeStop(_) => "resizestop",
            _ => "other",
        })
        .collect();
    assert_eq!(kinds, ["resizing", "resizing", "resizing", "resizestop"]);

    let PanelEvent::ResizeStop(rect) = log[3] else {
        panic!("expected resizestop, got {:?}", log[3]);
    };
    assert_eq!((rect.left, rect.top), (80.0, 60.0));
    assert_eq!((rect.width, rect.height), (220.0, 140.0));
}

#[test]
fn events_serialize_as_tagged_json() {
    let mut panel = Panel::new(PanelId(1), &PanelConfig::default());
    mount(&mut panel, None, PanelProps::new(0.0, 0.0, 100.0, 100.0));
    let log = events(&mut panel);

    panel.pointer_down(PointerEvent::primary(0.0, 0.0)).unwrap();
    panel.pointer_move(PointerEvent::primary(10.0, 0.0), &NoLayout);
    panel.pointer_up();

    let json: Vec<String> = log
        .borrow()
        .iter()
        .map(|e| serde_json::to_string(e).unwrap())
        .collect();
    assert_eq!(json[0], r#"{"type":"Activated"}"#);
    assert!(json[1].starts_with(r#"{"type":"Move","data":{"left":10.0"#));
    assert_eq!(json[2], r#"{"type":"MoveEnd"}"#);
}
