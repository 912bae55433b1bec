//! End-to-end window tests.
//!
//! Builds the full window from a config, solves layout for a concrete
//! terminal size, paints a frame to load the hit grid, and drives clicks
//! through the router exactly the way the mounted event loop does. URL
//! opening and click logging go through spies instead of the system
//! services, so every observable effect is captured.

use std::cell::RefCell;
use std::rc::Rc;

use casement::builder::{BUTTON_BG, LINK_BG};
use casement::input::MouseEvent;
use casement::layout::solve;
use casement::pipeline::{render_frame, Frame};
use casement::{
    build_window, ClickLog, Icon, NodeId, Rgba, Services, Stage, UrlOpener, WindowConfig,
};

const COLS: u16 = 120;
const ROWS: u16 = 40;

// =============================================================================
// Spies
// =============================================================================

struct SpyOpener(Rc<RefCell<Vec<String>>>);

impl UrlOpener for SpyOpener {
    fn open(&self, url: &str) {
        self.0.borrow_mut().push(url.to_string());
    }
}

struct SpyLog(Rc<RefCell<Vec<usize>>>);

impl ClickLog for SpyLog {
    fn button_clicked(&self, index: usize) {
        self.0.borrow_mut().push(index);
    }
}

#[allow(clippy::type_complexity)]
fn spy_services() -> (Services, Rc<RefCell<Vec<usize>>>, Rc<RefCell<Vec<String>>>) {
    let clicks = Rc::new(RefCell::new(Vec::new()));
    let urls = Rc::new(RefCell::new(Vec::new()));
    let services = Services {
        opener: Rc::new(SpyOpener(Rc::clone(&urls))),
        clicks: Rc::new(SpyLog(Rc::clone(&clicks))),
    };
    (services, clicks, urls)
}

fn test_config() -> WindowConfig {
    WindowConfig::new(
        "Demo Window",
        vec!["Play".into(), "Options".into(), "Quit".into()],
        vec!["Blog".into(), "Docs".into(), "Source".into()],
        vec![
            "https://example.com/blog".into(),
            "https://example.com/docs".into(),
            "https://example.com/source".into(),
        ],
        vec![
            Some(Icon {
                glyph: '♦',
                color: Rgba::rgb(200, 40, 40),
            }),
            None,
            Some(Icon {
                glyph: '♠',
                color: Rgba::rgb(40, 40, 200),
            }),
            None,
        ],
    )
    .expect("valid test config")
}

// =============================================================================
// Helpers
// =============================================================================

/// Solve, paint, and load the router's hit grid, like the event loop does.
fn paint(stage: &mut Stage, cols: u16, rows: u16) -> Frame {
    let surface = stage.surface().expect("surface exists after build");
    let root = surface.root();
    let metrics = surface.metrics(cols, rows);

    let layout = solve(stage.scene(), root, &metrics);
    let frame = render_frame(stage.scene(), root, &layout, &metrics, cols, rows);
    stage.update_hit_regions(cols, rows, &frame.hit_regions);
    frame
}

fn region_center(frame: &Frame, node: NodeId) -> (u16, u16) {
    let region = frame
        .hit_regions
        .iter()
        .find(|r| r.node == node)
        .expect("node has a hit region");
    (region.x + region.width / 2, region.y + region.height / 2)
}

fn click(stage: &mut Stage, x: u16, y: u16) {
    stage.dispatch_mouse(&MouseEvent::down(x, y));
    stage.dispatch_mouse(&MouseEvent::up(x, y));
}

// =============================================================================
// Bootstrap
// =============================================================================

#[test]
fn test_rebuilding_reuses_surface_and_router() {
    let (services, _clicks, _urls) = spy_services();
    let mut stage = Stage::new();

    let first = build_window(&mut stage, &test_config(), &services);
    let root_after_first = stage.surface().unwrap().root();
    let nodes_after_first = stage.scene().len();
    let handlers_after_first = stage.router().unwrap().handler_count();

    let second = build_window(&mut stage, &test_config(), &services);
    let root_after_second = stage.surface().unwrap().root();

    assert_eq!(root_after_first, root_after_second);
    assert_eq!(stage.scene().parent(first.window), Some(root_after_first));
    assert_eq!(stage.scene().parent(second.window), Some(root_after_first));
    // Only the surface node is shared between the two builds.
    assert_eq!(stage.scene().len(), nodes_after_first * 2 - 1);
    // The router survived and picked up the second window's handlers.
    assert_eq!(
        stage.router().unwrap().handler_count(),
        handlers_after_first * 2
    );
}

// =============================================================================
// Tree shape
// =============================================================================

#[test]
fn test_icon_slots_are_always_four_and_fixed_size() {
    let (services, _clicks, _urls) = spy_services();
    let mut stage = Stage::new();
    let handles = build_window(&mut stage, &test_config(), &services);

    let scene = stage.scene();
    assert_eq!(scene.children(handles.icons_row).len(), 4);
    for slot in handles.icon_slots {
        let node = scene.node(slot);
        assert_eq!(node.style.preferred_width, Some(64.0));
        assert_eq!(node.style.preferred_height, Some(64.0));
        assert!(node.fill.is_some());
    }

    // Icons were configured for slots 0 and 2 only.
    assert!(scene.node(handles.icon_slots[0]).icon.is_some());
    assert!(scene.node(handles.icon_slots[1]).icon.is_none());
    assert!(scene.node(handles.icon_slots[2]).icon.is_some());
    assert!(scene.node(handles.icon_slots[3]).icon.is_none());
    assert_eq!(scene.node(handles.icon_slots[0]).icon.unwrap().glyph, '♦');
}

#[test]
fn test_no_icons_still_yields_four_slots() {
    let (services, _clicks, _urls) = spy_services();
    let mut stage = Stage::new();
    let config = WindowConfig::new(
        "T",
        vec!["A".into(), "B".into(), "C".into()],
        vec!["D".into(), "E".into(), "F".into()],
        vec!["u1".into(), "u2".into(), "u3".into()],
        Vec::new(),
    )
    .unwrap();
    let handles = build_window(&mut stage, &config, &services);

    let scene = stage.scene();
    assert_eq!(scene.children(handles.icons_row).len(), 4);
    for slot in handles.icon_slots {
        assert!(scene.node(slot).icon.is_none());
        assert_eq!(scene.node(slot).style.preferred_width, Some(64.0));
    }
}

#[test]
fn test_buttons_and_links_have_distinct_treatments() {
    let (services, _clicks, _urls) = spy_services();
    let mut stage = Stage::new();
    let handles = build_window(&mut stage, &test_config(), &services);

    let scene = stage.scene();
    for id in handles.buttons {
        assert_eq!(scene.node(id).style.preferred_height, Some(52.0));
        assert_eq!(scene.node(id).fill, Some(BUTTON_BG));
    }
    for id in handles.links {
        assert_eq!(scene.node(id).style.preferred_height, Some(44.0));
        assert_eq!(scene.node(id).fill, Some(LINK_BG));
    }
    assert_ne!(BUTTON_BG, LINK_BG);
}

// =============================================================================
// Resolved layout
// =============================================================================

#[test]
fn test_window_fills_viewport_minus_margin() {
    let (services, _clicks, _urls) = spy_services();
    let mut stage = Stage::new();
    let handles = build_window(&mut stage, &test_config(), &services);

    let surface = stage.surface().unwrap();
    let metrics = surface.metrics(COLS, ROWS);
    let layout = solve(stage.scene(), surface.root(), &metrics);

    let window = layout.rect(handles.window);
    assert!((window.x - 24.0).abs() < 0.01);
    assert!((window.y - 24.0).abs() < 0.01);
    assert!((window.width - (metrics.viewport_width - 48.0)).abs() < 0.5);
    assert!((window.height - (metrics.viewport_height - 48.0)).abs() < 0.5);

    let top_bar = layout.rect(handles.top_bar);
    assert!((top_bar.height - 90.0).abs() < 0.5);

    for slot in handles.icon_slots {
        let rect = layout.rect(slot);
        assert!((rect.width - 64.0).abs() < 0.5, "slot width {}", rect.width);
        assert!(
            (rect.height - 64.0).abs() < 0.5,
            "slot height {}",
            rect.height
        );
    }
}

#[test]
fn test_frame_paints_button_colors() {
    let (services, _clicks, _urls) = spy_services();
    let mut stage = Stage::new();
    let handles = build_window(&mut stage, &test_config(), &services);

    let frame = paint(&mut stage, COLS, ROWS);
    let (x, y) = region_center(&frame, handles.buttons[0]);
    assert_eq!(frame.buffer.get(x, y).unwrap().bg, BUTTON_BG);

    let (lx, ly) = region_center(&frame, handles.links[0]);
    assert_eq!(frame.buffer.get(lx, ly).unwrap().bg, LINK_BG);
}

// =============================================================================
// Clicks
// =============================================================================

#[test]
fn test_button_click_logs_one_based_index() {
    let (services, clicks, urls) = spy_services();
    let mut stage = Stage::new();
    let handles = build_window(&mut stage, &test_config(), &services);

    let frame = paint(&mut stage, COLS, ROWS);
    let (x, y) = region_center(&frame, handles.buttons[1]);
    click(&mut stage, x, y);

    assert_eq!(*clicks.borrow(), vec![2]);
    assert!(urls.borrow().is_empty());
}

#[test]
fn test_each_button_reports_its_own_index() {
    let (services, clicks, _urls) = spy_services();
    let mut stage = Stage::new();
    let handles = build_window(&mut stage, &test_config(), &services);

    let frame = paint(&mut stage, COLS, ROWS);
    for id in handles.buttons {
        let (x, y) = region_center(&frame, id);
        click(&mut stage, x, y);
    }

    assert_eq!(*clicks.borrow(), vec![1, 2, 3]);
}

#[test]
fn test_link_click_opens_exact_target() {
    let config = test_config();
    let expected = config.link_targets()[2].clone();

    let (services, clicks, urls) = spy_services();
    let mut stage = Stage::new();
    let handles = build_window(&mut stage, &config, &services);

    let frame = paint(&mut stage, COLS, ROWS);
    let (x, y) = region_center(&frame, handles.links[2]);
    click(&mut stage, x, y);

    assert_eq!(*urls.borrow(), vec![expected]);
    assert!(clicks.borrow().is_empty());
}

#[test]
fn test_press_and_release_must_hit_the_same_node() {
    let (services, clicks, urls) = spy_services();
    let mut stage = Stage::new();
    let handles = build_window(&mut stage, &test_config(), &services);

    let frame = paint(&mut stage, COLS, ROWS);
    let (x1, y1) = region_center(&frame, handles.buttons[0]);
    let (x2, y2) = region_center(&frame, handles.buttons[2]);
    stage.dispatch_mouse(&MouseEvent::down(x1, y1));
    stage.dispatch_mouse(&MouseEvent::up(x2, y2));

    assert!(clicks.borrow().is_empty());
    assert!(urls.borrow().is_empty());
}

#[test]
fn test_click_outside_the_window_does_nothing() {
    let (services, clicks, urls) = spy_services();
    let mut stage = Stage::new();
    build_window(&mut stage, &test_config(), &services);

    paint(&mut stage, COLS, ROWS);
    click(&mut stage, 0, 0);

    assert!(clicks.borrow().is_empty());
    assert!(urls.borrow().is_empty());
}
