//! Pointer routing.
//!
//! A [`HitGrid`] maps every terminal cell to the topmost clickable node
//! painted there. The [`InputRouter`] pairs presses with releases: a click
//! fires only when both land on the same node with the same button. The
//! handler lookup walks up the parent chain, so a handler bound to a button
//! also covers the text child painted on top of it.

use std::collections::HashMap;
use std::rc::Rc;

use crate::scene::{NodeId, SceneTree};

use super::Modifiers;

// =============================================================================
// Events
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    Down,
    Up,
    Move,
    Drag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// A pointer event in cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub x: u16,
    pub y: u16,
    pub action: MouseAction,
    pub button: MouseButton,
    pub modifiers: Modifiers,
}

impl MouseEvent {
    pub fn down(x: u16, y: u16) -> Self {
        Self {
            x,
            y,
            action: MouseAction::Down,
            button: MouseButton::Left,
            modifiers: Modifiers::default(),
        }
    }

    pub fn up(x: u16, y: u16) -> Self {
        Self { action: MouseAction::Up, ..Self::down(x, y) }
    }

    pub fn move_to(x: u16, y: u16) -> Self {
        Self { action: MouseAction::Move, ..Self::down(x, y) }
    }
}

/// A resolved click, handed to handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    /// The node whose handler fired (after bubbling).
    pub node: NodeId,
    pub x: u16,
    pub y: u16,
    pub button: MouseButton,
}

pub type ClickHandler = Rc<dyn Fn(&ClickEvent)>;

// =============================================================================
// HitGrid
// =============================================================================

const EMPTY: usize = usize::MAX;

/// Cell-to-node lookup table, row-major.
#[derive(Debug)]
pub struct HitGrid {
    width: u16,
    height: u16,
    cells: Vec<usize>,
}

impl HitGrid {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize and clear.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells.resize(width as usize * height as usize, EMPTY);
    }

    /// Mark every cell empty.
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Fill a rect with a node index, clipped to the grid.
    pub fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, index: usize) {
        let x2 = x.saturating_add(width).min(self.width);
        let y2 = y.saturating_add(height).min(self.height);
        for row in y..y2 {
            let start = row as usize * self.width as usize;
            for col in x..x2 {
                self.cells[start + col as usize] = index;
            }
        }
    }

    /// Node index at a cell, if any.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = self.cells[y as usize * self.width as usize + x as usize];
        if index == EMPTY { None } else { Some(index) }
    }
}

// =============================================================================
// Regions
// =============================================================================

/// A clickable screen region produced by the paint pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
    pub node: NodeId,
}

// =============================================================================
// InputRouter
// =============================================================================

/// Routes pointer events to per-node click handlers.
pub struct InputRouter {
    grid: HitGrid,
    handlers: HashMap<NodeId, ClickHandler>,
    pressed: Option<(NodeId, MouseButton)>,
}

impl InputRouter {
    pub fn new() -> Self {
        Self {
            grid: HitGrid::new(0, 0),
            handlers: HashMap::new(),
            pressed: None,
        }
    }

    /// Bind a click handler to a node. One handler per node; binding again
    /// replaces the old one.
    pub fn on_click(&mut self, node: NodeId, handler: ClickHandler) {
        self.handlers.insert(node, handler);
    }

    pub fn has_click_handler(&self, node: NodeId) -> bool {
        self.handlers.contains_key(&node)
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Rebuild the hit grid from freshly painted regions.
    pub fn update_regions(&mut self, cols: u16, rows: u16, regions: &[HitRegion]) {
        if self.grid.width() != cols || self.grid.height() != rows {
            self.grid.resize(cols, rows);
        } else {
            self.grid.clear();
        }
        for region in regions {
            self.grid
                .fill_rect(region.x, region.y, region.width, region.height, region.node.index());
        }
    }

    /// Topmost clickable node at a cell.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<NodeId> {
        self.grid.get(x, y).map(NodeId::new)
    }

    /// Feed one pointer event. Returns the node whose click handler fired,
    /// if any.
    pub fn dispatch(&mut self, event: &MouseEvent, scene: &SceneTree) -> Option<NodeId> {
        match event.action {
            MouseAction::Down => {
                self.pressed = self.hit_test(event.x, event.y).map(|node| (node, event.button));
                None
            }
            MouseAction::Up => {
                let pressed = self.pressed.take();
                let target = self.hit_test(event.x, event.y);
                match (pressed, target) {
                    (Some((node, button)), Some(hit))
                        if node == hit && button == event.button =>
                    {
                        self.fire_click(node, event, scene)
                    }
                    _ => None,
                }
            }
            MouseAction::Move | MouseAction::Drag => None,
        }
    }

    fn fire_click(&self, node: NodeId, event: &MouseEvent, scene: &SceneTree) -> Option<NodeId> {
        let mut current = Some(node);
        while let Some(candidate) = current {
            if let Some(handler) = self.handlers.get(&candidate) {
                let handler = Rc::clone(handler);
                handler(&ClickEvent {
                    node: candidate,
                    x: event.x,
                    y: event.y,
                    button: event.button,
                });
                return Some(candidate);
            }
            current = scene.parent(candidate);
        }
        None
    }
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Scene with one clickable node covering cells (2..6, 1..3).
    fn setup() -> (SceneTree, InputRouter, NodeId) {
        let mut scene = SceneTree::new();
        let root = scene.create_node("Root", None);
        let target = scene.create_node("Target", Some(root));
        let mut router = InputRouter::new();
        router.update_regions(
            10,
            5,
            &[HitRegion { x: 2, y: 1, width: 4, height: 2, node: target }],
        );
        (scene, router, target)
    }

    #[test]
    fn test_hit_grid_fill_and_get() {
        let mut grid = HitGrid::new(10, 5);
        grid.fill_rect(2, 1, 4, 2, 7);
        assert_eq!(grid.get(2, 1), Some(7));
        assert_eq!(grid.get(5, 2), Some(7));
        assert_eq!(grid.get(6, 1), None);
        assert_eq!(grid.get(2, 3), None);
        assert_eq!(grid.get(20, 20), None);
    }

    #[test]
    fn test_hit_grid_fill_clips_to_bounds() {
        let mut grid = HitGrid::new(4, 4);
        grid.fill_rect(2, 2, 10, 10, 1);
        assert_eq!(grid.get(3, 3), Some(1));
        assert_eq!(grid.get(0, 0), None);
    }

    #[test]
    fn test_hit_grid_resize_clears() {
        let mut grid = HitGrid::new(4, 4);
        grid.fill_rect(0, 0, 4, 4, 1);
        grid.resize(6, 6);
        assert_eq!(grid.get(0, 0), None);
        assert_eq!(grid.width(), 6);
    }

    #[test]
    fn test_click_fires_on_press_release_same_node() {
        let (scene, mut router, target) = setup();
        let count = Rc::new(Cell::new(0u32));
        let spy = Rc::clone(&count);
        router.on_click(target, Rc::new(move |_| spy.set(spy.get() + 1)));

        assert_eq!(router.dispatch(&MouseEvent::down(3, 1), &scene), None);
        assert_eq!(router.dispatch(&MouseEvent::up(4, 2), &scene), Some(target));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_press_elsewhere_release_here_is_not_a_click() {
        let (scene, mut router, target) = setup();
        let count = Rc::new(Cell::new(0u32));
        let spy = Rc::clone(&count);
        router.on_click(target, Rc::new(move |_| spy.set(spy.get() + 1)));

        router.dispatch(&MouseEvent::down(0, 0), &scene);
        assert_eq!(router.dispatch(&MouseEvent::up(3, 1), &scene), None);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_release_elsewhere_is_not_a_click() {
        let (scene, mut router, target) = setup();
        let count = Rc::new(Cell::new(0u32));
        let spy = Rc::clone(&count);
        router.on_click(target, Rc::new(move |_| spy.set(spy.get() + 1)));

        router.dispatch(&MouseEvent::down(3, 1), &scene);
        assert_eq!(router.dispatch(&MouseEvent::up(9, 4), &scene), None);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_mismatched_buttons_do_not_click() {
        let (scene, mut router, target) = setup();
        let count = Rc::new(Cell::new(0u32));
        let spy = Rc::clone(&count);
        router.on_click(target, Rc::new(move |_| spy.set(spy.get() + 1)));

        let mut down = MouseEvent::down(3, 1);
        down.button = MouseButton::Right;
        router.dispatch(&down, &scene);
        assert_eq!(router.dispatch(&MouseEvent::up(3, 1), &scene), None);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_move_never_clicks() {
        let (scene, mut router, target) = setup();
        let count = Rc::new(Cell::new(0u32));
        let spy = Rc::clone(&count);
        router.on_click(target, Rc::new(move |_| spy.set(spy.get() + 1)));

        assert_eq!(router.dispatch(&MouseEvent::move_to(3, 1), &scene), None);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_click_bubbles_to_parent_handler() {
        let mut scene = SceneTree::new();
        let root = scene.create_node("Root", None);
        let button = scene.create_node("Button", Some(root));
        let label = scene.create_node("Text", Some(button));

        let mut router = InputRouter::new();
        // The label is what the grid reports, the handler sits on the button.
        router.update_regions(
            10,
            5,
            &[HitRegion { x: 0, y: 0, width: 4, height: 2, node: label }],
        );
        let clicked = Rc::new(Cell::new(None));
        let spy = Rc::clone(&clicked);
        router.on_click(button, Rc::new(move |event| spy.set(Some(event.node))));

        router.dispatch(&MouseEvent::down(1, 1), &scene);
        assert_eq!(router.dispatch(&MouseEvent::up(1, 1), &scene), Some(button));
        assert_eq!(clicked.get(), Some(button));
    }

    #[test]
    fn test_update_regions_replaces_previous_grid() {
        let (scene, mut router, target) = setup();
        router.update_regions(10, 5, &[]);
        router.dispatch(&MouseEvent::down(3, 1), &scene);
        assert_eq!(router.dispatch(&MouseEvent::up(3, 1), &scene), None);
        let _ = target;
    }
}
