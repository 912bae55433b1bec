//! The stage owns the scene and its environment.
//!
//! UI code asks the stage to *ensure* an input router and a root surface
//! before building anything under them. Both calls are idempotent: the
//! first creates, every later call hands back the same instance, so
//! builders can run in any order without checking what already exists.

use crate::input::{HitRegion, InputRouter, MouseEvent};
use crate::scene::{NodeId, SceneTree};
use crate::surface::Surface;

/// A scene tree plus the singletons it is mounted under.
pub struct Stage {
    scene: SceneTree,
    surface: Option<Surface>,
    router: Option<InputRouter>,
}

impl Stage {
    pub fn new() -> Self {
        Self {
            scene: SceneTree::new(),
            surface: None,
            router: None,
        }
    }

    /// Hand back the input router, creating it on first call.
    pub fn ensure_input_router(&mut self) -> &mut InputRouter {
        self.router.get_or_insert_with(InputRouter::new)
    }

    /// Hand back the root surface, creating its scene node on first call.
    pub fn ensure_surface(&mut self) -> &Surface {
        let scene = &mut self.scene;
        self.surface
            .get_or_insert_with(|| Surface::new(scene.create_node("Surface", None)))
    }

    pub fn scene(&self) -> &SceneTree {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut SceneTree {
        &mut self.scene
    }

    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    pub fn router(&self) -> Option<&InputRouter> {
        self.router.as_ref()
    }

    /// Replace the router's hit grid with freshly painted regions.
    pub fn update_hit_regions(&mut self, cols: u16, rows: u16, regions: &[HitRegion]) {
        if let Some(router) = self.router.as_mut() {
            router.update_regions(cols, rows, regions);
        }
    }

    /// Route a mouse event; `None` when no router exists or nothing fired.
    pub fn dispatch_mouse(&mut self, event: &MouseEvent) -> Option<NodeId> {
        let scene = &self.scene;
        self.router
            .as_mut()
            .and_then(|router| router.dispatch(event, scene))
    }
}

impl Default for Stage {
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
    use crate::input::ClickEvent;
    use std::rc::Rc;

    #[test]
    fn test_ensure_surface_is_idempotent() {
        let mut stage = Stage::new();

        let first = stage.ensure_surface().root();
        let second = stage.ensure_surface().root();

        assert_eq!(first, second);
        assert_eq!(stage.scene().len(), 1);
        assert_eq!(stage.scene().node(first).name, "Surface");
    }

    #[test]
    fn test_ensure_router_keeps_handlers() {
        let mut stage = Stage::new();
        let node = stage.scene_mut().create_node("Button", None);

        stage
            .ensure_input_router()
            .on_click(node, Rc::new(|_: &ClickEvent| {}));

        let router = stage.ensure_input_router();
        assert_eq!(router.handler_count(), 1);
        assert!(router.has_click_handler(node));
    }

    #[test]
    fn test_dispatch_without_router_is_none() {
        let mut stage = Stage::new();
        assert_eq!(stage.dispatch_mouse(&MouseEvent::down(0, 0)), None);
    }
}
