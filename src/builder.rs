//! Window construction.
//!
//! [`build_window`] turns a [`WindowConfig`] into a scene tree under the
//! stage's root surface, in one deterministic pass: a stretched window
//! panel with a title bar, a 4-slot icon row, 3 action buttons, and a
//! 3-link side column. Click behavior goes through the injected
//! [`Services`] so tests can substitute the URL opener and the click log.
//!
//! Nodes are created once and never destroyed; the layout pass resolves
//! the constraints assigned here on every repaint.

use std::rc::Rc;

use crate::config::{WindowConfig, BUTTON_COUNT, ICON_SLOTS, LINK_COUNT};
use crate::input::{ClickEvent, ClickHandler};
use crate::scene::{
    ChildAlign, Edges, IconFacet, LayoutStyle, NodeId, Placement, SceneTree, StackDirection,
    TextAlign, TextFacet,
};
use crate::services::Services;
use crate::stage::Stage;
use crate::types::{Attr, Rgba};

/// Translucent dark window panel.
pub const WINDOW_BG: Rgba = Rgba::new(31, 31, 31, 230);
/// Opaque dark gray shared by all factory buttons.
pub const BUTTON_BG: Rgba = Rgba::rgb(51, 51, 51);
/// Navy tone that sets link buttons apart from action buttons.
pub const LINK_BG: Rgba = Rgba::rgb(38, 64, 115);
/// Blank icon slots render as a plain square in this color.
pub const ICON_TINT: Rgba = Rgba::WHITE;
/// Factory buttons start at this height until the caller overrides it.
pub const DEFAULT_BUTTON_HEIGHT: f32 = 48.0;

const WINDOW_MARGIN: f32 = 24.0;
const TITLE_BAR_HEIGHT: f32 = 90.0;
const LINKS_COLUMN_WIDTH: f32 = 280.0;
const ICON_SLOT_SIZE: f32 = 64.0;
const ACTION_BUTTON_HEIGHT: f32 = 52.0;
const LINK_BUTTON_HEIGHT: f32 = 44.0;

/// Every node [`build_window`] creates, by role.
#[derive(Debug, Clone, Copy)]
pub struct WindowHandles {
    pub window: NodeId,
    pub top_bar: NodeId,
    pub title: NodeId,
    pub content_row: NodeId,
    pub main_column: NodeId,
    pub icons_row: NodeId,
    pub icon_slots: [NodeId; ICON_SLOTS],
    pub buttons_column: NodeId,
    pub buttons: [NodeId; BUTTON_COUNT],
    pub links_column: NodeId,
    pub links: [NodeId; LINK_COUNT],
}

/// Build the window tree under the stage's root surface and bind clicks.
///
/// Ensures the router and surface exist first, so calling this on a fresh
/// stage is enough to get a routable scene.
pub fn build_window(
    stage: &mut Stage,
    config: &WindowConfig,
    services: &Services,
) -> WindowHandles {
    stage.ensure_input_router();
    let surface_root = stage.ensure_surface().root();

    let mut bindings: Vec<(NodeId, ClickHandler)> = Vec::new();
    let scene = stage.scene_mut();

    // Window: stretched over the surface minus a margin, vertical stack.
    // Children fill the width but keep their own heights, so the top bar
    // stays at its preferred height.
    let window = scene.create_node("Window", Some(surface_root));
    {
        let node = scene.node_mut(window);
        node.fill = Some(WINDOW_BG);
        node.style = LayoutStyle {
            placement: Placement::Stretch {
                margin: WINDOW_MARGIN,
            },
            direction: StackDirection::Column,
            padding: Edges::uniform(16.0),
            spacing: 16.0,
            expand_child_width: true,
            expand_child_height: false,
            ..LayoutStyle::default()
        };
    }

    let top_bar = scene.create_node("TopBar", Some(window));
    scene.node_mut(top_bar).style = LayoutStyle {
        direction: StackDirection::Row,
        padding: Edges::uniform(12.0),
        child_align: ChildAlign::MiddleLeft,
        expand_child_width: true,
        expand_child_height: true,
        preferred_height: Some(TITLE_BAR_HEIGHT),
        ..LayoutStyle::default()
    };

    let title = scene.create_node("Title", Some(top_bar));
    scene.node_mut(title).text = Some(TextFacet {
        content: config.title().to_string(),
        color: Rgba::WHITE,
        attrs: Attr::BOLD,
        align: TextAlign::Left,
    });

    let content_row = scene.create_node("ContentRow", Some(window));
    scene.node_mut(content_row).style = LayoutStyle {
        direction: StackDirection::Row,
        spacing: 16.0,
        expand_child_width: true,
        expand_child_height: true,
        ..LayoutStyle::default()
    };

    let main_column = scene.create_node("MainColumn", Some(content_row));
    scene.node_mut(main_column).style = LayoutStyle {
        direction: StackDirection::Column,
        spacing: 16.0,
        expand_child_width: true,
        expand_child_height: true,
        ..LayoutStyle::default()
    };

    // Links keep their natural height; only their width stretches.
    let links_column = scene.create_node("LinksColumn", Some(content_row));
    scene.node_mut(links_column).style = LayoutStyle {
        direction: StackDirection::Column,
        spacing: 10.0,
        expand_child_width: true,
        expand_child_height: false,
        preferred_width: Some(LINKS_COLUMN_WIDTH),
        ..LayoutStyle::default()
    };

    // Icon slots never grow or shrink; a slot without a configured icon
    // stays a blank tinted square.
    let icons_row = scene.create_node("IconsRow", Some(main_column));
    scene.node_mut(icons_row).style = LayoutStyle {
        direction: StackDirection::Row,
        spacing: 12.0,
        ..LayoutStyle::default()
    };

    let icon_slots = std::array::from_fn(|i| {
        let slot = scene.create_node(format!("Icon{}", i + 1), Some(icons_row));
        let node = scene.node_mut(slot);
        node.fill = Some(ICON_TINT);
        node.style.preferred_width = Some(ICON_SLOT_SIZE);
        node.style.preferred_height = Some(ICON_SLOT_SIZE);
        if let Some(icon) = config.icons()[i] {
            node.icon = Some(IconFacet {
                glyph: icon.glyph,
                color: icon.color,
                preserve_aspect: true,
            });
        }
        slot
    });

    let buttons_column = scene.create_node("ButtonsColumn", Some(main_column));
    scene.node_mut(buttons_column).style = LayoutStyle {
        direction: StackDirection::Column,
        spacing: 10.0,
        expand_child_width: true,
        expand_child_height: false,
        ..LayoutStyle::default()
    };

    let buttons = std::array::from_fn(|i| {
        let node = button(scene, buttons_column, &config.button_labels()[i]);
        scene.node_mut(node).style.preferred_height = Some(ACTION_BUTTON_HEIGHT);

        // Each handler carries its own 1-based index.
        let clicks = Rc::clone(&services.clicks);
        let index = i + 1;
        bindings.push((
            node,
            Rc::new(move |_: &ClickEvent| clicks.button_clicked(index)) as ClickHandler,
        ));
        node
    });

    let links = std::array::from_fn(|i| {
        let node = button(scene, links_column, &config.link_labels()[i]);
        {
            let n = scene.node_mut(node);
            n.style.preferred_height = Some(LINK_BUTTON_HEIGHT);
            n.fill = Some(LINK_BG);
        }

        // Each handler carries its own copy of the target URL.
        let opener = Rc::clone(&services.opener);
        let url = config.link_targets()[i].clone();
        bindings.push((
            node,
            Rc::new(move |_: &ClickEvent| opener.open(&url)) as ClickHandler,
        ));
        node
    });

    let router = stage.ensure_input_router();
    for (node, handler) in bindings {
        router.on_click(node, handler);
    }

    WindowHandles {
        window,
        top_bar,
        title,
        content_row,
        main_column,
        icons_row,
        icon_slots,
        buttons_column,
        buttons,
        links_column,
        links,
    }
}

/// Make a clickable button node with a centered label.
///
/// The node is named after its label, filled with [`BUTTON_BG`], and sized
/// to [`DEFAULT_BUTTON_HEIGHT`]; callers override height and color as
/// needed. No handler is bound here. Empty and duplicate labels are fine:
/// nothing looks nodes up by name.
pub fn button(scene: &mut SceneTree, parent: NodeId, label: &str) -> NodeId {
    let node = scene.create_node(label, Some(parent));
    {
        let n = scene.node_mut(node);
        n.fill = Some(BUTTON_BG);
        n.clickable = true;
        n.style.preferred_height = Some(DEFAULT_BUTTON_HEIGHT);
    }

    let text = scene.create_node("Text", Some(node));
    let t = scene.node_mut(text);
    t.style.placement = Placement::Stretch { margin: 0.0 };
    t.text = Some(TextFacet {
        content: label.to_string(),
        color: Rgba::WHITE,
        attrs: Attr::NONE,
        align: TextAlign::Center,
    });

    node
}

// =============================================================================
// Tests
// =============================================================================
