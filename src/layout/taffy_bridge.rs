//! Flexbox arrangement via Taffy.
//!
//! Scene nodes describe layout intent ([`crate::scene::LayoutStyle`]); this
//! module converts that intent to taffy styles, runs taffy's W3C flexbox
//! solver over the tree, and extracts one rect per node. Everything here
//! works in logical units on the scaled viewport; conversion to terminal
//! cells happens later, in the paint pass.
//!
//! Mapping notes:
//! - a stack's `spacing` becomes the flex `gap`, its `child_align` becomes
//!   `justify_content`/`align_items` split by axis
//! - a parent's expand flag on the main axis gives children `flex_grow: 1`,
//!   on the cross axis it switches `align_items` to stretch
//! - preferred sizes become `flex_basis` on the parent's main axis and a
//!   fixed size on the cross axis
//! - `Placement::Stretch` turns into absolute positioning with a uniform
//!   inset, which is how the window covers the surface minus its margin

use taffy::{
    AlignItems as TaffyAlignItems, AvailableSpace, Dimension as TaffyDimension, Display,
    FlexDirection as TaffyFlexDirection, JustifyContent as TaffyJustifyContent, LengthPercentage,
    LengthPercentageAuto, NodeId as TaffyNodeId, Position as TaffyPosition, Rect, Size, Style,
    TaffyTree,
};

use crate::scene::{ChildAlign, NodeId, Placement, SceneTree, StackDirection};
use crate::surface::ViewMetrics;

use super::text_measure::{measure_text_height, string_width};

// =============================================================================
// Results
// =============================================================================

/// Resolved rect of one node, in logical units, relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl LayoutRect {
    pub const ZERO: LayoutRect = LayoutRect { x: 0.0, y: 0.0, width: 0.0, height: 0.0 };
}

/// Resolved rects for a whole scene, indexed by node.
#[derive(Debug)]
pub struct LayoutResult {
    rects: Vec<LayoutRect>,
}

impl LayoutResult {
    /// Rect of `id`, relative to its parent. Nodes outside the solved
    /// subtree report [`LayoutRect::ZERO`].
    #[inline]
    pub fn rect(&self, id: NodeId) -> LayoutRect {
        self.rects.get(id.index()).copied().unwrap_or(LayoutRect::ZERO)
    }
}

// =============================================================================
// Solving
// =============================================================================

/// Arrange the subtree under `root` within the metrics' logical viewport.
pub fn solve(scene: &SceneTree, root: NodeId, metrics: &ViewMetrics) -> LayoutResult {
    let mut rects = vec![LayoutRect::ZERO; scene.len()];
    if scene.is_empty() {
        return LayoutResult { rects };
    }

    let mut tree: TaffyTree<usize> = TaffyTree::new();
    let mut taffy_ids: Vec<Option<TaffyNodeId>> = vec![None; scene.len()];
    let taffy_root = build_subtree(scene, root, &mut tree, &mut taffy_ids);

    // The root spans the whole logical viewport.
    let mut root_style = build_style(scene, root);
    root_style.size = Size {
        width: TaffyDimension::length(metrics.viewport_width),
        height: TaffyDimension::length(metrics.viewport_height),
    };
    let _ = tree.set_style(taffy_root, root_style);

    let available = Size {
        width: AvailableSpace::Definite(metrics.viewport_width),
        height: AvailableSpace::Definite(metrics.viewport_height),
    };

    let mut measure_fn = |known_dimensions: Size<Option<f32>>,
                          available_space: Size<AvailableSpace>,
                          _node_id: TaffyNodeId,
                          context: Option<&mut usize>,
                          _style: &Style| {
        measure_text(scene, metrics, context.map(|idx| *idx), known_dimensions, available_space)
    };

    let _ = tree.compute_layout_with_measure(taffy_root, available, &mut measure_fn);

    for (index, taffy_id) in taffy_ids.iter().enumerate() {
        if let Some(taffy_id) = taffy_id {
            if let Ok(layout) = tree.layout(*taffy_id) {
                rects[index] = LayoutRect {
                    x: layout.location.x,
                    y: layout.location.y,
                    width: layout.size.width,
                    height: layout.size.height,
                };
            }
        }
    }

    LayoutResult { rects }
}

/// Create taffy nodes for `id` and its descendants, linking children in
/// scene order.
fn build_subtree(
    scene: &SceneTree,
    id: NodeId,
    tree: &mut TaffyTree<usize>,
    taffy_ids: &mut [Option<TaffyNodeId>],
) -> TaffyNodeId {
    let style = build_style(scene, id);
    let taffy_id = if scene.node(id).text.is_some() {
        tree.new_leaf_with_context(style, id.index()).unwrap()
    } else {
        tree.new_leaf(style).unwrap()
    };
    taffy_ids[id.index()] = Some(taffy_id);

    for &child in scene.children(id) {
        let taffy_child = build_subtree(scene, child, tree, taffy_ids);
        let _ = tree.add_child(taffy_id, taffy_child);
    }
    taffy_id
}

// =============================================================================
// Style Conversion
// =============================================================================

/// Convert one node's layout intent to a taffy style.
fn build_style(scene: &SceneTree, id: NodeId) -> Style {
    let s = &scene.node(id).style;
    let mut style = Style { display: Display::Flex, ..Default::default() };

    // Container properties.
    style.flex_direction = match s.direction {
        StackDirection::Column => TaffyFlexDirection::Column,
        StackDirection::Row => TaffyFlexDirection::Row,
    };
    style.gap = Size {
        width: LengthPercentage::length(s.spacing),
        height: LengthPercentage::length(s.spacing),
    };
    style.padding = Rect {
        top: LengthPercentage::length(s.padding.top),
        right: LengthPercentage::length(s.padding.right),
        bottom: LengthPercentage::length(s.padding.bottom),
        left: LengthPercentage::length(s.padding.left),
    };

    let (main_align, cross_align) = alignment_components(s.direction, s.child_align);
    let expand_cross = match s.direction {
        StackDirection::Column => s.expand_child_width,
        StackDirection::Row => s.expand_child_height,
    };
    style.justify_content = Some(main_align);
    style.align_items = Some(if expand_cross { TaffyAlignItems::Stretch } else { cross_align });

    // Item properties, relative to the parent stack.
    if let Some(parent) = scene.parent(id) {
        let p = &scene.node(parent).style;
        match s.placement {
            Placement::Stretch { margin } => {
                style.position = TaffyPosition::Absolute;
                style.inset = Rect {
                    top: LengthPercentageAuto::length(margin),
                    right: LengthPercentageAuto::length(margin),
                    bottom: LengthPercentageAuto::length(margin),
                    left: LengthPercentageAuto::length(margin),
                };
            }
            Placement::Flow => match p.direction {
                StackDirection::Column => {
                    if let Some(height) = s.preferred_height {
                        style.flex_basis = TaffyDimension::length(height);
                    }
                    if let Some(width) = s.preferred_width {
                        style.size.width = TaffyDimension::length(width);
                    }
                    if p.expand_child_height {
                        style.flex_grow = 1.0;
                    }
                }
                StackDirection::Row => {
                    if let Some(width) = s.preferred_width {
                        style.flex_basis = TaffyDimension::length(width);
                    }
                    if let Some(height) = s.preferred_height {
                        style.size.height = TaffyDimension::length(height);
                    }
                    if p.expand_child_width {
                        style.flex_grow = 1.0;
                    }
                }
            },
        }
    }

    style
}

/// Split a [`ChildAlign`] into (main, cross) components for a direction.
fn alignment_components(
    direction: StackDirection,
    align: ChildAlign,
) -> (TaffyJustifyContent, TaffyAlignItems) {
    // Horizontal and vertical components of the alignment.
    let (h_center, v_center) = match align {
        ChildAlign::UpperLeft => (false, false),
        ChildAlign::MiddleLeft => (false, true),
        ChildAlign::MiddleCenter => (true, true),
    };
    let justify = |center: bool| {
        if center { TaffyJustifyContent::Center } else { TaffyJustifyContent::FlexStart }
    };
    let items = |center: bool| {
        if center { TaffyAlignItems::Center } else { TaffyAlignItems::FlexStart }
    };
    match direction {
        StackDirection::Row => (justify(h_center), items(v_center)),
        StackDirection::Column => (justify(v_center), items(h_center)),
    }
}

// =============================================================================
// Text Measurement
// =============================================================================

/// Measure a text leaf, in logical units.
///
/// Text is measured in cells and scaled up, since taffy solves in units.
fn measure_text(
    scene: &SceneTree,
    metrics: &ViewMetrics,
    index: Option<usize>,
    known: Size<Option<f32>>,
    avail: Size<AvailableSpace>,
) -> Size<f32> {
    if let (Some(width), Some(height)) = (known.width, known.height) {
        return Size { width, height };
    }
    let Some(index) = index else {
        return Size { width: 0.0, height: 0.0 };
    };
    let Some(text) = &scene.node(NodeId::new(index)).text else {
        return Size { width: 0.0, height: 0.0 };
    };
    let content = text.content.as_str();

    let avail_cells = match avail.width {
        AvailableSpace::Definite(w) => (w / metrics.units_per_cell_x).floor() as usize,
        AvailableSpace::MinContent => string_width(content),
        AvailableSpace::MaxContent => usize::MAX,
    };

    let width = string_width(content) as f32 * metrics.units_per_cell_x;
    let height = measure_text_height(content, avail_cells.max(1)) as f32 * metrics.units_per_cell_y;

    Size {
        width: known.width.unwrap_or(width),
        height: known.height.unwrap_or(height),
    }
}

// =============================================================================
// Tests
// =============================================================================
