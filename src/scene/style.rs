//! Layout constraints attached to scene nodes.
//!
//! These describe intent only. Resolution happens in [`crate::layout`],
//! which maps them onto flexbox: stack direction and spacing become flex
//! properties of the container, preferred sizes become the flex basis (main
//! axis) or a fixed size (cross axis) of the item, and the expand flags of
//! the parent decide whether children grow and stretch.

/// How a node is placed relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Arranged by the parent stack.
    Flow,
    /// Pinned to all four parent edges, inset by a uniform margin.
    Stretch { margin: f32 },
}

/// Main axis of a stack container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StackDirection {
    #[default]
    Column,
    Row,
}

/// Where children sit when they do not fill the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChildAlign {
    #[default]
    UpperLeft,
    MiddleLeft,
    MiddleCenter,
}

/// Per-side padding, in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    pub const ZERO: Edges = Edges::uniform(0.0);

    pub const fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

/// Layout constraints for one node.
///
/// Container fields (`direction`, `spacing`, `padding`, `child_align`, the
/// expand flags) shape this node's children; item fields (`placement`,
/// preferred sizes) shape the node itself within its parent.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutStyle {
    pub placement: Placement,
    pub direction: StackDirection,
    pub padding: Edges,
    /// Gap between consecutive children, along the main axis.
    pub spacing: f32,
    pub child_align: ChildAlign,
    /// Children grow/stretch to fill the stack horizontally.
    pub expand_child_width: bool,
    /// Children grow/stretch to fill the stack vertically.
    pub expand_child_height: bool,
    pub preferred_width: Option<f32>,
    pub preferred_height: Option<f32>,
}

impl Default for LayoutStyle {
    fn default() -> Self {
        Self {
            placement: Placement::Flow,
            direction: StackDirection::Column,
            padding: Edges::ZERO,
            spacing: 0.0,
            child_align: ChildAlign::UpperLeft,
            expand_child_width: false,
            expand_child_height: false,
            preferred_width: None,
            preferred_height: None,
        }
    }
}
