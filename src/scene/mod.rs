//! Retained scene tree.
//!
//! Nodes live in an arena owned by [`SceneTree`] and are addressed by
//! [`NodeId`]. The tree is built once and never torn down; interaction
//! mutates nothing structural. Each node carries optional facets: a fill
//! color, a text run, an icon glyph, a clickable marker, and the layout
//! constraints consumed by [`crate::layout`].

mod style;

pub use style::{ChildAlign, Edges, LayoutStyle, Placement, StackDirection};

use crate::types::{Attr, Rgba};

// =============================================================================
// Identifiers
// =============================================================================

/// Stable handle to a node in a [`SceneTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

// =============================================================================
// Facets
// =============================================================================

/// Horizontal alignment of a text run within its node's rect.
/// Vertical alignment is always middle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// A single-run text facet.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFacet {
    pub content: String,
    pub color: Rgba,
    pub attrs: Attr,
    pub align: TextAlign,
}

/// An icon glyph drawn centered over the node's fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconFacet {
    pub glyph: char,
    pub color: Rgba,
    /// Keep the glyph's own proportions instead of distorting to the slot.
    pub preserve_aspect: bool,
}

// =============================================================================
// Nodes
// =============================================================================

/// One node of the scene tree.
#[derive(Debug, Clone)]
pub struct Node {
    /// Debug name. Not required to be unique.
    pub name: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    pub style: LayoutStyle,
    pub fill: Option<Rgba>,
    pub text: Option<TextFacet>,
    pub icon: Option<IconFacet>,
    pub clickable: bool,
}

/// Arena-owned node tree.
///
/// Nodes are created in declaration order and never removed, so indices
/// stay dense and stable. Children keep their creation order, which is the
/// order layout and paint walk them in.
#[derive(Debug, Default)]
pub struct SceneTree {
    nodes: Vec<Node>,
}

impl SceneTree {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Create a node and link it under `parent` (or as a root).
    pub fn create_node(&mut self, name: impl Into<String>, parent: Option<NodeId>) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node {
            name: name.into(),
            parent,
            children: Vec::new(),
            style: LayoutStyle::default(),
            fill: None,
            text: None,
            icon: None,
            clickable: false,
        });
        if let Some(parent) = parent {
            self.nodes[parent.index()].children.push(id);
        }
        id
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
