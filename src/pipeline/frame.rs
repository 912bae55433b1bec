//! Frame painting.
//!
//! Walks the scene tree with resolved layout rects, converts logical units
//! to terminal cells, and paints fills, icons, and text into a FrameBuffer.
//! Clickable nodes contribute hit regions in paint order, so children
//! overwrite their parents where they overlap.

use crate::input::HitRegion;
use crate::layout::text_measure::char_width;
use crate::layout::LayoutResult;
use crate::renderer::FrameBuffer;
use crate::scene::{NodeId, SceneTree, TextAlign};
use crate::surface::ViewMetrics;
use crate::types::Attr;

/// A painted frame plus the hit regions gathered while painting.
pub struct Frame {
    pub buffer: FrameBuffer,
    pub hit_regions: Vec<HitRegion>,
}

/// Paint the scene into a cell buffer of the given terminal size.
pub fn render_frame(
    scene: &SceneTree,
    root: NodeId,
    layout: &LayoutResult,
    metrics: &ViewMetrics,
    cols: u16,
    rows: u16,
) -> Frame {
    let mut buffer = FrameBuffer::new(cols, rows);
    let mut hit_regions = Vec::new();

    paint_node(scene, layout, metrics, &mut buffer, &mut hit_regions, root, 0.0, 0.0);

    Frame {
        buffer,
        hit_regions,
    }
}

fn paint_node(
    scene: &SceneTree,
    layout: &LayoutResult,
    metrics: &ViewMetrics,
    buffer: &mut FrameBuffer,
    hit_regions: &mut Vec<HitRegion>,
    id: NodeId,
    origin_x: f32,
    origin_y: f32,
) {
    let rect = layout.rect(id);
    let abs_x = origin_x + rect.x;
    let abs_y = origin_y + rect.y;

    // Round each edge independently so adjacent nodes share cell borders
    // without gaps or overlaps.
    let x1 = metrics.cell_x(abs_x);
    let y1 = metrics.cell_y(abs_y);
    let x2 = metrics.cell_x(abs_x + rect.width);
    let y2 = metrics.cell_y(abs_y + rect.height);
    let width = x2.saturating_sub(x1);
    let height = y2.saturating_sub(y1);

    if width > 0 && height > 0 {
        let node = scene.node(id);

        if let Some(fill) = node.fill {
            buffer.fill_rect(x1, y1, width, height, fill, None);
        }

        if let Some(icon) = &node.icon {
            let glyph_w = char_width(icon.glyph) as u16;
            let gx = x1 + width.saturating_sub(glyph_w) / 2;
            let gy = y1 + (height - 1) / 2;
            buffer.draw_char(gx, gy, icon.glyph, icon.color, None, Attr::NONE, None);
        }

        if let Some(text) = &node.text {
            let row = y1 + (height - 1) / 2;
            match text.align {
                TextAlign::Left => {
                    buffer.draw_text(x1, row, &text.content, text.color, None, text.attrs, None);
                }
                TextAlign::Center => {
                    buffer.draw_text_centered(
                        x1,
                        row,
                        width,
                        &text.content,
                        text.color,
                        None,
                        text.attrs,
                        None,
                    );
                }
            }
        }

        if node.clickable {
            hit_regions.push(HitRegion {
                x: x1,
                y: y1,
                width,
                height,
                node: id,
            });
        }
    }

    for &child in scene.children(id) {
        paint_node(scene, layout, metrics, buffer, hit_regions, child, abs_x, abs_y);
    }
}

// =============================================================================
// Tests
// =============================================================================
