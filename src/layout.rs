//! Layout-and-paint pass for the step timeline.
//!
//! The pass is a pure function: it folds over the item list top to bottom,
//! threading a small cursor (vertical offset plus the two radii carried
//! between steps) and emitting abstract draw commands. The widget replays the
//! commands onto an `egui::Painter`; tests replay nothing and assert on the
//! command list directly.

use eframe::egui::{pos2, vec2, Color32, Pos2, TextureId, Vec2};

use crate::item::Item;
use crate::style::{Marker, MarkerSet, PointGravity, TimelineStyle};

/// Left edge of the marker column.
const MARGIN_LEFT: f32 = 0.0;
/// Gap between the marker column and the text column.
const TEXT_MARGIN_LEFT: f32 = 10.0;
/// Gap between the title line and the date line.
const TEXT_MARGIN_TOP: f32 = 15.0;

/// One abstract draw command, in widget-local coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    /// Blit a marker image at its top-left corner.
    Marker {
        texture: TextureId,
        pos: Pos2,
        size: Vec2,
        tint: Color32,
    },
    /// Draw a single line of text; `pos` is the baseline-left corner.
    Text {
        pos: Pos2,
        text: String,
        size: f32,
        color: Color32,
    },
    /// Connector segment between two consecutive markers.
    Line { from: Pos2, to: Pos2 },
}

/// Commands plus the content bounding box they cover.
///
/// A radius-offset correction can push a marker above or left of the widget
/// origin; `origin` is the translation that brings every command back inside
/// an allocation of `size`.
#[derive(Clone, Debug)]
pub struct LayoutResult {
    pub commands: Vec<DrawCmd>,
    pub size: Vec2,
    pub origin: Vec2,
    // Running extremes, folded into size/origin once the pass finishes.
    min: Vec2,
    max: Vec2,
}

impl LayoutResult {
    fn include(&mut self, min: Pos2, max: Pos2) {
        self.min = self.min.min(min.to_vec2());
        self.max = self.max.max(max.to_vec2());
    }
}

/// Per-step state threaded through the fold: the cumulative vertical offset
/// and the radius of the last reached-step marker seen. The latter starts at
/// the configured fallback and persists across unreached steps, which is what
/// keeps differently sized markers on one vertical axis.
#[derive(Clone, Copy, Debug)]
struct Cursor {
    y: f32,
    current_radius: f32,
}

/// Run the full layout over `items` and return the draw commands in paint
/// order. An empty item list yields no commands and a zero size.
pub fn layout_items<F>(
    items: &[Item],
    current_item: i32,
    error_item: i32,
    style: &TimelineStyle,
    markers: &MarkerSet,
    mut measure: F,
) -> LayoutResult
where
    F: FnMut(&str, f32) -> Vec2,
{
    let mut out = LayoutResult {
        commands: Vec::new(),
        size: Vec2::ZERO,
        origin: Vec2::ZERO,
        min: Vec2::ZERO,
        max: Vec2::ZERO,
    };

    let init = Cursor {
        y: 0.0,
        current_radius: style.radius,
    };
    items.iter().enumerate().fold(init, |cursor, (i, item)| {
        layout_item(
            items.len(),
            i,
            item,
            current_item,
            error_item,
            style,
            markers,
            &mut measure,
            cursor,
            &mut out,
        )
    });

    out.origin = vec2((-out.min.x).max(0.0), (-out.min.y).max(0.0));
    out.size = out.max + out.origin;
    out
}

/// Lay out one step: resolve its marker and radii, emit the marker blit, the
/// two text lines and (for all but the last step) the connector line, and
/// return the cursor for the next step.
#[allow(clippy::too_many_arguments)]
fn layout_item<F>(
    len: usize,
    i: usize,
    item: &Item,
    current_item: i32,
    error_item: i32,
    style: &TimelineStyle,
    markers: &MarkerSet,
    measure: &mut F,
    cursor: Cursor,
    out: &mut LayoutResult,
) -> Cursor
where
    F: FnMut(&str, f32) -> Vec2,
{
    let idx = i as i32;
    let title_bounds = measure(&item.title, style.title_size);
    let date_bounds = measure(&item.date, style.date_size);
    let text_height = title_bounds.y + date_bounds.y + TEXT_MARGIN_TOP;

    // Resolve the marker and the radii it dictates. Reached steps use the
    // current marker (the error marker at the error step itself); unreached
    // steps use the default marker, or the last marker on the final step.
    let selected = idx <= current_item || idx <= error_item;
    let marker: &Marker;
    let current_radius;
    let default_radius;
    if selected {
        current_radius = markers.current.radius();
        if error_item > 0 && idx == error_item {
            marker = &markers.error;
            default_radius = marker.radius();
        } else {
            marker = &markers.current;
            default_radius = current_radius;
        }
    } else {
        marker = if i == len - 1 {
            markers.last()
        } else {
            &markers.default
        };
        current_radius = cursor.current_radius;
        default_radius = marker.radius();
    }

    let mut radius_offset = current_radius - default_radius;
    let radius = default_radius + radius_offset;
    let y = cursor.y;

    let point_y = match style.point_gravity {
        PointGravity::Top => y,
        PointGravity::Center => {
            y + text_height / 2.0 - if selected { current_radius } else { default_radius }
        }
        PointGravity::Bottom => {
            y + text_height - if selected { current_radius * 2.0 } else { default_radius * 2.0 }
        }
    };

    let marker_pos = pos2(
        MARGIN_LEFT + radius_offset,
        point_y - if selected { 0.0 } else { radius_offset },
    );
    out.include(marker_pos, marker_pos + marker.size);
    out.commands.push(DrawCmd::Marker {
        texture: marker.texture,
        pos: marker_pos,
        size: marker.size,
        tint: if selected {
            style.current_circle_color
        } else {
            style.circle_color
        },
    });

    let text_x = MARGIN_LEFT + radius * 2.0 + TEXT_MARGIN_LEFT;
    let title_baseline = y - radius_offset + title_bounds.y;
    let date_baseline = title_baseline + date_bounds.y + TEXT_MARGIN_TOP;
    out.include(
        pos2(text_x, title_baseline - title_bounds.y),
        pos2(text_x + title_bounds.x, title_baseline),
    );
    out.commands.push(DrawCmd::Text {
        pos: pos2(text_x, title_baseline),
        text: item.title.clone(),
        size: style.title_size,
        color: style.title_color,
    });
    out.include(
        pos2(text_x, date_baseline - date_bounds.y),
        pos2(text_x + date_bounds.x, date_baseline),
    );
    out.commands.push(DrawCmd::Text {
        pos: pos2(text_x, date_baseline),
        text: item.date.clone(),
        size: style.date_size,
        color: style.date_color,
    });

    let advance = text_height + style.vertical_spacing;

    if i < len - 1 {
        // At the current or error step the connector must bridge markers of
        // different intrinsic sizes; recompute the offset from the images.
        if idx == current_item {
            radius_offset = markers.current.radius() - markers.default.radius();
        } else if idx == error_item {
            radius_offset = markers.current.radius() - markers.error.radius();
        }

        let stroke = style.stroke_width;
        // The three gravity cases are deliberately separate formulas; they do
        // not reduce to one expression.
        let (line_start, line_stop) = match style.point_gravity {
            PointGravity::Top => {
                let start = y
                    + radius * 2.0
                    + stroke
                    + radius_offset
                    + if selected { 0.0 } else { -default_radius };
                let stop = start + advance - radius * 2.0 - radius_offset * 2.0
                    + if selected { -5.0 } else { radius_offset * 2.0 + 1.0 };
                (start, stop)
            }
            PointGravity::Center => {
                let start = y
                    + text_height / 2.0
                    + if selected { current_radius + stroke } else { default_radius }
                    + radius_offset;
                let stop = start + advance
                    - if selected { current_radius * 2.0 } else { default_radius * 2.0 }
                    - radius_offset
                    - stroke;
                (start, stop)
            }
            PointGravity::Bottom => {
                let start = y
                    + text_height
                    + stroke
                    + radius_offset
                    + if selected { 0.0 } else { -radius_offset };
                let stop = start + advance - radius * 2.0 - radius_offset
                    + if selected { 1.0 } else { radius_offset + 1.0 };
                (start, stop)
            }
        };

        let line_x = MARGIN_LEFT + radius;
        let from = pos2(line_x, line_start - radius_offset - stroke);
        let to = pos2(line_x, line_stop);
        // The stroke is centered on the segment; cover its half-width.
        out.include(
            pos2(line_x - stroke / 2.0, from.y),
            pos2(line_x + stroke / 2.0, to.y),
        );
        out.commands.push(DrawCmd::Line { from, to });
    }

    Cursor {
        y: y + advance,
        current_radius,
    }
}
