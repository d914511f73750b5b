//! Step-timeline widget: vertical chain of marker icons with titles, dates
//! and connector lines.
//!
//! Each step shows a marker, a title and a date; markers of steps at or
//! before the current (or error) index render as reached. The widget holds
//! the item list and selection indices; every frame re-runs the full layout
//! pass from scratch, so there is no cached geometry to invalidate.

use eframe::egui::{self, pos2, vec2, Color32, FontId, Rect, Sense, Stroke};
use log::debug;

use crate::item::Item;
use crate::layout::{layout_items, DrawCmd, LayoutResult};
use crate::style::{MarkerSet, TimelineStyle};

pub struct TimeLine {
    items: Vec<Item>,
    current_item: i32,
    error_item: i32,
    pub style: TimelineStyle,
    pub markers: MarkerSet,
}

impl TimeLine {
    pub fn new(style: TimelineStyle, markers: MarkerSet) -> Self {
        Self {
            items: Vec::new(),
            current_item: -1,
            error_item: -1,
            style,
            markers,
        }
    }

    /// Append items to the timeline. Additive: a second call extends the
    /// displayed list, it does not replace it.
    pub fn set_items(&mut self, items: impl IntoIterator<Item = Item>) {
        self.items.extend(items);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Mark the step the process has reached. Out-of-range positions clamp:
    /// negative to -1 (none), past-the-end to the last item.
    pub fn set_current_item(&mut self, position: i32) {
        let len = self.items.len() as i32;
        self.current_item = if position < 0 {
            -1
        } else if position >= len {
            debug!("current item {} clamped to {}", position, len - 1);
            len - 1
        } else {
            position
        };
    }

    pub fn current_item(&self) -> i32 {
        self.current_item
    }

    /// Mark the step that failed. Only the upper bound clamps; negative
    /// positions are stored as-is and behave as "no error".
    pub fn set_error_item(&mut self, position: i32) {
        let len = self.items.len() as i32;
        self.error_item = if position >= len {
            debug!("error item {} clamped to {}", position, len - 1);
            len - 1
        } else {
            position
        };
    }

    pub fn error_item(&self) -> i32 {
        self.error_item
    }

    /// Run the layout pass with a caller-supplied text measurement. Exposed
    /// for headless use; `ui()` calls this with galley measurement.
    pub fn layout<F>(&self, measure: F) -> LayoutResult
    where
        F: FnMut(&str, f32) -> egui::Vec2,
    {
        layout_items(
            &self.items,
            self.current_item,
            self.error_item,
            &self.style,
            &self.markers,
            measure,
        )
    }

    /// Lay out and paint the timeline into the current ui.
    pub fn ui(&self, ui: &mut egui::Ui) -> egui::Response {
        let result = {
            let painter = ui.painter();
            self.layout(|text, size| {
                painter
                    .layout_no_wrap(text.to_owned(), FontId::proportional(size), Color32::WHITE)
                    .size()
            })
        };

        let (rect, response) = ui.allocate_exact_size(result.size, Sense::hover());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let origin = rect.min.to_vec2() + result.origin;
            let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
            let stroke = Stroke::new(self.style.stroke_width, self.style.line_color);

            for cmd in &result.commands {
                match cmd {
                    DrawCmd::Marker {
                        texture,
                        pos,
                        size,
                        tint,
                    } => {
                        painter.image(*texture, Rect::from_min_size(*pos + origin, *size), uv, *tint);
                    }
                    DrawCmd::Text {
                        pos,
                        text,
                        size,
                        color,
                    } => {
                        let galley = painter.layout_no_wrap(
                            text.clone(),
                            FontId::proportional(*size),
                            *color,
                        );
                        // Command positions are baselines; galleys paint from
                        // their top-left corner.
                        let top_left = *pos + origin - vec2(0.0, galley.size().y);
                        painter.galley(top_left, galley, *color);
                    }
                    DrawCmd::Line { from, to } => {
                        painter.line_segment([*from + origin, *to + origin], stroke);
                    }
                }
            }
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{TextureId, Vec2};

    use crate::style::Marker;

    fn measure(text: &str, size: f32) -> Vec2 {
        vec2(text.len() as f32 * size * 0.5, size)
    }

    fn timeline_with(n: usize) -> TimeLine {
        let marker = Marker::new(TextureId::default(), vec2(40.0, 40.0));
        let markers = MarkerSet::new(marker.clone(), marker.clone(), marker);
        let mut tl = TimeLine::new(TimelineStyle::default(), markers);
        tl.set_items((0..n).map(|i| Item::new(format!("Step {}", i + 1), "2017-09-10", false)));
        tl
    }

    #[test]
    fn test_set_current_item_clamps_negative_to_none() {
        let mut tl = timeline_with(4);
        tl.set_current_item(-7);
        assert_eq!(tl.current_item(), -1);
    }

    #[test]
    fn test_set_current_item_clamps_past_end() {
        let mut tl = timeline_with(4);
        tl.set_current_item(99);
        assert_eq!(tl.current_item(), 3);

        tl.set_current_item(2);
        assert_eq!(tl.current_item(), 2);
    }

    #[test]
    fn test_set_error_item_clamps_upper_bound_only() {
        let mut tl = timeline_with(4);
        tl.set_error_item(99);
        assert_eq!(tl.error_item(), 3);

        // Negative values pass through untouched and mean "no error".
        tl.set_error_item(-5);
        assert_eq!(tl.error_item(), -5);
    }

    #[test]
    fn test_set_items_is_additive() {
        let mut tl = timeline_with(2);
        tl.set_items(vec![
            Item::new("Step 3", "2017-09-11", false),
            Item::new("Step 4", "2017-09-12", false),
        ]);
        let titles: Vec<&str> = tl.items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Step 1", "Step 2", "Step 3", "Step 4"]);
    }

    #[test]
    fn test_empty_timeline_layout_is_empty() {
        let tl = timeline_with(0);
        let result = tl.layout(measure);
        assert!(result.commands.is_empty());
    }

    #[test]
    fn test_layout_uses_selection_state() {
        let mut tl = timeline_with(3);
        tl.style.circle_color = Color32::from_gray(120);
        tl.style.current_circle_color = Color32::from_rgb(80, 200, 120);
        tl.set_current_item(1);
        let result = tl.layout(measure);
        let tints: Vec<Color32> = result
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Marker { tint, .. } => Some(*tint),
                _ => None,
            })
            .collect();
        assert_eq!(tints.len(), 3);
        assert_eq!(tints[0], tl.style.current_circle_color);
        assert_eq!(tints[2], tl.style.circle_color);
    }
}
