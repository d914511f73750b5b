//! Visual configuration for the timeline: colors, sizes, gravity, markers.
//!
//! The style and marker set are resolved once by the caller and handed to the
//! widget at construction; layout never re-reads configuration mid-pass.

use eframe::egui::{self, Color32, TextureHandle, TextureId, Vec2};
use serde::{Deserialize, Serialize};

// Default palette for generated circle markers
const COLOR_MARKER_DEFAULT: Color32 = Color32::from_gray(120); // Pending step
const COLOR_MARKER_CURRENT: Color32 = Color32::from_rgb(80, 200, 120); // Reached step
const COLOR_MARKER_LAST: Color32 = Color32::from_gray(160); // Final step
const COLOR_MARKER_ERROR: Color32 = Color32::from_rgb(200, 60, 60); // Failed step
const COLOR_LINE: Color32 = Color32::from_rgb(80, 140, 220); // Connector

/// Vertical alignment of a step's marker relative to its text block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointGravity {
    #[default]
    Top,
    Center,
    Bottom,
}

/// Resolved visual parameters, the equivalent of a styled-attribute bundle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelineStyle {
    /// Tint for markers of not-yet-reached steps.
    pub circle_color: Color32,
    /// Tint for markers of reached steps.
    pub current_circle_color: Color32,
    pub line_color: Color32,
    pub title_color: Color32,
    pub title_size: f32,
    pub date_color: Color32,
    pub date_size: f32,
    pub stroke_width: f32,
    /// Fallback marker radius, used until the first marker image dictates one.
    pub radius: f32,
    pub vertical_spacing: f32,
    pub point_gravity: PointGravity,
}

impl Default for TimelineStyle {
    fn default() -> Self {
        Self {
            circle_color: Color32::WHITE,
            current_circle_color: Color32::WHITE,
            line_color: COLOR_LINE,
            title_color: Color32::from_gray(230),
            title_size: 14.0,
            date_color: Color32::from_gray(150),
            date_size: 12.0,
            stroke_width: 5.0,
            radius: 20.0,
            vertical_spacing: 100.0,
            point_gravity: PointGravity::Top,
        }
    }
}

/// A marker image plus its intrinsic pixel size.
///
/// The intrinsic width drives the layout radius for the step it is drawn on;
/// markers of different sizes are what the radius-offset correction in the
/// layout pass exists for.
#[derive(Clone)]
pub struct Marker {
    pub texture: TextureId,
    pub size: Vec2,
    // Keeps generated textures alive; egui frees a managed texture when its
    // last handle drops.
    handle: Option<TextureHandle>,
}

impl Marker {
    pub fn new(texture: TextureId, size: Vec2) -> Self {
        Self {
            texture,
            size,
            handle: None,
        }
    }

    /// Marker backed by a caller-owned texture handle.
    pub fn from_handle(handle: &TextureHandle) -> Self {
        Self::new(handle.id(), handle.size_vec2())
    }

    /// Marker that owns its texture handle.
    pub fn owned(handle: TextureHandle) -> Self {
        Self {
            texture: handle.id(),
            size: handle.size_vec2(),
            handle: Some(handle),
        }
    }

    pub fn radius(&self) -> f32 {
        self.size.x / 2.0
    }

    /// The owned handle, when this marker was built with [`Marker::owned`].
    pub fn texture_handle(&self) -> Option<&TextureHandle> {
        self.handle.as_ref()
    }
}

/// The four marker images: default, current, last and error.
///
/// `last` is optional and falls back to `default`; the other three always
/// resolve (use [`MarkerSet::circles`] for generated stand-ins when no custom
/// images are supplied).
#[derive(Clone)]
pub struct MarkerSet {
    pub default: Marker,
    pub current: Marker,
    pub last: Option<Marker>,
    pub error: Marker,
}

impl MarkerSet {
    pub fn new(default: Marker, current: Marker, error: Marker) -> Self {
        Self {
            default,
            current,
            last: None,
            error,
        }
    }

    pub fn with_last(mut self, last: Marker) -> Self {
        self.last = Some(last);
        self
    }

    /// Marker for the final step, falling back to the default marker.
    pub fn last(&self) -> &Marker {
        self.last.as_ref().unwrap_or(&self.default)
    }

    /// Generated flat-circle markers, the substitute for bundled icon
    /// resources. The current marker is drawn slightly larger than the rest
    /// so the size-alignment path is visible out of the box.
    pub fn circles(ctx: &egui::Context, style: &TimelineStyle) -> Self {
        let r = style.radius;
        Self {
            default: Marker::owned(circle_texture(ctx, "stepline_default", r, COLOR_MARKER_DEFAULT)),
            current: Marker::owned(circle_texture(ctx, "stepline_current", r * 1.25, COLOR_MARKER_CURRENT)),
            last: Some(Marker::owned(circle_texture(ctx, "stepline_last", r, COLOR_MARKER_LAST))),
            error: Marker::owned(circle_texture(ctx, "stepline_error", r, COLOR_MARKER_ERROR)),
        }
    }
}

/// Upload a filled-circle texture of the given radius.
pub fn circle_texture(ctx: &egui::Context, name: &str, radius: f32, fill: Color32) -> TextureHandle {
    let d = (radius * 2.0).round().max(2.0) as usize;
    let mut rgba = vec![0u8; d * d * 4];
    let center = (d as f32 - 1.0) / 2.0;
    for y in 0..d {
        for x in 0..d {
            let dx = x as f32 - center;
            let dy = y as f32 - center;
            if (dx * dx + dy * dy).sqrt() <= radius - 0.5 {
                rgba[(y * d + x) * 4..(y * d + x) * 4 + 4]
                    .copy_from_slice(&[fill.r(), fill.g(), fill.b(), fill.a()]);
            }
        }
    }
    ctx.load_texture(
        name,
        egui::ColorImage::from_rgba_unmultiplied([d, d], &rgba),
        egui::TextureOptions::LINEAR,
    )
}
