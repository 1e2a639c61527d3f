//! render.rs — top-down schematic of the boat
//!
//! Draws one grayscale frame:
//! - a dotted sea grid scrolling opposite to the boat's motion (the boat
//!   stays at the canvas centre)
//! - target heading arrow (top left) and wind arrow (top right)
//! - jib, mainsail and rudder as arrows along the hull, plus a roll arrow
//!
//! Lines are Bresenham; anything off the canvas is clipped, never written.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};
use std::path::{Path, PathBuf};

use image::{GrayImage, ImageFormat, Luma};
use serde::Deserialize;

use sail_types::{heading_to_direction, rotate_2d, BoatState, ControlSurfaces, Vec3, WindState};

use crate::error::SimError;

const INK: Luma<u8> = Luma([0]);
const PAPER: Luma<u8> = Luma([255]);

// Schematic dimensions, pixels
const MAINSAIL_LENGTH: f64 = 30.0;
const JIB_LENGTH: f64 = 20.0;
const RUDDER_LENGTH: f64 = 10.0;
const INTERSPACE: f64 = 8.0;
const REFERENCE_ARROW_LENGTH: i32 = 40;
const REFERENCE_ARROW_INSET: i32 = 25;

// ── Config ────────────────────────────────────────────────────────────────────

/// `[render]` section of config.toml
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub enabled: bool,
    pub output_path: PathBuf,
    /// Optional JSON snapshot written alongside each frame
    pub telemetry_path: Option<PathBuf>,
    /// Canvas edge, pixels (square)
    pub size: u32,
    pub grid_spacing: i32,
    pub pixels_per_unit: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            output_path: PathBuf::from("sailing.png"),
            telemetry_path: None,
            size: 400,
            grid_spacing: 16,
            pixels_per_unit: 4.0,
        }
    }
}

// ── Bresenham ─────────────────────────────────────────────────────────────────

/// Longest line walked, in steps. Anything longer is cut short.
pub const MAX_LINE_STEPS: u32 = 1000;

/// Pixel coordinates are clamped to ±this before converting from world space
const PIXEL_LIMIT: f64 = 1.0e6;

/// Integer points of the segment `start` → `end`, both ends included,
/// stopping after [`MAX_LINE_STEPS`] steps
#[derive(Debug, Clone)]
pub struct LinePoints {
    x: i64,
    y: i64,
    end_x: i64,
    end_y: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    steps_left: u32,
    done: bool,
}

pub fn line_points(start: (i32, i32), end: (i32, i32)) -> LinePoints {
    let (x, y) = (i64::from(start.0), i64::from(start.1));
    let (end_x, end_y) = (i64::from(end.0), i64::from(end.1));
    let dx = (end_x - x).abs();
    let dy = (end_y - y).abs();
    LinePoints {
        x,
        y,
        end_x,
        end_y,
        dx,
        dy,
        sx: if x < end_x { 1 } else { -1 },
        sy: if y < end_y { 1 } else { -1 },
        err: dx - dy,
        steps_left: MAX_LINE_STEPS,
        done: false,
    }
}

impl Iterator for LinePoints {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.done {
            return None;
        }
        // x and y never pass the i32 endpoints, so the narrowing is lossless
        let point = (self.x as i32, self.y as i32);
        if (self.x == self.end_x && self.y == self.end_y) || self.steps_left == 0 {
            self.done = true;
            return Some(point);
        }
        self.steps_left -= 1;
        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(point)
    }
}

/// World-derived pixel value, clamped so later integer arithmetic can't
/// overflow. NaN maps to 0.
fn to_pixel(v: f64) -> i32 {
    v.clamp(-PIXEL_LIMIT, PIXEL_LIMIT) as i32
}

/// Shaft and barb of an arrow centred on (x, y)
pub fn arrow_segments(x: i32, y: i32, length: i32, heading: f64) -> [((i32, i32), (i32, i32)); 2] {
    let shaft = heading_to_direction(heading).scale(length as f64 / 2.0);
    let barb = heading_to_direction(heading + FRAC_PI_4).scale(length as f64 / 3.0);
    let (hx, hy) = (to_pixel(shaft.x), to_pixel(shaft.y));
    let (bx, by) = (to_pixel(barb.x), to_pixel(barb.y));
    let tip = (x.saturating_add(hx), y.saturating_add(hy));
    [
        ((x.saturating_sub(hx), y.saturating_sub(hy)), tip),
        (tip, (tip.0.saturating_sub(bx), tip.1.saturating_sub(by))),
    ]
}

// ── Canvas ────────────────────────────────────────────────────────────────────

pub struct Canvas {
    img: GrayImage,
}

impl Canvas {
    /// Blank white square canvas
    pub fn new(size: u32) -> Self {
        Self { img: GrayImage::from_pixel(size, size, PAPER) }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.img.width() && (y as u32) < self.img.height()
    }

    /// Ink one pixel; returns false (and writes nothing) when off-canvas
    pub fn plot(&mut self, x: i32, y: i32) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        self.img.put_pixel(x as u32, y as u32, INK);
        true
    }

    pub fn draw_line(&mut self, start: (i32, i32), end: (i32, i32)) {
        for (x, y) in line_points(start, end) {
            self.plot(x, y);
        }
    }

    /// Arrow centred on (x, y) pointing along compass `heading`.
    /// A negative length flips it.
    pub fn draw_arrow(&mut self, x: i32, y: i32, length: i32, heading: f64) {
        for (start, end) in arrow_segments(x, y, length, heading) {
            self.draw_line(start, end);
        }
    }

    pub fn into_image(self) -> GrayImage { self.img }
}

// ── Frame ─────────────────────────────────────────────────────────────────────

/// First grid line offset on one axis, in [0, spacing)
pub fn grid_offset(position: f64, spacing: i32, pixels_per_unit: f64) -> i32 {
    ((-position * pixels_per_unit) as i32 % spacing + spacing) % spacing
}

fn draw_grid(canvas: &mut Canvas, position: &Vec3, cfg: &RenderConfig) {
    let spacing = cfg.grid_spacing.max(1);
    let size = cfg.size as i32;
    let start_x = grid_offset(position.x, spacing, cfg.pixels_per_unit);
    let start_y = grid_offset(position.y, spacing, cfg.pixels_per_unit);
    for x in (start_x..size).step_by(spacing as usize) {
        for y in (start_y..size).step_by(spacing as usize) {
            canvas.plot(x, y);
        }
    }
}

fn draw_boat(canvas: &mut Canvas, x: i32, y: i32, boat: &BoatState, controls: &ControlSurfaces) {
    let heading = boat.heading();
    let total_length = MAINSAIL_LENGTH + JIB_LENGTH + RUDDER_LENGTH + INTERSPACE * 2.0;

    // Body-frame offsets along the hull, bow toward -y
    let parts = [
        (-JIB_LENGTH / 2.0 - INTERSPACE, JIB_LENGTH, controls.jib_heading),
        (MAINSAIL_LENGTH / 2.0, MAINSAIL_LENGTH, controls.mainsail_heading),
        (MAINSAIL_LENGTH + INTERSPACE + RUDDER_LENGTH / 2.0, RUDDER_LENGTH, controls.rudder_heading),
    ];
    for (offset, length, relative_heading) in parts {
        let (dx, dy) = rotate_2d(0.0, offset, heading);
        canvas.draw_arrow(x + to_pixel(dx), y + to_pixel(dy), length as i32, heading + relative_heading);
    }

    let roll_length = boat.roll() / FRAC_PI_2 * total_length;
    let (rx, ry) = rotate_2d(roll_length, 0.0, heading);
    canvas.draw_arrow(x + to_pixel(rx), y + to_pixel(ry), to_pixel(roll_length), heading + FRAC_PI_2);
}

/// Render one frame of the current state
pub fn render_frame(
    boat: &BoatState,
    wind: &WindState,
    controls: &ControlSurfaces,
    cfg: &RenderConfig,
) -> GrayImage {
    let mut canvas = Canvas::new(cfg.size);
    let size = cfg.size as i32;

    draw_grid(&mut canvas, &boat.position, cfg);

    canvas.draw_arrow(
        REFERENCE_ARROW_INSET,
        REFERENCE_ARROW_INSET,
        REFERENCE_ARROW_LENGTH,
        controls.target_heading,
    );
    canvas.draw_arrow(
        size - REFERENCE_ARROW_INSET,
        REFERENCE_ARROW_INSET,
        REFERENCE_ARROW_LENGTH,
        wind.direction,
    );

    draw_boat(&mut canvas, size / 2, size / 2, boat, controls);

    canvas.into_image()
}

/// Encode `img` as PNG at `path`, replacing any previous frame
pub fn write_frame(img: &GrayImage, path: &Path) -> Result<(), SimError> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| SimError::FrameWrite { path: path.to_path_buf(), source })
}
