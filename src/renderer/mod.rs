//! Drawing-surface abstraction and scene drawing
//!
//! The engine decides what goes where; a `Surface` decides how pixels (or
//! characters) are produced. Text is always centered on its anchor.

mod text_surface;

pub use text_surface::TextSurface;

use glam::Vec2;

use crate::config::{Color, Palette};
use crate::consts::{BRICK_CORNER_RADIUS, HUD_BASELINE, OVERLAY_HEIGHT, OVERLAY_WIDTH};
use crate::scene::{Overlay, RenderScene, TargetState};
use crate::sim::Rect;

/// Font request for `Surface::fill_text`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub size: f32,
    pub bold: bool,
}

impl Font {
    pub const LABEL: Font = Font {
        size: 12.0,
        bold: false,
    };
    pub const HUD: Font = Font {
        size: 16.0,
        bold: true,
    };
    pub const OVERLAY: Font = Font {
        size: 16.0,
        bold: false,
    };
}

/// Primitives a collaborator provides
pub trait Surface {
    /// Blank the whole surface
    fn clear(&mut self);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_rounded_rect(&mut self, rect: Rect, corner_radius: f32, color: Color);
    /// Draw `text` centered on `center`
    fn fill_text(&mut self, text: &str, center: Vec2, font: Font, color: Color);
}

/// Corner radius that still fits inside the rectangle
pub fn corner_radius(rect: &Rect, requested: f32) -> f32 {
    requested
        .min((rect.width - 1.0).max(1.0))
        .min((rect.height - 1.0).max(1.0))
}

/// Draw one frame of a scene
pub fn draw_scene(scene: &RenderScene, palette: &Palette, surface: &mut impl Surface) {
    surface.clear();

    if let Some(overlay) = scene.overlay.filter(Overlay::replaces_arena) {
        draw_overlay(scene, overlay, palette, surface);
        return;
    }

    for target in scene.visible_targets() {
        let color = match target.state {
            TargetState::Damaged => palette.brick_damaged,
            _ => palette.brick,
        };
        let radius = corner_radius(&target.rect, BRICK_CORNER_RADIUS);
        surface.fill_rounded_rect(target.rect, radius, color);
        if !target.label.is_empty() {
            surface.fill_text(&target.label, target.rect.center(), Font::LABEL, palette.label);
        }
    }

    surface.fill_circle(scene.ball.center, scene.ball.radius, palette.ink);
    surface.fill_rect(scene.paddle, palette.ink);
    draw_hud(scene, palette, surface);

    if let Some(overlay) = scene.overlay {
        draw_overlay(scene, overlay, palette, surface);
    }
}

fn draw_hud(scene: &RenderScene, palette: &Palette, surface: &mut impl Surface) {
    let baseline = scene.height - HUD_BASELINE;
    surface.fill_text(
        &format!("Score: {}", scene.score),
        Vec2::new(38.0, baseline),
        Font::HUD,
        palette.ink,
    );
    surface.fill_text(
        &format!("Lives: {}", scene.lives),
        Vec2::new(scene.width - 45.0, baseline),
        Font::HUD,
        palette.ink,
    );
    if scene.level_count > 1 {
        surface.fill_text(
            &format!("Level: {}", scene.level),
            Vec2::new(scene.width / 2.0, baseline),
            Font::HUD,
            palette.ink,
        );
    }
}

fn draw_overlay(
    scene: &RenderScene,
    overlay: Overlay,
    palette: &Palette,
    surface: &mut impl Surface,
) {
    let center = Vec2::new(scene.width / 2.0, scene.height / 2.0);
    let panel = Rect::new(
        center.x - OVERLAY_WIDTH / 2.0,
        center.y - OVERLAY_HEIGHT / 2.0,
        OVERLAY_WIDTH,
        OVERLAY_HEIGHT,
    );
    surface.fill_rounded_rect(panel, corner_radius(&panel, BRICK_CORNER_RADIUS), palette.overlay);
    surface.fill_text(&overlay.text(), center, Font::OVERLAY, palette.ink);
}

/// One recorded surface call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Rect {
        rect: Rect,
        color: Color,
    },
    RoundedRect {
        rect: Rect,
        corner_radius: f32,
        color: Color,
    },
    Text {
        text: String,
        center: Vec2,
        font: Font,
        color: Color,
    },
}

/// Surface that records calls for a backend to replay later
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    pub commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texts drawn since the last clear
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for DisplayList {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn fill_rounded_rect(&mut self, rect: Rect, corner_radius: f32, color: Color) {
        self.commands.push(DrawCommand::RoundedRect {
            rect,
            corner_radius,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, center: Vec2, font: Font, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            center,
            font,
            color,
        });
    }
}
