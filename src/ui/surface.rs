use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, Vec2};

/// Anything the scene can be drawn onto.
///
/// Positions are in window pixels, already transformed by the caller.
pub trait Surface {
    /// Size of the drawable area.
    fn size(&self) -> Vec2;

    /// Draws `text` with its top-left corner at `pos`.
    fn text(&mut self, pos: Pos2, text: &str, font_size: f32, color: Color32);

    /// Draws the outline of `rect`, growing inwards by `thickness`.
    fn rect_outline(&mut self, rect: Rect, thickness: f32, color: Color32);

    fn line(&mut self, from: Pos2, to: Pos2, thickness: f32, color: Color32);

    fn circle(&mut self, center: Pos2, radius: f32, color: Color32);
}

/// [`Surface`] backed by an egui painter.
pub struct PainterSurface {
    painter: Painter,
}

impl PainterSurface {
    pub fn new(painter: Painter) -> Self {
        Self { painter }
    }
}

impl Surface for PainterSurface {
    fn size(&self) -> Vec2 {
        self.painter.clip_rect().size()
    }

    fn text(&mut self, pos: Pos2, text: &str, font_size: f32, color: Color32) {
        self.painter.text(
            pos,
            Align2::LEFT_TOP,
            text,
            FontId::proportional(font_size),
            color,
        );
    }

    fn rect_outline(&mut self, rect: Rect, thickness: f32, color: Color32) {
        // egui strokes are centred on the edge
        let inner = rect.shrink(thickness / 2.0);
        self.painter
            .rect_stroke(inner, 0.0, Stroke::new(thickness, color));
    }

    fn line(&mut self, from: Pos2, to: Pos2, thickness: f32, color: Color32) {
        self.painter
            .line_segment([from, to], Stroke::new(thickness, color));
    }

    fn circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter.circle_filled(center, radius, color);
    }
}
