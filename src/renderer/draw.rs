//! Field rendering

use super::shapes;
use super::surface::DrawSurface;
use crate::sim::{Field, Sprite, SpriteKind};

/// Clear the surface, then draw every sprite once in field order
pub fn render<S: DrawSurface + ?Sized>(surface: &mut S, field: &Field) {
    surface.clear();
    for sprite in field.sprites() {
        draw_sprite(surface, sprite);
    }
}

fn draw_sprite<S: DrawSurface + ?Sized>(surface: &mut S, sprite: &Sprite) {
    let paint = sprite.appearance.paint(sprite.opacity);
    match sprite.kind {
        SpriteKind::Ambient => shapes::dot(surface, sprite.pos, sprite.size, &paint),
        SpriteKind::Confetti => {
            shapes::square(surface, sprite.pos, sprite.size, sprite.rotation, &paint)
        }
        SpriteKind::Heart => {
            surface.set_alpha(sprite.opacity);
            shapes::heart(surface, sprite.pos, sprite.size, sprite.rotation, &paint);
            surface.set_alpha(1.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::surface::{DrawCommand, RecordingSurface};
    use crate::sim::{SurfaceSize, advance};

    fn surface() -> SurfaceSize {
        SurfaceSize::new(800.0, 600.0).unwrap()
    }

    #[test]
    fn test_render_clears_first() {
        let field = Field::with_seed(SpriteKind::Ambient, surface(), 10, 1);
        let mut target = RecordingSurface::new(surface());
        render(&mut target, &field);
        assert_eq!(target.commands.first(), Some(&DrawCommand::Clear));
        assert_eq!(target.frames, 1);
    }

    #[test]
    fn test_ambient_draws_circles_in_order() {
        let field = Field::with_seed(SpriteKind::Ambient, surface(), 10, 1);
        let mut target = RecordingSurface::new(surface());
        render(&mut target, &field);

        let circles: Vec<(glam::Vec2, f32)> = target
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Circle { center, radius } => Some((*center, *radius)),
                _ => None,
            })
            .collect();
        let expected: Vec<(glam::Vec2, f32)> =
            field.sprites().iter().map(|s| (s.pos, s.size)).collect();
        assert_eq!(circles, expected);
        assert!(target.commands.iter().any(|c| matches!(
            c,
            DrawCommand::SetFill(crate::color::Paint::Hsla { .. })
        )));
    }

    #[test]
    fn test_confetti_draws_one_square_each() {
        let field = Field::with_seed(SpriteKind::Confetti, surface(), 25, 2);
        let mut target = RecordingSurface::new(surface());
        render(&mut target, &field);
        assert_eq!(target.count(|c| matches!(c, DrawCommand::FillRect { .. })), 25);
        assert_eq!(
            target.count(|c| *c == DrawCommand::Save),
            target.count(|c| *c == DrawCommand::Restore)
        );
    }

    #[test]
    fn test_hearts_use_opacity_and_reset_alpha() {
        let field = Field::with_seed(SpriteKind::Heart, surface(), 3, 3);
        let mut target = RecordingSurface::new(surface());
        render(&mut target, &field);

        let alphas: Vec<f32> = target
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::SetAlpha(a) => Some(*a),
                _ => None,
            })
            .collect();
        let mut expected = Vec::new();
        for s in field.sprites() {
            expected.push(s.opacity);
            expected.push(1.0);
        }
        assert_eq!(alphas, expected);
        assert_eq!(target.count(|c| *c == DrawCommand::Fill), 3);
    }

    #[test]
    fn test_render_is_stable_within_a_frame() {
        let mut field = Field::with_seed(SpriteKind::Confetti, surface(), 40, 4);
        advance(&mut field, 1.0);
        let mut a = RecordingSurface::new(surface());
        let mut b = RecordingSurface::new(surface());
        render(&mut a, &field);
        render(&mut b, &field);
        assert_eq!(a.commands, b.commands);
    }
}
