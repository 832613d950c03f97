use crate::{Color, PixelBuffer};
use glam::Vec2;

/// Anything that can rasterize itself into the framebuffer
pub trait Drawable {
    fn draw(&self, buffer: &mut PixelBuffer);
}

/// Fill a disc by testing every pixel of its bounding square.
///
/// The inclusion test is strict (`dx² + dy² < r²`) and the square spans
/// `[-r, r)`, so the rightmost and bottom boundary pixels are never lit.
pub fn draw_filled_circle(center: Vec2, radius: i32, color: Color, buffer: &mut PixelBuffer) {
    // Saturating i64 keeps far off-screen centres clipping instead of overflowing
    let cx = center.x as i64;
    let cy = center.y as i64;
    let radius = radius as i64;
    let r_sq = radius * radius;

    for dy in -radius..radius {
        for dx in -radius..radius {
            if dx * dx + dy * dy < r_sq {
                buffer.set_pixel(cx.saturating_add(dx), cy.saturating_add(dy), color);
            }
        }
    }
}

/// Fill a `w`×`h` box centred on `center` (top-left uses truncating division)
pub fn draw_filled_rect(center: Vec2, w: i32, h: i32, color: Color, buffer: &mut PixelBuffer) {
    let start_x = (center.x as i64).saturating_sub((w / 2) as i64);
    let start_y = (center.y as i64).saturating_sub((h / 2) as i64);

    for y in 0..h as i64 {
        for x in 0..w as i64 {
            buffer.set_pixel(start_x.saturating_add(x), start_y.saturating_add(y), color);
        }
    }
}
