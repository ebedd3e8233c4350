//! Procedural stand-ins for the background, pipe and bird textures.

use super::pixels::{PixelBuf, PxRect, Rgb};

// ── Colors ──────────────────────────────────────────────────────────────────

pub const LETTERBOX: Rgb = Rgb(20, 20, 28);
const SKY_TOP: Rgb = Rgb(70, 180, 200);
const SKY_BOT: Rgb = Rgb(190, 232, 245);
const HILL_FAR: Rgb = Rgb(120, 195, 75);
const HILL_NEAR: Rgb = Rgb(95, 175, 55);
const PIPE_L: Rgb = Rgb(74, 122, 26);
const PIPE_M: Rgb = Rgb(100, 170, 40);
const PIPE_R: Rgb = Rgb(115, 191, 46);
const PIPE_HI: Rgb = Rgb(145, 215, 62);
const CAP_DARK: Rgb = Rgb(60, 100, 20);
const BIRD_Y: Rgb = Rgb(245, 200, 66);
const BIRD_HI: Rgb = Rgb(255, 225, 100);
const BIRD_WING: Rgb = Rgb(215, 165, 35);
const BIRD_EYE: Rgb = Rgb(255, 255, 255);
const BIRD_PUPIL: Rgb = Rgb(20, 20, 20);
const BIRD_BEAK: Rgb = Rgb(225, 75, 35);

/// Which end of a pipe carries the wider cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mouth {
    Up,
    Down,
}

pub fn draw_background(buf: &mut PixelBuf, r: PxRect) {
    for y in 0..r.h {
        let t = (y * 256 / r.h.max(1)) as u16;
        let c = Rgb::lerp(SKY_TOP, SKY_BOT, t);
        buf.fill_rect(r.x, r.y + y, r.w, 1, c);
    }

    let base = r.y + r.h;
    let unit = r.h as f64 / 100.0;
    for x in 0..r.w {
        let fx = x as f64 * 0.04;
        let far = (fx.sin() * 4.0 + (fx * 1.7).sin() * 2.0 + 8.0) * unit;
        let fx = x as f64 * 0.06 + 1.3;
        let near = (fx.sin() * 3.0 + (fx * 2.3).sin() * 1.5 + 4.0) * unit;
        for y in (base - far as i32)..base {
            buf.set(r.x + x, y, HILL_FAR);
        }
        for y in (base - near as i32)..base {
            buf.set(r.x + x, y, HILL_NEAR);
        }
    }
}

pub fn draw_pipe(buf: &mut PixelBuf, r: PxRect, mouth: Mouth) {
    if r.w <= 0 || r.h <= 0 {
        return;
    }
    for x in 0..r.w {
        let c = pipe_shade(x, r.w);
        buf.fill_rect(r.x + x, r.y, 1, r.h, c);
    }

    let cap_extra = (r.w / 10).max(1);
    let cap_h = (r.w / 3).clamp(1, r.h);
    let cap_y = match mouth {
        Mouth::Down => r.y + r.h - cap_h,
        Mouth::Up => r.y,
    };
    let cap_w = r.w + cap_extra * 2;
    for x in 0..cap_w {
        let c = pipe_shade(x, cap_w);
        let px = r.x - cap_extra + x;
        buf.fill_rect(px, cap_y, 1, cap_h, c);
        buf.set(px, cap_y, CAP_DARK);
        buf.set(px, cap_y + cap_h - 1, CAP_DARK);
    }
}

/// `frame` 0 is wings up, 1 level, 2 down.
pub fn draw_bird(buf: &mut PixelBuf, r: PxRect, frame: u8) {
    if r.w <= 0 || r.h <= 0 {
        return;
    }
    buf.fill_rect(r.x, r.y, r.w, r.h, BIRD_Y);
    buf.fill_rect(r.x + 1, r.y, (r.w - 2).max(1), (r.h / 6).max(1), BIRD_HI);

    let wing_w = (r.w * 2 / 5).max(1);
    let wing_h = (r.h / 3).max(1);
    let wing_y = match frame {
        0 => r.y,
        1 => r.y + (r.h - wing_h) / 2,
        _ => r.y + r.h - wing_h,
    };
    buf.fill_rect(r.x, wing_y, wing_w, wing_h, BIRD_WING);

    let eye = (r.w / 6).max(1);
    let ex = r.x + r.w - eye * 2;
    let ey = r.y + r.h / 5;
    buf.fill_rect(ex, ey, eye + 1, eye + 1, BIRD_EYE);
    buf.set(ex + eye, ey + eye, BIRD_PUPIL);

    let beak_w = (r.w / 4).max(1);
    let beak_h = (r.h / 3).max(1);
    buf.fill_rect(r.x + r.w, r.y + r.h / 2 - beak_h / 2, beak_w, beak_h, BIRD_BEAK);
}

fn pipe_shade(x: i32, total_w: i32) -> Rgb {
    if total_w <= 1 {
        return PIPE_M;
    }
    let t = (x as f64 / (total_w - 1) as f64 * 256.0) as u16;
    if t < 64 {
        Rgb::lerp(PIPE_L, PIPE_M, (t * 4).min(256))
    } else if t < 100 {
        Rgb::lerp(PIPE_M, PIPE_HI, ((t - 64) * 7).min(256))
    } else if t < 160 {
        Rgb::lerp(PIPE_HI, PIPE_R, ((t - 100) * 4).min(256))
    } else {
        Rgb::lerp(PIPE_R, PIPE_L, ((t - 160) * 3).min(256))
    }
}
