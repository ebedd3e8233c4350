//! Rendering capability consumed by the frame driver, and its terminal backend.

mod font;
mod pixels;
mod sprites;

use std::io::{self, Write};

use crate::collision::Rect;
use crate::frame::{Font, RenderCommand, TextStyle, Texture};

use pixels::{PixelBuf, PxRect, Rgb};

/// Draw calls the core's render list is made of. Handles are opaque; a
/// backend decides what each texture and font looks like.
pub trait Renderer {
    fn clear(&mut self);
    fn copy(&mut self, texture: Texture, src: Rect, dst: Rect);
    fn render_text(&mut self, font: Font, text: &str, style: TextStyle, dst: Rect);
    fn present(&mut self) -> io::Result<()>;

    /// Output area changed to `cols` x `rows` cells.
    fn resize(&mut self, _cols: u16, _rows: u16) {}
}

/// Apply a render list in order.
pub fn dispatch<R: Renderer + ?Sized>(
    renderer: &mut R,
    commands: &[RenderCommand],
) -> io::Result<()> {
    for cmd in commands {
        match cmd {
            RenderCommand::Clear => renderer.clear(),
            RenderCommand::Copy { texture, src, dst } => renderer.copy(*texture, *src, *dst),
            RenderCommand::Text {
                font,
                text,
                style,
                dst,
            } => renderer.render_text(*font, text, *style, *dst),
            RenderCommand::Present => renderer.present()?,
        }
    }
    Ok(())
}

/// Maps logical screen units onto buffer pixels, stretching each axis to fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    sx: f64,
    sy: f64,
}

impl Viewport {
    pub fn fit(pixel_w: usize, pixel_h: usize, screen_w: i32, screen_h: i32) -> Self {
        Self {
            sx: pixel_w as f64 / screen_w.max(1) as f64,
            sy: pixel_h as f64 / screen_h.max(1) as f64,
        }
    }

    /// Both edges are rounded independently so adjacent rects stay adjacent.
    /// A non-empty rect never collapses below one pixel.
    pub fn map(&self, r: Rect) -> PxRect {
        let x0 = (r.x as f64 * self.sx).round() as i32;
        let y0 = (r.y as f64 * self.sy).round() as i32;
        let x1 = ((r.x + r.w) as f64 * self.sx).round() as i32;
        let y1 = ((r.y + r.h) as f64 * self.sy).round() as i32;
        PxRect {
            x: x0,
            y: y0,
            w: if r.w > 0 { (x1 - x0).max(1) } else { 0 },
            h: if r.h > 0 { (y1 - y0).max(1) } else { 0 },
        }
    }
}

/// Half-block renderer writing to a terminal (or any writer).
pub struct TerminalRenderer<W: Write> {
    out: W,
    buf: PixelBuf,
    viewport: Viewport,
    screen_w: i32,
    screen_h: i32,
}

impl<W: Write> TerminalRenderer<W> {
    /// `cols` x `rows` terminal cells showing a `screen_w` x `screen_h` logical screen.
    pub fn new(out: W, cols: u16, rows: u16, screen_w: i32, screen_h: i32) -> Self {
        let (pw, ph) = (cols as usize, rows as usize * 2);
        Self {
            out,
            buf: PixelBuf::new(pw, ph, sprites::LETTERBOX),
            viewport: Viewport::fit(pw, ph, screen_w, screen_h),
            screen_w,
            screen_h,
        }
    }

    #[cfg(test)]
    fn buffer(&self) -> &PixelBuf {
        &self.buf
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn clear(&mut self) {
        self.buf.fill(sprites::LETTERBOX);
    }

    fn copy(&mut self, texture: Texture, _src: Rect, dst: Rect) {
        let r = self.viewport.map(dst);
        match texture {
            Texture::Background => sprites::draw_background(&mut self.buf, r),
            Texture::PipeDown => sprites::draw_pipe(&mut self.buf, r, sprites::Mouth::Down),
            Texture::PipeUp => sprites::draw_pipe(&mut self.buf, r, sprites::Mouth::Up),
            Texture::Bird(frame) => sprites::draw_bird(&mut self.buf, r, frame),
        }
    }

    fn render_text(&mut self, _font: Font, text: &str, style: TextStyle, dst: Rect) {
        let r = self.viewport.map(dst);
        font::draw_text(&mut self.buf, r, text, Rgb(style.r, style.g, style.b));
    }

    fn present(&mut self) -> io::Result<()> {
        self.buf.render(&mut self.out)
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        let (pw, ph) = (cols as usize, rows as usize * 2);
        self.buf.resize(pw, ph, sprites::LETTERBOX);
        self.viewport = Viewport::fit(pw, ph, self.screen_w, self.screen_h);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl Renderer for Recorder {
        fn clear(&mut self) {
            self.calls.push("clear".into());
        }
        fn copy(&mut self, texture: Texture, _src: Rect, _dst: Rect) {
            self.calls.push(format!("copy {texture:?}"));
        }
        fn render_text(&mut self, _font: Font, text: &str, _style: TextStyle, _dst: Rect) {
            self.calls.push(format!("text {text}"));
        }
        fn present(&mut self) -> io::Result<()> {
            self.calls.push("present".into());
            Ok(())
        }
    }

    #[test]
    fn test_dispatch_preserves_order() {
        let full = Rect::new(0, 0, 400, 800);
        let cmds = vec![
            RenderCommand::Clear,
            RenderCommand::Copy {
                texture: Texture::Background,
                src: full,
                dst: full,
            },
            RenderCommand::Text {
                font: Font::Main,
                text: "3".into(),
                style: TextStyle::WHITE,
                dst: Rect::new(10, 10, 30, 48),
            },
            RenderCommand::Present,
        ];
        let mut rec = Recorder::default();
        dispatch(&mut rec, &cmds).unwrap();
        assert_eq!(rec.calls, vec!["clear", "copy Background", "text 3", "present"]);
    }

    #[test]
    fn test_viewport_scales_each_axis() {
        let vp = Viewport::fit(80, 48, 400, 800);
        let full = vp.map(Rect::new(0, 0, 400, 800));
        assert_eq!(full, PxRect { x: 0, y: 0, w: 80, h: 48 });
        let point = vp.map(Rect::new(200, 400, 0, 0));
        assert_eq!(point, PxRect { x: 40, y: 24, w: 0, h: 0 });
    }

    #[test]
    fn test_viewport_keeps_small_rects_visible() {
        let vp = Viewport::fit(40, 20, 400, 800);
        let r = vp.map(Rect::new(170, 100, 3, 3));
        assert_eq!((r.w, r.h), (1, 1));
    }

    #[test]
    fn test_terminal_renderer_presents_to_writer() {
        let mut out = Vec::new();
        {
            let mut r = TerminalRenderer::new(&mut out, 20, 10, 400, 800);
            let full = Rect::new(0, 0, 400, 800);
            r.clear();
            r.copy(Texture::Background, full, full);
            r.present().unwrap();
            assert_ne!(r.buffer().get(0, 0), sprites::LETTERBOX);
        }
        assert!(!out.is_empty());
    }

    #[test]
    fn test_resize_refits_viewport() {
        let mut r = TerminalRenderer::new(Vec::new(), 20, 10, 400, 800);
        r.resize(40, 30);
        assert_eq!((r.buffer().width(), r.buffer().height()), (40, 60));
    }
}
