//! Screen content and rendering logic.
//!
//! This module defines the [`TextLine`] and [`Screen`] types, the built-in
//! bring-up screens, and the `render_*` functions that draw them with
//! `embedded-graphics`. Every function is generic over the draw target, so
//! the same screens render into either driver's frame buffer or into a
//! [`Viewport`](crate::Viewport) of one.

use core::fmt::Write;

use embedded_graphics::{
    mono_font::{
        ascii::{FONT_10X20, FONT_5X7, FONT_6X10, FONT_6X12},
        MonoFont, MonoTextStyle,
    },
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};
use heapless::String;

use crate::config::ViewportConfig;

// ── TextLine ─────────────────────────────────────────────────────────────

/// One string anchored at its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextLine<'a> {
    pub text: &'a str,
    pub position: Point,
}

impl<'a> TextLine<'a> {
    pub const fn new(text: &'a str, x: i32, y: i32) -> Self {
        Self {
            text,
            position: Point::new(x, y),
        }
    }
}

// ── Built-in screens ─────────────────────────────────────────────────────

/// Four lines that fill the 72×40 window of a 0.42" panel. The last row's
/// underscores sit on the bottom row of the window.
pub const OFFSET_TEST_LINES: [TextLine<'static>; 4] = [
    TextLine::new("Micro", 0, 0),
    TextLine::new("   Python", 0, 10),
    TextLine::new("123456789", 0, 20),
    // FONT_6X10 draws `_` on glyph row 8: 31 + 8 = row 39.
    TextLine::new("M_._,_._._", 0, 31),
];

/// Two-line greeting roughly centred on a full 128×64 panel.
pub const HELLO_WORLD_LINES: [TextLine<'static>; 2] = [
    TextLine::new("Hello", 40, 16),
    TextLine::new("World!", 40, 32),
];

/// Glyphs drawn in the top-left, top-right, bottom-left and bottom-right
/// quadrants of the calibration pattern.
pub const QUADRANT_GLYPHS: [char; 4] = ['A', '0', '1', 'B'];

/// Something to show on the panel.
#[derive(Clone, Copy, Debug)]
pub enum Screen<'a> {
    /// Free-form text lines.
    Text(&'a [TextLine<'a>]),
    /// Nine reference points plus one glyph per quadrant; use this to
    /// verify the viewport offset on new hardware.
    Calibration,
    /// Window size and offset printed as text.
    Geometry(ViewportConfig),
    /// One page of the font showcase.
    Fonts(FontDemo),
}

/// Pages of the font showcase, sized for a 72×40 window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontDemo {
    /// `FONT_5X7` labels in a two-column grid.
    Titles,
    /// `FONT_6X10` text inside a one-pixel frame.
    Framed,
    /// `FONT_6X12` numerals and symbols.
    Numerals,
    /// Four framed quadrants labelled `A`–`D` and `Q1`–`Q4`.
    Quadrants,
    /// A digit and a letter in `FONT_10X20`, one per half.
    LargeGlyphs,
}

impl FontDemo {
    /// Every page, in display order.
    pub const ALL: [FontDemo; 5] = [
        FontDemo::Titles,
        FontDemo::Framed,
        FontDemo::Numerals,
        FontDemo::Quadrants,
        FontDemo::LargeGlyphs,
    ];
}

// ── Rendering ────────────────────────────────────────────────────────────

/// Render any [`Screen`].
pub fn render_screen<D>(display: &mut D, screen: &Screen<'_>) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    match screen {
        Screen::Text(lines) => render_text_lines(display, lines),
        Screen::Calibration => render_calibration(display),
        Screen::Geometry(viewport) => render_geometry(display, viewport),
        Screen::Fonts(page) => render_font_demo(display, *page),
    }
}

/// Draw each line with `FONT_6X10`, top-left anchored.
pub fn render_text_lines<D>(display: &mut D, lines: &[TextLine<'_>]) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
    for line in lines {
        Text::with_baseline(line.text, line.position, style, Baseline::Top).draw(display)?;
    }
    Ok(())
}

/// The nine calibration points of a `size` window: corners, edge
/// midpoints and centre.
pub fn calibration_points(size: Size) -> [Point; 9] {
    let right = size.width as i32 - 1;
    let bottom = size.height as i32 - 1;
    let mid_x = size.width as i32 / 2;
    let mid_y = size.height as i32 / 2;
    [
        Point::new(0, 0),
        Point::new(mid_x, 0),
        Point::new(right, 0),
        Point::new(0, mid_y),
        Point::new(mid_x, mid_y),
        Point::new(right, mid_y),
        Point::new(0, bottom),
        Point::new(mid_x, bottom),
        Point::new(right, bottom),
    ]
}

/// Top-left corner for a `glyph`-sized cell centred in each quadrant of a
/// `size` window, in [`QUADRANT_GLYPHS`] order.
pub fn quadrant_origins(size: Size, glyph: Size) -> [Point; 4] {
    let quad_w = size.width as i32 / 2;
    let quad_h = size.height as i32 / 2;
    let dx = (quad_w - glyph.width as i32) / 2;
    let dy = (quad_h - glyph.height as i32) / 2;
    [
        Point::new(dx, dy),
        Point::new(quad_w + dx, dy),
        Point::new(dx, quad_h + dy),
        Point::new(quad_w + dx, quad_h + dy),
    ]
}

/// Draw the calibration pattern over the target's whole bounding box.
pub fn render_calibration<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let size = display.bounding_box().size;

    display.draw_iter(
        calibration_points(size)
            .into_iter()
            .map(|point| Pixel(point, BinaryColor::On)),
    )?;

    let style = MonoTextStyle::new(&FONT_5X7, BinaryColor::On);
    let origins = quadrant_origins(size, FONT_5X7.character_size);
    for (glyph, origin) in QUADRANT_GLYPHS.iter().zip(origins) {
        let mut buf = [0u8; 4];
        let text = glyph.encode_utf8(&mut buf);
        Text::with_baseline(text, origin, style, Baseline::Top).draw(display)?;
    }
    Ok(())
}

/// `"<width>x<height>"`, e.g. `"72x40"`.
pub fn size_label(viewport: &ViewportConfig) -> String<24> {
    let mut buf = String::new();
    // Capacity covers two full-width u32s plus the separator.
    let _ = write!(buf, "{}x{}", viewport.width, viewport.height);
    buf
}

/// `"@<x>,<y>"`, e.g. `"@28,24"`.
pub fn offset_label(viewport: &ViewportConfig) -> String<24> {
    let mut buf = String::new();
    // Capacity covers two full-width i32s plus the sign, '@' and ','.
    let _ = write!(buf, "@{},{}", viewport.offset_x, viewport.offset_y);
    buf
}

/// Print the window size and offset, one per line.
pub fn render_geometry<D>(display: &mut D, viewport: &ViewportConfig) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let size = size_label(viewport);
    let offset = offset_label(viewport);
    render_text_lines(
        display,
        &[
            TextLine::new(size.as_str(), 0, 0),
            TextLine::new(offset.as_str(), 0, 12),
        ],
    )
}

/// Draw `text` with its baseline at `(x, y)`.
fn draw_on_baseline<D>(
    display: &mut D,
    text: &str,
    x: i32,
    y: i32,
    font: &MonoFont<'_>,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let style = MonoTextStyle::new(font, BinaryColor::On);
    Text::with_baseline(text, Point::new(x, y), style, Baseline::Alphabetic).draw(display)?;
    Ok(())
}

/// One-pixel outline of a `width` × `height` box at `(x, y)`.
fn draw_frame<D>(display: &mut D, x: i32, y: i32, width: u32, height: u32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Rectangle::new(Point::new(x, y), Size::new(width, height))
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(display)
}

/// Draw one page of the font showcase.
///
/// Quadrant positions are derived from the target's bounding box; the
/// text positions assume a window of at least 72×40.
pub fn render_font_demo<D>(display: &mut D, page: FontDemo) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let size = display.bounding_box().size;
    let quad_w = size.width as i32 / 2;
    let quad_h = size.height as i32 / 2;

    match page {
        FontDemo::Titles => {
            for (text, x, y) in [
                ("0.42in", 0, 7),
                ("mono", 0, 18),
                ("72x40", 36, 7),
                ("fonts", 36, 18),
                ("0-9 A-Z", 0, 29),
                ("!?.,:", 36, 29),
            ] {
                draw_on_baseline(display, text, x, y, &FONT_5X7)?;
            }
        }
        FontDemo::Framed => {
            for (text, x, y) in [("Mono 6x10", 2, 10), ("Hello!", 2, 24), ("123 45.6", 2, 36)] {
                draw_on_baseline(display, text, x, y, &FONT_6X10)?;
            }
            draw_frame(display, 0, 0, 70, 38)?;
        }
        FontDemo::Numerals => {
            for (text, x, y) in [
                ("Numbers:", 4, 12),
                ("0 1 2 3 4 5", 4, 26),
                ("6 7 8 9 + -", 4, 36),
            ] {
                draw_on_baseline(display, text, x, y, &FONT_6X12)?;
            }
            draw_on_baseline(display, "demo", 52, 12, &FONT_5X7)?;
        }
        FontDemo::Quadrants => {
            let origins = [(0, 0), (quad_w, 0), (0, quad_h), (quad_w, quad_h)];
            let letters = ["A", "B", "C", "D"];
            let labels = ["Q1", "Q2", "Q3", "Q4"];
            let frame_w = (quad_w - 2).max(0) as u32;
            let frame_h = (quad_h - 2).max(0) as u32;
            for ((x, y), (letter, label)) in origins.into_iter().zip(letters.into_iter().zip(labels)) {
                draw_on_baseline(display, letter, x + 4, y + 7, &FONT_5X7)?;
                draw_on_baseline(display, label, x + 2, y + 18, &FONT_6X10)?;
                draw_frame(display, x, y, frame_w, frame_h)?;
            }
        }
        FontDemo::LargeGlyphs => {
            let glyph = FONT_10X20.character_size;
            let dx = (quad_w - glyph.width as i32) / 2;
            let top = (size.height as i32 - glyph.height as i32) / 2;
            let style = MonoTextStyle::new(&FONT_10X20, BinaryColor::On);
            Text::with_baseline("8", Point::new(dx, top), style, Baseline::Top).draw(display)?;
            Text::with_baseline("A", Point::new(quad_w + dx, top), style, Baseline::Top)
                .draw(display)?;
        }
    }
    Ok(())
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::PageBuffer;
    use crate::viewport::Viewport;

    #[test]
    fn calibration_points_for_0_42_window() {
        let points = calibration_points(Size::new(72, 40));
        assert_eq!(points[0], Point::new(0, 0));
        assert_eq!(points[1], Point::new(36, 0));
        assert_eq!(points[2], Point::new(71, 0));
        assert_eq!(points[4], Point::new(36, 20));
        assert_eq!(points[8], Point::new(71, 39));
    }

    #[test]
    fn quadrant_origins_centre_the_glyph() {
        // 36×20 quadrants, 5×7 glyph → (15, 6) inside each quadrant.
        let origins = quadrant_origins(Size::new(72, 40), Size::new(5, 7));
        assert_eq!(
            origins,
            [
                Point::new(15, 6),
                Point::new(51, 6),
                Point::new(15, 26),
                Point::new(51, 26),
            ]
        );
    }

    #[test]
    fn calibration_lands_inside_offset_window() {
        let mut fb = PageBuffer::new();
        {
            let mut vp = Viewport::new(&mut fb, &ViewportConfig::PANEL_0_42);
            render_calibration(&mut vp).unwrap();
        }
        // Corners of the visible window in panel coordinates.
        assert_eq!(fb.pixel(28, 24), Some(true));
        assert_eq!(fb.pixel(99, 24), Some(true));
        assert_eq!(fb.pixel(28, 63), Some(true));
        assert_eq!(fb.pixel(99, 63), Some(true));
        assert_eq!(fb.pixel(64, 44), Some(true));

        // Nothing outside the window.
        for y in 0..64 {
            for x in 0..128 {
                let inside = (28..100).contains(&x) && (24..64).contains(&y);
                if !inside {
                    assert_eq!(fb.pixel(x, y), Some(false), "stray pixel at ({x}, {y})");
                }
            }
        }
        // Nine points plus four glyphs.
        assert!(fb.lit_pixels() > 9);
    }

    #[test]
    fn text_lines_are_clipped_to_window() {
        let mut fb = PageBuffer::new();
        {
            let mut vp = Viewport::new(&mut fb, &ViewportConfig::PANEL_0_42);
            render_text_lines(&mut vp, &OFFSET_TEST_LINES).unwrap();
        }
        assert!(fb.lit_pixels() > 0);
        for y in 0..24 {
            for x in 0..128 {
                assert_eq!(fb.pixel(x, y), Some(false));
            }
        }
        for y in 24..64 {
            for x in (0..28).chain(100..128) {
                assert_eq!(fb.pixel(x, y), Some(false));
            }
        }
    }

    #[test]
    fn offset_text_reaches_bottom_row_of_window() {
        let mut fb = PageBuffer::new();
        {
            let mut vp = Viewport::new(&mut fb, &ViewportConfig::PANEL_0_42);
            render_text_lines(&mut vp, &OFFSET_TEST_LINES[3..]).unwrap();
        }
        // Underscores of "M_._,_._._" land on panel row 63 (window row 39).
        let bottom: Vec<i32> = (28..100).filter(|&x| fb.pixel(x, 63) == Some(true)).collect();
        assert!(bottom.len() >= 4 * 5, "bottom row: {bottom:?}");
        // First `_` is the second glyph cell: columns 6..11 of the window.
        assert!((34..39).all(|x| fb.pixel(x, 63) == Some(true)));
    }

    #[test]
    fn hello_world_draws_on_full_panel() {
        let mut fb = PageBuffer::new();
        render_screen(&mut fb, &Screen::Text(&HELLO_WORLD_LINES)).unwrap();
        // Text starts at x = 40; nothing left of it.
        for y in 0..64 {
            for x in 0..40 {
                assert_eq!(fb.pixel(x, y), Some(false));
            }
        }
        assert!(fb.lit_pixels() > 0);
    }

    #[test]
    fn empty_text_screen_draws_nothing() {
        let mut fb = PageBuffer::new();
        render_screen(&mut fb, &Screen::Text(&[])).unwrap();
        assert_eq!(fb.lit_pixels(), 0);
    }

    #[test]
    fn geometry_labels() {
        let vp = ViewportConfig::PANEL_0_42;
        assert_eq!(size_label(&vp).as_str(), "72x40");
        assert_eq!(offset_label(&vp).as_str(), "@28,24");

        let negative = ViewportConfig {
            offset_x: -2147483648,
            offset_y: -2147483648,
            ..vp
        };
        assert_eq!(
            offset_label(&negative).as_str(),
            "@-2147483648,-2147483648"
        );
    }

    #[test]
    fn geometry_screen_renders() {
        let mut fb = PageBuffer::new();
        render_screen(&mut fb, &Screen::Geometry(ViewportConfig::PANEL_0_42)).unwrap();
        assert!(fb.lit_pixels() > 0);
    }

    fn render_in_window(page: FontDemo) -> PageBuffer {
        let mut fb = PageBuffer::new();
        {
            let mut vp = Viewport::new(&mut fb, &ViewportConfig::PANEL_0_42);
            render_screen(&mut vp, &Screen::Fonts(page)).unwrap();
        }
        fb
    }

    #[test]
    fn font_pages_stay_inside_window() {
        let area = ViewportConfig::PANEL_0_42.area();
        for page in FontDemo::ALL {
            let fb = render_in_window(page);
            assert!(fb.lit_pixels() > 0, "{page:?} drew nothing");
            for y in 0..64 {
                for x in 0..128 {
                    if fb.pixel(x, y) == Some(true) {
                        assert!(area.contains(Point::new(x, y)), "{page:?} stray at ({x}, {y})");
                    }
                }
            }
        }
    }

    #[test]
    fn framed_page_outlines_window() {
        let fb = render_in_window(FontDemo::Framed);
        // 70×38 frame at window (0, 0) → panel (28, 24)..=(97, 61).
        for (x, y) in [(28, 24), (97, 24), (28, 61), (97, 61), (60, 24), (28, 40)] {
            assert_eq!(fb.pixel(x, y), Some(true), "frame missing at ({x}, {y})");
        }
        assert_eq!(fb.pixel(98, 24), Some(false));
        assert_eq!(fb.pixel(28, 62), Some(false));
    }

    #[test]
    fn quadrant_page_frames_each_quadrant() {
        let fb = render_in_window(FontDemo::Quadrants);
        // 34×18 frames at window (0,0), (36,0), (0,20), (36,20).
        for (x, y) in [(0, 0), (36, 0), (0, 20), (36, 20)] {
            let (px, py) = (28 + x, 24 + y);
            assert_eq!(fb.pixel(px, py), Some(true));
            assert_eq!(fb.pixel(px + 33, py + 17), Some(true));
            // Gap between neighbouring frames.
            assert_eq!(fb.pixel(px + 34, py + 5), Some(false));
        }
    }

    #[test]
    fn large_glyphs_fill_both_halves() {
        let fb = render_in_window(FontDemo::LargeGlyphs);
        let lit_in = |x0: i32, x1: i32| {
            (x0..x1)
                .flat_map(|x| (24..64).map(move |y| (x, y)))
                .filter(|&(x, y)| fb.pixel(x, y) == Some(true))
                .count()
        };
        // Left half holds the digit, right half the letter.
        assert!(lit_in(28, 64) > 20);
        assert!(lit_in(64, 100) > 20);
        // 20-px glyphs centred vertically: rows 10..30 of the window.
        for x in 28..100 {
            for y in (24..34).chain(54..64) {
                assert_eq!(fb.pixel(x, y), Some(false), "outside glyph cell at ({x}, {y})");
            }
        }
    }
}
