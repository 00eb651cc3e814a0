//! View an image inline; each image pixel becomes one half cell.
//!
//! Usage: `cargo run --example view_image -- <path> [caption]`
//!
//! The image is centered in a frame that fills the terminal (minus the
//! prompt line), with an optional caption in the bitmap font underneath.

use anyhow::Context;
use halfblock::{
    text_style, Anchor, CursorGuard, Font, Frame, Modifiers, Rgb, StdTerminal, Terminal,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = args.next().context("usage: view_image <path> [caption]")?;
    let caption = args.next();

    let mut term = StdTerminal::stdout();
    let (_, rows) = term.size().context("terminal size unavailable")?;
    let mut frame = Frame::builder()
        .height(2 * u32::from(rows.saturating_sub(1)))
        .build(&term)?;

    frame.fill(Rgb::new(24, 24, 24));
    let (w, h) = (frame.width() as i32, frame.height() as i32);
    frame
        .add_image_from_path(&path, w / 2, h / 2, Anchor::Center)
        .with_context(|| format!("can't show {path}"))?;

    if let Some(caption) = caption {
        let font = Font::builtin();
        if font.supports(&caption) {
            frame.add_large_text(w / 2, h - 2, &font, &caption, Anchor::Bottom, Rgb::WHITE)?;
        } else {
            log::warn!("caption has characters the builtin font lacks, skipping it");
        }
    }

    {
        let mut guard = CursorGuard::new(&mut term)?;
        let stats = frame.render(None, &mut *guard)?;
        log::info!("{} cells in {} bytes", stats.cells, stats.bytes);
    }

    let status = text_style(None, None, Modifiers::DIM.into());
    term.write_all(format!("\r\n{status}{path}\x1b[0m\r\n").as_bytes())?;
    Ok(())
}
