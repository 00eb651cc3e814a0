//! Bouncy: a few translucent squares bouncing around the terminal.
//!
//! Demonstrates:
//! - Engine + TickerActor event loop with `select!`
//! - Translucent rects blended over a gradient
//! - Anchored bitmap text
//!
//! Press `q`, Esc or Ctrl+C to exit.

use crossbeam_channel::select;
use halfblock::{
    Anchor, Direction, Engine, Font, Frame, InputEvent, RectStyle, Rgb, Rgba, TickerActor,
};
use std::time::Duration;

struct Ball {
    x: f32,
    y: f32,
    dx: f32,
    dy: f32,
    size: u32,
    color: Rgba,
}

impl Ball {
    fn step(&mut self, width: u32, height: u32) {
        self.x += self.dx;
        self.y += self.dy;

        let max_x = width.saturating_sub(self.size) as f32;
        let max_y = height.saturating_sub(self.size) as f32;
        if self.x <= 0.0 || self.x >= max_x {
            self.dx = -self.dx;
            self.x = self.x.clamp(0.0, max_x);
        }
        if self.y <= 0.0 || self.y >= max_y {
            self.dy = -self.dy;
            self.y = self.y.clamp(0.0, max_y);
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut engine = Engine::new()?;
    let ticker = TickerActor::spawn(Duration::from_millis(33))?;
    let font = Font::builtin();

    let mut balls = vec![
        Ball { x: 2.0, y: 3.0, dx: 1.0, dy: 0.6, size: 8, color: Rgb::new(255, 80, 80).with_alpha(180) },
        Ball { x: 20.0, y: 10.0, dx: -0.7, dy: 0.9, size: 12, color: Rgb::new(80, 255, 120).with_alpha(140) },
        Ball { x: 40.0, y: 6.0, dx: 0.8, dy: -0.5, size: 6, color: Rgb::new(90, 140, 255).with_alpha(220) },
    ];

    while engine.is_running() {
        select! {
            recv(engine.input_receiver()) -> result => {
                let Ok(event) = result else { break };
                if event.is_quit() || event == InputEvent::Shutdown {
                    engine.stop();
                } else if let InputEvent::Resize { width, height } = event {
                    engine.handle_resize(width, height);
                }
            }
            recv(ticker.receiver()) -> result => {
                let Ok(tick) = result else { break };
                let mut frame = engine.new_frame();
                let (width, height) = (frame.width(), frame.height());
                for ball in &mut balls {
                    ball.step(width, height);
                }
                draw(&mut frame, &font, &balls, tick.frame)?;
                engine.present(frame);
            }
        }
    }

    ticker.join();
    Ok(())
}

fn draw(frame: &mut Frame, font: &Font, balls: &[Ball], tick: u64) -> halfblock::Result<()> {
    // Background hue drifts back and forth every 128 ticks
    let phase = (tick % 128) as i32;
    let shift = (64 - (phase - 64).abs()) as u8;
    frame.fill_with_gradient(
        Rgb::new(10, 10, 40 + shift),
        Rgb::new(40 + shift, 10, 30),
        Direction::Vertical,
    );

    let outline = RectStyle::default().with_outline(1, Rgb::WHITE.with_alpha(96));
    for ball in balls {
        frame.add_rect(ball.color, ball.x as i32, ball.y as i32, ball.size, ball.size, outline)?;
    }

    let label = format!("tick {tick}");
    let (w, h) = (frame.width() as i32, frame.height() as i32);
    frame.add_large_text(w - 1, h - 1, font, &label, Anchor::BottomRight, Rgb::new(200, 200, 200))?;
    Ok(())
}
