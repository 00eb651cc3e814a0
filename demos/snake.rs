//! Snake: the classic game on a pixel grid.
//!
//! Each game cell is a 2×2 pixel block, so it covers exactly one terminal
//! column and one row. Arrow keys or WASD steer; `q`, Esc or Ctrl+C quits.

use crossbeam_channel::select;
use halfblock::{
    Anchor, Engine, Font, Frame, InputEvent, KeyCode, RectStyle, Rgb, TickerActor,
};
use std::collections::VecDeque;
use std::time::Duration;

const CELL: u32 = 2;
const BACKGROUND: Rgb = Rgb::new(12, 16, 12);
const SNAKE: Rgb = Rgb::new(90, 220, 90);
const HEAD: Rgb = Rgb::new(200, 255, 200);
const FOOD: Rgb = Rgb::new(240, 60, 60);

#[derive(Clone, Copy, PartialEq, Eq)]
enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

struct Game {
    cols: i32,
    rows: i32,
    body: VecDeque<(i32, i32)>,
    heading: Heading,
    next_heading: Heading,
    food: (i32, i32),
    rng: u64,
    over: bool,
}

impl Game {
    fn new(cols: i32, rows: i32) -> Self {
        let start = (cols / 2, rows / 2);
        let mut game = Self {
            cols,
            rows,
            body: VecDeque::from([start, (start.0 - 1, start.1), (start.0 - 2, start.1)]),
            heading: Heading::Right,
            next_heading: Heading::Right,
            food: (0, 0),
            rng: 0x2545_f491_4f6c_dd1d,
            over: false,
        };
        game.place_food();
        game
    }

    fn random(&mut self, bound: i32) -> i32 {
        // xorshift64
        self.rng ^= self.rng << 13;
        self.rng ^= self.rng >> 7;
        self.rng ^= self.rng << 17;
        (self.rng % bound.max(1) as u64) as i32
    }

    fn place_food(&mut self) {
        loop {
            let food = (self.random(self.cols), self.random(self.rows));
            if !self.body.contains(&food) {
                self.food = food;
                return;
            }
        }
    }

    fn steer(&mut self, heading: Heading) {
        if heading != self.heading.opposite() {
            self.next_heading = heading;
        }
    }

    fn step(&mut self) {
        if self.over {
            return;
        }
        self.heading = self.next_heading;
        let (dx, dy) = self.heading.delta();
        let Some(&(hx, hy)) = self.body.front() else {
            return;
        };
        let head = (hx + dx, hy + dy);

        let outside = head.0 < 0 || head.1 < 0 || head.0 >= self.cols || head.1 >= self.rows;
        if outside || self.body.contains(&head) {
            self.over = true;
            return;
        }

        self.body.push_front(head);
        if head == self.food {
            self.place_food();
        } else {
            self.body.pop_back();
        }
    }

    fn draw(&self, frame: &mut Frame, font: &Font) -> halfblock::Result<()> {
        frame.fill(BACKGROUND);
        let block = |(x, y): (i32, i32)| (x * CELL as i32, y * CELL as i32);

        let (fx, fy) = block(self.food);
        frame.add_rect(FOOD, fx, fy, CELL, CELL, RectStyle::default())?;
        for (i, &segment) in self.body.iter().enumerate() {
            let (x, y) = block(segment);
            let color = if i == 0 { HEAD } else { SNAKE };
            for (dx, dy) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
                frame.set_pixel((x + dx) as u32, (y + dy) as u32, color);
            }
        }

        // Dim the score while the snake passes underneath it
        let score = format!("{}", self.body.len() - 3);
        let alpha = match frame.pixel(1, 1) {
            Some(BACKGROUND) | None => 160,
            Some(_) => 64,
        };
        frame.add_large_text(1, 1, font, &score, Anchor::TopLeft, Rgb::WHITE.with_alpha(alpha))?;

        if self.over {
            let (w, h) = (frame.width() as i32, frame.height() as i32);
            frame.add_large_text(w / 2, h / 2, font, "GAME OVER", Anchor::Center, FOOD)?;
        }
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut engine = Engine::new()?;
    let ticker = TickerActor::spawn(Duration::from_millis(90))?;
    let font = Font::builtin();
    let mut game = Game::new(i32::from(engine.width()), i32::from(engine.height()));

    while engine.is_running() {
        select! {
            recv(engine.input_receiver()) -> result => {
                let Ok(event) = result else { break };
                match event {
                    event if event.is_quit() => engine.stop(),
                    InputEvent::Key { code, .. } => match code {
                        KeyCode::Up | KeyCode::Char('w') => game.steer(Heading::Up),
                        KeyCode::Down | KeyCode::Char('s') => game.steer(Heading::Down),
                        KeyCode::Left | KeyCode::Char('a') => game.steer(Heading::Left),
                        KeyCode::Right | KeyCode::Char('d') => game.steer(Heading::Right),
                        KeyCode::Enter if game.over => {
                            game = Game::new(i32::from(engine.width()), i32::from(engine.height()));
                        }
                        _ => {}
                    },
                    InputEvent::Resize { width, height } => {
                        engine.handle_resize(width, height);
                        game = Game::new(i32::from(width), i32::from(height));
                    }
                    InputEvent::Shutdown => engine.stop(),
                    _ => {}
                }
            }
            recv(ticker.receiver()) -> result => {
                if result.is_err() {
                    break;
                }
                game.step();
                let mut frame = engine.new_frame();
                game.draw(&mut frame, &font)?;
                engine.present(frame);
            }
        }
    }

    ticker.join();
    Ok(())
}
