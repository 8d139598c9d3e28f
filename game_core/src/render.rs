//! Draw commands emitted by the frame step
//!
//! The core never touches a real canvas. Each frame is recorded into a
//! [`DrawList`], which a host replays onto whatever [`Surface`] it owns.

use crate::components::{Ball, Paddle};
use crate::map::{Aabb, GameMap};
use crate::params::Params;
use crate::resources::Score;
use hecs::World;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    LightGrey,
}

impl Color {
    /// CSS color name
    pub fn css(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::LightGrey => "lightgrey",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    FillRect {
        rect: Aabb,
        color: Color,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        font: String,
        color: Color,
    },
}

/// Anything the game can be drawn onto
pub trait Surface {
    fn clear(&mut self);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: Color);
}

/// One frame's worth of recorded draw commands
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all recorded commands
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Play the recorded commands onto a real surface, in order
    pub fn replay<S: Surface + ?Sized>(&self, surface: &mut S) {
        for command in &self.commands {
            match command {
                DrawCommand::Clear => surface.clear(),
                DrawCommand::FillRect { rect, color } => {
                    let size = rect.size();
                    surface.fill_rect(rect.min.x, rect.min.y, size.x, size.y, *color);
                }
                DrawCommand::Text {
                    text,
                    x,
                    y,
                    font,
                    color,
                } => surface.fill_text(text, *x, *y, font, *color),
            }
        }
    }
}

impl Surface for DrawList {
    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            rect: Aabb::from_corner_size(glam::Vec2::new(x, y), glam::Vec2::new(w, h)),
            color,
        });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            font: font.to_string(),
            color,
        });
    }
}

fn fill_aabb<S: Surface + ?Sized>(surface: &mut S, rect: &Aabb, color: Color) {
    let size = rect.size();
    surface.fill_rect(rect.min.x, rect.min.y, size.x, size.y, color);
}

/// Draw both paddles, left first
pub fn draw_paddles<S: Surface + ?Sized>(world: &World, surface: &mut S) {
    let mut paddles: Vec<Paddle> = world.query::<&Paddle>().iter().map(|(_e, p)| *p).collect();
    paddles.sort_by_key(|p| p.side as u8);
    for paddle in paddles {
        fill_aabb(surface, &paddle.bounds(), Color::White);
    }
}

pub fn draw_ball<S: Surface + ?Sized>(world: &World, surface: &mut S) {
    for (_e, ball) in world.query::<&Ball>().iter() {
        fill_aabb(surface, &ball.bounds(), Color::White);
    }
}

pub fn draw_scores<S: Surface + ?Sized>(score: &Score, surface: &mut S) {
    let (lx, ly) = Params::LEFT_SCORE_POS;
    let (rx, ry) = Params::RIGHT_SCORE_POS;
    surface.fill_text(&score.left.to_string(), lx, ly, Params::SCORE_FONT, Color::White);
    surface.fill_text(&score.right.to_string(), rx, ry, Params::SCORE_FONT, Color::White);
}

/// Walls and the dashed center line
pub fn draw_field<S: Surface + ?Sized>(map: &GameMap, surface: &mut S) {
    fill_aabb(surface, &map.top_wall(), Color::LightGrey);
    fill_aabb(surface, &map.bottom_wall(), Color::LightGrey);
    for dash in map.center_line() {
        fill_aabb(surface, &dash, Color::LightGrey);
    }
}
