use crate::geometry::polygon::Polygon;
use crate::renderer::Renderer;
use crate::utils::color::Vec4Color;
use anyhow::Result;
use fastrand::Rng;
use glam::Vec2;
use glam::Vec4;
use log::debug;
use std::collections::VecDeque;

const CIRCLE_SIDES: u32 = 48;

/// One rotating arm of the epicycle chain.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
    pub rotation: f32,
    pub color: Vec4,
}

/// Chain of circles, each one attached to the tip of the previous one, tracing a wave from the tip of the last arm.
#[derive(Debug)]
pub struct CircleArms {
    pub circles: Vec<Circle>,
    pub wave: VecDeque<Vec2>,
    pub wave_start_x: f32,
    pub wave_end_x: f32,
    pub speed: f32,
}

impl Circle {
    pub fn end_point(&self) -> Vec2 {
        self.center + Vec2::from_angle(self.rotation) * self.radius
    }
}

impl CircleArms {
    /// First circle of `radius` at `anchor`, every next one half the size of the previous.
    pub fn new(arms: u32, radius: f32, anchor: Vec2, seed: u64) -> Self {
        let mut rng = Rng::with_seed(seed);
        let mut circles: Vec<Circle> = Vec::with_capacity(arms as usize);

        for i in 0..arms {
            let (center, radius) = match circles.last() {
                Some(last) => (last.end_point(), last.radius / 2.0),
                None => (anchor, radius),
            };
            let color = Vec4::new_hsl(rng.f32() * 360.0, 80.0, 60.0);

            circles.push(Circle { center, radius, rotation: 0.0, color });
            debug!("Arm {} created with radius {:.1}", i, radius);
        }

        Self { circles, wave: VecDeque::new(), wave_start_x: anchor.x + radius * 2.0, wave_end_x: f32::MAX, speed: 20.0 }
    }

    pub fn tip(&self) -> Option<Vec2> {
        self.circles.last().map(|p| p.end_point())
    }

    /// Rotates every arm, re-attaches the followers and scrolls the traced wave.
    pub fn update(&mut self, delta: f32) {
        let mut angular_speed = 1.0f32;

        for i in 0..self.circles.len() {
            if i > 0 {
                self.circles[i].center = self.circles[i - 1].end_point();
            }

            self.circles[i].rotation += f32::sin(angular_speed * delta);
            angular_speed += 20.0;
        }

        let tip = match self.tip() {
            Some(tip) => tip,
            None => return,
        };

        self.wave.push_back(Vec2::new(self.wave_start_x, tip.y));
        for point in &mut self.wave {
            point.x += self.speed * delta;
        }

        let wave_end_x = self.wave_end_x;
        self.wave.retain(|p| p.x < wave_end_x);
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) -> Result<()> {
        for circle in &self.circles {
            let outline = Polygon::new_regular(circle.center, circle.radius, CIRCLE_SIDES)?;

            renderer.draw_polygon(outline.vertices(), Vec4::ZERO, circle.color);
            renderer.draw_line(circle.center, circle.end_point(), circle.color);
        }

        if let (Some(tip), Some(last)) = (self.tip(), self.circles.last()) {
            renderer.draw_line(tip, Vec2::new(self.wave_start_x, tip.y), last.color);

            for (from, to) in self.wave.iter().zip(self.wave.iter().skip(1)) {
                renderer.draw_line(*from, *to, last.color);
            }
        }

        Ok(())
    }
}
