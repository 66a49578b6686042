use crate::geometry::polygon::Polygon;
use crate::renderer::Renderer;
use crate::utils::math::Vec2MathUtils;
use anyhow::Result;
use glam::Vec2;
use glam::Vec4;

const BULLET_SIDES: u32 = 16;

/// Directions held during the current step.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PlayerControls {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bullet {
    pub position: Vec2,
    pub speed: f32,
    pub angle: f32,
    pub radius: f32,
}

/// Square that slides with accumulated velocity and shoots bullets towards the pointer.
#[derive(Debug)]
pub struct Player {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: f32,
    pub size: Vec2,
    pub aim_length: f32,
    pub bullet_speed: f32,
    pub bullet_radius: f32,
    pub bullets: Vec<Bullet>,

    aim: Vec2,
}

impl Bullet {
    pub fn update(&mut self) {
        self.position += Vec2::from_angle(self.angle) * self.speed;
    }

    pub fn is_inside(&self, viewport_size: Vec2) -> bool {
        self.position.x > 0.0 && self.position.x < viewport_size.x && self.position.y > 0.0 && self.position.y < viewport_size.y
    }
}

impl Player {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            acceleration: 5.0,
            size: Vec2::new(40.0, 40.0),
            aim_length: 50.0,
            bullet_speed: 10.0,
            bullet_radius: 15.0,
            bullets: Vec::new(),

            aim: position,
        }
    }

    /// End of the aim line, recomputed on every update.
    pub fn aim(&self) -> Vec2 {
        self.aim
    }

    pub fn update(&mut self, controls: PlayerControls, pointer: Vec2, delta: f32, viewport_size: Vec2) {
        if controls.right {
            self.velocity.x += self.acceleration;
        }
        if controls.left {
            self.velocity.x -= self.acceleration;
        }
        if controls.up {
            self.velocity.y -= self.acceleration;
        }
        if controls.down {
            self.velocity.y += self.acceleration;
        }

        self.position += self.velocity * delta;
        self.aim = self.position.with_length_towards(pointer, self.aim_length);

        if controls.fire {
            self.bullets.push(Bullet {
                position: self.position,
                speed: self.bullet_speed,
                angle: self.position.angle_to(self.aim),
                radius: self.bullet_radius,
            });
        }

        self.bullets.retain(|p| p.is_inside(viewport_size));
        for bullet in &mut self.bullets {
            bullet.update();
        }
    }

    pub fn outline(&self) -> Result<Polygon> {
        let half = self.size / 2.0;
        let p = self.position;

        Polygon::new(vec![
            Vec2::new(p.x - half.x, p.y - half.y),
            Vec2::new(p.x + half.x, p.y - half.y),
            Vec2::new(p.x + half.x, p.y + half.y),
            Vec2::new(p.x - half.x, p.y + half.y),
        ])
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) -> Result<()> {
        let black = Vec4::new(0.0, 0.0, 0.0, 1.0);
        let blue = Vec4::new(0.0, 0.0, 1.0, 1.0);

        for bullet in &self.bullets {
            let shape = Polygon::new_regular(bullet.position, bullet.radius, BULLET_SIDES)?;
            renderer.draw_polygon(shape.vertices(), blue, blue);
        }

        renderer.draw_polygon(self.outline()?.vertices(), black, black);
        renderer.draw_line(self.position, self.aim, blue);

        Ok(())
    }
}
