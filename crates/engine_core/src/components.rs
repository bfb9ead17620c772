//! Small value types shared across the engine.

/// An sRGB colour stored as 8-bit channels, as authored in palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Fixed lifetime for temporary entities, measured in simulation time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lifetime {
    pub spawn_time: f32,
    pub timeout: f32,
}

impl Lifetime {
    pub fn new(spawn_time: f32, timeout: f32) -> Self {
        Self { spawn_time, timeout }
    }

    pub fn age(&self, now: f32) -> f32 {
        now - self.spawn_time
    }

    /// True once the age strictly exceeds the timeout.
    pub fn is_expired(&self, now: f32) -> bool {
        self.age(now) > self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifetime_expires_strictly_after_timeout() {
        let life = Lifetime::new(2.0, 5.0);
        assert!(!life.is_expired(6.0));
        assert!(!life.is_expired(7.0));
        assert!(life.is_expired(7.01));
    }
}
