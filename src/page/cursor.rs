//! Decorative pointer follower and drifting hero shapes.
//!
//! - Dot: chases the pointer quickly (90% of the gap per frame)
//! - Ring: trails lazily (10% of the gap per frame)
//! - Floating items: slow sine drift inside the hero, one period per item
//!
//! Both are desktop-only; touch devices and narrow viewports hide them.

use std::f32::consts::TAU;

pub const DOT_EASE: f32 = 0.9;
pub const RING_EASE: f32 = 0.1;
/// Half-size of the dot, subtracted so it centers on the pointer
pub const DOT_RADIUS: f32 = 5.0;
pub const RING_RADIUS: f32 = 20.0;

/// Whether decorative pointer effects should run at all.
pub fn effects_enabled(touch_capable: bool, width: f32, breakpoint: f32) -> bool {
    !touch_capable && width > breakpoint
}

#[derive(Debug, Clone, Default)]
pub struct CursorTrail {
    pointer: [f32; 2],
    dot: [f32; 2],
    ring: [f32; 2],
    /// Pointer is over a link, button or card
    pub hovering_link: bool,
}

impl CursorTrail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer = [x, y];
    }

    /// Advance one animation frame.
    pub fn step(&mut self) {
        for axis in 0..2 {
            self.dot[axis] += (self.pointer[axis] - self.dot[axis]) * DOT_EASE;
            self.ring[axis] += (self.pointer[axis] - self.ring[axis]) * RING_EASE;
        }
    }

    pub fn dot_center(&self) -> [f32; 2] {
        self.dot
    }

    pub fn ring_center(&self) -> [f32; 2] {
        self.ring
    }
}

/// Default drift speed when an item has none
pub const DEFAULT_FLOAT_SPEED: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingItem {
    pub speed: f32,
}

/// Set of hero shapes drifting inside 10%..90% of their container.
#[derive(Debug, Clone)]
pub struct FloatingField {
    items: Vec<FloatingItem>,
}

impl FloatingField {
    pub fn new(speeds: &[Option<f32>]) -> Self {
        let items = speeds
            .iter()
            .map(|s| FloatingItem {
                speed: s.filter(|v| *v > 0.0).unwrap_or(DEFAULT_FLOAT_SPEED),
            })
            .collect();
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drift period of item `index`: `(3000 + index * 500) / speed` ms.
    pub fn period_ms(&self, index: usize) -> f32 {
        let speed = self.items.get(index).map_or(DEFAULT_FLOAT_SPEED, |i| i.speed);
        (3000.0 + index as f32 * 500.0) / speed
    }

    /// Position of item `index` in percent of the container, each axis in
    /// 10..=90.
    pub fn position(&self, index: usize, now_ms: u64) -> [f32; 2] {
        let phase = (now_ms as f32 / self.period_ms(index)) * TAU;
        let seed = index as f32;
        let x = 50.0 + 40.0 * (phase + seed * 1.7).sin();
        let y = 50.0 + 40.0 * (phase * 0.8 + seed * 2.3).cos();
        [x, y]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_leads_ring() {
        let mut c = CursorTrail::new();
        c.pointer_moved(100.0, 50.0);
        c.step();
        assert!((c.dot_center()[0] - 90.0).abs() < 1e-4);
        assert!((c.ring_center()[0] - 10.0).abs() < 1e-4);
        assert!((c.dot_center()[1] - 45.0).abs() < 1e-4);
        for _ in 0..200 {
            c.step();
        }
        assert!((c.ring_center()[0] - 100.0).abs() < 0.01);
        assert!((c.dot_center()[0] - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_effects_disabled_on_touch_or_narrow() {
        assert!(effects_enabled(false, 1280.0, 768.0));
        assert!(!effects_enabled(true, 1280.0, 768.0));
        assert!(!effects_enabled(false, 768.0, 768.0));
    }

    #[test]
    fn test_floating_stays_in_bounds() {
        let field = FloatingField::new(&[None, Some(1.0), Some(-2.0)]);
        assert_eq!(field.len(), 3);
        assert!((field.period_ms(0) - 6_000.0).abs() < 1e-3);
        assert!((field.period_ms(1) - 3_500.0).abs() < 1e-3);
        for t in (0..60_000).step_by(250) {
            for i in 0..field.len() {
                let [x, y] = field.position(i, t);
                assert!((10.0..=90.0).contains(&x));
                assert!((10.0..=90.0).contains(&y));
            }
        }
    }
}
