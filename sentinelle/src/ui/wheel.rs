//! # Fortune Wheel
//!
//! Painter-based wheel with a timed ease-out spin animation.
//!
//! The wheel performs no probability computation: the backend decides the
//! outcome and the client only rotates the disc so the pointer lands on the
//! segment matching that outcome. The pointer sits at the top; wheel angles
//! grow clockwise from it.

use std::f32::consts::TAU;

use egui::{Align2, Color32, FontId, Painter, Pos2, Shape, Stroke};
use shared::Prize;

/// Number of full turns added in front of the landing offset.
const SPIN_TURNS: f32 = 4.0;
/// Animation length in seconds.
const SPIN_DURATION: f32 = 4.2;
/// Points used to approximate one segment arc.
const ARC_STEPS: usize = 24;

/// One slice of the wheel. `prize_id` is `None` for a losing slice.
#[derive(Debug, Clone)]
pub struct WheelSegment {
    pub label: String,
    pub prize_id: Option<String>,
    pub color: Color32,
}

struct SpinAnimation {
    from: f32,
    to: f32,
    elapsed: f32,
    duration: f32,
}

/// Wheel renderer and animation state.
pub struct FortuneWheel {
    pub segments: Vec<WheelSegment>,
    rotation: f32,
    animation: Option<SpinAnimation>,
}

impl Default for FortuneWheel {
    fn default() -> Self {
        FortuneWheel {
            segments: Vec::new(),
            rotation: 0.0,
            animation: None,
        }
    }
}

impl FortuneWheel {
    /// Build the segment layout from the prize catalogue: each in-stock
    /// active prize gets a slice, interleaved with losing slices so two
    /// prizes never touch.
    pub fn from_prizes(prizes: &[Prize], palette: &[Color32], lose_color: Color32) -> Self {
        let mut segments = Vec::new();
        for (i, prize) in prizes
            .iter()
            .filter(|p| p.is_active && p.stock > 0)
            .enumerate()
        {
            let color = if palette.is_empty() {
                lose_color
            } else {
                palette[i % palette.len()]
            };
            segments.push(WheelSegment {
                label: prize.name.clone(),
                prize_id: Some(prize.id.clone()),
                color,
            });
            segments.push(WheelSegment {
                label: "Try again".to_string(),
                prize_id: None,
                color: lose_color,
            });
        }
        if segments.is_empty() {
            // No catalogue yet: render a neutral two-slice disc.
            for _ in 0..2 {
                segments.push(WheelSegment {
                    label: "Try again".to_string(),
                    prize_id: None,
                    color: lose_color,
                });
            }
        }
        FortuneWheel {
            segments,
            rotation: 0.0,
            animation: None,
        }
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    fn segment_angle(&self) -> f32 {
        TAU / self.segments.len().max(1) as f32
    }

    /// Index of the slice matching a server outcome. A winning outcome maps
    /// to its prize slice; a losing one picks a losing slice keyed on the
    /// spin id so repeated losses do not always land in the same place.
    pub fn segment_for_outcome(&self, prize_id: Option<&str>, spin_id: &str) -> usize {
        if let Some(id) = prize_id {
            if let Some(index) = self
                .segments
                .iter()
                .position(|s| s.prize_id.as_deref() == Some(id))
            {
                return index;
            }
        }
        let losers: Vec<usize> = self
            .segments
            .iter()
            .enumerate()
            .filter(|(_, s)| s.prize_id.is_none())
            .map(|(i, _)| i)
            .collect();
        if losers.is_empty() {
            return 0;
        }
        let salt: usize = spin_id.bytes().map(usize::from).sum();
        losers[salt % losers.len()]
    }

    /// Start the landing animation towards `segment`. The target rotation is
    /// the current angle plus at least `SPIN_TURNS` full turns, ending with
    /// the segment center under the pointer.
    pub fn spin_to(&mut self, segment: usize) {
        if self.segments.is_empty() {
            return;
        }
        let seg = self.segment_angle();
        let center = segment as f32 * seg + seg / 2.0;
        let landing_offset = (TAU - center).rem_euclid(TAU);

        let from = self.rotation;
        let mut to = from - from.rem_euclid(TAU) + SPIN_TURNS * TAU + landing_offset;
        if to < from + SPIN_TURNS * TAU {
            to += TAU;
        }

        self.animation = Some(SpinAnimation {
            from,
            to,
            elapsed: 0.0,
            duration: SPIN_DURATION,
        });
    }

    /// Advance the animation. Returns `true` exactly once, on the frame the
    /// wheel comes to rest.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(animation) = &mut self.animation else {
            return false;
        };
        animation.elapsed += dt;
        let t = (animation.elapsed / animation.duration).clamp(0.0, 1.0);
        self.rotation = animation.from + (animation.to - animation.from) * ease_out_cubic(t);
        if t >= 1.0 {
            self.rotation = animation.to;
            self.animation = None;
            true
        } else {
            false
        }
    }

    /// Slice currently under the pointer.
    pub fn segment_at_pointer(&self) -> usize {
        if self.segments.is_empty() {
            return 0;
        }
        let seg = self.segment_angle();
        let angle = (TAU - self.rotation.rem_euclid(TAU)).rem_euclid(TAU);
        ((angle / seg) as usize).min(self.segments.len() - 1)
    }

    /// Draw the wheel. Angle 0 of wheel space points at the fixed pointer
    /// (up); rotation turns the disc clockwise.
    pub fn render(&self, painter: &Painter, center: Pos2, radius: f32) {
        if self.segments.is_empty() {
            return;
        }
        let seg = self.segment_angle();

        let point_at = |angle: f32, r: f32| -> Pos2 {
            let screen_angle = angle + self.rotation;
            Pos2::new(
                center.x + r * screen_angle.sin(),
                center.y - r * screen_angle.cos(),
            )
        };

        for (i, segment) in self.segments.iter().enumerate() {
            let start = i as f32 * seg;
            let mut points = vec![center];
            for step in 0..=ARC_STEPS {
                let angle = start + seg * step as f32 / ARC_STEPS as f32;
                points.push(point_at(angle, radius));
            }
            painter.add(Shape::convex_polygon(
                points,
                segment.color,
                Stroke::new(1.0, Color32::from_gray(20)),
            ));

            let label_pos = point_at(start + seg / 2.0, radius * 0.62);
            let label: String = segment.label.chars().take(14).collect();
            painter.text(
                label_pos,
                Align2::CENTER_CENTER,
                label,
                FontId::proportional(12.0),
                Color32::WHITE,
            );
        }

        // Hub and rim
        painter.circle_filled(center, radius * 0.12, Color32::from_gray(25));
        painter.circle_stroke(center, radius, Stroke::new(2.0, Color32::from_gray(60)));

        // Fixed pointer above the disc
        let pointer = vec![
            Pos2::new(center.x, center.y - radius + 10.0),
            Pos2::new(center.x - 9.0, center.y - radius - 10.0),
            Pos2::new(center.x + 9.0, center.y - radius - 10.0),
        ];
        painter.add(Shape::convex_polygon(
            pointer,
            Color32::from_rgb(255, 179, 0),
            Stroke::new(1.0, Color32::from_gray(20)),
        ));
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wheel_of(n: usize) -> FortuneWheel {
        let segments = (0..n)
            .map(|i| WheelSegment {
                label: format!("segment {i}"),
                prize_id: (i % 2 == 0).then(|| format!("p{i}")),
                color: Color32::RED,
            })
            .collect();
        FortuneWheel {
            segments,
            rotation: 0.0,
            animation: None,
        }
    }

    fn run_to_rest(wheel: &mut FortuneWheel) {
        for _ in 0..1_000 {
            if wheel.tick(0.05) {
                return;
            }
        }
        panic!("wheel never came to rest");
    }

    #[test]
    fn lands_on_requested_segment() {
        for n in [2, 5, 8] {
            let mut wheel = wheel_of(n);
            for target in 0..n {
                wheel.spin_to(target);
                run_to_rest(&mut wheel);
                assert_eq!(
                    wheel.segment_at_pointer(),
                    target,
                    "wheel of {n} segments should land on {target}"
                );
            }
        }
    }

    #[test]
    fn spin_always_turns_forward() {
        let mut wheel = wheel_of(6);
        wheel.spin_to(3);
        let before = wheel.rotation();
        run_to_rest(&mut wheel);
        assert!(wheel.rotation() >= before + SPIN_TURNS * TAU - 1e-3);
    }

    #[test]
    fn tick_reports_rest_exactly_once() {
        let mut wheel = wheel_of(4);
        wheel.spin_to(1);
        let mut rests = 0;
        for _ in 0..1_000 {
            if wheel.tick(0.05) {
                rests += 1;
            }
        }
        assert_eq!(rests, 1);
        assert!(!wheel.is_animating());
    }

    #[test]
    fn winning_outcome_maps_to_prize_segment() {
        let wheel = wheel_of(6);
        // prize ids p0, p2, p4 sit at indices 0, 2, 4
        assert_eq!(wheel.segment_for_outcome(Some("p2"), "s1"), 2);
        // unknown prize falls back to a losing slice
        let fallback = wheel.segment_for_outcome(Some("missing"), "s1");
        assert!(wheel.segments[fallback].prize_id.is_none());
    }

    #[test]
    fn losing_outcome_lands_on_a_losing_segment() {
        let wheel = wheel_of(6);
        for spin_id in ["a", "ab", "abc", "abcd"] {
            let index = wheel.segment_for_outcome(None, spin_id);
            assert!(wheel.segments[index].prize_id.is_none());
        }
    }

    #[test]
    fn from_prizes_interleaves_losing_slices() {
        let now = chrono::Utc::now();
        let prize = |id: &str, stock: u32, active: bool| Prize {
            id: id.to_string(),
            name: format!("prize {id}"),
            description: String::new(),
            stock,
            is_active: active,
            created_at: now,
            updated_at: now,
        };
        let prizes = vec![prize("a", 3, true), prize("b", 0, true), prize("c", 1, false)];
        let wheel = FortuneWheel::from_prizes(&prizes, &[Color32::RED], Color32::GRAY);

        // only "a" qualifies: one prize slice plus its losing neighbor
        assert_eq!(wheel.segments.len(), 2);
        assert_eq!(wheel.segments[0].prize_id.as_deref(), Some("a"));
        assert!(wheel.segments[1].prize_id.is_none());
    }
}
