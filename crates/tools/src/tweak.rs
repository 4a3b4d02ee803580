use std::ops::RangeInclusive;

use seekship_kernel::Agent;

/// A live-adjustable agent parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tweak {
    MaxSpeed,
    RotationSpeed,
    RateOfFire,
}

impl Tweak {
    pub const ALL: [Tweak; 3] = [Tweak::MaxSpeed, Tweak::RotationSpeed, Tweak::RateOfFire];

    pub fn label(self) -> &'static str {
        match self {
            Tweak::MaxSpeed => "Max Speed",
            Tweak::RotationSpeed => "Rotation Speed",
            Tweak::RateOfFire => "Player Rate of Fire",
        }
    }

    /// Slider range. Cosmetic: only the panel respects it.
    pub fn range(self) -> RangeInclusive<f32> {
        match self {
            Tweak::MaxSpeed => 0.0..=500.0,
            Tweak::RotationSpeed => 0.0..=20.0,
            Tweak::RateOfFire => 0.0..=500.0,
        }
    }

    fn field(self, agent: &mut Agent) -> &mut f32 {
        match self {
            Tweak::MaxSpeed => &mut agent.max_speed,
            Tweak::RotationSpeed => &mut agent.rotation_speed,
            Tweak::RateOfFire => &mut agent.fire_rate,
        }
    }
}

/// The "Player Settings" sliders of the debug overlay.
pub struct TweakPanel;

impl TweakPanel {
    pub fn get(agent: &Agent, tweak: Tweak) -> f32 {
        match tweak {
            Tweak::MaxSpeed => agent.max_speed,
            Tweak::RotationSpeed => agent.rotation_speed,
            Tweak::RateOfFire => agent.fire_rate,
        }
    }

    /// Write a slider value, clamped to the slider range. Returns the stored value.
    pub fn set(agent: &mut Agent, tweak: Tweak, value: f32) -> f32 {
        let range = tweak.range();
        let clamped = value.clamp(*range.start(), *range.end());
        *tweak.field(agent) = clamped;
        tracing::debug!(tweak = tweak.label(), value = clamped, "tweak applied");
        clamped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seekship_common::{FrameInput, SimConfig};
    use seekship_kernel::{World, step};

    #[test]
    fn labels_and_ranges() {
        assert_eq!(Tweak::RotationSpeed.label(), "Rotation Speed");
        assert_eq!(Tweak::RateOfFire.range(), 0.0..=500.0);
        assert_eq!(Tweak::ALL.len(), 3);
    }

    #[test]
    fn set_clamps_to_slider_range() {
        let mut agent = Agent::default();
        assert_eq!(TweakPanel::set(&mut agent, Tweak::RotationSpeed, 50.0), 20.0);
        assert_eq!(agent.rotation_speed, 20.0);
        assert_eq!(TweakPanel::set(&mut agent, Tweak::MaxSpeed, -3.0), 0.0);
        assert_eq!(agent.max_speed, 0.0);
    }

    #[test]
    fn default_tuning_can_sit_outside_slider_range() {
        // The default max speed is above the slider's upper bound; nothing rejects it.
        let agent = Agent::default();
        assert_eq!(TweakPanel::get(&agent, Tweak::MaxSpeed), 2000.0);
        assert!(!Tweak::MaxSpeed.range().contains(&2000.0));
    }

    #[test]
    fn set_rate_of_fire_changes_cooldown_reset() {
        let config = SimConfig::default();
        let mut world = World::new(&config);
        TweakPanel::set(world.agent_mut(), Tweak::RateOfFire, 4.0);
        assert_eq!(TweakPanel::get(world.agent(), Tweak::RateOfFire), 4.0);

        world.agent_mut().cooldown = -1.0;
        let shot = FrameInput {
            fire: true,
            ..FrameInput::idle(0.0)
        };
        let world = step(world, &shot, &config);
        assert_eq!(world.projectile_count(), 1);
        assert_eq!(world.agent().cooldown, 0.25);
    }
}
