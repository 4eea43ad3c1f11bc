use crate::dashboard::types::Dashboard;

impl Dashboard {
    /// Trailing dots for the loading message
    pub fn animated_dots(&self) -> &'static str {
        match self.animation_frame % 4 {
            0 => "   ",
            1 => ".  ",
            2 => ".. ",
            _ => "...",
        }
    }

    /// Pulsing intensity for borders (100-255)
    pub fn pulse_intensity(&self) -> u8 {
        let phase = (self.animation_frame % 20) as f32 / 20.0;
        let pulse = ((phase * std::f32::consts::PI * 2.0).sin() + 1.0) / 2.0;
        (pulse * 155.0 + 100.0) as u8
    }

    /// Steam frame drawn above a card while an effect runs
    pub fn steam_frame(&self) -> &'static str {
        match self.animation_frame % 3 {
            0 => " ) ( ",
            1 => " ( ) ",
            _ => "  )  ",
        }
    }
}
