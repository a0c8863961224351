// SPDX-License-Identifier: MIT OR Apache-2.0
//! Conversions between frames, seconds and horizontal pixels.

use serde::{Deserialize, Serialize};

/// Horizontal time scale of a timeline view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    /// Frames per second
    pub frames_per_second: f32,
    /// Pixels per second at zoom 1.0
    pub units_per_second: f32,
    /// Zoom multiplier
    pub zoom: f32,
    /// Pixel position of frame zero
    pub start_offset: f32,
}

impl TimeScale {
    /// Pixels covered by one second at the current zoom
    pub fn pixels_per_second(&self) -> f32 {
        self.units_per_second * self.zoom
    }

    /// Pixels covered by one frame at the current zoom
    pub fn pixels_per_frame(&self) -> f32 {
        self.pixels_per_second() / self.frames_per_second
    }

    /// Convert frame number to time
    pub fn frame_to_seconds(&self, frame: i32) -> f32 {
        frame as f32 / self.frames_per_second
    }

    /// Convert time to the nearest frame number
    pub fn seconds_to_frame(&self, seconds: f32) -> i32 {
        (seconds * self.frames_per_second).round() as i32
    }

    /// Convert time to x position
    pub fn seconds_to_x(&self, seconds: f32) -> f32 {
        seconds * self.pixels_per_second() + self.start_offset
    }

    /// Convert x position to time
    pub fn x_to_seconds(&self, x: f32) -> f32 {
        (x - self.start_offset) / self.pixels_per_second()
    }

    /// Convert frame number to x position
    pub fn frame_to_x(&self, frame: i32) -> f32 {
        frame as f32 * self.pixels_per_second() / self.frames_per_second + self.start_offset
    }

    /// Convert x position to the nearest frame number
    pub fn x_to_frame(&self, x: f32) -> i32 {
        ((x - self.start_offset) * self.frames_per_second / self.pixels_per_second()).round() as i32
    }

    /// Width in pixels of a span of frames
    pub fn frames_to_width(&self, frames: i32) -> f32 {
        frames as f32 * self.pixels_per_second() / self.frames_per_second
    }
}

/// How the playback position is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeDisplayMode {
    /// Raw frame number
    #[default]
    Frames,
    /// Seconds with two decimals
    Seconds,
    /// Minutes, seconds and frames
    Time,
}

impl TimeDisplayMode {
    /// Get the display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Frames => "Frames",
            Self::Seconds => "Seconds",
            Self::Time => "Time",
        }
    }

    /// Format a frame number for the position readout
    pub fn format(&self, frame: i32, frames_per_second: f32) -> String {
        match self {
            Self::Frames => frame.to_string(),
            Self::Seconds => format!("{:.2}s", frame as f32 / frames_per_second),
            Self::Time => {
                let fps = frames_per_second.round().max(1.0) as i32;
                let total_seconds = frame / fps;
                let minutes = total_seconds / 60;
                let seconds = total_seconds % 60;
                let frames = frame % fps;
                format!("{:02}:{:02}:{:02}", minutes, seconds, frames)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale() -> TimeScale {
        TimeScale {
            frames_per_second: 30.0,
            units_per_second: 100.0,
            zoom: 1.0,
            start_offset: 50.0,
        }
    }

    #[test]
    fn test_frame_seconds_conversion() {
        let scale = scale();
        assert_eq!(scale.frame_to_seconds(45), 1.5);
        assert_eq!(scale.seconds_to_frame(1.5), 45);
    }

    #[test]
    fn test_pixel_conversion() {
        let scale = scale();
        assert_eq!(scale.seconds_to_x(0.0), 50.0);
        assert_eq!(scale.seconds_to_x(2.0), 250.0);
        assert_eq!(scale.x_to_seconds(250.0), 2.0);
        assert_eq!(scale.frame_to_x(30), 150.0);
        assert_eq!(scale.x_to_frame(150.0), 30);
        assert_eq!(scale.frames_to_width(60), 200.0);
    }

    #[test]
    fn test_zoom_scales_pixels() {
        let scale = TimeScale { zoom: 2.0, ..scale() };
        assert_eq!(scale.pixels_per_second(), 200.0);
        assert_eq!(scale.frame_to_x(30), 250.0);
    }

    #[test]
    fn test_time_display() {
        assert_eq!(TimeDisplayMode::Frames.format(42, 30.0), "42");
        assert_eq!(TimeDisplayMode::Seconds.format(42, 30.0), "1.40s");
        assert_eq!(TimeDisplayMode::Time.format(42, 30.0), "00:01:12");
        assert_eq!(TimeDisplayMode::Time.format(1830, 30.0), "01:01:00");
    }
}
