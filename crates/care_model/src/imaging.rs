//! Imaging study records and the viewer's zoom/pan/window state.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Smallest zoom factor.
pub const MIN_ZOOM: f32 = 0.25;
/// Largest zoom factor.
pub const MAX_ZOOM: f32 = 8.0;
const DEFAULT_WINDOW: WindowPreset = WindowPreset {
    name: "Default",
    width: 400,
    level: 40,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Acquisition modality.
pub enum Modality {
    /// Computed tomography.
    Ct,
    /// Magnetic resonance.
    Mri,
    /// Plain radiograph.
    Xray,
    /// Ultrasound.
    Ultrasound,
    /// Positron emission tomography.
    Pet,
}

impl Modality {
    /// Short label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ct => "CT",
            Self::Mri => "MRI",
            Self::Xray => "X-ray",
            Self::Ultrasound => "US",
            Self::Pet => "PET",
        }
    }

    /// Window width/level presets offered for this modality.
    pub fn presets(self) -> &'static [WindowPreset] {
        const CT: [WindowPreset; 4] = [
            WindowPreset {
                name: "Brain",
                width: 80,
                level: 40,
            },
            WindowPreset {
                name: "Lung",
                width: 1500,
                level: -600,
            },
            WindowPreset {
                name: "Bone",
                width: 2000,
                level: 300,
            },
            WindowPreset {
                name: "Abdomen",
                width: 400,
                level: 50,
            },
        ];
        const MR: [WindowPreset; 2] = [
            WindowPreset {
                name: "T1",
                width: 600,
                level: 300,
            },
            WindowPreset {
                name: "T2",
                width: 1200,
                level: 600,
            },
        ];
        match self {
            Self::Ct => &CT,
            Self::Mri => &MR,
            Self::Xray | Self::Ultrasound | Self::Pet => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Named window width/level pair.
pub struct WindowPreset {
    /// Preset label.
    pub name: &'static str,
    /// Window width in Hounsfield-like units.
    pub width: i32,
    /// Window centre.
    pub level: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Ordered image series within a study.
pub struct ImagingSeries {
    /// Host identifier.
    pub id: String,
    /// Series description.
    pub description: String,
    /// Rendered image URLs in slice order.
    pub image_urls: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Imaging study shown by the viewer.
pub struct ImagingStudy {
    /// Host identifier.
    pub id: String,
    /// Study description.
    pub description: String,
    /// Acquisition modality.
    pub modality: Modality,
    /// Acquisition date.
    #[serde(default)]
    pub performed_on: Option<NaiveDate>,
    /// Series in display order.
    #[serde(default)]
    pub series: Vec<ImagingSeries>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Viewer transform and windowing state for one displayed series.
pub struct ViewerState {
    /// Zoom factor, clamped to [`MIN_ZOOM`]..=[`MAX_ZOOM`].
    pub zoom: f32,
    /// Horizontal pan in CSS pixels.
    pub pan_x: f32,
    /// Vertical pan in CSS pixels.
    pub pan_y: f32,
    /// Rotation in degrees, multiple of 90.
    pub rotation: u16,
    /// Inverted grayscale.
    pub inverted: bool,
    /// Active window width.
    pub window_width: i32,
    /// Active window level.
    pub window_level: i32,
    /// Index of the displayed slice.
    pub image_index: usize,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            rotation: 0,
            inverted: false,
            window_width: DEFAULT_WINDOW.width,
            window_level: DEFAULT_WINDOW.level,
            image_index: 0,
        }
    }
}

impl ViewerState {
    /// Multiplies the zoom factor, clamped.
    pub fn zoom_by(&mut self, factor: f32) {
        if factor.is_finite() && factor > 0.0 {
            self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        }
    }

    /// Offsets the pan position.
    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Moves to a neighbouring slice, clamped to `image_count`.
    pub fn step(&mut self, delta: i32, image_count: usize) {
        if image_count == 0 {
            self.image_index = 0;
            return;
        }
        let last = image_count - 1;
        let target = self.image_index as i64 + i64::from(delta);
        self.image_index = target.clamp(0, last as i64) as usize;
    }

    /// Rotates 90 degrees clockwise.
    pub fn rotate_clockwise(&mut self) {
        self.rotation = (self.rotation + 90) % 360;
    }

    /// Toggles inverted grayscale.
    pub fn toggle_invert(&mut self) {
        self.inverted = !self.inverted;
    }

    /// Applies a window preset.
    pub fn apply_preset(&mut self, preset: WindowPreset) {
        self.window_width = preset.width.max(1);
        self.window_level = preset.level;
    }

    /// Restores the default transform and windowing, keeping the current slice.
    pub fn reset_view(&mut self) {
        *self = Self {
            image_index: self.image_index,
            ..Self::default()
        };
    }

    /// CSS `transform` for the image element.
    pub fn css_transform(&self) -> String {
        format!(
            "translate({:.1}px, {:.1}px) scale({:.2}) rotate({}deg)",
            self.pan_x, self.pan_y, self.zoom, self.rotation
        )
    }

    /// CSS `filter` approximating the window: narrower windows raise contrast, lower levels
    /// raise brightness.
    pub fn css_filter(&self) -> String {
        let width = self.window_width.max(1) as f32;
        let contrast = (DEFAULT_WINDOW.width as f32 / width).clamp(0.2, 5.0);
        let brightness =
            (1.0 + (DEFAULT_WINDOW.level - self.window_level) as f32 / 1000.0).clamp(0.2, 3.0);
        let invert = if self.inverted { 1 } else { 0 };
        format!("contrast({contrast:.2}) brightness({brightness:.2}) invert({invert})")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn zoom_is_clamped_and_ignores_invalid_factors() {
        let mut state = ViewerState::default();
        state.zoom_by(100.0);
        assert_eq!(state.zoom, MAX_ZOOM);
        state.zoom_by(0.0001);
        assert_eq!(state.zoom, MIN_ZOOM);
        state.zoom_by(-2.0);
        state.zoom_by(f32::NAN);
        assert_eq!(state.zoom, MIN_ZOOM);
    }

    #[test]
    fn stepping_stays_within_series() {
        let mut state = ViewerState::default();
        state.step(-1, 5);
        assert_eq!(state.image_index, 0);
        state.step(3, 5);
        assert_eq!(state.image_index, 3);
        state.step(10, 5);
        assert_eq!(state.image_index, 4);
        state.step(1, 0);
        assert_eq!(state.image_index, 0);
    }

    #[test]
    fn reset_keeps_slice_but_restores_transform() {
        let mut state = ViewerState::default();
        state.step(2, 5);
        state.zoom_by(2.0);
        state.pan_by(10.0, -4.0);
        state.rotate_clockwise();
        state.toggle_invert();
        state.apply_preset(Modality::Ct.presets()[1]);

        state.reset_view();
        assert_eq!(
            state,
            ViewerState {
                image_index: 2,
                ..ViewerState::default()
            }
        );
    }

    #[test]
    fn rotation_wraps_at_full_turn() {
        let mut state = ViewerState::default();
        for _ in 0..5 {
            state.rotate_clockwise();
        }
        assert_eq!(state.rotation, 90);
    }

    #[test]
    fn css_strings_reflect_state() {
        let mut state = ViewerState::default();
        state.zoom_by(2.0);
        state.pan_by(5.0, 0.0);
        assert_eq!(
            state.css_transform(),
            "translate(5.0px, 0.0px) scale(2.00) rotate(0deg)"
        );
        assert_eq!(
            state.css_filter(),
            "contrast(1.00) brightness(1.00) invert(0)"
        );
        state.toggle_invert();
        assert!(state.css_filter().ends_with("invert(1)"));
    }

    #[test]
    fn presets_exist_for_cross_sectional_modalities_only() {
        assert_eq!(Modality::Ct.presets().len(), 4);
        assert_eq!(Modality::Mri.presets().len(), 2);
        assert!(Modality::Xray.presets().is_empty());
    }
}
