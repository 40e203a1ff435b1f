use crate::foundation::core::Rgba8;

/// Stroke styling handed to the sketch renderer.
///
/// `roughness` scales the random jitter of every stroke, `bowing` how far straight segments
/// curve away from the chord. `fill` exists for parity with the renderer API, but this crate only
/// draws outlines: [`crate::Pen`] clears it before anything reaches a canvas.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SketchStyle {
    pub stroke: Rgba8,
    pub stroke_width: f64,
    pub roughness: f64,
    pub bowing: f64,
    #[serde(default)]
    pub fill: Option<Rgba8>,
}

impl Default for SketchStyle {
    fn default() -> Self {
        Self::normal()
    }
}

impl SketchStyle {
    /// Resting outline style.
    pub fn normal() -> Self {
        Self {
            stroke: Rgba8::BLACK,
            stroke_width: 2.0,
            roughness: 1.5,
            bowing: 1.5,
            fill: None,
        }
    }

    /// Emphasized style used while a control is hovered.
    pub fn hover() -> Self {
        Self {
            stroke: Rgba8::BLACK,
            stroke_width: 4.0,
            roughness: 1.8,
            bowing: 2.0,
            fill: None,
        }
    }

    pub fn with_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Same style with the stroke width multiplied by `factor` (inner details, panels).
    pub fn scaled_width(mut self, factor: f64) -> Self {
        self.stroke_width *= factor;
        self
    }

    pub fn with_roughness(mut self, roughness: f64) -> Self {
        self.roughness = roughness;
        self
    }

    pub fn with_bowing(mut self, bowing: f64) -> Self {
        self.bowing = bowing;
        self
    }

    pub fn outline(mut self) -> Self {
        self.fill = None;
        self
    }
}

/// Normal/emphasized style pair.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StylePair {
    pub normal: SketchStyle,
    pub hover: SketchStyle,
}

impl Default for StylePair {
    fn default() -> Self {
        Self {
            normal: SketchStyle::normal(),
            hover: SketchStyle::hover(),
        }
    }
}

impl StylePair {
    pub fn pick(&self, emphasis: Emphasis) -> SketchStyle {
        match emphasis {
            Emphasis::Normal => self.normal,
            Emphasis::Hover => self.hover,
        }
    }
}

/// Which member of a [`StylePair`] a redraw uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub enum Emphasis {
    #[default]
    Normal,
    Hover,
}
