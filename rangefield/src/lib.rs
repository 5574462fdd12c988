//! # rangefield
//!
//! Server-side configuration builder for a client-side range-slider widget.
//!
//! A range field gives the user the option to select a value from a range,
//! or select a range. The field itself holds the slider parameters (bounds,
//! starting handle positions, step size, display formatting, pip markers),
//! and derives from them the configuration object the slider widget reads
//! at initialization time.
//!
//! ## Features
//!
//! - **Fluent mutation**: every parameter has a chainable setter and a
//!   paired getter.
//! - **On-demand build**: [`RangeField::build`] merges the current
//!   parameters with the fixed presentation constants into a
//!   [`SliderConfig`], recomputed fresh on every call.
//! - **Range overrides**: custom breakpoints supersede or extend the
//!   default `{min, max}` range mapping, in insertion order.
//! - **Presentation seam**: the [`render`] module embeds the built
//!   configuration into the page as a `var <name> = {...}` assignment.
//!
//! ## Usage
//!
//! ```rust
//! use rangefield::RangeField;
//!
//! let mut field = RangeField::with_name("price");
//! field
//!     .set_min(0.0)
//!     .set_max(500.0)
//!     .set_step(10.0)
//!     .set_format("€", 2);
//!
//! let config = field.build();
//! assert_eq!(config.step, Some(10.0));
//! ```
//!
//! The field performs no domain validation: inverted bounds or a
//! non-positive step are accepted as-is and surface only in the widget's
//! behavior. Callers that need stricter guarantees must check before
//! building.

pub mod render;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Slider animations always run; the duration is not configurable.
pub const ANIMATION_DURATION_MS: u32 = 300;

/// Pip mode emitted when pips are enabled.
const PIPS_MODE_STEPS: &str = "steps";

/// Error types for range field operations
#[derive(Debug, thiserror::Error)]
pub enum RangeFieldError {
    #[error("Failed to encode slider configuration: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Starting handle position(s), accepted as a single scalar or a sequence.
///
/// The field always stores positions as a sequence; a scalar is wrapped
/// into a one-element sequence on the way in.
#[derive(Debug, Clone, PartialEq)]
pub enum Start {
    Single(f64),
    Multiple(Vec<f64>),
}

impl Start {
    fn into_vec(self) -> Vec<f64> {
        match self {
            Start::Single(position) => vec![position],
            Start::Multiple(positions) => positions,
        }
    }
}

impl From<f64> for Start {
    fn from(position: f64) -> Self {
        Start::Single(position)
    }
}

impl From<Vec<f64>> for Start {
    fn from(positions: Vec<f64>) -> Self {
        Start::Multiple(positions)
    }
}

impl From<&[f64]> for Start {
    fn from(positions: &[f64]) -> Self {
        Start::Multiple(positions.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Start {
    fn from(positions: [f64; N]) -> Self {
        Start::Multiple(positions.to_vec())
    }
}

/// Pip (scale tick mark) rendering parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipsConfig {
    pub mode: String,
    pub stepped: bool,
    pub density: u32,
}

/// The configuration object the client-side slider widget reads.
///
/// Serialized with camelCase keys. The `pips` and `step` keys are entirely
/// absent from the serialized form when unset, never present-and-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderConfig {
    pub start: Vec<f64>,
    pub snap: bool,
    pub animate: bool,
    pub animation_duration: u32,
    pub range: IndexMap<String, f64>,
    pub unit: String,
    pub decimal_places: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pips: Option<PipsConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
}

impl SliderConfig {
    /// Encodes the configuration as a JSON object literal.
    pub fn to_json(&self) -> Result<String, RangeFieldError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A form field whose value is selected on a range slider.
///
/// The field is owned by the presenting context for the duration of a
/// render pass; it is not shared across threads.
#[derive(Debug, Clone)]
pub struct RangeField {
    name: String,
    title: Option<String>,
    value: Option<f64>,
    start: Vec<f64>,
    min: f64,
    max: f64,
    override_range: IndexMap<String, f64>,
    snap: bool,
    step: Option<f64>,
    show_pips: bool,
    density: u32,
    unit: String,
    decimal_places: u32,
    data: Option<SliderConfig>,
}

impl RangeField {
    /// The backing input is always hidden; the widget drives its value.
    pub const INPUT_TYPE: &'static str = "hidden";

    /// Creates a range field.
    ///
    /// # Arguments
    ///
    /// * `name` - The internal field name, passed to forms.
    /// * `title` - The human-readable field label.
    /// * `start` - Starting point(s) on the line.
    /// * `min` - Lowest value of the range.
    /// * `max` - Highest value of the range.
    /// * `override_range` - Mapping of breakpoint keys (usually percentage
    ///   points on the range) to values, merged over the default
    ///   `{min, max}` range at build time.
    /// * `value` - The initial value of the field.
    ///
    /// No bounds validation is performed: `min > max` is accepted and
    /// propagates into the built configuration unchanged.
    pub fn new(
        name: impl Into<String>,
        title: Option<&str>,
        start: impl Into<Start>,
        min: f64,
        max: f64,
        override_range: IndexMap<String, f64>,
        value: Option<f64>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.map(str::to_string),
            value,
            start: start.into().into_vec(),
            min,
            max,
            override_range,
            snap: false,
            step: None,
            show_pips: true,
            density: 4,
            unit: String::new(),
            decimal_places: 2,
            data: None,
        }
    }

    /// Creates a field with default parameters: one handle at 0 on a
    /// 0..100 range, no overrides, no value.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self::new(name, None, 0.0, 0.0, 100.0, IndexMap::new(), None)
    }

    /// Merges the current parameters into the widget configuration.
    ///
    /// Recomputed fresh on every call; the result is also kept on the
    /// field (see [`RangeField::data`]) so the last built configuration
    /// can be inspected after a render pass.
    pub fn build(&mut self) -> SliderConfig {
        debug!(field = %self.name, show_pips = self.show_pips, "Building slider configuration");

        let mut range = IndexMap::new();
        range.insert("min".to_string(), self.min);
        range.insert("max".to_string(), self.max);
        // A forced range replaces or extends the defaults; replacing keeps
        // the original key position, matching the widget's expectations.
        for (breakpoint, value) in &self.override_range {
            range.insert(breakpoint.clone(), *value);
        }

        let pips = self.show_pips.then(|| PipsConfig {
            mode: PIPS_MODE_STEPS.to_string(),
            stepped: true,
            density: self.density,
        });

        let config = SliderConfig {
            start: self.start.clone(),
            snap: self.snap,
            animate: true,
            animation_duration: ANIMATION_DURATION_MS,
            range,
            unit: self.unit.clone(),
            decimal_places: self.decimal_places,
            pips,
            step: self.step,
        };

        self.data = Some(config.clone());
        config
    }

    /// Sets the display unit and decimal precision in one call.
    pub fn set_format(&mut self, unit: impl Into<String>, decimal_places: u32) -> &mut Self {
        self.set_unit(unit);
        self.set_decimal_places(decimal_places);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn set_value(&mut self, value: impl Into<Option<f64>>) -> &mut Self {
        self.value = value.into();
        self
    }

    pub fn start(&self) -> &[f64] {
        &self.start
    }

    /// Sets the starting handle position(s); a scalar is wrapped into a
    /// one-element sequence.
    pub fn set_start(&mut self, start: impl Into<Start>) -> &mut Self {
        self.start = start.into().into_vec();
        self
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn set_min(&mut self, min: f64) -> &mut Self {
        self.min = min;
        self
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn set_max(&mut self, max: f64) -> &mut Self {
        self.max = max;
        self
    }

    pub fn override_range(&self) -> &IndexMap<String, f64> {
        &self.override_range
    }

    pub fn set_override_range(&mut self, override_range: IndexMap<String, f64>) -> &mut Self {
        self.override_range = override_range;
        self
    }

    pub fn is_snap(&self) -> bool {
        self.snap
    }

    pub fn set_snap(&mut self, snap: bool) -> &mut Self {
        self.snap = snap;
        self
    }

    pub fn step(&self) -> Option<f64> {
        self.step
    }

    /// Sets the step size; `None` means continuous handle movement.
    pub fn set_step(&mut self, step: impl Into<Option<f64>>) -> &mut Self {
        self.step = step.into();
        self
    }

    pub fn is_show_pips(&self) -> bool {
        self.show_pips
    }

    pub fn set_show_pips(&mut self, show_pips: bool) -> &mut Self {
        self.show_pips = show_pips;
        self
    }

    pub fn density(&self) -> u32 {
        self.density
    }

    pub fn set_density(&mut self, density: u32) -> &mut Self {
        self.density = density;
        self
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn set_unit(&mut self, unit: impl Into<String>) -> &mut Self {
        self.unit = unit.into();
        self
    }

    pub fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    pub fn set_decimal_places(&mut self, decimal_places: u32) -> &mut Self {
        self.decimal_places = decimal_places;
        self
    }

    /// The configuration produced by the most recent [`RangeField::build`],
    /// if any.
    pub fn data(&self) -> Option<&SliderConfig> {
        self.data.as_ref()
    }

    pub fn set_data(&mut self, data: SliderConfig) -> &mut Self {
        self.data = Some(data);
        self
    }
}
