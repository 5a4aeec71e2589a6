//! Color tokens and the global palette

use crate::error::ThemeError;
use modern_core::Color;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// An immutable RGBA value with components in `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorToken {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    #[serde(default = "opaque")]
    pub opacity: f32,
}

fn opaque() -> f32 {
    1.0
}

impl ColorToken {
    /// Stand-in for "no color": effectively invisible, but not a real
    /// zero-opacity color.
    pub const PLACEHOLDER: ColorToken = ColorToken::new(0.0, 0.0, 0.0, 0.000_000_1);

    pub const fn new(red: f32, green: f32, blue: f32, opacity: f32) -> Self {
        Self {
            red,
            green,
            blue,
            opacity,
        }
    }

    pub const fn rgb(red: f32, green: f32, blue: f32) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Build an opaque token from a `0xRRGGBB` value
    pub fn from_hex(hex: u32) -> Self {
        Color::from_hex(hex).into()
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Renderable color for this token
    pub fn color(&self) -> Color {
        Color::rgba(self.red, self.green, self.blue, self.opacity)
    }
}

impl From<ColorToken> for Color {
    fn from(token: ColorToken) -> Self {
        token.color()
    }
}

impl From<Color> for ColorToken {
    fn from(color: Color) -> Self {
        Self::new(color.r, color.g, color.b, color.a)
    }
}

/// A hue ramp in the global palette
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorRamp {
    Primary,
    Secondary,
    Neutral,
    Success,
    Warning,
    Error,
}

impl ColorRamp {
    pub fn id(self) -> &'static str {
        match self {
            ColorRamp::Primary => "primary",
            ColorRamp::Secondary => "secondary",
            ColorRamp::Neutral => "neutral",
            ColorRamp::Success => "success",
            ColorRamp::Warning => "warning",
            ColorRamp::Error => "error",
        }
    }

    pub fn all() -> &'static [ColorRamp] {
        const RAMPS: [ColorRamp; 6] = [
            ColorRamp::Primary,
            ColorRamp::Secondary,
            ColorRamp::Neutral,
            ColorRamp::Success,
            ColorRamp::Warning,
            ColorRamp::Error,
        ];
        &RAMPS
    }

    /// The path to one step of this ramp
    pub const fn at(self, step: ColorStep) -> GlobalColorPath {
        GlobalColorPath::new(self, step)
    }

    fn index(self) -> usize {
        self as usize
    }

    fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|ramp| ramp.id() == id)
    }
}

/// Intensity step within a ramp, 100 (lightest) to 900 (darkest)
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum ColorStep {
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
}

impl ColorStep {
    pub fn value(self) -> u16 {
        (self as u16 + 1) * 100
    }

    pub fn from_value(value: u16) -> Option<Self> {
        Self::all().iter().copied().find(|step| step.value() == value)
    }

    pub fn all() -> &'static [ColorStep] {
        const STEPS: [ColorStep; 9] = [
            ColorStep::S100,
            ColorStep::S200,
            ColorStep::S300,
            ColorStep::S400,
            ColorStep::S500,
            ColorStep::S600,
            ColorStep::S700,
            ColorStep::S800,
            ColorStep::S900,
        ];
        &STEPS
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Symbolic reference into [`GlobalColors`], written `"neutral100"`
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GlobalColorPath {
    pub ramp: ColorRamp,
    pub step: ColorStep,
}

impl GlobalColorPath {
    pub const fn new(ramp: ColorRamp, step: ColorStep) -> Self {
        Self { ramp, step }
    }

    /// Every path in the palette, ramp by ramp
    pub fn all() -> impl Iterator<Item = GlobalColorPath> {
        ColorRamp::all().iter().flat_map(|&ramp| {
            ColorStep::all()
                .iter()
                .map(move |&step| GlobalColorPath::new(ramp, step))
        })
    }
}

impl Display for GlobalColorPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.ramp.id(), self.step.value())
    }
}

impl FromStr for GlobalColorPath {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ThemeError::InvalidGlobalColorPath(s.to_string());
        let split = s.find(|c: char| c.is_ascii_digit()).ok_or_else(invalid)?;
        let (ramp, step) = s.split_at(split);
        let ramp = ColorRamp::from_id(ramp).ok_or_else(invalid)?;
        let step = step
            .parse::<u16>()
            .ok()
            .and_then(ColorStep::from_value)
            .ok_or_else(invalid)?;
        Ok(Self::new(ramp, step))
    }
}

impl TryFrom<String> for GlobalColorPath {
    type Error = ThemeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GlobalColorPath> for String {
    fn from(path: GlobalColorPath) -> Self {
        path.to_string()
    }
}

const RAMP_COUNT: usize = 6;
const STEP_COUNT: usize = 9;

/// The brand-independent base palette: one token for every ramp and step
///
/// Lookups are total; a palette cannot be built with a gap.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "FxHashMap<String, ColorToken>",
    into = "BTreeMap<String, ColorToken>"
)]
pub struct GlobalColors {
    ramps: [[ColorToken; STEP_COUNT]; RAMP_COUNT],
}

impl GlobalColors {
    /// Build a palette from one 9-step ramp per hue
    pub const fn from_ramps(
        primary: [ColorToken; STEP_COUNT],
        secondary: [ColorToken; STEP_COUNT],
        neutral: [ColorToken; STEP_COUNT],
        success: [ColorToken; STEP_COUNT],
        warning: [ColorToken; STEP_COUNT],
        error: [ColorToken; STEP_COUNT],
    ) -> Self {
        Self {
            ramps: [primary, secondary, neutral, success, warning, error],
        }
    }

    /// Build a palette from `"<ramp><step>"` names
    ///
    /// Every path must be present and every name must be a known path.
    pub fn from_named<I, S>(entries: I) -> Result<Self, ThemeError>
    where
        I: IntoIterator<Item = (S, ColorToken)>,
        S: AsRef<str>,
    {
        let mut named: FxHashMap<GlobalColorPath, ColorToken> = FxHashMap::default();
        for (name, token) in entries {
            let name = name.as_ref();
            let path = name
                .parse::<GlobalColorPath>()
                .map_err(|_| ThemeError::UnknownGlobalColor(name.to_string()))?;
            named.insert(path, token);
        }

        let mut ramps = [[ColorToken::PLACEHOLDER; STEP_COUNT]; RAMP_COUNT];
        for path in GlobalColorPath::all() {
            let token = named
                .get(&path)
                .copied()
                .ok_or(ThemeError::MissingGlobalColor(path))?;
            ramps[path.ramp.index()][path.step.index()] = token;
        }
        Ok(Self { ramps })
    }

    /// Look up a palette entry
    pub fn get(&self, path: GlobalColorPath) -> ColorToken {
        self.ramps[path.ramp.index()][path.step.index()]
    }

    /// All nine steps of one ramp
    pub fn ramp(&self, ramp: ColorRamp) -> &[ColorToken; STEP_COUNT] {
        &self.ramps[ramp.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (GlobalColorPath, ColorToken)> + '_ {
        GlobalColorPath::all().map(move |path| (path, self.get(path)))
    }

    /// The default "Modern" palette
    pub fn modern() -> Self {
        const fn c(red: f32, green: f32, blue: f32) -> ColorToken {
            ColorToken::rgb(red, green, blue)
        }

        Self::from_ramps(
            // Modern Blue
            [
                c(0.9, 0.95, 1.0),
                c(0.8, 0.9, 1.0),
                c(0.6, 0.8, 1.0),
                c(0.4, 0.7, 1.0),
                c(0.0, 0.48, 1.0),
                c(0.0, 0.38, 0.8),
                c(0.0, 0.28, 0.6),
                c(0.0, 0.18, 0.4),
                c(0.0, 0.08, 0.2),
            ],
            // Neutral gray
            [
                c(0.98, 0.98, 0.98),
                c(0.95, 0.95, 0.95),
                c(0.9, 0.9, 0.9),
                c(0.8, 0.8, 0.8),
                c(0.6, 0.6, 0.6),
                c(0.4, 0.4, 0.4),
                c(0.3, 0.3, 0.3),
                c(0.2, 0.2, 0.2),
                c(0.1, 0.1, 0.1),
            ],
            // True neutral
            [
                c(1.0, 1.0, 1.0),
                c(0.98, 0.98, 0.98),
                c(0.94, 0.94, 0.94),
                c(0.86, 0.86, 0.86),
                c(0.74, 0.74, 0.74),
                c(0.52, 0.52, 0.52),
                c(0.4, 0.4, 0.4),
                c(0.26, 0.26, 0.26),
                c(0.09, 0.09, 0.09),
            ],
            // Green
            [
                c(0.9, 0.98, 0.9),
                c(0.8, 0.95, 0.8),
                c(0.6, 0.9, 0.6),
                c(0.4, 0.8, 0.4),
                c(0.13, 0.55, 0.13),
                c(0.1, 0.45, 0.1),
                c(0.08, 0.35, 0.08),
                c(0.05, 0.25, 0.05),
                c(0.02, 0.15, 0.02),
            ],
            // Orange
            [
                c(1.0, 0.98, 0.9),
                c(1.0, 0.95, 0.8),
                c(1.0, 0.9, 0.6),
                c(1.0, 0.8, 0.4),
                c(1.0, 0.6, 0.0),
                c(0.9, 0.5, 0.0),
                c(0.8, 0.4, 0.0),
                c(0.6, 0.3, 0.0),
                c(0.4, 0.2, 0.0),
            ],
            // Red
            [
                c(1.0, 0.9, 0.9),
                c(1.0, 0.8, 0.8),
                c(1.0, 0.6, 0.6),
                c(1.0, 0.4, 0.4),
                c(0.9, 0.2, 0.2),
                c(0.8, 0.1, 0.1),
                c(0.7, 0.05, 0.05),
                c(0.6, 0.0, 0.0),
                c(0.4, 0.0, 0.0),
            ],
        )
    }
}

impl Default for GlobalColors {
    fn default() -> Self {
        Self::modern()
    }
}

impl TryFrom<FxHashMap<String, ColorToken>> for GlobalColors {
    type Error = ThemeError;

    fn try_from(value: FxHashMap<String, ColorToken>) -> Result<Self, Self::Error> {
        Self::from_named(value)
    }
}

impl From<GlobalColors> for BTreeMap<String, ColorToken> {
    fn from(colors: GlobalColors) -> Self {
        colors
            .iter()
            .map(|(path, token)| (path.to_string(), token))
            .collect()
    }
}
