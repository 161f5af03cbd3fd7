use crate::core::data::complex::Complex;
use crate::core::data::region::{Region, RegionError};
use std::error::Error;
use std::fmt;

pub const DEFAULT_PRESET: &str = "classic";

/// Named views as `(name, center real, center imag, radius)`.
///
/// `classic` covers the real range (-2.00, 0.47) and the imaginary range
/// (-1.12, 1.12), squared up on the real extent.
pub const PRESETS: &[(&str, f64, f64, f64)] = &[
    ("classic", -0.765, 0.0, 1.235),
    ("seahorse", -0.7450, 0.1102, 0.005),
    ("spiral", -0.7463, 0.1102, 0.005),
    ("valley", -0.722, 0.246, 0.019),
    ("tendril", -0.235125, 0.827215, 4.0e-5),
    ("antenna", -0.16070135, 1.0375665, 1.0e-7),
    ("filament", 0.45272105023, 0.396494224267, 1.4e-10),
    ("deep", 0.2929859127507, 0.6117848324958, 1.0e-11),
    ("demo", -0.0452407411, 0.9868162204352258, 2.7e-10),
];

#[derive(Debug, Clone, PartialEq)]
pub enum PresetError {
    UnknownPreset { name: String },
    MalformedView { view: String },
    InvalidRegion(RegionError),
}

impl fmt::Display for PresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPreset { name } => {
                let names: Vec<&str> = PRESETS.iter().map(|preset| preset.0).collect();
                write!(
                    f,
                    "unknown view '{}', expected one of {} or [X,Y,R]",
                    name,
                    names.join(", ")
                )
            }
            Self::MalformedView { view } => {
                write!(f, "could not parse view '{}', expected [X,Y,R]", view)
            }
            Self::InvalidRegion(err) => write!(f, "invalid view: {}", err),
        }
    }
}

impl Error for PresetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidRegion(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RegionError> for PresetError {
    fn from(err: RegionError) -> Self {
        Self::InvalidRegion(err)
    }
}

pub fn preset(name: &str) -> Result<Region, PresetError> {
    let (_, real, imag, radius) = PRESETS
        .iter()
        .find(|preset| preset.0.eq_ignore_ascii_case(name))
        .ok_or_else(|| PresetError::UnknownPreset {
            name: name.to_string(),
        })?;

    Ok(Region::new(Complex::new(*real, *imag), *radius)?)
}

/// Accepts a preset name or a literal `[X,Y,R]` triple.
pub fn parse_view(view: &str) -> Result<Region, PresetError> {
    let trimmed = view.trim();

    let Some(inner) = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    else {
        return preset(trimmed);
    };

    let malformed = || PresetError::MalformedView {
        view: view.to_string(),
    };

    let values = inner
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<f64>, _>>()
        .map_err(|_| malformed())?;

    match values.as_slice() {
        [real, imag, radius] => Ok(Region::new(Complex::new(*real, *imag), *radius)?),
        _ => Err(malformed()),
    }
}
