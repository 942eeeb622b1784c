use thiserror::Error;

/// Reasons a POI is rejected when the registry is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PoiError {
    #[error("POI at index {index} has an empty name")]
    EmptyName { index: usize },
    #[error("POI `{name}` has a non-finite position")]
    NonFinitePosition { name: String },
    #[error("POI `{name}` has colour {color:#x} outside 0xRRGGBB")]
    ColorOutOfRange { name: String, color: u32 },
}

/// Reasons a tuning configuration is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive and finite (got {value})")]
    NotPositive { field: &'static str, value: f32 },
    #[error("damping must lie in (0, 1) (got {0})")]
    DampingOutOfRange(f32),
    #[error("panel width bounds are inverted: min {min} > max {max}")]
    InvertedPanelWidth { min: f32, max: f32 },
}
