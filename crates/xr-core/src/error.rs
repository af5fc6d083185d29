/// Rejected scene setup or session configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    #[error("duplicate interaction target `{0}`")]
    DuplicateTarget(String),
    #[error("target `{name}` has invalid radius {radius}")]
    InvalidRadius { name: String, radius: f32 },
    #[error("planet `{0}` has no matching interaction target")]
    UnknownPlanetTarget(String),
    #[error("planet `{name}` has invalid orbital period {period_sec}")]
    InvalidPeriod { name: String, period_sec: f32 },
    #[error("pinch end distance {end} must exceed start distance {start}")]
    InvalidPinchThresholds { start: f32, end: f32 },
    #[error("no interaction joints configured")]
    NoInteractionJoints,
    #[error("max frame delta {0} must be finite and positive")]
    InvalidFrameDt(f64),
    #[error("slider `{name}` is invalid: {reason}")]
    InvalidSlider { name: String, reason: &'static str },
    #[error("slider resizes unknown target `{0}`")]
    UnknownSizeTarget(String),
}
