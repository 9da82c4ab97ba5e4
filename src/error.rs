use thiserror::Error;

/// Top-level error type for the silhouette engine.
#[derive(Debug, Error)]
pub enum SilhouetteError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Boundary(#[from] BoundaryError),
}

/// Parameter errors, rejected before any computation starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("alpha = {0} is negative; the boundary criterion is undefined for negative alpha")]
    NegativeAlpha(f64),

    #[error("alpha = 0 selects the half-plane criterion, which the triangulated pipeline does not support")]
    HalfPlaneUnsupported,

    #[error("{parameter} = {value} is not finite")]
    NonFinite { parameter: &'static str, value: f64 },
}

/// Errors caused by degenerate input geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("at least 3 points are required, got {0}")]
    TooFewPoints(usize),

    #[error("no boundary found: alpha = {alpha} retained no triangles")]
    NoBoundary { alpha: f64 },

    #[error("triangulation failed: {0}")]
    Triangulation(String),
}

/// Errors raised when the boundary edge set cannot form a single simple cycle.
#[derive(Debug, Error)]
pub enum BoundaryError {
    #[error("empty boundary edge set at alpha = {alpha}")]
    EmptyBoundary { alpha: f64 },

    #[error("disconnected or branching boundary at alpha = {alpha}: vertices {vertices:?} do not have degree 2")]
    BranchingBoundary { alpha: f64, vertices: Vec<usize> },

    #[error("boundary at alpha = {alpha} is not a single cycle: {unused} edges unreached after the walk closed")]
    DisconnectedBoundary { alpha: f64, unused: usize },

    #[error("boundary walk at alpha = {alpha} did not close within {limit} steps")]
    WalkLimitExceeded { alpha: f64, limit: usize },
}

/// Convenience type alias for results using [`SilhouetteError`].
pub type Result<T> = std::result::Result<T, SilhouetteError>;
