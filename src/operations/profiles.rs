use crate::error::Result;
use crate::math::polygon_2d::edge_segments;
use crate::math::Point2;

use super::{ExtractOutline, OffsetPath};

/// Default manufacturing inset applied to the board outline, in millimetres.
pub const DEFAULT_BOARD_INSET: f64 = 2.5;

/// The silhouettes derived from one point cloud.
///
/// All three polygons are anticlockwise. The case outline feeds the
/// solid-geometry compositor directly; the board outline exists both
/// un-inset (for cutout placement against the case walls) and inset by the
/// manufacturing tolerance (the shape actually cut from the board).
#[derive(Debug, Clone)]
pub struct Profiles {
    /// Case silhouette.
    pub case_outline: Vec<Point2>,
    /// Board silhouette before the manufacturing inset.
    pub board_outline: Vec<Point2>,
    /// Board silhouette inset by the manufacturing tolerance.
    pub board_inset: Vec<Point2>,
}

impl Profiles {
    /// Closed edge segments of the inset board outline, consecutive point
    /// pairs with the last segment connecting back to the first point.
    /// This is the form the board-file writer consumes as edge cuts.
    #[must_use]
    pub fn board_edge_cuts(&self) -> Vec<(Point2, Point2)> {
        edge_segments(&self.board_inset)
    }
}

/// Runs the outline pipeline twice over one point cloud — once with the case
/// alpha and once with the board alpha — and insets the board outline.
///
/// The two alphas are independent: the case typically uses a looser value
/// (smoother hull around the whole device) and the board a tighter one
/// (following key clusters more closely).
#[derive(Debug)]
pub struct BoardProfiles {
    case_alpha: f64,
    board_alpha: f64,
    inset: f64,
}

impl BoardProfiles {
    /// Creates a new profile generation with the default manufacturing
    /// inset.
    #[must_use]
    pub fn new(case_alpha: f64, board_alpha: f64) -> Self {
        Self {
            case_alpha,
            board_alpha,
            inset: DEFAULT_BOARD_INSET,
        }
    }

    /// Overrides the manufacturing inset distance.
    #[must_use]
    pub fn with_inset(mut self, inset: f64) -> Self {
        self.inset = inset;
        self
    }

    /// Executes both pipeline runs and the board inset.
    ///
    /// # Errors
    ///
    /// Propagates any configuration, geometry, or boundary error from the
    /// underlying runs; a failure in either run fails the whole generation
    /// (no partial output).
    pub fn execute(&self, points: &[Point2]) -> Result<Profiles> {
        let case_outline = ExtractOutline::new(self.case_alpha).execute(points)?;
        let board_outline = ExtractOutline::new(self.board_alpha).execute(points)?;
        let board_inset = OffsetPath::new(self.inset).execute(&board_outline)?;

        Ok(Profiles {
            case_outline,
            board_outline,
            board_inset,
        })
    }
}
