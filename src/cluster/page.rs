use super::page_spec::{Orientation, PageSpec};
use super::point::Coordinate;
use super::rect::{Rect, bounds};

/// Page represents one map sheet placement while fitting
///
/// Like a k-means cluster, a page holds the indices of the route points
/// assigned to it in the latest assignment step. Its centre follows the
/// centre of their bounding box, and its rectangle follows the centre and
/// the chosen orientation.
#[derive(Debug, Clone)]
pub struct Page {
    /// Creation order within a fit
    pub id: usize,
    centre: Coordinate,
    spec: PageSpec,
    /// Indices into the fitted coordinate list
    points: Vec<usize>,
    cluster_rect: Option<Rect>,
    page_rect: Option<Rect>,
    order_key: Option<f64>,
}

impl Page {
    /// Creates a page with no assigned points and no page rectangle yet
    pub fn new(id: usize, centre: Coordinate, spec: PageSpec) -> Self {
        Page {
            id,
            centre,
            spec,
            points: Vec::new(),
            cluster_rect: None,
            page_rect: None,
            order_key: None,
        }
    }

    pub fn centre(&self) -> Coordinate {
        self.centre
    }

    pub fn spec(&self) -> &PageSpec {
        &self.spec
    }

    /// Mutable access to this page's own spec
    ///
    /// The page rectangle is not recomputed; call [`Page::choose_orientation`]
    /// or [`Page::refresh`] for that.
    pub fn spec_mut(&mut self) -> &mut PageSpec {
        &mut self.spec
    }

    pub fn orientation(&self) -> Orientation {
        self.spec.orientation()
    }

    pub fn points(&self) -> &[usize] {
        &self.points
    }

    /// Bounding box of the assigned points; `None` until the page has had points
    pub fn cluster_rect(&self) -> Option<Rect> {
        self.cluster_rect
    }

    /// Map area covered by the page; `None` until the first refresh
    pub fn page_rect(&self) -> Option<Rect> {
        self.page_rect
    }

    /// Mean input index of the assigned points, set once fitting completes
    pub fn order_key(&self) -> Option<f64> {
        self.order_key
    }

    pub fn covers(&self, c: &Coordinate) -> bool {
        self.page_rect.is_some_and(|r| r.contains(c))
    }

    /// Returns squared distance from the page centre to `point`
    pub fn distance_squared(&self, point: &Coordinate) -> f64 {
        self.centre.sq_dist(point)
    }

    pub(crate) fn clear_points(&mut self) {
        self.points.clear();
    }

    pub(crate) fn push_point(&mut self, index: usize) {
        self.points.push(index);
    }

    /// Re-centres the page on its assigned points and picks an orientation
    ///
    /// A page without points keeps its centre and previous cluster
    /// rectangle, but still gets a page rectangle around that centre.
    pub fn refresh(&mut self, coordinates: &[Coordinate]) {
        if let Ok(rect) = bounds(self.points.iter().map(|&i| coordinates[i])) {
            self.cluster_rect = Some(rect);
            self.centre = rect.centre();
        }

        self.choose_orientation(coordinates);
    }

    /// Commits the orientation whose rectangle contains more assigned points
    ///
    /// Ties, including the empty page, go to portrait.
    pub fn choose_orientation(&mut self, coordinates: &[Coordinate]) {
        let portrait = self.candidate_rect(Orientation::Portrait);
        let landscape = self.candidate_rect(Orientation::Landscape);

        let in_portrait = self.count_contained(&portrait, coordinates);
        let in_landscape = self.count_contained(&landscape, coordinates);

        if in_portrait >= in_landscape {
            self.spec.set_portrait();
            self.page_rect = Some(portrait);
        } else {
            self.spec.set_landscape();
            self.page_rect = Some(landscape);
        }
    }

    /// Rectangle this page would occupy in `orientation` around its current centre
    pub fn candidate_rect(&self, orientation: Orientation) -> Rect {
        Rect::from_centre(
            &self.centre,
            self.spec.scaled_width_for(orientation),
            self.spec.scaled_height_for(orientation),
        )
    }

    /// Counts assigned points inside `rect`
    pub fn count_contained(&self, rect: &Rect, coordinates: &[Coordinate]) -> usize {
        self.points
            .iter()
            .filter(|&&i| rect.contains(&coordinates[i]))
            .count()
    }

    /// Sets the order key to the mean index of the assigned points
    ///
    /// Pages without points get `+inf` so they sort after every other page.
    pub fn compute_order_key(&mut self) {
        let key = if self.points.is_empty() {
            f64::INFINITY
        } else {
            let sum: usize = self.points.iter().sum();
            sum as f64 / self.points.len() as f64
        };
        self.order_key = Some(key);
    }
}
