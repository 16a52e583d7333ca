use bitvec::prelude::*;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::listener::FitListener;
use super::page::Page;
use super::page_spec::{Orientation, PageSpec};
use super::point::Coordinate;
use super::rect::Rect;
use crate::error::{PageFitError, Result};

// Page fitting is k-means with a coverage stop instead of a fixed k:
//
// fit(D, template, R)
//    pages = []
//    while uncovered(D, pages) is not empty
//       s = random point of uncovered(D, pages)
//       pages += page centred on s with a copy of template
//       repeat R times
//          assign every point of D to the page with the nearest centre
//          for each page: centre = centre of bounds(points)
//                         orientation = the one containing more points
//    sort pages by mean input index of their points
//
// uncovered(D, pages)
//    return points of D outside every page rectangle

/// Covers an ordered route with fixed-size pages
///
/// # Example
///
/// ```
/// use pagefit::cluster::{Coordinate, Fitter, PageSpec};
///
/// let route = vec![Coordinate::new(0.0, 0.0), Coordinate::new(100_000.0, 0.0)];
/// let pages = Fitter::new(&route, PageSpec::a3(25_000.0)?, 10)?
///     .with_seed(42)
///     .fit()?;
/// assert_eq!(pages.len(), 2);
/// # Ok::<(), pagefit::PageFitError>(())
/// ```
pub struct Fitter<'a> {
    coordinates: &'a [Coordinate],
    template: PageSpec,
    refinement_iterations: usize,
    seed: u64,
    rng: StdRng,
    listener: Option<&'a mut dyn FitListener>,
    refinement_updates: bool,
    pages: Vec<Page>,
}

impl<'a> Fitter<'a> {
    /// Creates a fitter over `coordinates`
    ///
    /// # Arguments
    ///
    /// * `coordinates` - Route points in map units, at least one
    /// * `template` - Page spec copied into every new page
    /// * `refinement_iterations` - Assign and refresh passes after each new page
    ///
    /// # Errors
    ///
    /// [`PageFitError::InvalidInput`] for an empty route, a non-finite
    /// coordinate or zero iterations; [`PageFitError::DegenerateCoverage`]
    /// when a page centred on some coordinate would not contain it.
    pub fn new(
        coordinates: &'a [Coordinate],
        template: PageSpec,
        refinement_iterations: usize,
    ) -> Result<Self> {
        if coordinates.is_empty() {
            return Err(PageFitError::invalid(
                "coordinates",
                "at least one coordinate is required",
            ));
        }
        if refinement_iterations < 1 {
            return Err(PageFitError::invalid(
                "refinement iterations",
                "must be at least 1",
            ));
        }
        for (index, c) in coordinates.iter().enumerate() {
            if !c.is_finite() {
                return Err(PageFitError::invalid(
                    "coordinates",
                    format!("coordinate {index} ({}, {}) is not finite", c.x(), c.y()),
                ));
            }
            let coverable = [Orientation::Portrait, Orientation::Landscape]
                .into_iter()
                .all(|o| {
                    Rect::from_centre(c, template.scaled_width_for(o), template.scaled_height_for(o))
                        .contains(c)
                });
            if !coverable {
                return Err(PageFitError::DegenerateCoverage {
                    index,
                    x: c.x(),
                    y: c.y(),
                });
            }
        }

        let seed = rand::random::<u64>();
        Ok(Fitter {
            coordinates,
            template,
            refinement_iterations,
            seed,
            rng: StdRng::seed_from_u64(seed),
            listener: None,
            refinement_updates: false,
            pages: Vec::new(),
        })
    }

    /// Seeds the random source used to pick new page positions
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_listener(mut self, listener: &'a mut dyn FitListener) -> Self {
        self.listener = Some(listener);
        self
    }

    /// Notify the listener after every refinement pass instead of once per new page
    pub fn with_refinement_updates(mut self, enabled: bool) -> Self {
        self.refinement_updates = enabled;
        self
    }

    /// Seed of the random source, for replaying a run
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Runs the coverage loop and returns pages in route order
    ///
    /// Every input coordinate lies inside at least one returned page
    /// rectangle. Pages are sorted by the mean input index of their points;
    /// pages left without points sort last.
    pub fn fit(mut self) -> Result<Vec<Page>> {
        info!(
            "Fitting {} coordinates onto {} pages at scale {} (seed {})",
            self.coordinates.len(),
            self.template.page_id(),
            self.template.scale(),
            self.seed
        );

        loop {
            let uncovered = self.uncovered();
            if uncovered.is_empty() {
                break;
            }
            self.add_page(&uncovered);

            for step in 0..self.refinement_iterations {
                self.assign_all();
                for page in &mut self.pages {
                    page.refresh(self.coordinates);
                }

                if self.refinement_updates || step + 1 == self.refinement_iterations {
                    self.notify_updated()?;
                }
            }
        }

        order_pages(&mut self.pages);

        info!("Covered route with {} pages", self.pages.len());

        self.notify_updated()?;
        if let Some(listener) = self.listener.as_deref_mut() {
            listener.finished()?;
        }

        Ok(self.pages)
    }

    /// Returns indices of coordinates outside every page rectangle
    ///
    /// Pages that have not been refreshed yet cover nothing.
    pub fn uncovered(&self) -> Vec<usize> {
        let mut covered = bitvec![0; self.coordinates.len()];
        for page in &self.pages {
            let Some(rect) = page.page_rect() else {
                continue;
            };
            for (i, c) in self.coordinates.iter().enumerate() {
                if !covered[i] && rect.contains(c) {
                    covered.set(i, true);
                }
            }
        }

        covered.iter_zeros().collect()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    fn add_page(&mut self, uncovered: &[usize]) {
        let pick = uncovered[self.rng.random_range(0..uncovered.len())];
        let seed_point = self.coordinates[pick];
        let page = Page::new(self.pages.len(), seed_point, self.template.clone());
        self.pages.push(page);

        debug!(
            "Added page {} at ({}, {}), {} coordinates uncovered",
            self.pages.len(),
            seed_point.x(),
            seed_point.y(),
            uncovered.len()
        );
    }

    fn assign_all(&mut self) {
        assign_nearest(&mut self.pages, self.coordinates);
    }

    fn notify_updated(&mut self) -> Result<()> {
        if let Some(listener) = self.listener.as_deref_mut() {
            listener.updated(&self.pages)?;
        }
        Ok(())
    }
}

/// Assigns every coordinate to the page with the nearest centre
///
/// Ties go to the page earliest in `pages`.
pub(crate) fn assign_nearest(pages: &mut [Page], coordinates: &[Coordinate]) {
    for page in pages.iter_mut() {
        page.clear_points();
    }

    for (i, c) in coordinates.iter().enumerate() {
        let mut nearest = None;
        let mut nearest_distance = f64::INFINITY;
        for (p, page) in pages.iter().enumerate() {
            let distance = page.distance_squared(c);
            if nearest.is_none() || distance < nearest_distance {
                nearest = Some(p);
                nearest_distance = distance;
            }
        }

        if let Some(p) = nearest {
            pages[p].push_point(i);
        }
    }
}

/// Computes order keys and sorts pages by them
///
/// The sort is stable, so pages with equal keys, empty pages included,
/// keep their relative order.
pub(crate) fn order_pages(pages: &mut [Page]) {
    for page in pages.iter_mut() {
        page.compute_order_key();
    }
    pages.sort_by(|a, b| {
        let ka = a.order_key().unwrap_or(f64::INFINITY);
        let kb = b.order_key().unwrap_or(f64::INFINITY);
        ka.total_cmp(&kb)
    });
}
