use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect as PixelRect;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::transform::MapTransform;
use crate::cluster::{Coordinate, Page, Rect};

const BACKGROUND_COLOUR: Rgba<u8> = Rgba([255, 255, 255, 255]);
const PAGE_BOUNDS_COLOUR: Rgba<u8> = Rgba([0, 0, 0, 255]);
const CLUSTER_BOUNDS_COLOUR: Rgba<u8> = Rgba([255, 0, 0, 255]);
const CENTROID_COLOUR: Rgba<u8> = Rgba([255, 0, 0, 255]);

const POINT_DIAMETER: i32 = 4;
const CENTROID_DIAMETER: i32 = 6;

/// Fixed seed so a page keeps its colour from frame to frame
pub const COLOUR_SEED: u64 = 999;

/// Draws pages and their points onto a fresh white image
///
/// Each page gets a random colour for its points, a black page outline, a
/// red cluster outline and a red centroid dot. Colours are drawn in page
/// order from a generator reseeded with [`COLOUR_SEED`] on every frame.
pub fn render_frame(
    pages: &[Page],
    coordinates: &[Coordinate],
    transform: &MapTransform,
    width: u32,
    height: u32,
) -> RgbaImage {
    let mut image = RgbaImage::from_pixel(width, height, BACKGROUND_COLOUR);
    let mut rng = StdRng::seed_from_u64(COLOUR_SEED);

    for page in pages {
        let colour: Rgba<u8> = Rgba([rng.random(), rng.random(), rng.random(), 255]);

        for &i in page.points() {
            draw_dot(&mut image, transform, &coordinates[i], POINT_DIAMETER, colour);
        }
        if let Some(rect) = page.page_rect() {
            draw_outline(&mut image, transform, &rect, PAGE_BOUNDS_COLOUR);
        }
        if let Some(rect) = page.cluster_rect() {
            draw_outline(&mut image, transform, &rect, CLUSTER_BOUNDS_COLOUR);
        }
        draw_dot(
            &mut image,
            transform,
            &page.centre(),
            CENTROID_DIAMETER,
            CENTROID_COLOUR,
        );
    }

    image
}

fn draw_dot(
    image: &mut RgbaImage,
    transform: &MapTransform,
    c: &Coordinate,
    diameter: i32,
    colour: Rgba<u8>,
) {
    let (x, y) = transform.to_image(c);
    draw_filled_circle_mut(image, (x as i32, y as i32), diameter / 2, colour);
}

fn draw_outline(image: &mut RgbaImage, transform: &MapTransform, rect: &Rect, colour: Rgba<u8>) {
    let (left, top, width, height) = transform.rect_to_image(rect);
    let (image_width, image_height) = image.dimensions();

    // Clip to one pixel beyond the image so cut edges stay off canvas
    let x0 = left.max(-1.0);
    let y0 = top.max(-1.0);
    let x1 = (left + width).min(f64::from(image_width));
    let y1 = (top + height).min(f64::from(image_height));
    if x1 < x0 || y1 < y0 {
        return;
    }

    let outline = PixelRect::at(x0 as i32, y0 as i32)
        .of_size((x1 - x0) as u32 + 1, (y1 - y0) as u32 + 1);
    draw_hollow_rect_mut(image, outline, colour);
}
