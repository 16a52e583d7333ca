#[cfg(test)]
mod tests {
    use crate::cluster::{Coordinate, Rect};
    use crate::render::MapTransform;

    #[test]
    fn test_uniform_scale_north_up() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 50.0);
        let t = MapTransform::fit_to_bounds(&bounds, 200, 200);

        assert_eq!(t.scale(), 2.0);
        assert_eq!(t.to_image(&Coordinate::new(0.0, 0.0)), (0.0, 100.0));
        assert_eq!(t.to_image(&Coordinate::new(100.0, 50.0)), (200.0, 0.0));
        assert_eq!(t.to_image(&Coordinate::new(50.0, 25.0)), (100.0, 50.0));
    }

    #[test]
    fn test_rect_to_image() {
        let bounds = Rect::new(10.0, 10.0, 40.0, 40.0);
        let t = MapTransform::fit_to_bounds(&bounds, 80, 120);
        assert_eq!(t.scale(), 2.0);

        let (left, top, width, height) = t.rect_to_image(&Rect::new(20.0, 30.0, 5.0, 10.0));
        assert_eq!((left, top, width, height), (20.0, 20.0, 10.0, 20.0));
    }

    #[test]
    fn test_degenerate_bounds() {
        let line = Rect::new(0.0, 5.0, 100.0, 0.0);
        assert_eq!(MapTransform::fit_to_bounds(&line, 200, 100).scale(), 2.0);

        let column = Rect::new(5.0, 0.0, 0.0, 50.0);
        assert_eq!(MapTransform::fit_to_bounds(&column, 200, 100).scale(), 2.0);

        let point = Rect::new(5.0, 5.0, 0.0, 0.0);
        let t = MapTransform::fit_to_bounds(&point, 200, 100);
        assert_eq!(t.scale(), 1.0);
        assert_eq!(t.to_image(&Coordinate::new(5.0, 5.0)), (0.0, 0.0));
    }
}
