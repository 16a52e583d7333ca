#[cfg(test)]
mod tests {
    use crate::cluster::{Coordinate, Fitter, Orientation, PageSpec};
    use crate::error::PageFitError;
    use crate::io::*;

    #[test]
    fn test_read_coordinates_trims_and_skips_blank_lines() {
        let text = "1.5, 2.5\n  -3,4  \n\n1e3,0.25\n";
        let coordinates = read_coordinates(text.as_bytes(), DEFAULT_DELIMITER).unwrap();
        assert_eq!(
            coordinates,
            vec![
                Coordinate::new(1.5, 2.5),
                Coordinate::new(-3.0, 4.0),
                Coordinate::new(1000.0, 0.25),
            ]
        );
    }

    #[test]
    fn test_read_coordinates_custom_delimiter() {
        let text = "10;20\n30;40";
        let coordinates = read_coordinates(text.as_bytes(), b';').unwrap();
        assert_eq!(
            coordinates,
            vec![Coordinate::new(10.0, 20.0), Coordinate::new(30.0, 40.0)]
        );
    }

    #[test]
    fn test_read_coordinates_reports_line() {
        let cases = vec![
            ("bad number", "1,2\n3,x\n", 2),
            ("too many fields", "1,2,3\n", 1),
            ("too few fields", "1,2\n3,4\n5\n", 3),
        ];

        for (name, text, expected_line) in cases {
            match read_coordinates(text.as_bytes(), DEFAULT_DELIMITER) {
                Err(PageFitError::Parse { line, .. }) => {
                    assert_eq!(line, expected_line, "Test case: {}", name)
                }
                other => panic!("Test case: {}: expected parse error, got {:?}", name, other),
            }
        }
    }

    #[test]
    fn test_coordinates_round_trip() {
        let coordinates = vec![
            Coordinate::new(0.1, 1.0 / 3.0),
            Coordinate::new(-1e-300, 123456789.123456789),
            Coordinate::new(f64::MAX, -0.0),
            Coordinate::new(530123.45, 181234.5),
        ];

        let mut out = Vec::new();
        write_coordinates(&mut out, &coordinates, DEFAULT_DELIMITER).unwrap();
        let back = read_coordinates(out.as_slice(), DEFAULT_DELIMITER).unwrap();
        assert_eq!(back, coordinates);
    }

    #[test]
    fn test_write_coordinates_format() {
        let mut out = Vec::new();
        write_coordinates(
            &mut out,
            &[Coordinate::new(1.5, 2.0), Coordinate::new(-3.25, 0.0)],
            b'\t',
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1.5\t2\n-3.25\t0\n");
    }

    #[test]
    fn test_write_pages_format() {
        let coordinates = vec![Coordinate::new(0.0, 0.0), Coordinate::new(100000.0, 0.0)];
        let pages = Fitter::new(&coordinates, PageSpec::a3(25000.0).unwrap(), 10)
            .unwrap()
            .with_seed(42)
            .fit()
            .unwrap();

        let mut out = Vec::new();
        write_pages(&mut out, &pages, DEFAULT_DELIMITER).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0,0,A3,false,25000\n100000,0,A3,false,25000\n"
        );
    }

    #[test]
    fn test_read_pages() {
        let text = "4500,0,A3,true,25000\n0.5,-2,A4,false,10000\n";
        let records = read_pages(text.as_bytes(), DEFAULT_DELIMITER).unwrap();
        assert_eq!(
            records,
            vec![
                PageRecord {
                    centre: Coordinate::new(4500.0, 0.0),
                    page_id: "A3".to_string(),
                    orientation: Orientation::Landscape,
                    scale: 25000.0,
                },
                PageRecord {
                    centre: Coordinate::new(0.5, -2.0),
                    page_id: "A4".to_string(),
                    orientation: Orientation::Portrait,
                    scale: 10000.0,
                },
            ]
        );
    }

    #[test]
    fn test_read_pages_rejects_bad_orientation() {
        let text = "0,0,A3,sideways,25000\n";
        assert!(matches!(
            read_pages(text.as_bytes(), DEFAULT_DELIMITER),
            Err(PageFitError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn test_files_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let route_path = dir.path().join("route.txt");
        let pages_path = dir.path().join("pages.txt");

        let coordinates: Vec<Coordinate> = (0..20)
            .map(|i| Coordinate::new(i as f64 * 2500.0, (i % 3) as f64 * 1000.0))
            .collect();
        save_coordinates(&route_path, &coordinates, b';').unwrap();
        let loaded = load_coordinates(&route_path, b';').unwrap();
        assert_eq!(loaded, coordinates);

        let pages = Fitter::new(&loaded, PageSpec::a4(25000.0).unwrap(), 10)
            .unwrap()
            .with_seed(7)
            .fit()
            .unwrap();
        save_pages(&pages_path, &pages, b';').unwrap();
        let records = load_pages(&pages_path, b';').unwrap();

        let expected: Vec<PageRecord> = pages.iter().map(PageRecord::from).collect();
        assert_eq!(records, expected);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        assert!(matches!(
            load_coordinates(&missing, DEFAULT_DELIMITER),
            Err(PageFitError::Io { .. })
        ));
    }
}
