use gridbmp::transform;
use gridbmp::{Grid, Pixel};

fn gradient(width: usize, height: usize) -> Grid {
    Grid::from_fn(width, height, |row, col| {
        Pixel::new(
            (row * 40 % 256) as u8,
            (col * 60 % 256) as u8,
            ((row + col) * 25 % 256) as u8,
        )
    })
    .unwrap()
}

#[test]
fn identity_is_idempotent() {
    let grid = gradient(4, 3);
    let once = transform::identity(&grid);
    let twice = transform::identity(&once);
    assert_eq!(once, grid);
    assert_eq!(twice, once);
}

#[test]
fn grayscale_averages_channels() {
    let grid = gradient(5, 5);
    let gray = transform::grayscale(&grid);
    for (row, pixels) in gray.rows().enumerate() {
        for (col, px) in pixels.iter().enumerate() {
            assert_eq!(px.red, px.green);
            assert_eq!(px.green, px.blue);
            assert_eq!(px.red, grid.get(row, col).average());
        }
    }
}

#[test]
fn grayscale_pure_red_becomes_85() {
    let grid = Grid::from_fn(2, 2, |_, _| Pixel::new(255, 0, 0)).unwrap();
    let gray = transform::grayscale(&grid);
    for px in gray.pixels() {
        // 255 / 3 with integer division
        assert_eq!(*px, Pixel::splat(85));
    }
}

#[test]
fn high_contrast_is_binary() {
    let grid = gradient(6, 4);
    let out = transform::high_contrast(&grid);
    for (row, pixels) in out.rows().enumerate() {
        for (col, px) in pixels.iter().enumerate() {
            assert_eq!(px.red, px.green);
            assert_eq!(px.green, px.blue);
            let expected = if grid.get(row, col).average() >= 127 {
                255
            } else {
                0
            };
            assert_eq!(px.red, expected);
        }
    }
}

#[test]
fn rotate90_transposes() {
    let grid = gradient(5, 3);
    let out = transform::rotate90(&grid);
    assert_eq!(out.width(), 3);
    assert_eq!(out.height(), 5);
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            assert_eq!(out.get(col, grid.height() - 1 - row), grid.get(row, col));
        }
    }
}

#[test]
fn four_quarter_turns_are_identity() {
    let grid = gradient(4, 7);
    assert_eq!(transform::rotate_quarters(&grid, 0), grid);
    assert_eq!(transform::rotate_quarters(&grid, 4), grid);
    assert_eq!(transform::rotate_quarters(&grid, 8), grid);

    let twice = transform::rotate90(&transform::rotate90(&grid));
    assert_eq!(transform::rotate_quarters(&grid, 2), twice);
}

#[test]
fn enlarge_replicates_pixels() {
    let grid = gradient(3, 2);
    let out = transform::enlarge(&grid, 2, 3).unwrap();
    assert_eq!(out.width(), 6);
    assert_eq!(out.height(), 6);
    for row in 0..out.height() {
        for col in 0..out.width() {
            assert_eq!(out.get(row, col), grid.get(row / 3, col / 2));
        }
    }
}

#[test]
fn enlarge_single_pixel() {
    let grid = Grid::from_fn(1, 1, |_, _| Pixel::new(10, 20, 30)).unwrap();
    let out = transform::enlarge(&grid, 2, 3).unwrap();
    assert_eq!(out.width(), 2);
    assert_eq!(out.height(), 3);
    for px in out.pixels() {
        assert_eq!(*px, Pixel::new(10, 20, 30));
    }
}

#[test]
fn enlarge_rejects_zero_scale() {
    let grid = gradient(2, 2);
    assert!(transform::enlarge(&grid, 0, 1).is_err());
    assert!(transform::enlarge(&grid, 1, 0).is_err());
}

#[test]
fn lighten_darken_truncate_toward_zero() {
    let grid = Grid::from_fn(3, 1, |_, col| match col {
        0 => Pixel::splat(0),
        1 => Pixel::splat(100),
        _ => Pixel::splat(255),
    })
    .unwrap();

    let dark = transform::darken(&grid);
    assert_eq!(dark.get(0, 0), Pixel::splat(0));
    assert_eq!(dark.get(0, 1), Pixel::splat(80)); // 100 * 0.8
    assert_eq!(dark.get(0, 2), Pixel::splat(204)); // 255 * 0.8

    let light = transform::lighten(&grid);
    // 255 * 0.8 rounds to exactly 204.0 in f64, so 255 - 204 = 51
    assert_eq!(light.get(0, 0), Pixel::splat(51));
    assert_eq!(light.get(0, 1), Pixel::splat(131)); // 255 - 155 * 0.8
    assert_eq!(light.get(0, 2), Pixel::splat(255));
}

#[test]
fn clarendon_splits_on_average() {
    let grid = Grid::from_fn(3, 1, |_, col| match col {
        0 => Pixel::splat(200), // avg 200: highlight
        1 => Pixel::splat(50),  // avg 50: shadow
        _ => Pixel::splat(120), // avg 120: midtone, untouched
    })
    .unwrap();

    let out = transform::clarendon(&grid);
    assert_eq!(out.get(0, 0), Pixel::splat(238)); // 255 - 55 * 0.3
    assert_eq!(out.get(0, 1), Pixel::splat(15)); // 50 * 0.3
    assert_eq!(out.get(0, 2), Pixel::splat(120));
}

#[test]
fn vignette_darkens_corners_not_center() {
    let grid = Grid::from_fn(5, 5, |_, _| Pixel::splat(100)).unwrap();
    let out = transform::vignette(&grid);

    // Center has distance 0, scale 1: unchanged.
    assert_eq!(out.get(2, 2), Pixel::splat(100));
    // Corner distance sqrt(8): 100 * (5 - sqrt(8)) / 5 truncates to 43.
    assert_eq!(out.get(0, 0), Pixel::splat(43));
    assert_eq!(out.get(4, 4), Pixel::splat(43));
    // One step right of a corner: distance sqrt(5) -> 55.
    assert_eq!(out.get(0, 1), Pixel::splat(55));
}

#[test]
fn posterize_five_colors() {
    let cases = [
        (Pixel::new(200, 200, 200), Pixel::splat(255)), // sum 600
        (Pixel::new(50, 50, 10), Pixel::splat(0)),      // sum 110
        (Pixel::new(200, 100, 10), Pixel::new(255, 0, 0)),
        (Pixel::new(100, 200, 10), Pixel::new(0, 255, 0)),
        (Pixel::new(10, 100, 200), Pixel::new(0, 0, 255)),
        // Ties resolve red before green before blue.
        (Pixel::new(180, 180, 40), Pixel::new(255, 0, 0)),
        (Pixel::new(40, 180, 180), Pixel::new(0, 255, 0)),
    ];
    for (input, expected) in cases {
        let grid = Grid::from_fn(1, 1, |_, _| input).unwrap();
        let out = transform::posterize(&grid);
        assert_eq!(out.get(0, 0), expected, "input {input:?}");
    }
}

#[test]
fn transforms_do_not_mutate_input() {
    let grid = gradient(4, 4);
    let copy = grid.clone();
    let _ = transform::vignette(&grid);
    let _ = transform::posterize(&grid);
    let _ = transform::rotate90(&grid);
    let _ = transform::enlarge(&grid, 2, 2).unwrap();
    assert_eq!(grid, copy);
}
