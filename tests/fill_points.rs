
extern crate scanfill;

use std::collections::HashSet;

use scanfill::{fill_points, fill_points_with, points, DegenerateEdges, FillConfig, Point};

#[test_log::test]
fn unit_square() {
    let square = points(&[(0.,0.), (4.,0.), (4.,4.), (0.,4.)]);
    let got = fill_points(&square);
    let mut want = vec![];
    for y in 0 .. 4 {
        for x in 0 .. 4 {
            want.push(Point::new(x,y));
        }
    }
    assert_eq!(got, want);
}

#[test]
fn rectangle_with_offset() {
    let rect = points(&[(3.,2.), (8.,2.), (8.,5.), (3.,5.)]);
    let got = fill_points(&rect);
    assert_eq!(got.len(), 15);
    assert_eq!(got.first(), Some(&Point::new(3,2)));
    assert_eq!(got.last(), Some(&Point::new(7,4)));
}

#[test]
fn triangle_with_horizontal_edge() {
    let tri = points(&[(0.,0.), (8.,0.), (4.,4.)]);
    let got = fill_points(&tri);
    assert_eq!(got.len(), 8 + 6 + 4 + 2);
    // Nothing at or beyond the apex row
    assert!(got.iter().all(|p| p.y >= 0 && p.y < 4));
    let row3 : Vec<i64> = got.iter().filter(|p| p.y == 3).map(|p| p.x).collect();
    assert_eq!(row3, vec![3, 4]);
}

#[test]
fn right_triangle_area() {
    let tri = points(&[(0.,0.), (100.,0.), (0.,100.)]);
    let got = fill_points(&tri);
    // Rows 0..100 hold 100 - y pixels
    assert_eq!(got.len(), 5050);
    let area = 5000.0;
    assert!((got.len() as f64 - area).abs() / area < 0.02);
}

#[test]
fn hypotenuse_is_exclusive() {
    let tri = points(&[(0.,0.), (100.,0.), (0.,100.)]);
    let got = fill_points(&tri);
    let outside : Vec<&Point<i64>> = got.iter().filter(|p| p.x + p.y >= 100).collect();
    assert!(outside.is_empty(), "{:?}", outside);
}

#[test]
fn diamond_area() {
    let diamond = points(&[(4.,0.), (8.,4.), (4.,8.), (0.,4.)]);
    let got = fill_points(&diamond);
    assert_eq!(got.len(), 32);
    let row4 : Vec<i64> = got.iter().filter(|p| p.y == 4).map(|p| p.x).collect();
    assert_eq!(row4, (0 .. 8).collect::<Vec<_>>());
}

#[test]
fn concave_u_shape() {
    let u = points(&[(0.,0.), (6.,0.), (6.,6.), (4.,6.),
                     (4.,2.), (2.,2.), (2.,6.), (0.,6.)]);
    let got = fill_points(&u);
    assert_eq!(got.len(), 36 - 8);
    let row3 : Vec<i64> = got.iter().filter(|p| p.y == 3).map(|p| p.x).collect();
    assert_eq!(row3, vec![0, 1, 4, 5]);
}

#[test]
fn notch_has_no_duplicate_pixels() {
    // The notch edges start right of the long diagonal's lowest x
    //   but lie left of it on the rows they cover
    let notch = points(&[(0.,0.), (20.,20.), (10.,20.), (12.,15.), (0.,20.)]);
    let got = fill_points(&notch);
    let set : HashSet<(i64,i64)> = got.iter().map(|p| (p.x, p.y)).collect();
    assert_eq!(set.len(), got.len());

    let row16 : Vec<i64> = got.iter().filter(|p| p.y == 16).map(|p| p.x).collect();
    let mut want : Vec<i64> = (0 .. 10).collect();
    want.extend(12 .. 16);
    assert_eq!(row16, want);
}

#[test]
fn fractional_vertices() {
    let rect = points(&[(0.5,0.5), (3.5,0.5), (3.5,2.5), (0.5,2.5)]);
    let got = fill_points(&rect);
    assert_eq!(got, vec![
        Point::new(1,1), Point::new(2,1), Point::new(3,1),
        Point::new(1,2), Point::new(2,2), Point::new(3,2),
    ]);
}

#[test]
fn negative_coordinates() {
    let square = points(&[(-2.,-2.), (0.,-2.), (0.,0.), (-2.,0.)]);
    let got = fill_points(&square);
    assert_eq!(got, vec![
        Point::new(-2,-2), Point::new(-1,-2),
        Point::new(-2,-1), Point::new(-1,-1),
    ]);
}

#[test]
fn winding_direction_does_not_matter() {
    let ccw = points(&[(0.,0.), (6.,1.), (5.,7.), (1.,5.)]);
    let cw : Vec<_> = ccw.iter().rev().cloned().collect();
    assert_eq!(fill_points(&ccw), fill_points(&cw));
}

#[test]
fn idempotent() {
    let poly = points(&[(1.,1.), (9.,2.), (7.,8.), (2.,6.)]);
    let a = fill_points(&poly);
    let b = fill_points(&poly);
    assert!(!a.is_empty());
    assert_eq!(a, b);
}

#[test]
fn fewer_than_three_points() {
    assert!(fill_points(&[]).is_empty());
    assert!(fill_points(&points(&[(1.,1.)])).is_empty());
    assert!(fill_points(&points(&[(0.,0.), (5.,5.)])).is_empty());
}

#[test]
fn collinear_horizontal_points() {
    assert!(fill_points(&points(&[(0.,3.), (2.,3.), (7.,3.)])).is_empty());
}

#[test]
fn vertical_rule_drops_square_sides() {
    let config = FillConfig::new().with_degenerate_edges(DegenerateEdges::Vertical);
    let square = points(&[(0.,0.), (4.,0.), (4.,4.), (0.,4.)]);
    let (got, report) = fill_points_with(&square, &config);
    assert!(got.is_empty());
    assert!(report.is_complete());
    assert!(report.skipped.is_empty());
}

#[test]
fn vertical_rule_matches_on_slanted_sides() {
    let config = FillConfig::new().with_degenerate_edges(DegenerateEdges::Vertical);
    let tri = points(&[(0.,0.), (8.,0.), (4.,4.)]);
    let (got, report) = fill_points_with(&tri, &config);
    assert_eq!(got, fill_points(&tri));
    assert!(report.is_complete());
}
