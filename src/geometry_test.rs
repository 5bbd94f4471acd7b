#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn rect_center() {
    let r = Rect::new(10.0, 20.0, 100.0, 50.0);
    assert_eq!(r.center(), Point::new(60.0, 45.0));
}

#[test]
fn normalized_offset_center_is_zero() {
    let r = Rect::new(10.0, 20.0, 100.0, 50.0);
    let off = r.normalized_offset(Point::new(60.0, 45.0)).unwrap();
    assert!(approx_eq(off.x, 0.0));
    assert!(approx_eq(off.y, 0.0));
}

#[test]
fn normalized_offset_corners_are_unit() {
    let r = Rect::new(0.0, 0.0, 200.0, 100.0);
    let tl = r.normalized_offset(Point::new(0.0, 0.0)).unwrap();
    assert!(approx_eq(tl.x, -1.0));
    assert!(approx_eq(tl.y, -1.0));
    let br = r.normalized_offset(Point::new(200.0, 100.0)).unwrap();
    assert!(approx_eq(br.x, 1.0));
    assert!(approx_eq(br.y, 1.0));
}

#[test]
fn normalized_offset_degenerate_rect_is_none() {
    assert!(Rect::new(0.0, 0.0, 0.0, 100.0).normalized_offset(Point::new(0.0, 0.0)).is_none());
    assert!(Rect::new(0.0, 0.0, 100.0, 0.0).normalized_offset(Point::new(0.0, 0.0)).is_none());
}
