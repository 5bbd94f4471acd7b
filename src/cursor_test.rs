use super::*;

#[test]
fn integer_coordinates() {
    assert_eq!(follower_transform(Point::new(120.0, 45.0)), "translate(120px, 45px)");
}

#[test]
fn origin() {
    assert_eq!(follower_transform(Point::new(0.0, 0.0)), "translate(0px, 0px)");
}

#[test]
fn fractional_and_negative_coordinates() {
    assert_eq!(follower_transform(Point::new(10.5, -3.25)), "translate(10.5px, -3.25px)");
}
