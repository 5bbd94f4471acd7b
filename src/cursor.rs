//! Mouse follower transform.

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;

use crate::geometry::Point;

/// Transform that places the follower's origin at the pointer.
#[must_use]
pub fn follower_transform(pointer: Point) -> String {
    format!("translate({}px, {}px)", pointer.x, pointer.y)
}
