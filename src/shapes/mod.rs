mod convex_shape;

pub use self::convex_shape::{ConvexShape, MTV_MARGIN};
