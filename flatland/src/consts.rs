/// Constant used to determine if `f64`s are approximately equal.
pub const MAX_ABSOLUTE_DIFFERENCE: f64 = 1e-3;
