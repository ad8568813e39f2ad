use num_traits::{Float, FromPrimitive};

/// Linear interpolation between `start` and `end` at parameter `t`.
#[inline]
pub fn lerp<T: Float>(start: T, end: T, t: T) -> T {
    start + t * (end - start)
}

/// Returns `n` evenly spaced values from `y_start` to `y_end`.
///
/// `n` must be at least 2. Each value is computed as
/// `lerp(y_start, y_end, i / (n - 1))` rather than by accumulating a
/// step, so the output does not drift with `n`.
pub fn linspace<T>(y_start: T, y_end: T, n: usize) -> impl Iterator<Item = T>
where
    T: Float + FromPrimitive,
{
    let last = T::from_usize(n - 1).unwrap();
    (0..n).map(move |i| lerp(y_start, y_end, T::from_usize(i).unwrap() / last))
}
