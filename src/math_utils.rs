/// Mathematical utilities for cubic curves and point calculations
/// Type alias for cubic Bezier segment: (start_point, control_point_1, control_point_2, end_point)
pub type CubicBezierSegment<T> = ((T, T), (T, T), (T, T), (T, T));

/// The ratio that makes four cubic arcs best approximate a circle: 4/3 * (sqrt(2) - 1)
pub fn kappa<T>() -> T
where
    T: num_traits::Float,
{
    let two = T::one() + T::one();
    let four_thirds = (two + two) / (two + T::one());
    four_thirds * (two.sqrt() - T::one())
}

/// Evaluate a cubic Bezier segment at parameter `t` in [0, 1]
pub fn cubic_point<T>(seg: CubicBezierSegment<T>, t: T) -> (T, T)
where
    T: num_traits::Float,
{
    let (p0, p1, p2, p3) = seg;
    let three = T::one() + T::one() + T::one();
    let u = T::one() - t;
    let u2 = u * u;
    let t2 = t * t;
    let x = u2 * u * p0.0 + three * u2 * t * p1.0 + three * u * t2 * p2.0 + t2 * t * p3.0;
    let y = u2 * u * p0.1 + three * u2 * t * p1.1 + three * u * t2 * p2.1 + t2 * t * p3.1;
    (x, y)
}

/// Calculate distance between two points
pub fn distance<T>(p1: (T, T), p2: (T, T)) -> T
where
    T: num_traits::Float,
{
    let dx = p2.0 - p1.0;
    let dy = p2.1 - p1.1;
    (dx * dx + dy * dy).sqrt()
}

/// Largest deviation from `radius` of any sampled point on the segments,
/// measured from the origin.
///
/// `samples` is the number of steps per segment; both ends are included.
pub fn max_radial_error<T>(segments: &[CubicBezierSegment<T>], radius: T, samples: usize) -> T
where
    T: num_traits::Float,
{
    let origin = (T::zero(), T::zero());
    let steps = samples.max(1);
    let mut max_err = T::zero();

    for seg in segments {
        for i in 0..=steps {
            let t = T::from(i).unwrap_or_else(T::zero) / T::from(steps).unwrap_or_else(T::one);
            let err = (distance(origin, cubic_point(*seg, t)) - radius).abs();
            if err > max_err {
                max_err = err;
            }
        }
    }

    max_err
}
