use kurbo::{Point, Vec2};

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for f32 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        (*a as f64 + ((*b as f64 - *a as f64) * t)) as f32
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

pub fn lerp<T: Lerp>(a: &T, b: &T, t: f64) -> T {
    T::lerp(a, b, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f64_lerp_hits_endpoints_and_midpoint() {
        assert_eq!(lerp(&50.0, &-5.0, 0.0), 50.0);
        assert_eq!(lerp(&50.0, &-5.0, 1.0), -5.0);
        assert_eq!(lerp(&50.0, &-5.0, 0.5), 22.5);
    }

    #[test]
    fn point_lerp_is_componentwise() {
        let a = Point::new(0.0, 10.0);
        let b = Point::new(4.0, 30.0);
        let m = <Point as Lerp>::lerp(&a, &b, 0.25);
        assert_eq!(m, Point::new(1.0, 15.0));
    }
}
