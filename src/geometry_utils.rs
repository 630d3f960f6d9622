use crate::Position;

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1. - t) + (b * t)
}

pub fn lerp_position(a: &Position, b: &Position, t: f32) -> Position {
    Position::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t), lerp(a.z, b.z, t))
}

pub fn distance(a: &Position, b: &Position) -> f32 {
    nalgebra::distance(a, b)
}

pub fn centroid(points: &[Position]) -> Option<Position> {
    let count = points.len();
    points
        .iter()
        .map(|p| p.coords)
        .reduce(|acc, el| acc + el)
        .map(|sum| Position::from(sum / count as f32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0., 10., 0.5), 5.);
        assert_eq!(lerp(0., 10., 1.), 10.);
        assert_eq!(lerp(4., 10., 0.), 4.);
    }

    #[test]
    fn test_lerp_position() {
        let a = Position::new(0., 0., 0.);
        let b = Position::new(2., 4., -8.);
        assert_eq!(lerp_position(&a, &b, 0.5), Position::new(1., 2., -4.));
    }

    #[test]
    fn test_distance() {
        assert_eq!(
            distance(&Position::new(0., 0., 0.), &Position::new(3., 4., 0.)),
            5.
        );
    }

    #[test]
    fn test_centroid() {
        assert_eq!(centroid(&[]), None);
        assert_eq!(
            centroid(&[Position::new(0., 0., 0.), Position::new(2., 2., 2.)]),
            Some(Position::new(1., 1., 1.))
        );
    }
}
