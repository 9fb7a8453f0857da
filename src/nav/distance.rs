use super::models::{Location, Node};

/// Euclidean distance on the horizontal plane; the vertical axis is ignored.
pub fn planar_distance(a: &Location, b: &Location) -> f64 {
    let dx = a.x - b.x;
    let dz = a.z - b.z;
    (dx * dx + dz * dz).sqrt()
}

pub fn node_distance(a: &Node, b: &Node) -> f64 {
    planar_distance(&a.location, &b.location)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_vertical_axis() {
        let a = Location::new(0.0, 0.0, 0.0);
        let b = Location::new(3.0, 900.0, 4.0);
        assert_eq!(planar_distance(&a, &b), 5.0);
    }

    #[test]
    fn symmetric_and_zero_on_self() {
        let a = Location::new(-10.0, 5.0, 20.0);
        let b = Location::new(50.0, 110.0, -60.0);
        assert_eq!(planar_distance(&a, &b), planar_distance(&b, &a));
        assert_eq!(planar_distance(&a, &a), 0.0);
        assert_eq!(planar_distance(&a, &b), 100.0);
    }
}
