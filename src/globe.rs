use std::f64::consts::{PI, TAU};

/// Wireframe sphere made of meridian arcs and latitude rings
pub struct Globe {
    /// Each polyline is drawn as consecutive line segments
    pub polylines: Vec<Vec<[f64; 3]>>,
}

impl Globe {
    /// Builds a unit-radius wireframe.
    ///
    /// `meridians` pole-to-pole arcs are spread evenly in longitude and
    /// `parallels - 1` rings split the vertical diameter into `parallels`
    /// equal bands. Every line is sampled with `segments + 1` points.
    pub fn wireframe(meridians: usize, parallels: usize, segments: usize) -> Self {
        let segments = segments.max(3);
        let mut polylines = Vec::with_capacity(meridians + parallels.saturating_sub(1));

        for i in 0..meridians {
            let phi = i as f64 / meridians as f64 * TAU;
            let points = (0..=segments)
                .map(|j| {
                    let theta = j as f64 / segments as f64 * PI;
                    [theta.sin() * phi.cos(), theta.cos(), theta.sin() * phi.sin()]
                })
                .collect();
            polylines.push(points);
        }

        for i in 1..parallels {
            let y = -1.0 + 2.0 * i as f64 / parallels as f64;
            let ring_radius = (1.0 - y * y).sqrt();
            let points = (0..=segments)
                .map(|j| {
                    let t = j as f64 / segments as f64 * TAU;
                    [ring_radius * t.cos(), y, ring_radius * t.sin()]
                })
                .collect();
            polylines.push(points);
        }

        Globe { polylines }
    }
}
