use impact_core::constants::{ROOT_THREE, ROOT_TWO_THIRDS};
use impact_core::region::Bounds;

/// One candidate lattice coordinate plus its walk indices.
/// The indices are monotone visit counters; only `iz` carries meaning (it
/// drives the layer parity shifts below), the others exist for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Site {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub ix: u64,
    pub iy: u64,
    pub iz: u64,
}

/// Lazy walk over the hexagonal close-packed lattice sites of a box.
///
/// Three nested sweeps with inclusive stops: z in steps of delta*sqrt(3)/4,
/// y in steps of delta, x in steps of 2*delta*sqrt(2/3). The ABAB stacking
/// comes from a 4-layer parity pattern on the sweep starts:
/// layers with iz % 4 in {1, 2} shift y by delta/2, layers with
/// iz % 4 in {1, 3} shift x by delta*sqrt(2/3).
///
/// A box axis with start == stop still contributes one coordinate; an axis
/// with start > stop contributes none.
pub struct HcpLattice {
    delta: f64,
    bounds: Bounds,
    x: f64,
    y: f64,
    z: f64,
    ix: u64,
    iy: u64,
    iz: u64,
    exhausted: bool,
}

impl HcpLattice {
    pub fn new(delta: f64, bounds: Bounds) -> Self {
        let mut walk = Self {
            delta,
            bounds,
            x: bounds.x_start,
            y: bounds.y_start,
            z: bounds.z_start,
            ix: 0,
            iy: 0,
            iz: 0,
            exhausted: bounds.z_start > bounds.z_stop,
        };
        if !walk.exhausted {
            walk.y = walk.row_y_start();
            walk.x = walk.row_x_start();
        }
        walk
    }

    fn row_y_start(&self) -> f64 {
        if self.iz % 4 == 1 || self.iz % 4 == 2 {
            self.bounds.y_start + 0.5 * self.delta
        } else {
            self.bounds.y_start
        }
    }

    fn row_x_start(&self) -> f64 {
        if self.iz % 4 == 1 || self.iz % 4 == 3 {
            self.bounds.x_start + self.delta * ROOT_TWO_THIRDS
        } else {
            self.bounds.x_start
        }
    }

    fn x_step(&self) -> f64 {
        2.0 * self.delta * ROOT_TWO_THIRDS
    }

    fn z_step(&self) -> f64 {
        0.25 * self.delta * ROOT_THREE
    }
}

impl Iterator for HcpLattice {
    type Item = Site;

    fn next(&mut self) -> Option<Site> {
        if self.exhausted {
            return None;
        }
        loop {
            // A shifted row start can overshoot the stop; the outer sweeps
            // continue past such empty rows.
            if self.y > self.bounds.y_stop {
                self.z += self.z_step();
                self.iz += 1;
                if self.z > self.bounds.z_stop {
                    self.exhausted = true;
                    return None;
                }
                self.y = self.row_y_start();
                self.x = self.row_x_start();
                continue;
            }
            if self.x > self.bounds.x_stop {
                self.y += self.delta;
                self.iy += 1;
                self.x = self.row_x_start();
                continue;
            }
            let site = Site {
                x: self.x,
                y: self.y,
                z: self.z,
                ix: self.ix,
                iy: self.iy,
                iz: self.iz,
            };
            self.x += self.x_step();
            self.ix += 1;
            return Some(site);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point_box(x: f64, y: f64, z: f64) -> Bounds {
        Bounds {
            x_start: x,
            x_stop: x,
            y_start: y,
            y_stop: y,
            z_start: z,
            z_stop: z,
        }
    }

    #[test]
    fn test_single_point_box_yields_one_site() {
        let sites: Vec<Site> = HcpLattice::new(0.5, point_box(9.0, 0.0, 0.0)).collect();
        assert_eq!(sites.len(), 1);
        assert_eq!(sites[0].x, 9.0);
        assert_eq!(sites[0].y, 0.0);
        assert_eq!(sites[0].z, 0.0);
    }

    #[test]
    fn test_inverted_box_yields_nothing() {
        let bounds = Bounds {
            x_start: 1.0,
            x_stop: -1.0,
            y_start: 0.0,
            y_stop: 0.0,
            z_start: 0.0,
            z_stop: 0.0,
        };
        assert_eq!(HcpLattice::new(0.5, bounds).count(), 0);

        let bounds = Bounds {
            x_start: 0.0,
            x_stop: 0.0,
            y_start: 0.0,
            y_stop: 0.0,
            z_start: 1.0,
            z_stop: 0.0,
        };
        assert_eq!(HcpLattice::new(0.5, bounds).count(), 0);
    }

    #[test]
    fn test_inclusive_stops_visit_boundary() {
        // Exactly two x steps fit: x = 0 and x = 2*delta*sqrt(2/3) == stop.
        let delta = 1.0;
        let bounds = Bounds {
            x_start: 0.0,
            x_stop: 2.0 * delta * ROOT_TWO_THIRDS,
            y_start: 0.0,
            y_stop: 0.0,
            z_start: 0.0,
            z_stop: 0.0,
        };
        let sites: Vec<Site> = HcpLattice::new(delta, bounds).collect();
        assert_eq!(sites.len(), 2);
        assert!((sites[1].x - bounds.x_stop).abs() < 1e-12);
    }

    #[test]
    fn test_four_layer_parity_shifts() {
        let delta = 1.0;
        let bounds = Bounds {
            x_start: 0.0,
            x_stop: 0.4,
            y_start: 0.0,
            y_stop: 0.4,
            // Tall enough for five layers (one full parity period and wrap)
            z_start: 0.0,
            z_stop: 4.0 * 0.25 * ROOT_THREE + 1e-9,
        };
        let sites: Vec<Site> = HcpLattice::new(delta, bounds).collect();

        let layer = |n: u64| -> Vec<&Site> { sites.iter().filter(|s| s.iz == n).collect() };

        // Layer 0: unshifted, one site at the box corner.
        assert_eq!(layer(0).len(), 1);
        assert_eq!(layer(0)[0].x, 0.0);
        assert_eq!(layer(0)[0].y, 0.0);

        // Layer 1: y shifted by delta/2 and x by delta*sqrt(2/3), both
        // beyond this tiny box, so the layer is empty.
        assert_eq!(layer(1).len(), 0);

        // Layer 2: y shifted only; x starts at the box edge.
        assert_eq!(layer(2).len(), 0, "y shift pushes the row out of the box");

        // Layer 3: x shifted only.
        assert_eq!(layer(3).len(), 0, "x shift pushes the row out of the box");

        // Layer 4: parity wraps, unshifted again.
        assert_eq!(layer(4).len(), 1);
        assert_eq!(layer(4)[0].x, 0.0);
        assert_eq!(layer(4)[0].y, 0.0);
        assert!((layer(4)[0].z - ROOT_THREE).abs() < 1e-9);
    }

    #[test]
    fn test_shifted_layers_carry_offsets() {
        let delta = 1.0;
        let bounds = Bounds {
            x_start: 0.0,
            x_stop: 2.0,
            y_start: 0.0,
            y_stop: 2.0,
            z_start: 0.0,
            z_stop: ROOT_THREE,
        };
        let sites: Vec<Site> = HcpLattice::new(delta, bounds).collect();

        let min_x = |n: u64| {
            sites
                .iter()
                .filter(|s| s.iz == n)
                .map(|s| s.x)
                .fold(f64::INFINITY, f64::min)
        };
        let min_y = |n: u64| {
            sites
                .iter()
                .filter(|s| s.iz == n)
                .map(|s| s.y)
                .fold(f64::INFINITY, f64::min)
        };

        assert_eq!(min_x(0), 0.0);
        assert_eq!(min_y(0), 0.0);
        assert!((min_x(1) - ROOT_TWO_THIRDS).abs() < 1e-12, "layer 1 x shift");
        assert!((min_y(1) - 0.5).abs() < 1e-12, "layer 1 y shift");
        assert_eq!(min_x(2), 0.0, "layer 2 has no x shift");
        assert!((min_y(2) - 0.5).abs() < 1e-12, "layer 2 y shift");
        assert!((min_x(3) - ROOT_TWO_THIRDS).abs() < 1e-12, "layer 3 x shift");
        assert_eq!(min_y(3), 0.0, "layer 3 has no y shift");
    }

    #[test]
    fn test_z_coordinates_monotone() {
        let bounds = Bounds {
            x_start: -1.0,
            x_stop: 1.0,
            y_start: -1.0,
            y_stop: 1.0,
            z_start: -1.0,
            z_stop: 1.0,
        };
        let mut last_z = f64::NEG_INFINITY;
        for site in HcpLattice::new(0.4, bounds) {
            assert!(site.z >= last_z, "z must never decrease during the walk");
            last_z = site.z;
        }
    }
}
