//! # Beam Element Formulas
//!
//! Stiffness matrices and fixed-end actions for a horizontal Euler-Bernoulli
//! beam element with optional moment releases.
//!
//! ## Sign Conventions
//!
//! - Local DOF order: `[v_i, θ_i, v_j, θ_j]`
//! - Translations and end forces: positive upward
//! - Rotations and end moments: positive counter-clockwise
//! - Applied loads: positive downward
//!
//! ## References
//!
//! - "Matrix Analysis of Structures" by A. Kassimali, Chapter 5 and 7
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1

use nalgebra::Matrix4;

use crate::geometry::EndCondition;

/// Load acting on one element, positions local to the element
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MemberLoad {
    /// Uniform intensity `w` from `a` to `b`
    Uniform { w: f64, a: f64, b: f64 },
    /// Concentrated force `p` at `a`
    Point { p: f64, a: f64 },
}

impl MemberLoad {
    /// Shear and moment at `x` caused by the loads strictly left of `x`
    ///
    /// Returns (ΣF, ΣF·lever) where lever is measured back from `x`.
    pub fn left_of(&self, x: f64) -> (f64, f64) {
        match *self {
            MemberLoad::Uniform { w, a, b } => {
                if x <= a {
                    return (0.0, 0.0);
                }
                let covered = x.min(b) - a;
                let force = w * covered;
                let centroid = a + covered / 2.0;
                (force, force * (x - centroid))
            }
            MemberLoad::Point { p, a } => {
                if a < x {
                    (p, p * (x - a))
                } else {
                    (0.0, 0.0)
                }
            }
        }
    }
}

/// Element stiffness matrix in local = global coordinates
pub fn stiffness(length: f64, ei: f64, end_condition: EndCondition) -> Matrix4<f64> {
    let l = length;
    let l2 = l * l;
    match end_condition {
        EndCondition::FixedFixed => {
            let k = ei / (l2 * l);
            Matrix4::new(
                12.0, 6.0 * l, -12.0, 6.0 * l,
                6.0 * l, 4.0 * l2, -6.0 * l, 2.0 * l2,
                -12.0, -6.0 * l, 12.0, -6.0 * l,
                6.0 * l, 2.0 * l2, -6.0 * l, 4.0 * l2,
            ) * k
        }
        EndCondition::FixedPinned => {
            let k = 3.0 * ei / (l2 * l);
            Matrix4::new(
                1.0, l, -1.0, 0.0,
                l, l2, -l, 0.0,
                -1.0, -l, 1.0, 0.0,
                0.0, 0.0, 0.0, 0.0,
            ) * k
        }
        EndCondition::PinnedFixed => {
            let k = 3.0 * ei / (l2 * l);
            Matrix4::new(
                1.0, 0.0, -1.0, l,
                0.0, 0.0, 0.0, 0.0,
                -1.0, 0.0, 1.0, -l,
                l, 0.0, -l, l2,
            ) * k
        }
        EndCondition::PinnedPinned => Matrix4::zeros(),
    }
}

/// Fixed-end actions `[V_i, M_i, V_j, M_j]` of a fully fixed element
/// under a downward point load `p` at `a`
fn point_fixed_end(p: f64, a: f64, l: f64) -> [f64; 4] {
    let b = l - a;
    let l2 = l * l;
    let l3 = l2 * l;
    [
        p * b * b * (3.0 * a + b) / l3,
        p * a * b * b / l2,
        p * a * a * (a + 3.0 * b) / l3,
        -p * a * a * b / l2,
    ]
}

/// 3-point Gauss-Legendre nodes and weights on [-1, 1]
const GAUSS_3: [(f64, f64); 3] = [
    (-0.774_596_669_241_483_4, 5.0 / 9.0),
    (0.0, 8.0 / 9.0),
    (0.774_596_669_241_483_4, 5.0 / 9.0),
];

/// Fixed-end actions of a fully fixed element under one load
///
/// Uniform loads integrate the point-load actions exactly (the integrand is
/// cubic in the load position).
fn fixed_fixed_actions(load: &MemberLoad, l: f64) -> [f64; 4] {
    match *load {
        MemberLoad::Point { p, a } => point_fixed_end(p, a, l),
        MemberLoad::Uniform { w, a, b } => {
            let half = (b - a) / 2.0;
            let mid = (a + b) / 2.0;
            let mut q = [0.0; 4];
            for (xi, weight) in GAUSS_3 {
                let f = point_fixed_end(w * half * weight, mid + half * xi, l);
                for k in 0..4 {
                    q[k] += f[k];
                }
            }
            q
        }
    }
}

/// Fixed-end actions `[V_i, M_i, V_j, M_j]` with the element's releases applied
pub fn fixed_end_actions(load: &MemberLoad, length: f64, end_condition: EndCondition) -> [f64; 4] {
    let l = length;
    let [vi, mi, vj, mj] = fixed_fixed_actions(load, l);
    match end_condition {
        EndCondition::FixedFixed => [vi, mi, vj, mj],
        EndCondition::FixedPinned => [
            vi - 1.5 * mj / l,
            mi - 0.5 * mj,
            vj + 1.5 * mj / l,
            0.0,
        ],
        EndCondition::PinnedFixed => [
            vi - 1.5 * mi / l,
            0.0,
            vj + 1.5 * mi / l,
            mj - 0.5 * mi,
        ],
        EndCondition::PinnedPinned => [
            vi - (mi + mj) / l,
            0.0,
            vj + (mi + mj) / l,
            0.0,
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const W: f64 = 12.0;
    const L: f64 = 8.0;

    fn udl() -> MemberLoad {
        MemberLoad::Uniform { w: W, a: 0.0, b: L }
    }

    #[test]
    fn test_fixed_fixed_udl() {
        let q = fixed_end_actions(&udl(), L, EndCondition::FixedFixed);
        assert_relative_eq!(q[0], W * L / 2.0, max_relative = 1e-12);
        assert_relative_eq!(q[1], W * L * L / 12.0, max_relative = 1e-12);
        assert_relative_eq!(q[2], W * L / 2.0, max_relative = 1e-12);
        assert_relative_eq!(q[3], -W * L * L / 12.0, max_relative = 1e-12);
    }

    #[test]
    fn test_propped_udl() {
        let q = fixed_end_actions(&udl(), L, EndCondition::FixedPinned);
        assert_relative_eq!(q[0], 5.0 * W * L / 8.0, max_relative = 1e-12);
        assert_relative_eq!(q[1], W * L * L / 8.0, max_relative = 1e-12);
        assert_relative_eq!(q[2], 3.0 * W * L / 8.0, max_relative = 1e-12);
        assert_eq!(q[3], 0.0);

        let q = fixed_end_actions(&udl(), L, EndCondition::PinnedFixed);
        assert_relative_eq!(q[0], 3.0 * W * L / 8.0, max_relative = 1e-12);
        assert_relative_eq!(q[3], -W * L * L / 8.0, max_relative = 1e-12);
    }

    #[test]
    fn test_simple_span_point() {
        // Pinned-pinned element reduces to simple-span reactions P·b/L, P·a/L
        let q = fixed_end_actions(&MemberLoad::Point { p: 100.0, a: 2.0 }, L, EndCondition::PinnedPinned);
        assert_relative_eq!(q[0], 75.0, max_relative = 1e-12);
        assert_relative_eq!(q[2], 25.0, max_relative = 1e-12);
        assert_eq!(q[1], 0.0);
        assert_eq!(q[3], 0.0);
    }

    #[test]
    fn test_stiffness_symmetry_and_release() {
        for ec in EndCondition::ALL {
            let k = stiffness(L, 2.0e4, ec);
            for r in 0..4 {
                for c in 0..4 {
                    assert_relative_eq!(k[(r, c)], k[(c, r)], max_relative = 1e-12);
                }
            }
        }
        let k = stiffness(L, 2.0e4, EndCondition::FixedPinned);
        assert_eq!(k.row(3).sum(), 0.0);
    }

    #[test]
    fn test_partial_uniform_left_of() {
        let load = MemberLoad::Uniform { w: 10.0, a: 2.0, b: 6.0 };
        assert_eq!(load.left_of(1.0), (0.0, 0.0));
        let (f, m) = load.left_of(4.0);
        assert_relative_eq!(f, 20.0);
        assert_relative_eq!(m, 20.0);
        let (f, m) = load.left_of(8.0);
        assert_relative_eq!(f, 40.0);
        assert_relative_eq!(m, 160.0);
    }
}
