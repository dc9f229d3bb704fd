//! Rotation of the velocity field
//!
//! Rotation transfers momentum between the U and V directions:
//!
//! $$\frac{\partial U}{\partial t} \mathrel{+}= f V \qquad \frac{\partial V}{\partial t} \mathrel{+}= -f U$$
//!
//! On a staggered grid U and V are not co-located, so the easy scheme
//! pairs each U with the V that shares its index. The interpolated scheme
//! averages both components onto the cell centres, rotates them there and
//! averages back onto the velocity points.

use crate::ocean::ShallowWaterState;
use crate::parameters::{CoriolisAlgorithm, RotationScheme, ShallowWaterParameters};
use gwm_core::FloatValue;
use ndarray::Array2;

/// Coriolis parameter $f$ (1/s) for every row.
///
/// The `PlusMinus` gradient is much stronger than on Earth so that the model
/// equilibrates quickly.
pub fn rotation_constants(parameters: &ShallowWaterParameters) -> Vec<FloatValue> {
    let nrow = parameters.nrow as FloatValue;
    (0..parameters.nrow)
        .map(|i| {
            let i = i as FloatValue;
            match parameters.rotation_scheme {
                RotationScheme::WithLatitude => {
                    let latitude =
                        parameters.mean_latitude + (i - nrow / 2.0) * parameters.dx_degrees();
                    -7.0e-5 * latitude.to_radians().sin()
                }
                RotationScheme::PlusMinus => {
                    -3.5e-5 * (1.0 - 0.8 * (i - (nrow - 1.0) / 2.0) / nrow)
                }
                RotationScheme::Uniform => -3.5e-5,
                RotationScheme::None => 0.0,
            }
        })
        .collect()
}

/// Fill `coriolis_u` and `coriolis_v` from the current velocities.
///
/// With walls on the east and west edges the U points in column 0 sit on
/// the western wall and get no rotation term.
pub(crate) fn apply(
    algorithm: CoriolisAlgorithm,
    rotation: &[FloatValue],
    horizontal_wrap: bool,
    state: &mut ShallowWaterState,
) {
    match algorithm {
        CoriolisAlgorithm::Trivial => {
            state.coriolis_u.fill(0.0);
            state.coriolis_v.fill(0.0);
        }
        CoriolisAlgorithm::Easy => easy(rotation, state),
        CoriolisAlgorithm::Interpolated => interpolated(rotation, horizontal_wrap, state),
    }
}

fn easy(rotation: &[FloatValue], state: &mut ShallowWaterState) {
    let (nrow, ncol) = (state.nrow(), state.ncol());
    for i in 0..nrow {
        let f = rotation[i];
        for j in 0..ncol {
            state.coriolis_u[[i, j]] = f * state.v[[i, j]];
            state.coriolis_v[[i, j]] = -f * state.u[[i, j]];
        }
    }
}

fn interpolated(rotation: &[FloatValue], horizontal_wrap: bool, state: &mut ShallowWaterState) {
    let (nrow, ncol) = (state.nrow(), state.ncol());

    // Rotated velocities at the cell centres
    let mut v_rotated = Array2::zeros((nrow, ncol));
    let mut u_rotated = Array2::zeros((nrow, ncol));
    for i in 0..nrow {
        let f = rotation[i];
        for j in 0..ncol {
            v_rotated[[i, j]] = f * 0.5 * (state.v[[i, j]] + state.v[[i + 1, j]]);
            u_rotated[[i, j]] = -f * 0.5 * (state.u[[i, j]] + state.u[[i, j + 1]]);
        }
    }

    for i in 0..nrow {
        for j in 0..ncol {
            // U(i, j) sits between centres (i, j - 1) and (i, j)
            state.coriolis_u[[i, j]] = match (j, horizontal_wrap) {
                (0, false) => 0.0,
                (0, true) => 0.5 * (v_rotated[[i, ncol - 1]] + v_rotated[[i, 0]]),
                _ => 0.5 * (v_rotated[[i, j - 1]] + v_rotated[[i, j]]),
            };

            // V(i, j) sits between centres (i - 1, j) and (i, j); row 0 is the north wall
            state.coriolis_v[[i, j]] = if i == 0 {
                0.0
            } else {
                0.5 * (u_rotated[[i - 1, j]] + u_rotated[[i, j]])
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params(scheme: RotationScheme) -> ShallowWaterParameters {
        ShallowWaterParameters {
            rotation_scheme: scheme,
            ..Default::default()
        }
    }

    #[test]
    fn test_plus_minus() {
        let f = rotation_constants(&params(RotationScheme::PlusMinus));
        assert_eq!(f.len(), 5);
        assert_relative_eq!(f[2], -3.5e-5);
        assert_relative_eq!(f[0], -3.5e-5 * 1.32, max_relative = 1e-12);
        assert_relative_eq!(f[4], -3.5e-5 * 0.68, max_relative = 1e-12);
    }

    #[test]
    fn test_with_latitude() {
        let f = rotation_constants(&params(RotationScheme::WithLatitude));
        // Row 2.5 would sit at the mean latitude of 30 degrees
        let expected = -7.0e-5 * (30.0_f64 - 0.5 / 11.0).to_radians().sin();
        assert_relative_eq!(f[2], expected, max_relative = 1e-12);
        assert!(f.windows(2).all(|pair| pair[1] < pair[0]));
    }

    #[test]
    fn test_uniform_and_none() {
        assert!(rotation_constants(&params(RotationScheme::Uniform))
            .iter()
            .all(|&f| f == -3.5e-5));
        assert!(rotation_constants(&params(RotationScheme::None))
            .iter()
            .all(|&f| f == 0.0));
    }

    #[test]
    fn test_easy_uses_same_index() {
        let mut state = ShallowWaterState::at_rest(2, 2);
        state.u[[1, 1]] = 2.0;
        state.v[[0, 1]] = 3.0;
        apply(CoriolisAlgorithm::Easy, &[1.0, 10.0], false, &mut state);

        assert_eq!(state.coriolis_u[[0, 1]], 3.0);
        assert_eq!(state.coriolis_v[[1, 1]], -20.0);
        assert_eq!(state.coriolis_u[[1, 1]], 0.0);
    }

    #[test]
    fn test_interpolated_spreads_to_neighbours() {
        let mut state = ShallowWaterState::at_rest(3, 3);
        state.v[[1, 1]] = 4.0;
        apply(CoriolisAlgorithm::Interpolated, &[1.0, 1.0, 1.0], false, &mut state);

        // V(1, 1) contributes half to the centres above and below it, each of
        // which contributes half to the U points on either side
        assert_relative_eq!(state.coriolis_u[[0, 1]], 1.0);
        assert_relative_eq!(state.coriolis_u[[0, 2]], 1.0);
        assert_relative_eq!(state.coriolis_u[[1, 1]], 1.0);
        assert_relative_eq!(state.coriolis_u[[1, 2]], 1.0);
        assert_eq!(state.coriolis_u[[2, 1]], 0.0);
        assert_eq!(state.coriolis_u[[0, 0]], 0.0);
    }

    #[test]
    fn test_interpolated_north_row_is_zero() {
        let mut state = ShallowWaterState::at_rest(2, 2);
        state.u.fill(1.0);
        apply(CoriolisAlgorithm::Interpolated, &[1.0, 1.0], false, &mut state);
        assert_eq!(state.coriolis_v[[0, 0]], 0.0);
        assert_relative_eq!(state.coriolis_v[[1, 0]], -1.0);
    }

    #[test]
    fn test_trivial_clears() {
        let mut state = ShallowWaterState::at_rest(2, 2);
        state.coriolis_u.fill(5.0);
        apply(CoriolisAlgorithm::Trivial, &[1.0, 1.0], false, &mut state);
        assert!(state.coriolis_u.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_interpolated_west_edge() {
        let mut state = ShallowWaterState::at_rest(2, 3);
        state.v[[0, 2]] = 4.0;
        state.v[[0, 0]] = 2.0;

        // Walls: U(0, 0) sits on the western wall
        apply(CoriolisAlgorithm::Interpolated, &[1.0, 1.0], false, &mut state);
        assert_eq!(state.coriolis_u[[0, 0]], 0.0);
        assert_relative_eq!(state.coriolis_u[[0, 1]], 0.5);

        // Wrapped: the western neighbour is the last column
        apply(CoriolisAlgorithm::Interpolated, &[1.0, 1.0], true, &mut state);
        assert_relative_eq!(state.coriolis_u[[0, 0]], 1.5);
    }
}
