use nalgebra::{Matrix3, Vector3};

/// Pivots with smaller magnitude are treated as singular.
pub(crate) const SINGULAR_PIVOT_EPS: f64 = 1e-12;

/// Solve the 3×3 linear system `A x = b` via Gaussian elimination with partial pivoting.
///
/// Returns `None` if the system is singular (|pivot| < 1e-12) or the solution
/// contains non-finite values.
#[allow(clippy::needless_range_loop)]
pub fn solve_3x3(a: &Matrix3<f64>, b: &Vector3<f64>) -> Option<Vector3<f64>> {
    let mut aug = [[0.0f64; 4]; 3];
    for i in 0..3 {
        for j in 0..3 {
            aug[i][j] = a[(i, j)];
        }
        aug[i][3] = b[i];
    }
    for col in 0..3 {
        let mut max_row = col;
        let mut max_val = aug[col][col].abs();
        for row in col + 1..3 {
            if aug[row][col].abs() > max_val {
                max_val = aug[row][col].abs();
                max_row = row;
            }
        }
        if max_val.is_nan() || max_val < SINGULAR_PIVOT_EPS {
            return None;
        }
        aug.swap(col, max_row);
        let pivot = aug[col][col];
        for row in col + 1..3 {
            let factor = aug[row][col] / pivot;
            for k in col..4 {
                let v = aug[col][k];
                aug[row][k] -= factor * v;
            }
        }
    }

    let mut x = Vector3::zeros();
    for i in (0..3).rev() {
        x[i] = aug[i][3];
        for j in i + 1..3 {
            let v = aug[i][j];
            x[i] -= v * x[j];
        }
        x[i] /= aug[i][i];
    }
    x.iter().all(|v| v.is_finite()).then_some(x)
}
