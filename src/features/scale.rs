// Column-wise feature scaling before the matrix is handed to a classifier.
//
// Both scalers fit on the train split only and are then applied to train
// and test, so the two splits see identical transforms and no information
// leaks from test into the fit.

use super::matrix::FeatureMatrix;

/// Per-column standardization parameters (zero mean, unit variance).
#[derive(Debug, Clone)]
pub struct StandardScaler {
    means: Vec<f64>,
    stds: Vec<f64>,
}

impl StandardScaler {
    /// Fit column means and population standard deviations.
    pub fn fit(matrix: &FeatureMatrix) -> Self {
        let (means, stds) = column_stats(matrix);
        Self { means, stds }
    }

    /// Transform in place: `(x - mean) / std` per column.
    ///
    /// A constant column (std 0) is centered but not divided, so it maps
    /// to all zeros instead of infinity.
    pub fn transform(&self, matrix: &mut FeatureMatrix) {
        transform_rows(matrix, |col, v| {
            let centered = v - self.means[col];
            if self.stds[col] > 0.0 {
                centered / self.stds[col]
            } else {
                centered
            }
        });
    }
}

/// Per-column min-max parameters, mapping the fitted range onto [0, 1].
#[derive(Debug, Clone)]
pub struct MinMaxScaler {
    mins: Vec<f64>,
    ranges: Vec<f64>,
}

impl MinMaxScaler {
    pub fn fit(matrix: &FeatureMatrix) -> Self {
        let width = matrix.width();
        let mut mins = vec![f64::INFINITY; width];
        let mut maxs = vec![f64::NEG_INFINITY; width];
        for row in matrix.rows() {
            for (col, &v) in row.iter().enumerate() {
                mins[col] = mins[col].min(v);
                maxs[col] = maxs[col].max(v);
            }
        }
        let ranges = mins.iter().zip(maxs.iter()).map(|(lo, hi)| hi - lo).collect();
        Self { mins, ranges }
    }

    /// Transform in place: `(x - min) / (max - min)` per column.
    ///
    /// Constant columns map to 0.0. Test values outside the fitted range
    /// land outside [0, 1], matching the fit-on-train contract.
    pub fn transform(&self, matrix: &mut FeatureMatrix) {
        transform_rows(matrix, |col, v| {
            if self.ranges[col] > 0.0 {
                (v - self.mins[col]) / self.ranges[col]
            } else {
                0.0
            }
        });
    }
}

fn column_stats(matrix: &FeatureMatrix) -> (Vec<f64>, Vec<f64>) {
    let width = matrix.width();
    let n = matrix.len() as f64;
    let mut means = vec![0.0; width];
    let mut stds = vec![0.0; width];
    if matrix.is_empty() {
        return (means, stds);
    }

    for row in matrix.rows() {
        for (col, &v) in row.iter().enumerate() {
            means[col] += v;
        }
    }
    for mean in &mut means {
        *mean /= n;
    }

    for row in matrix.rows() {
        for (col, &v) in row.iter().enumerate() {
            let d = v - means[col];
            stds[col] += d * d;
        }
    }
    for std in &mut stds {
        *std = (*std / n).sqrt();
    }

    (means, stds)
}

fn transform_rows(matrix: &mut FeatureMatrix, f: impl Fn(usize, f64) -> f64) {
    for row in matrix.rows_mut() {
        for (col, v) in row.iter_mut().enumerate() {
            *v = f(col, *v);
        }
    }
}
