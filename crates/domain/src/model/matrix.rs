use microbench_shared_kernel::{DomainError, DomainResult};

/// Dense row-major `f64` matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self { rows, cols, data: vec![0.0; rows * cols] }
    }

    /// Builds a matrix from nested rows.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidConfiguration` when the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> DomainResult<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(DomainError::InvalidConfiguration {
                reason: format!("row {index} has {} columns, expected {cols}", row.len()),
            });
        }
        let height = rows.len();
        let data = rows.into_iter().flatten().collect();
        Ok(Self { rows: height, cols, data })
    }

    /// The benchmark input: `a[i][j] = (i - j) * (i + j) / n^2`.
    pub fn generate(n: usize) -> Self {
        let scale = 1.0 / n as f64 / n as f64;
        let mut matrix = Self::zeros(n, n);
        for (i, row) in matrix.data.chunks_exact_mut(n.max(1)).enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = scale * (i as f64 - j as f64) * (i as f64 + j as f64);
            }
        }
        matrix
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        (row < self.rows && col < self.cols).then(|| self.data[row * self.cols + col])
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut out = Self::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                out.data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        out
    }

    /// Checks that `self * rhs` is defined.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DimensionMismatch` if the inner dimensions differ.
    pub fn check_product(&self, rhs: &Matrix) -> DomainResult<()> {
        if self.cols == rhs.rows {
            Ok(())
        } else {
            Err(DomainError::DimensionMismatch {
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: rhs.rows,
                right_cols: rhs.cols,
            })
        }
    }

    /// Fills `out` with row `row` of `self * rhs`, where `rhs_t` is `rhs` transposed.
    ///
    /// Each cell is a sequential inner product over contiguous memory, so the
    /// result does not depend on how rows are scheduled.
    pub fn product_row(&self, row: usize, rhs_t: &Matrix, out: &mut [f64]) {
        let lhs = self.row(row);
        for (j, cell) in out.iter_mut().enumerate() {
            *cell = lhs.iter().zip(rhs_t.row(j)).map(|(a, b)| a * b).sum();
        }
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Mutable row-sized chunks, in row order.
    pub fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, f64> {
        self.data.chunks_exact_mut(self.cols.max(1))
    }

    /// Sequential `self * rhs`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DimensionMismatch` if the inner dimensions differ.
    pub fn multiply(&self, rhs: &Matrix) -> DomainResult<Matrix> {
        self.check_product(rhs)?;
        let rhs_t = rhs.transpose();
        let mut out = Matrix::zeros(self.rows, rhs.cols);
        for (i, row) in out.rows_mut().enumerate() {
            self.product_row(i, &rhs_t, row);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_follows_formula() {
        let m = Matrix::generate(4);
        assert_eq!(m.get(0, 0), Some(0.0));
        assert_eq!(m.get(2, 1), Some(3.0 / 16.0));
        assert_eq!(m.get(1, 2), Some(-3.0 / 16.0));
        assert_eq!(m.get(4, 0), None);
    }

    #[test]
    fn multiply_small_known_product() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
        let c = a.multiply(&b).unwrap();
        assert_eq!(c, Matrix::from_rows(vec![vec![19.0, 22.0], vec![43.0, 50.0]]).unwrap());
    }

    #[test]
    fn multiply_rectangular() {
        let a = Matrix::from_rows(vec![vec![1.0, 0.0, 2.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![1.0], vec![5.0], vec![3.0]]).unwrap();
        let c = a.multiply(&b).unwrap();
        assert_eq!((c.rows(), c.cols()), (1, 1));
        assert_eq!(c.get(0, 0), Some(7.0));
    }

    #[test]
    fn multiply_rejects_mismatched_shapes() {
        let a = Matrix::zeros(2, 3);
        let err = a.multiply(&Matrix::zeros(2, 3)).unwrap_err();
        assert!(matches!(err, DomainError::DimensionMismatch { left_cols: 3, right_rows: 2, .. }));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert!(Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).is_err());
    }

    #[test]
    fn generated_product_center_value() {
        let a = Matrix::generate(100);
        let x = a.multiply(&Matrix::generate(100)).unwrap();
        assert_eq!(format!("{:.6}", x.get(50, 50).unwrap()), "-9.335833");
    }
}
