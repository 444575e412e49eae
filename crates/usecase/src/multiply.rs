use log::debug;
use microbench_domain::{config::MatmulConfig, model::Matrix};
use microbench_shared_kernel::Result;

use crate::dto::MultiplyOutput;

/// Generates the two `n x n` benchmark matrices and multiplies them.
pub struct MultiplyMatrices {
    config: MatmulConfig,
}

impl MultiplyMatrices {
    pub fn new(config: MatmulConfig) -> Self {
        Self { config }
    }

    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the worker pool cannot be built.
    pub fn run(&self) -> Result<MultiplyOutput> {
        self.config.validate()?;
        let n = self.config.size;
        let a = Matrix::generate(n);
        let b = Matrix::generate(n);

        let product = if self.config.jobs > 1 {
            multiply_parallel(&a, &b, self.config.jobs)?
        } else {
            a.multiply(&b)?
        };
        debug!("multiplied {n}x{n} matrices with {} job(s)", self.config.jobs);
        Ok(MultiplyOutput { product })
    }
}

/// Row-parallel product. Every cell is the same sequential inner product the
/// single-threaded path computes, so both produce identical bits.
#[cfg(feature = "parallel")]
fn multiply_parallel(a: &Matrix, b: &Matrix, jobs: usize) -> Result<Matrix> {
    use microbench_shared_kernel::InfrastructureError;
    use rayon::prelude::*;

    a.check_product(b)?;
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map_err(|e| InfrastructureError::ThreadPoolCreation { details: e.to_string() })?;

    let b_t = b.transpose();
    let mut out = Matrix::zeros(a.rows(), b.cols());
    let width = out.cols().max(1);
    pool.install(|| {
        out.as_mut_slice()
            .par_chunks_exact_mut(width)
            .enumerate()
            .for_each(|(i, row)| a.product_row(i, &b_t, row));
    });
    Ok(out)
}

#[cfg(not(feature = "parallel"))]
fn multiply_parallel(a: &Matrix, b: &Matrix, jobs: usize) -> Result<Matrix> {
    debug!("built without the parallel feature; ignoring jobs={jobs}");
    Ok(a.multiply(b)?)
}
