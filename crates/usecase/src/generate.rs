use microbench_domain::{config::GenerateConfig, random::Drand48};
use microbench_ports::lines::LineSink;
use microbench_shared_kernel::{ErrorContext, Result};

use crate::dto::GenerateOutput;

/// Writes `count` pseudo-random integers, one per line, drawn from `count / 4`
/// buckets so that the frequency counter sees repeated records.
pub struct GenerateIntegers<'a> {
    sink: &'a mut dyn LineSink,
}

impl<'a> GenerateIntegers<'a> {
    pub fn new(sink: &'a mut dyn LineSink) -> Self {
        Self { sink }
    }

    /// # Errors
    ///
    /// Returns an error for an invalid configuration or a failed write.
    pub fn run(&mut self, config: &GenerateConfig) -> Result<GenerateOutput> {
        config.validate()?;
        let buckets = config.buckets();
        let mut rng = Drand48::new(config.seed);

        for _ in 0..config.count {
            let value = (rng.next_u31() % buckets).wrapping_mul(GenerateConfig::MULTIPLIER);
            self.sink.write_line(None, value.to_string().as_bytes()).context("writing generated value")?;
        }
        self.sink.flush().context("flushing generated values")?;
        Ok(GenerateOutput { values_written: config.count })
    }
}

#[cfg(test)]
mod tests {
    use microbench_shared_kernel::InfraResult;

    use super::*;

    #[derive(Default)]
    struct Collect(Vec<String>);

    impl LineSink for Collect {
        fn write_line(&mut self, _line_number: Option<u64>, line: &[u8]) -> InfraResult<()> {
            self.0.push(String::from_utf8_lossy(line).into_owned());
            Ok(())
        }

        fn flush(&mut self) -> InfraResult<()> {
            Ok(())
        }
    }

    #[test]
    fn reproduces_reference_output() {
        let mut sink = Collect::default();
        let out = GenerateIntegers::new(&mut sink).run(&GenerateConfig { count: 8, seed: 11 }).unwrap();
        assert_eq!(out.values_written, 8);
        assert_eq!(sink.0, ["271828183", "0", "0", "0", "0", "0", "271828183", "0"]);
    }

    #[test]
    fn values_fall_into_quarter_buckets() {
        let mut sink = Collect::default();
        GenerateIntegers::new(&mut sink).run(&GenerateConfig { count: 100, seed: 11 }).unwrap();
        let distinct: std::collections::HashSet<_> = sink.0.iter().collect();
        assert_eq!(distinct.len(), 25);
        assert_eq!(sink.0[0], "2718281830");
    }

    #[test]
    fn too_few_values_is_an_error() {
        let mut sink = Collect::default();
        assert!(GenerateIntegers::new(&mut sink).run(&GenerateConfig { count: 2, seed: 11 }).is_err());
        assert!(sink.0.is_empty());
    }
}
