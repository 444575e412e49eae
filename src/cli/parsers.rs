use std::{fmt::Display, str::FromStr};

use microbench_domain::config::GenerateConfig;

fn parse_bounded_number<T>(s: &str, min: T) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s.parse::<T>().map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    Ok(value)
}

/// Parse a positive `usize` (>= 1) from CLI input.
pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1)
}

/// Parse a `genint` value count; the generator needs at least one value per bucket.
pub fn parse_generate_count(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, GenerateConfig::MIN_COUNT)
}
