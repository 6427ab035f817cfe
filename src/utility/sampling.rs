// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the signal-generator project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Evenly spaced sample grids

/// Returns `count` evenly spaced values over `[start, stop]`, both ends included.
///
/// The last value is exactly `stop`. A count of one yields `[start]` and a
/// count of zero yields an empty vector.
///
/// # Examples
///
/// ```
/// use signal_generator::utility::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
            values[count - 1] = stop;
            values
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linspace_endpoints() {
        let values = linspace(0.0, 1.0, 100);
        assert_eq!(values.len(), 100);
        assert_eq!(values[0], 0.0);
        assert_eq!(values[99], 1.0);
        assert_relative_eq!(values[1], 1.0 / 99.0, epsilon = 1e-15);
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(0.3, 1.0, 1), vec![0.3]);
    }

    #[test]
    fn test_linspace_descending() {
        let values = linspace(1.0, 0.0, 3);
        assert_eq!(values, vec![1.0, 0.5, 0.0]);
    }
}
