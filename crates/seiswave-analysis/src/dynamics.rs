//! Level measurement and normalization

/// Compute peak level (maximum absolute value)
pub fn peak(signal: &[f64]) -> f64 {
    signal.iter().map(|x| x.abs()).fold(0.0, f64::max)
}

/// Compute RMS (Root Mean Square) level of a signal
pub fn rms(signal: &[f64]) -> f64 {
    if signal.is_empty() {
        return 0.0;
    }

    let sum_sq: f64 = signal.iter().map(|&x| x * x).sum();
    (sum_sq / signal.len() as f64).sqrt()
}

/// Scale a signal so its peak absolute value is 1.
///
/// All-zero (or empty) input is returned unchanged. The sample that set the
/// peak maps to exactly `±1`.
///
/// ```rust
/// use seiswave_analysis::normalize;
///
/// assert_eq!(normalize(&[0.5, -2.0, 1.0]), vec![0.25, -1.0, 0.5]);
/// assert_eq!(normalize(&[0.0, 0.0]), vec![0.0, 0.0]);
/// ```
pub fn normalize(signal: &[f64]) -> Vec<f64> {
    let max_abs = peak(signal);
    if max_abs > 0.0 {
        signal.iter().map(|&x| x / max_abs).collect()
    } else {
        signal.to_vec()
    }
}
