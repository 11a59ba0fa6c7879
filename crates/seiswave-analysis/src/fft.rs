//! FFT wrapper for real-valued signals

use rustfft::{FftPlanner, num_complex::Complex};
use std::sync::Arc;

/// Forward FFT processor for a fixed size
pub struct Fft {
    /// `None` for size 0, which has nothing to transform.
    fft: Option<Arc<dyn rustfft::Fft<f64>>>,
    size: usize,
}

impl Fft {
    /// Create a new FFT processor for the given size
    pub fn new(size: usize) -> Self {
        let fft = (size > 0).then(|| FftPlanner::new().plan_fft_forward(size));
        Self { fft, size }
    }

    /// Get FFT size
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of non-negative frequency bins, `size / 2 + 1`
    pub fn num_bins(&self) -> usize {
        self.size / 2 + 1
    }

    /// Perform forward FFT on real input
    ///
    /// Input is zero-padded or truncated to the FFT size. Returns the
    /// non-negative frequency bins `0..=size/2` (DC to Nyquist or just below
    /// it for odd sizes).
    pub fn forward_real(&self, input: &[f64]) -> Vec<Complex<f64>> {
        let Some(fft) = &self.fft else {
            return Vec::new();
        };

        let mut buffer: Vec<Complex<f64>> = input.iter().map(|&x| Complex::new(x, 0.0)).collect();
        buffer.resize(self.size, Complex::new(0.0, 0.0));

        fft.process(&mut buffer);

        buffer.truncate(self.num_bins());
        buffer
    }
}
