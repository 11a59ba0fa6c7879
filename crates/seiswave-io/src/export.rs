//! Numeric export of wavelets and spectra.
//!
//! - CSV: one `time,amplitude` (or `frequency,magnitude`) row per sample
//! - JSON: [`WaveletResponse`], the full payload a front end needs to draw
//!   both panels and play the wavelet back

use std::io::Write;

use seiswave_analysis::{Spectrum, magnitude_spectrum, normalize};
use seiswave_core::{WaveletKind, WaveletResult};
use serde::{Deserialize, Serialize};

use crate::Result;

/// Write `time_s,amplitude` rows.
pub fn write_csv<W: Write>(mut writer: W, wavelet: &WaveletResult) -> std::io::Result<()> {
    writeln!(writer, "time_s,amplitude")?;
    for (t, a) in wavelet.iter() {
        writeln!(writer, "{t:.9},{a:.12e}")?;
    }
    writer.flush()
}

/// Write `frequency_hz,magnitude` rows.
pub fn write_spectrum_csv<W: Write>(mut writer: W, spectrum: &Spectrum) -> std::io::Result<()> {
    writeln!(writer, "frequency_hz,magnitude")?;
    for (f, m) in spectrum.iter() {
        writeln!(writer, "{f:.6},{m:.12e}")?;
    }
    writer.flush()
}

/// Frequency-domain panel data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectrumData {
    /// Bin frequencies in Hz.
    pub frequencies: Vec<f64>,
    /// Linear magnitudes.
    pub magnitudes: Vec<f64>,
}

impl From<Spectrum> for SpectrumData {
    fn from(spectrum: Spectrum) -> Self {
        let (frequencies, magnitudes) = spectrum.into_parts();
        Self {
            frequencies,
            magnitudes,
        }
    }
}

/// Everything a front end needs for one wavelet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveletResponse {
    /// Wavelet family.
    pub kind: WaveletKind,
    /// Sample interval in seconds.
    pub dt: f64,
    /// Playback sample rate, `round(1/dt)`.
    pub sample_rate: u32,
    /// Sample times in seconds.
    pub times: Vec<f64>,
    /// Raw amplitudes.
    pub amplitudes: Vec<f64>,
    /// Amplitudes scaled to a unit peak.
    pub audio: Vec<f64>,
    /// Magnitude spectrum, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spectrum: Option<SpectrumData>,
}

impl WaveletResponse {
    /// Build a response, computing the spectrum when `with_spectrum` is set.
    pub fn new(wavelet: &WaveletResult, with_spectrum: bool) -> Self {
        Self {
            kind: wavelet.kind(),
            dt: wavelet.dt(),
            sample_rate: wavelet.sample_rate(),
            times: wavelet.times().to_vec(),
            amplitudes: wavelet.amplitudes().to_vec(),
            audio: normalize(wavelet.amplitudes()),
            spectrum: with_spectrum.then(|| magnitude_spectrum(wavelet).into()),
        }
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Serialize as JSON into a writer.
    pub fn write_json<W: Write>(&self, writer: W, pretty: bool) -> Result<()> {
        if pretty {
            serde_json::to_writer_pretty(writer, self)?;
        } else {
            serde_json::to_writer(writer, self)?;
        }
        Ok(())
    }
}
