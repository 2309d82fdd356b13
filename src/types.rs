//! Configuration enums shared by the window generators.

/// Window functions for spectral analysis.
///
/// Different window types trade main-lobe width against spectral leakage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub enum WindowType {
    /// All ones, i.e. no tapering.
    Rectangular,
    /// Hanning window with zero-valued endpoints.
    Hanning,
    /// Hanning window without the zero-weighted endpoints, in the
    /// symmetric or periodic convention of MATLAB's `hanning`.
    HanningMatlab(WindowSymmetry),
    /// Hamming window with the optimal equiripple coefficients
    /// `0.53836` / `0.46164`.
    Hamming,
    /// Classic three-term Blackman window.
    Blackman,
}

impl WindowType {
    /// Smallest window length the generator for this type accepts.
    pub const fn min_len(&self) -> usize {
        match self {
            WindowType::Rectangular | WindowType::HanningMatlab(_) => 1,
            WindowType::Hanning | WindowType::Hamming | WindowType::Blackman => 2,
        }
    }
}

/// Whether a window is a symmetric taper or one period of a periodic one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub enum WindowSymmetry {
    /// `w[i] == w[n - 1 - i]`; suited to filter design.
    #[default]
    Symmetric,
    /// Starts at exactly zero and omits the trailing zero; suited to
    /// overlapping STFT frames.
    Periodic,
}

impl WindowSymmetry {
    /// Returns true for [`WindowSymmetry::Periodic`].
    pub const fn is_periodic(&self) -> bool {
        matches!(self, WindowSymmetry::Periodic)
    }
}
