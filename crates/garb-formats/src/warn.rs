//! Non-fatal decode diagnostics.

use std::fmt;

/// A recoverable problem noticed while decoding.
///
/// The Stand text format identifies the ped model by a free-text label, and
/// the historical convention is to fall back to the female ped whenever the
/// label is not unambiguously male. That conflates "explicitly female" with
/// "garbled", so the decoder keeps the fallback for compatibility but also
/// reports it, letting strict callers reject the file instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeWarning {
    /// No `Model:` line was found; the female ped was assumed.
    MissingModelLine,
    /// The `Model:` label named neither ped clearly; the female ped was
    /// assumed. Carries the raw label text.
    AmbiguousModelLabel(String),
}

impl fmt::Display for DecodeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingModelLine => {
                f.write_str("no Model line found; assuming the female ped")
            }
            Self::AmbiguousModelLabel(label) => {
                write!(f, "ambiguous model label {:?}; assuming the female ped", label)
            }
        }
    }
}
