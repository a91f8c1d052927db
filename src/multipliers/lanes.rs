use std::fmt;

/// Instruction family used for the chunked part of a vectorized multiply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneKind {
    /// 256-bit AVX registers, x86_64 only.
    Avx,
    /// 128-bit SSE registers, part of the x86_64 baseline.
    Sse,
    /// 128-bit NEON registers, part of the aarch64 baseline.
    Neon,
    /// Fixed-size blocks left to the compiler's auto-vectorizer.
    Portable,
}

impl LaneKind {
    pub const ALL: [LaneKind; 4] = [
        LaneKind::Avx,
        LaneKind::Sse,
        LaneKind::Neon,
        LaneKind::Portable,
    ];

    /// Number of f32 lanes processed per step.
    pub fn width(self) -> usize {
        match self {
            LaneKind::Avx => 8,
            LaneKind::Sse => 4,
            LaneKind::Neon => 4,
            LaneKind::Portable => 8,
        }
    }

    pub fn is_supported(self) -> bool {
        match self {
            #[cfg(target_arch = "x86_64")]
            LaneKind::Avx => is_x86_feature_detected!("avx"),
            #[cfg(target_arch = "x86_64")]
            LaneKind::Sse => true,
            #[cfg(target_arch = "aarch64")]
            LaneKind::Neon => true,
            LaneKind::Portable => true,
            _ => false,
        }
    }

    /// Widest explicit-intrinsic kind the running CPU supports, or
    /// `Portable` when there is none.
    pub fn detect() -> Self {
        Self::supported()
            .filter(|kind| kind.is_native())
            .max_by_key(|kind| kind.width())
            .unwrap_or(LaneKind::Portable)
    }

    pub fn supported() -> impl Iterator<Item = LaneKind> {
        Self::ALL.into_iter().filter(|kind| kind.is_supported())
    }

    pub fn is_native(self) -> bool {
        self != LaneKind::Portable
    }
}

impl fmt::Display for LaneKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            LaneKind::Avx => "avx",
            LaneKind::Sse => "sse",
            LaneKind::Neon => "neon",
            LaneKind::Portable => "portable",
        };
        write!(f, "{} x{}", name, self.width())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portable_always_supported() {
        assert!(LaneKind::Portable.is_supported());
        assert!(LaneKind::supported().any(|kind| kind == LaneKind::Portable));
    }

    #[test]
    fn test_detect_is_supported() {
        let kind = LaneKind::detect();
        assert!(kind.is_supported());
        for other in LaneKind::supported().filter(|k| k.is_native()) {
            assert!(other.width() <= kind.width());
        }
    }

    #[cfg(target_arch = "x86_64")]
    #[test]
    fn test_detect_x86_64() {
        let expected = if is_x86_feature_detected!("avx") {
            LaneKind::Avx
        } else {
            LaneKind::Sse
        };
        assert_eq!(expected, LaneKind::detect());
        assert!(!LaneKind::Neon.is_supported());
    }

    #[cfg(target_arch = "aarch64")]
    #[test]
    fn test_detect_aarch64() {
        assert_eq!(LaneKind::Neon, LaneKind::detect());
        assert!(LaneKind::Neon.is_supported());
        assert!(!LaneKind::Avx.is_supported());
    }

    #[test]
    fn test_display() {
        assert_eq!("avx x8", LaneKind::Avx.to_string());
        assert_eq!("neon x4", LaneKind::Neon.to_string());
    }
}
