/// Outcome of iterating z ↦ z² + c for a single point.
///
/// `Escaped(n)` carries the 1-based number of the magnitude check that first
/// saw |z|² > 4, so `n` always lies in `1..=max_iterations`. A point whose
/// orbit stays inside the radius-2 disc for the whole budget is `Bounded`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EscapeTime {
    Escaped(u32),
    Bounded,
}

impl EscapeTime {
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        matches!(self, Self::Bounded)
    }

    #[must_use]
    pub fn iterations(&self) -> Option<u32> {
        match self {
            Self::Escaped(n) => Some(*n),
            Self::Bounded => None,
        }
    }

    /// Flattens to an integer in `0..=max_iterations`, with 0 for bounded points.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.iterations().unwrap_or(0)
    }

    /// The integer the old sampler produced: the 0-based index of the escaping
    /// check, or 0 when the point never escaped.
    ///
    /// This is ambiguous: `Escaped(1)` and `Bounded` both become 0.
    #[must_use]
    pub fn legacy_count(&self) -> u32 {
        match self {
            Self::Escaped(n) => n.saturating_sub(1),
            Self::Bounded => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded() {
        let e = EscapeTime::Bounded;

        assert!(e.is_bounded());
        assert_eq!(e.iterations(), None);
        assert_eq!(e.count(), 0);
        assert_eq!(e.legacy_count(), 0);
    }

    #[test]
    fn test_escaped() {
        let e = EscapeTime::Escaped(7);

        assert!(!e.is_bounded());
        assert_eq!(e.iterations(), Some(7));
        assert_eq!(e.count(), 7);
        assert_eq!(e.legacy_count(), 6);
    }

    #[test]
    fn test_legacy_count_collides_on_first_check() {
        assert_eq!(
            EscapeTime::Escaped(1).legacy_count(),
            EscapeTime::Bounded.legacy_count()
        );
    }
}
