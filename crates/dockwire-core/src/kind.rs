//! Signal vocabulary.
//!
//! Entities agree on signal names through a shared enum rather than free-form
//! strings, so a misspelled name fails to compile instead of silently never
//! matching.

use std::fmt::Debug;

/// A closed set of signal identifiers.
///
/// Two entities are connected for a kind when one declares it outbound and
/// the other declares it inbound; matching is plain equality on the value.
pub trait SignalKind: Copy + Ord + Debug + 'static {
    /// Stable human-readable name, used in log output.
    fn name(self) -> &'static str;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::SignalKind;

    /// Kinds shared by the unit tests in this crate.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum TestKind {
        WidgetClicked,
        ColorChanged,
        Closed,
    }

    impl SignalKind for TestKind {
        fn name(self) -> &'static str {
            match self {
                Self::WidgetClicked => "widgetClicked",
                Self::ColorChanged => "colorChanged",
                Self::Closed => "closed",
            }
        }
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(TestKind::WidgetClicked.name(), "widgetClicked");
        assert_eq!(TestKind::Closed.name(), "closed");
        assert!(TestKind::WidgetClicked < TestKind::ColorChanged);
    }
}
