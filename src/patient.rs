use crate::Priority;
use core::cmp::Ordering;
use core::fmt::{Display, Formatter};

/// A named entry in a `PatientQueue`.
///
/// `Patient` has no intrinsic total order. The queue orders patients with
/// `is_higher_priority`: lower `priority` first, then `name` in code-point order.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Patient {
    pub name: String,
    pub priority: Priority,
}

impl Patient {
    pub fn new(name: impl Into<String>, priority: Priority) -> Self {
        Self {
            name: name.into(),
            priority,
        }
    }

    /// Compares by priority, then by name. `Less` means `self` is served first.
    pub fn urgency_cmp(&self, other: &Patient) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.name.cmp(&other.name))
    }

    /// Returns true if `self` must be served strictly before `other`.
    /// Patients with the same name and priority are never higher than each other.
    pub fn is_higher_priority(&self, other: &Patient) -> bool {
        self.urgency_cmp(other) == Ordering::Less
    }
}

impl Display for Patient {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        write!(fmt, "{} ({})", self.name, self.priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_higher_priority_test() {
        fn case(description: &str, a: Patient, b: Patient, expected: bool) {
            assert_eq!(
                a.is_higher_priority(&b),
                expected,
                "{}: {} vs {}",
                description,
                a,
                b
            );
        }

        case("lower priority wins", Patient::new("Zed", 1), Patient::new("Amy", 2), true);
        case("higher priority loses", Patient::new("Amy", 2), Patient::new("Zed", 1), false);
        case("negative beats zero", Patient::new("b", -4), Patient::new("a", 0), true);
        case("tie broken by name", Patient::new("Amy", 3), Patient::new("Bob", 3), true);
        case("tie broken by name, reversed", Patient::new("Bob", 3), Patient::new("Amy", 3), false);
        case("identical", Patient::new("Amy", 3), Patient::new("Amy", 3), false);
        case("empty name sorts first", Patient::new("", 3), Patient::new("a", 3), true);
        case("case sensitive", Patient::new("Zed", 3), Patient::new("amy", 3), true);
        case("prefix sorts first", Patient::new("Ann", 3), Patient::new("Anna", 3), true);
    }

    #[test]
    fn code_point_order() {
        // U+00E9 sorts after every ASCII letter.
        assert!(Patient::new("z", 0).is_higher_priority(&Patient::new("\u{e9}", 0)));
    }

    #[test]
    fn display_test() {
        assert_eq!(Patient::new("Anna", 3).to_string(), "Anna (3)");
        assert_eq!(Patient::new("Bo", -2).to_string(), "Bo (-2)");
        assert_eq!(Patient::new("", 0).to_string(), " (0)");
    }
}
