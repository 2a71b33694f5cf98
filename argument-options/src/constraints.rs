//! Constraints validate an already parsed value.
use std::fmt;
use std::marker::PhantomData;

/// A predicate over a parsed value with a message explaining rejections.
pub trait Constraint<T>: Send + Sync {
    /// Returns `true` if the value is acceptable.
    fn is_fulfilled(&self, value: &T) -> bool;

    /// Describes why the value was rejected.
    fn error_message(&self, value: &T) -> String;
}

/// Accepts only values from a fixed set.
///
/// Elements keep their insertion order, which is also the order they are
/// rendered in by [`Display`](fmt::Display).
///
/// ```
/// use argument_options::{AllowedSet, Constraint};
///
/// let allowed = AllowedSet::from_iter([1, 3]);
/// assert!(allowed.is_fulfilled(&3));
/// assert_eq!(
///     allowed.error_message(&2),
///     "\"2\" is not allowed. Allowed arguments are: [1, 3]"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AllowedSet<T> {
    values: Vec<T>,
}

impl<T> Default for AllowedSet<T> {
    fn default() -> AllowedSet<T> {
        AllowedSet { values: Vec::new() }
    }
}

impl<T: PartialEq> AllowedSet<T> {
    /// Creates an empty set which rejects everything.
    pub fn new() -> AllowedSet<T> {
        AllowedSet::default()
    }

    /// Adds a value.  Returns `false` if it was already allowed.
    pub fn add(&mut self, value: T) -> bool {
        if self.values.contains(&value) {
            false
        } else {
            self.values.push(value);
            true
        }
    }

    /// Checks if the value is part of the set.
    pub fn contains(&self, value: &T) -> bool {
        self.values.contains(value)
    }

    /// Iterates over the allowed values in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<T: PartialEq> FromIterator<T> for AllowedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> AllowedSet<T> {
        let mut rv = AllowedSet::new();
        for value in iter {
            rv.add(value);
        }
        rv
    }
}

impl<T: fmt::Display> fmt::Display for AllowedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.values.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

impl<T> Constraint<T> for AllowedSet<T>
where
    T: PartialEq + fmt::Display + Send + Sync,
{
    fn is_fulfilled(&self, value: &T) -> bool {
        self.contains(value)
    }

    fn error_message(&self, value: &T) -> String {
        format!(
            "\"{}\" is not allowed. Allowed arguments are: {}",
            value, self
        )
    }
}

/// A constraint made from a predicate and a message function.
///
/// Created by [`constraint_fn`].
pub struct FnConstraint<T, P, M> {
    predicate: P,
    message: M,
    _marker: PhantomData<fn(&T)>,
}

impl<T, P, M> fmt::Debug for FnConstraint<T, P, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnConstraint").finish_non_exhaustive()
    }
}

impl<T, P, M> Constraint<T> for FnConstraint<T, P, M>
where
    P: Fn(&T) -> bool + Send + Sync,
    M: Fn(&T) -> String + Send + Sync,
{
    fn is_fulfilled(&self, value: &T) -> bool {
        (self.predicate)(value)
    }

    fn error_message(&self, value: &T) -> String {
        (self.message)(value)
    }
}

/// Builds a constraint from a predicate and a function rendering the
/// rejection message.
///
/// ```
/// use argument_options::{constraint_fn, Constraint};
///
/// let positive = constraint_fn(|x: &i64| *x > 0, |x| format!("{} is not positive", x));
/// assert!(positive.is_fulfilled(&1));
/// assert!(!positive.is_fulfilled(&-1));
/// ```
pub fn constraint_fn<T, P, M>(predicate: P, message: M) -> FnConstraint<T, P, M>
where
    P: Fn(&T) -> bool + Send + Sync,
    M: Fn(&T) -> String + Send + Sync,
{
    FnConstraint {
        predicate,
        message,
        _marker: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_numbers() {
        let mut allowed = AllowedSet::new();
        allowed.add(1);
        allowed.add(3);
        assert!(allowed.is_fulfilled(&3));
        assert!(!allowed.is_fulfilled(&2));
        assert_eq!(
            allowed.error_message(&2),
            format!("\"2\" is not allowed. Allowed arguments are: {}", allowed)
        );
        assert_eq!(allowed.to_string(), "[1, 3]");
    }

    #[test]
    fn test_allowed_strings() {
        let allowed: AllowedSet<String> = ["fast", "slow"].iter().map(|x| x.to_string()).collect();
        assert!(allowed.is_fulfilled(&"fast".to_string()));
        assert!(!allowed.is_fulfilled(&"FAST".to_string()));
        assert_eq!(
            allowed.error_message(&"medium".to_string()),
            "\"medium\" is not allowed. Allowed arguments are: [fast, slow]"
        );
    }

    #[test]
    fn test_allowed_set_dedup() {
        let mut allowed = AllowedSet::from_iter([2, 1, 2]);
        assert_eq!(allowed.len(), 2);
        assert!(!allowed.add(1));
        assert!(allowed.add(5));
        assert_eq!(allowed.iter().copied().collect::<Vec<_>>(), vec![2, 1, 5]);
    }

    #[test]
    fn test_empty_allowed_set() {
        let allowed = AllowedSet::<i32>::new();
        assert!(allowed.is_empty());
        assert!(!allowed.is_fulfilled(&0));
        assert_eq!(
            allowed.error_message(&0),
            "\"0\" is not allowed. Allowed arguments are: []"
        );
    }

    #[test]
    fn test_fn_constraint() {
        let even = constraint_fn(|x: &i32| x % 2 == 0, |x| format!("{} is odd", x));
        assert!(even.is_fulfilled(&4));
        assert!(!even.is_fulfilled(&3));
        assert_eq!(even.error_message(&3), "3 is odd");
    }
}
