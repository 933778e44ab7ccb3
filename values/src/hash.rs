//! Equality and hashing over element sequences.
//!
//! Scalars and vectors of the same primitive compare and hash through these
//! helpers, which is what makes a scalar equal to the length-1 vector holding
//! the same element. Attributes never take part.

use core::hash::Hasher;

use crate::typed::Element;

pub(crate) fn elements_eq<T: Element>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same(y))
}

/// Order-sensitive hash of `elements`, salted by the element type.
pub(crate) fn hash_elements<T: Element, H: Hasher>(elements: &[T], state: &mut H) {
    state.write_u64(T::PRIMITIVE.salt());
    state.write_usize(elements.len());
    for element in elements {
        element.hash_element(state);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::Hasher as _;

    use rsexp_types::{Logical, NaSentinel};

    use super::*;

    fn digest<T: Element>(elements: &[T]) -> u64 {
        let mut hasher = DefaultHasher::new();
        hash_elements(elements, &mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_order_sensitive() {
        assert_ne!(digest(&[1, 2, 3]), digest(&[3, 2, 1]));
        assert_eq!(digest(&[1, 2, 3]), digest(&[1, 2, 3]));
    }

    #[test]
    fn test_salted_by_type() {
        // Empty sequences differ only in the salt.
        let ints: &[i32] = &[];
        let doubles: &[f64] = &[];
        let logicals: &[Logical] = &[];
        assert_ne!(digest(ints), digest(doubles));
        assert_ne!(digest(ints), digest(logicals));
    }

    #[test]
    fn test_double_hash_matches_equality() {
        assert!(elements_eq(&[0.0f64], &[-0.0]));
        assert_eq!(digest(&[0.0f64]), digest(&[-0.0f64]));
        assert!(elements_eq(&[f64::na()], &[f64::na()]));
        assert_eq!(digest(&[f64::na()]), digest(&[f64::na()]));
        assert!(!elements_eq(&[f64::na()], &[f64::NAN]));
    }
}
