use std::cmp::Ordering;

use crate::number::*;
use crate::test_utils::{sample_numbers, tfn};

#[test]
fn test_creation() {
    let value = TriFuzzyNum::new(1.25, 2.25, 3.0);
    assert_eq!(value.lower_value(), 1.25);
    assert_eq!(value.modal_value(), 2.25);
    assert_eq!(value.upper_value(), 3.0);
    assert_eq!(value.to_tuple(), (1.25, 2.25, 3.0));
}

#[test]
fn test_normalization_is_permutation_invariant() {
    let expected = tfn(-1.0, 0.5, 4.0);
    let permutations = [
        (-1.0, 0.5, 4.0),
        (-1.0, 4.0, 0.5),
        (0.5, -1.0, 4.0),
        (0.5, 4.0, -1.0),
        (4.0, -1.0, 0.5),
        (4.0, 0.5, -1.0),
    ];

    for (r1, r2, r3) in permutations {
        let value = TriFuzzyNum::new(r1, r2, r3);
        assert_eq!(value, expected, "permutation ({}, {}, {})", r1, r2, r3);
    }
}

#[test]
fn test_normalization_orders_bounds() {
    for value in sample_numbers() {
        assert!(value.lower_value() <= value.modal_value());
        assert!(value.modal_value() <= value.upper_value());
    }
}

#[test]
fn test_normalization_with_repeated_values() {
    let value = TriFuzzyNum::new(2.0, 1.0, 2.0);
    assert_eq!(value.to_tuple(), (1.0, 2.0, 2.0));

    let value = TriFuzzyNum::new(1.0, 1.0, 0.0);
    assert_eq!(value.to_tuple(), (0.0, 1.0, 1.0));
}

#[test]
fn test_crisp() {
    let value = TriFuzzyNum::crisp(-3.5);
    assert_eq!(value.to_tuple(), (-3.5, -3.5, -3.5));
    assert!(value.is_crisp());
    assert!(!tfn(0.0, 0.0, 1.0).is_crisp());

    assert_eq!(CRISP_ZERO, TriFuzzyNum::new(0.0, 0.0, 0.0));
    assert_eq!(TriFuzzyNum::ZERO, CRISP_ZERO);
    assert_eq!(TriFuzzyNum::ONE, TriFuzzyNum::crisp(1.0));
    assert_eq!(TriFuzzyNum::default(), CRISP_ZERO);
}

#[test]
fn test_addition() {
    let a = tfn(0.0, 1.0, 2.0);
    let b = tfn(2.0, 3.0, 4.0);
    assert_eq!(a + b, tfn(2.0, 4.0, 6.0));
}

#[test]
fn test_addition_identity() {
    for value in sample_numbers() {
        assert_eq!(value + CRISP_ZERO, value);
        assert_eq!(CRISP_ZERO + value, value);
    }
}

#[test]
fn test_subtraction_pairs_lower_with_upper() {
    let a = tfn(0.0, 1.0, 2.0);
    assert_eq!(a - a, tfn(-2.0, 0.0, 2.0));
    assert_ne!(a - a, CRISP_ZERO);

    let b = tfn(5.0, 7.0, 10.0);
    let c = tfn(1.0, 2.0, 4.0);
    assert_eq!(b - c, tfn(1.0, 5.0, 9.0));
}

#[test]
fn test_multiplication_nonnegative() {
    let a = tfn(1.0, 2.0, 3.0);
    let b = tfn(2.0, 3.0, 4.0);
    assert_eq!(a * b, tfn(2.0, 6.0, 12.0));
    assert_eq!(a * TriFuzzyNum::ONE, a);
}

#[test]
fn test_multiplication_mixed_signs_keeps_bounds_ordered() {
    // Naive products are (2, 1, 6); the result is re-sorted.
    let product = tfn(-2.0, 1.0, 3.0) * tfn(-1.0, 1.0, 2.0);
    assert_eq!(product.to_tuple(), (1.0, 2.0, 6.0));

    for a in sample_numbers().into_iter().step_by(17) {
        for b in sample_numbers().into_iter().step_by(23) {
            let product = a * b;
            assert!(product.lower_value() <= product.modal_value());
            assert!(product.modal_value() <= product.upper_value());
        }
    }
}

#[test]
fn test_compound_assignment() {
    let b = tfn(1.0, 2.0, 3.0);

    let mut value = tfn(0.0, 1.0, 2.0);
    value += b;
    assert_eq!(value, tfn(1.0, 3.0, 5.0));

    value -= &b;
    assert_eq!(value, tfn(-2.0, 1.0, 4.0));

    let mut value = tfn(1.0, 1.0, 2.0);
    value *= b;
    assert_eq!(value, tfn(1.0, 2.0, 6.0));
}

#[test]
fn test_borrowed_operands() {
    let a = tfn(0.0, 1.0, 2.0);
    let b = tfn(1.0, 1.0, 1.0);

    assert_eq!(&a + &b, a + b);
    assert_eq!(&a - b, a - b);
    assert_eq!(a * &b, a * b);
}

#[test]
fn test_equality_is_exact() {
    let a = tfn(0.0, 1.0, 2.0);
    assert_eq!(a, tfn(2.0, 1.0, 0.0));
    assert_ne!(a, tfn(0.0, 1.0, 2.000_000_001));
    assert_ne!(a, tfn(0.0, 1.5, 2.0));
}

#[test]
fn test_comparison() {
    let low = tfn(0.0, 1.0, 2.0);
    let high = tfn(2.0, 3.0, 4.0);

    assert!(high > low);
    assert!(low < high);
    assert_eq!(low.compare_rank(&high), Ordering::Less);
    assert_eq!(high.compare_rank(&low), Ordering::Greater);
    assert_eq!(low.compare_rank(&low), Ordering::Equal);
    assert!(low.is_rank_equivalent(&tfn(2.0, 0.0, 1.0)));
    assert_eq!(low.partial_cmp(&low), Some(Ordering::Equal));
}

#[test]
fn test_spread_components_grow_with_width() {
    // Symmetric numbers around the same centre share x.
    let narrow = tfn(0.0, 1.0, 2.0);
    let wide = tfn(-1.0, 1.0, 3.0);

    assert!((narrow.rank().x() - 1.0).abs() < 1e-12);
    assert!((wide.rank().x() - 1.0).abs() < 1e-12);
    assert!(wide.rank().y() > narrow.rank().y());
    assert!(wide.rank().z() > narrow.rank().z());
}

#[test]
fn test_order_is_antisymmetric() {
    let numbers = sample_numbers();
    for a in &numbers {
        for b in numbers.iter().step_by(7) {
            assert_eq!(a.compare_rank(b), b.compare_rank(a).reverse());
        }
    }
}

#[test]
fn test_order_is_transitive() {
    let numbers: Vec<TriFuzzyNum> = sample_numbers().into_iter().step_by(9).collect();
    for a in &numbers {
        for b in &numbers {
            for c in &numbers {
                if a.compare_rank(b) != Ordering::Greater
                    && b.compare_rank(c) != Ordering::Greater
                {
                    assert_ne!(a.compare_rank(c), Ordering::Greater, "{} {} {}", a, b, c);
                }
            }
        }
    }
}

#[test]
fn test_sorted_by_rank_is_consistent() {
    let mut numbers = sample_numbers();
    numbers.sort_by(|a, b| a.compare_rank(b));

    for (i, a) in numbers.iter().enumerate() {
        for b in &numbers[i..] {
            assert_ne!(a.compare_rank(b), Ordering::Greater);
        }
    }
}

#[test]
fn test_sum() {
    let values = [tfn(0.0, 1.0, 2.0), tfn(2.0, 3.0, 4.0), tfn(4.0, 5.0, 6.0)];

    let owned: TriFuzzyNum = values.iter().copied().sum();
    let borrowed: TriFuzzyNum = values.iter().sum();
    assert_eq!(owned, tfn(6.0, 9.0, 12.0));
    assert_eq!(borrowed, owned);

    let empty: TriFuzzyNum = std::iter::empty::<TriFuzzyNum>().sum();
    assert_eq!(empty, CRISP_ZERO);
}

#[test]
fn test_display() {
    assert_eq!(tfn(0.0, 1.0, 2.0).to_string(), "(0, 1, 2)");
    assert_eq!(tfn(-2.0, 0.5, 2.0).to_string(), "(-2, 0.5, 2)");
    assert_eq!(format!("{:.2}", tfn(0.0, 1.0, 2.0)), "(0.00, 1.00, 2.00)");
}

#[test]
fn test_debug() {
    assert_eq!(format!("{:?}", tfn(0.0, 1.0, 2.0)), "TriFuzzyNum(0, 1, 2)");
}

#[test]
fn test_conversions() {
    assert_eq!(TriFuzzyNum::from(4.0), TriFuzzyNum::crisp(4.0));
    assert_eq!(TriFuzzyNum::from((3.0, 1.0, 2.0)), tfn(1.0, 2.0, 3.0));
    assert_eq!(TriFuzzyNum::from([3.0, 1.0, 2.0]), tfn(1.0, 2.0, 3.0));
}
