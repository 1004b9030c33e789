//! Declarative macros for the fuzzy arithmetic operators.
//!
//! Every binary operator comes in four flavors (owned and borrowed operands)
//! plus its compound-assignment form. The macro below generates all of them
//! from a single expression over the three bounds of each operand.

/// Generates a binary operator, its borrowed variants, and its `*Assign` form.
///
/// The body receives both operands by value and must build the result through
/// the normalizing constructor.
///
/// # Usage
/// ```ignore
/// impl_fuzzy_op!(TriFuzzyNum: Add::add, AddAssign::add_assign, |a, b| {
///     TriFuzzyNum::new(a.lower + b.lower, a.modal + b.modal, a.upper + b.upper)
/// });
/// ```
macro_rules! impl_fuzzy_op {
    (
        $type:ident:
        $trait:ident :: $method:ident,
        $assign_trait:ident :: $assign_method:ident,
        |$a:ident, $b:ident| $body:block
    ) => {
        impl std::ops::$trait for $type {
            type Output = $type;

            #[inline]
            fn $method(self, other: $type) -> $type {
                let $a = self;
                let $b = other;
                $body
            }
        }

        impl std::ops::$trait<&$type> for $type {
            type Output = $type;

            #[inline]
            fn $method(self, other: &$type) -> $type {
                std::ops::$trait::$method(self, *other)
            }
        }

        impl std::ops::$trait<$type> for &$type {
            type Output = $type;

            #[inline]
            fn $method(self, other: $type) -> $type {
                std::ops::$trait::$method(*self, other)
            }
        }

        impl std::ops::$trait<&$type> for &$type {
            type Output = $type;

            #[inline]
            fn $method(self, other: &$type) -> $type {
                std::ops::$trait::$method(*self, *other)
            }
        }

        impl std::ops::$assign_trait for $type {
            #[inline]
            fn $assign_method(&mut self, other: $type) {
                *self = std::ops::$trait::$method(*self, other);
            }
        }

        impl std::ops::$assign_trait<&$type> for $type {
            #[inline]
            fn $assign_method(&mut self, other: &$type) {
                *self = std::ops::$trait::$method(*self, *other);
            }
        }
    };
}

// Macros are used via #[macro_use] on the module declaration.
