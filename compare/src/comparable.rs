//! Comparable wrappers and operator dispatch.

use crate::ComparatorClass;
use attrkit_core::{AttrError, AttrResult};
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// A comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CmpOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CmpOp {
    pub fn name(&self) -> &'static str {
        match self {
            CmpOp::Eq => "eq",
            CmpOp::Ne => "ne",
            CmpOp::Lt => "lt",
            CmpOp::Le => "le",
            CmpOp::Gt => "gt",
            CmpOp::Ge => "ge",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            CmpOp::Eq => "==",
            CmpOp::Ne => "!=",
            CmpOp::Lt => "<",
            CmpOp::Le => "<=",
            CmpOp::Gt => ">",
            CmpOp::Ge => ">=",
        }
    }

    /// The operator to try on the right operand when the left one declines.
    pub fn reflected(&self) -> CmpOp {
        match self {
            CmpOp::Eq => CmpOp::Eq,
            CmpOp::Ne => CmpOp::Ne,
            CmpOp::Lt => CmpOp::Gt,
            CmpOp::Le => CmpOp::Ge,
            CmpOp::Gt => CmpOp::Lt,
            CmpOp::Ge => CmpOp::Le,
        }
    }
}

/// Result of a soft comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The operator ran and produced an answer.
    Value(bool),
    /// The operator declined; the caller may try the reflected operation.
    Incomparable,
}

impl Outcome {
    pub fn is_incomparable(&self) -> bool {
        matches!(self, Outcome::Incomparable)
    }

    pub fn value(&self) -> Option<bool> {
        match self {
            Outcome::Value(b) => Some(*b),
            Outcome::Incomparable => None,
        }
    }

    fn negate(self) -> Outcome {
        match self {
            Outcome::Value(b) => Outcome::Value(!b),
            Outcome::Incomparable => Outcome::Incomparable,
        }
    }
}

/// A value wrapped by a [`ComparatorClass`].
pub struct Comparable<T> {
    class: Arc<ComparatorClass<T>>,
    value: T,
}

impl<T> Comparable<T> {
    pub(crate) fn new(class: Arc<ComparatorClass<T>>, value: T) -> Self {
        Self { class, value }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn class(&self) -> &Arc<ComparatorClass<T>> {
        &self.class
    }

    /// Run one operator without any fallback.
    ///
    /// Yields `Incomparable` when the operator is not wired, or when the class
    /// requires the same type and `other` was wrapped by a different class.
    pub fn op(&self, op: CmpOp, other: &Comparable<T>) -> Outcome {
        if self.class.require_same_type() && !self.class.same_class(&other.class) {
            return Outcome::Incomparable;
        }
        if op == CmpOp::Ne {
            return self.op(CmpOp::Eq, other).negate();
        }
        match self.class.predicate(op) {
            Some(predicate) => Outcome::Value(predicate(&self.value, &other.value)),
            None => Outcome::Incomparable,
        }
    }

    pub fn eq_soft(&self, other: &Comparable<T>) -> Outcome {
        self.op(CmpOp::Eq, other)
    }

    pub fn ne_soft(&self, other: &Comparable<T>) -> Outcome {
        self.op(CmpOp::Ne, other)
    }

    pub fn lt_soft(&self, other: &Comparable<T>) -> Outcome {
        self.op(CmpOp::Lt, other)
    }

    pub fn le_soft(&self, other: &Comparable<T>) -> Outcome {
        self.op(CmpOp::Le, other)
    }

    pub fn gt_soft(&self, other: &Comparable<T>) -> Outcome {
        self.op(CmpOp::Gt, other)
    }

    pub fn ge_soft(&self, other: &Comparable<T>) -> Outcome {
        self.op(CmpOp::Ge, other)
    }
}

/// Strict comparison with reflected fallback.
///
/// Tries `left op right`; if that is incomparable, tries the reflected
/// operator on `right`. Fails only when both decline.
pub fn compare<T>(left: &Comparable<T>, op: CmpOp, right: &Comparable<T>) -> AttrResult<bool> {
    if let Outcome::Value(b) = left.op(op, right) {
        return Ok(b);
    }
    let reflected = op.reflected();
    tracing::trace!(
        op = op.symbol(),
        left = left.class.name(),
        right = right.class.name(),
        "left operand declined, trying reflected operator"
    );
    match right.op(reflected, left) {
        Outcome::Value(b) => Ok(b),
        Outcome::Incomparable => Err(AttrError::incomparable(
            op.symbol(),
            left.class.name(),
            right.class.name(),
        )),
    }
}

impl<T> PartialEq for Comparable<T> {
    /// Incomparable operands are unequal.
    fn eq(&self, other: &Self) -> bool {
        compare(self, CmpOp::Eq, other).unwrap_or(false)
    }
}

impl<T> PartialOrd for Comparable<T> {
    /// `Equal` only when `eq` holds. Equality is never inferred from
    /// `!(a < b) && !(b < a)`, so an order-only class yields `None` for
    /// equal values while `<` and `>` still answer.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if compare(self, CmpOp::Eq, other).unwrap_or(false) {
            Some(Ordering::Equal)
        } else if compare(self, CmpOp::Lt, other).unwrap_or(false) {
            Some(Ordering::Less)
        } else if compare(self, CmpOp::Gt, other).unwrap_or(false) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }

    fn lt(&self, other: &Self) -> bool {
        compare(self, CmpOp::Lt, other).unwrap_or(false)
    }

    fn le(&self, other: &Self) -> bool {
        compare(self, CmpOp::Le, other).unwrap_or(false)
    }

    fn gt(&self, other: &Self) -> bool {
        compare(self, CmpOp::Gt, other).unwrap_or(false)
    }

    fn ge(&self, other: &Self) -> bool {
        compare(self, CmpOp::Ge, other).unwrap_or(false)
    }
}

impl<T: fmt::Debug> fmt::Debug for Comparable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.class.name(), self.value)
    }
}

impl<T: Clone> Clone for Comparable<T> {
    fn clone(&self) -> Self {
        Self {
            class: Arc::clone(&self.class),
            value: self.value.clone(),
        }
    }
}
