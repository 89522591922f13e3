//! Comparator factory.

use crate::{CmpOp, Comparable};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// A binary predicate over wrapped values.
pub type Predicate<T> = Arc<dyn Fn(&T, &T) -> bool + Send + Sync>;

static NEXT_CLASS_ID: AtomicU64 = AtomicU64::new(0);

/// A synthesized comparable type.
///
/// Every call to [`CmpUsing::build`] yields a class with a fresh identity.
/// Wrappers made by different classes are different types for the purpose
/// of `require_same_type`, even when they wrap the same Rust type.
pub struct ComparatorClass<T> {
    id: u64,
    name: String,
    require_same_type: bool,
    eq: Option<Predicate<T>>,
    lt: Option<Predicate<T>>,
    le: Option<Predicate<T>>,
    gt: Option<Predicate<T>>,
    ge: Option<Predicate<T>>,
}

impl<T> ComparatorClass<T> {
    /// Display name of the class.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn require_same_type(&self) -> bool {
        self.require_same_type
    }

    /// Returns true if both handles refer to the same synthesized class.
    pub fn same_class(&self, other: &ComparatorClass<T>) -> bool {
        self.id == other.id
    }

    /// Returns true if the operator is wired. `Ne` is wired whenever `Eq` is.
    pub fn supports(&self, op: CmpOp) -> bool {
        match op {
            CmpOp::Eq | CmpOp::Ne => self.eq.is_some(),
            other => self.predicate(other).is_some(),
        }
    }

    /// Wrap a value as an instance of this class.
    pub fn wrap(self: &Arc<Self>, value: T) -> Comparable<T> {
        Comparable::new(Arc::clone(self), value)
    }

    pub(crate) fn predicate(&self, op: CmpOp) -> Option<&Predicate<T>> {
        match op {
            CmpOp::Eq => self.eq.as_ref(),
            CmpOp::Lt => self.lt.as_ref(),
            CmpOp::Le => self.le.as_ref(),
            CmpOp::Gt => self.gt.as_ref(),
            CmpOp::Ge => self.ge.as_ref(),
            CmpOp::Ne => None,
        }
    }
}

impl<T> fmt::Debug for ComparatorClass<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wired: Vec<&str> = [CmpOp::Eq, CmpOp::Lt, CmpOp::Le, CmpOp::Gt, CmpOp::Ge]
            .into_iter()
            .filter(|op| self.supports(*op))
            .map(|op| op.name())
            .collect();
        f.debug_struct("ComparatorClass")
            .field("name", &self.name)
            .field("require_same_type", &self.require_same_type)
            .field("operators", &wired)
            .finish()
    }
}

/// Builder for a [`ComparatorClass`].
pub struct CmpUsing<T> {
    name: String,
    require_same_type: bool,
    eq: Option<Predicate<T>>,
    lt: Option<Predicate<T>>,
    le: Option<Predicate<T>>,
    gt: Option<Predicate<T>>,
    ge: Option<Predicate<T>>,
}

/// Start building a comparable class.
///
/// Defaults: no operators, `require_same_type = true`, name `"Comparable"`.
pub fn cmp_using<T>() -> CmpUsing<T> {
    CmpUsing {
        name: "Comparable".to_string(),
        require_same_type: true,
        eq: None,
        lt: None,
        le: None,
        gt: None,
        ge: None,
    }
}

impl<T> CmpUsing<T> {
    pub fn eq<F>(mut self, f: F) -> Self
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        self.eq = Some(Arc::new(f));
        self
    }

    pub fn lt<F>(mut self, f: F) -> Self
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        self.lt = Some(Arc::new(f));
        self
    }

    pub fn le<F>(mut self, f: F) -> Self
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        self.le = Some(Arc::new(f));
        self
    }

    pub fn gt<F>(mut self, f: F) -> Self
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        self.gt = Some(Arc::new(f));
        self
    }

    pub fn ge<F>(mut self, f: F) -> Self
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        self.ge = Some(Arc::new(f));
        self
    }

    /// When true (the default), operands wrapped by another class are incomparable.
    pub fn require_same_type(mut self, require: bool) -> Self {
        self.require_same_type = require;
        self
    }

    pub fn class_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Finish building. Each call produces a distinct class.
    pub fn build(self) -> Arc<ComparatorClass<T>> {
        Arc::new(ComparatorClass {
            id: NEXT_CLASS_ID.fetch_add(1, Ordering::Relaxed),
            name: self.name,
            require_same_type: self.require_same_type,
            eq: self.eq,
            lt: self.lt,
            le: self.le,
            gt: self.gt,
            ge: self.ge,
        })
    }
}
