//! Generic queries over any `std::error::Error`.
//!
//! These walk an error and its `source()` chain, and hand the question over to
//! [`ErrorTree`] whenever a link in the chain is a tree.

use super::ErrorTree;
use std::error::Error;

/// Reports whether `a` and `b` are the same error value: same address and same
/// concrete type. Contents are never compared.
///
/// The address alone is not enough, since a struct shares its address with
/// its first field.
#[allow(ambiguous_wide_pointer_comparisons)]
pub fn same_error(a: &(dyn Error + 'static), b: &(dyn Error + 'static)) -> bool {
    std::ptr::eq(a as *const dyn Error, b as *const dyn Error)
}

/// Reports whether `err`, or any error it wraps, matches `target`.
///
/// Each link of the source chain is compared by identity. A link that is an
/// [`ErrorTree`] answers through [`ErrorTree::matches`], which also covers its
/// original and children.
pub fn is(err: &(dyn Error + 'static), target: &(dyn Error + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(link) = current {
        if same_error(link, target) {
            return true;
        }
        if let Some(tree) = link.downcast_ref::<ErrorTree>() {
            return tree.matches(target);
        }
        current = link.source();
    }
    false
}

/// Find the first error of type `T` in `err` or anything it wraps.
///
/// A link that is an [`ErrorTree`] is itself a candidate (so a tree narrows
/// to `ErrorTree`), and otherwise answers through [`ErrorTree::narrow`].
pub fn find<'a, T>(err: &'a (dyn Error + 'static)) -> Option<&'a T>
where
    T: Error + 'static,
{
    let mut current = Some(err);
    while let Some(link) = current {
        if let Some(found) = link.downcast_ref::<T>() {
            return Some(found);
        }
        if let Some(tree) = link.downcast_ref::<ErrorTree>() {
            return tree.narrow::<T>();
        }
        current = link.source();
    }
    None
}

/// Method syntax for [`is`] and [`find`].
///
/// The names avoid the inherent `is` and `downcast_ref` methods of
/// `dyn Error`, which take precedence over trait methods. There is no blanket
/// impl: `Arc<dyn Error>` is itself an `Error`, and a blanket impl would make
/// `arc.matches_error(..)` inspect the `Arc` instead of the error it holds.
pub trait Inspect {
    /// See [`is`]
    fn matches_error(&self, target: &(dyn Error + 'static)) -> bool;

    /// See [`find`]
    fn narrow_to<T>(&self) -> Option<&T>
    where
        T: Error + 'static;
}

impl Inspect for ErrorTree {
    fn matches_error(&self, target: &(dyn Error + 'static)) -> bool {
        is(self, target)
    }

    fn narrow_to<T>(&self) -> Option<&T>
    where
        T: Error + 'static,
    {
        find::<T>(self)
    }
}

impl Inspect for dyn Error + 'static {
    fn matches_error(&self, target: &(dyn Error + 'static)) -> bool {
        is(self, target)
    }

    fn narrow_to<T>(&self) -> Option<&T>
    where
        T: Error + 'static,
    {
        find::<T>(self)
    }
}

impl Inspect for dyn Error + Send + Sync + 'static {
    fn matches_error(&self, target: &(dyn Error + 'static)) -> bool {
        is(self, target)
    }

    fn narrow_to<T>(&self) -> Option<&T>
    where
        T: Error + 'static,
    {
        find::<T>(self)
    }
}
