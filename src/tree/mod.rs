use std::error::Error;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

pub mod inspect;
pub mod message;
#[cfg(feature = "serde")]
pub mod serialization;

pub use inspect::{find, is, same_error, Inspect};
pub use message::MessageError;
#[cfg(feature = "serde")]
pub use serialization::SerializableError;

/// An error shared between trees; identity is the allocation it points to
pub type SharedError = Arc<dyn Error + Send + Sync + 'static>;

/// An owned, type-erased error
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Wrap a concrete error so it can be stored in an [`ErrorTree`]
pub fn shared<E>(err: E) -> SharedError
where
    E: Error + Send + Sync + 'static,
{
    Arc::new(err)
}

/// An error that stores a root message, an optional original error it was
/// derived from, and any number of child errors.
///
/// Rendering only shows the root message and the children; the original is
/// reachable through [`ErrorTree::matches`] and [`ErrorTree::narrow`].
///
/// `ErrorTree` deliberately has no `PartialEq`: two trees are only compared
/// structurally when one is used as the target of [`ErrorTree::matches`].
#[derive(Debug, Clone)]
pub struct ErrorTree {
    message: String,
    original: Option<SharedError>,
    children: Vec<SharedError>,
}

impl ErrorTree {
    /// Create a tree with `message` and the present entries of `errors`
    pub fn new<I>(message: impl Into<String>, errors: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Option<SharedError>>,
    {
        Self::from_message(message).with_errors(errors)
    }

    /// Create a tree holding only a root message
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            original: None,
            children: Vec::new(),
        }
    }

    /// Create a tree from an existing error.
    ///
    /// * `None` yields an empty tree.
    /// * An `ErrorTree` original is handed back as is and `errors` are
    ///   discarded, so wrapping a tree never nests it one level deeper. The
    ///   returned value shares every allocation of the original tree.
    /// * Any other error becomes the tree's original, and its rendered text
    ///   becomes the root message.
    pub fn derive_from<I>(original: Option<SharedError>, errors: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Option<SharedError>>,
    {
        let Some(original) = original else {
            return Self::from_message("");
        };

        if let Some(tree) = original.downcast_ref::<ErrorTree>() {
            let discarded = errors
                .into_iter()
                .filter_map(Into::<Option<SharedError>>::into)
                .count();
            if discarded > 0 {
                trace!(discarded, "original is already an error tree, dropping extra errors");
            }
            return tree.clone();
        }

        Self {
            message: original.to_string(),
            original: Some(original),
            children: Vec::new(),
        }
        .with_errors(errors)
    }

    /// Replace all children with the present entries of `errors`.
    ///
    /// An empty iterator clears the children.
    pub fn with_errors<I>(mut self, errors: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Option<SharedError>>,
    {
        let mut dropped = 0usize;
        self.children = errors
            .into_iter()
            .filter_map(|err| {
                let err: Option<SharedError> = err.into();
                if err.is_none() {
                    dropped += 1;
                }
                err
            })
            .collect();

        if dropped > 0 {
            trace!(dropped, kept = self.children.len(), "filtered absent child errors");
        }
        self
    }

    /// Root message, rendered first
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Error this tree was derived from, if any
    pub fn original(&self) -> Option<&SharedError> {
        self.original.as_ref()
    }

    /// Child errors in insertion order
    pub fn children(&self) -> &[SharedError] {
        &self.children
    }

    /// Reports whether `target` is found anywhere in this tree.
    ///
    /// The original is checked first, then, when `target` is itself a tree,
    /// whether both trees have the same message and the very same child
    /// errors in the same order. Children are searched last, in order.
    pub fn matches(&self, target: &(dyn Error + 'static)) -> bool {
        if let Some(original) = &self.original {
            if inspect::is(&**original, target) {
                return true;
            }
        }

        if let Some(other) = target.downcast_ref::<ErrorTree>() {
            if self.message == other.message && same_children(&self.children, &other.children) {
                return true;
            }
        }

        self.children
            .iter()
            .any(|child| inspect::is(&**child, target))
    }

    /// Find the first error of type `T` in a preorder walk, starting with the
    /// original and continuing through the children.
    pub fn narrow<T>(&self) -> Option<&T>
    where
        T: Error + 'static,
    {
        self.original
            .iter()
            .chain(self.children.iter())
            .find_map(|err| inspect::find::<T>(&**err))
    }
}

/// Shallow comparison: same length and the same allocation in every slot
fn same_children(left: &[SharedError], right: &[SharedError]) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .all(|(l, r)| Arc::ptr_eq(l, r))
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;

        if !self.children.is_empty() {
            f.write_str(":")?;
            for child in &self.children {
                write!(f, "\n\t{}", child)?;
            }
        }
        Ok(())
    }
}

// Traversal goes through `inspect`, not the source chain: the original's text
// is already part of the message.
impl Error for ErrorTree {}

impl From<BoxError> for ErrorTree {
    fn from(err: BoxError) -> Self {
        match err.downcast::<ErrorTree>() {
            Ok(tree) => *tree,
            Err(err) => Self::derive_from(Some(Arc::from(err)), None::<SharedError>),
        }
    }
}

impl From<MessageError> for ErrorTree {
    fn from(err: MessageError) -> Self {
        Self::derive_from(Some(shared(err)), None::<SharedError>)
    }
}
