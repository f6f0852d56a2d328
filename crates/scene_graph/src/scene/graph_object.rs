//! Opaque node content

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Access to the concrete value behind a trait object
pub trait AsAny {
    /// Get this value as [`Any`]
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Payload that can be attached to a scene graph node
///
/// The graph never inspects content beyond this interface; exporters
/// downcast to the concrete types they understand.
pub trait GraphObject: AsAny + fmt::Debug + Send + Sync + 'static {
    /// Short human readable type name used in debug output
    fn type_label(&self) -> &'static str;
}

impl dyn GraphObject {
    /// Check whether the content is of type `T`
    pub fn is<T: GraphObject>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Borrow the content as `T` if it is of that type
    pub fn downcast_ref<T: GraphObject>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

/// Shared handle to node content
///
/// The graph holds one strong reference per node and releases it when the
/// content is replaced or the graph is cleared.
pub type NodeContent = Arc<dyn GraphObject>;
