//! Runtime type tokens and introspection.

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::sync::Arc;

const UNKNOWN_NAME: &str = "a `dyn Any` value of unknown concrete type";

macro_rules! known_type_names {
    ($($known:ty),* $(,)?) => {
        /// Name of a common std type behind `id`, if it is one of them.
        fn known_name(id: TypeId) -> Option<&'static str> {
            $(
                if id == TypeId::of::<$known>() {
                    return Some(type_name::<$known>());
                }
            )*
            None
        }
    };
}

known_type_names!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    (), &'static str, String,
);

/// An explicit type argument: the type's identity plus a printable name.
#[derive(Debug, Clone, Copy)]
pub struct TypeToken {
    id: TypeId,
    name: &'static str,
}

impl TypeToken {
    pub fn of<T: Any + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Token for a type only known through its `TypeId`.
    ///
    /// Primitives, `&'static str` and `String` keep their names. Any other type
    /// is reported as a `dyn Any` value of unknown concrete type.
    pub fn erased(id: TypeId) -> Self {
        Self {
            id,
            name: known_name(id).unwrap_or(UNKNOWN_NAME),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeToken {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeToken {}

impl Hash for TypeToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Values whose concrete type is only known at runtime.
///
/// Implemented for the `dyn Any` trait objects and their common owning
/// pointers. Implement it for `Box<dyn YourTrait>` (usually via an `as_any`
/// method) to search heterogeneous collections of your own trait objects.
pub trait RuntimeType {
    fn runtime_type(&self) -> TypeToken;
}

macro_rules! impl_runtime_type_for_any {
    ($($object:ty),* $(,)?) => {
        $(
            impl RuntimeType for $object {
                fn runtime_type(&self) -> TypeToken {
                    TypeToken::erased(self.type_id())
                }
            }

            impl RuntimeType for Box<$object> {
                fn runtime_type(&self) -> TypeToken {
                    (**self).runtime_type()
                }
            }
        )*
    };
}

impl_runtime_type_for_any!(dyn Any, dyn Any + Send, dyn Any + Send + Sync);

impl RuntimeType for Rc<dyn Any> {
    fn runtime_type(&self) -> TypeToken {
        (**self).runtime_type()
    }
}

impl RuntimeType for Arc<dyn Any + Send + Sync> {
    fn runtime_type(&self) -> TypeToken {
        (**self).runtime_type()
    }
}

impl<T: RuntimeType + ?Sized> RuntimeType for &T {
    fn runtime_type(&self) -> TypeToken {
        (**self).runtime_type()
    }
}
