use alloc::sync::Arc;

use crate::{Def, Reflect, Shape, ValueId};

/// A struct behind an `Arc` becomes an object whose identity is the
/// allocation; anything else is transparent.
impl<T: Reflect> Reflect for Arc<T> {
    fn reflect(&self) -> Def<'_> {
        match (**self).reflect() {
            Def::Struct(fields) => Def::Object {
                id: ValueId::from_ptr(self.shape(), Arc::as_ptr(self)),
                fields,
            },
            def => def,
        }
    }

    fn shape(&self) -> Shape {
        (**self).shape()
    }
}
