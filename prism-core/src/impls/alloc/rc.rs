use alloc::rc::Rc;

use crate::{Def, Reflect, Shape, ValueId};

/// A struct behind an `Rc` becomes an object whose identity is the
/// allocation; anything else is transparent.
impl<T: Reflect> Reflect for Rc<T> {
    fn reflect(&self) -> Def<'_> {
        match (**self).reflect() {
            Def::Struct(fields) => Def::Object {
                id: ValueId::from_ptr(self.shape(), Rc::as_ptr(self)),
                fields,
            },
            def => def,
        }
    }

    fn shape(&self) -> Shape {
        (**self).shape()
    }
}
