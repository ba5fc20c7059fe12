use alloc::boxed::Box;

use crate::{Def, Reflect, Shape};

/// Boxes are transparent: they reflect as the value they own.
impl<T: Reflect + ?Sized> Reflect for Box<T> {
    fn reflect(&self) -> Def<'_> {
        (**self).reflect()
    }

    fn shape(&self) -> Shape {
        (**self).shape()
    }
}
