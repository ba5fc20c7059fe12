use crate::{Def, Reflect, Shape};

impl<T: Reflect + ?Sized> Reflect for &T {
    fn reflect(&self) -> Def<'_> {
        (**self).reflect()
    }

    fn shape(&self) -> Shape {
        (**self).shape()
    }
}

impl<T: Reflect + ?Sized> Reflect for &mut T {
    fn reflect(&self) -> Def<'_> {
        (**self).reflect()
    }

    fn shape(&self) -> Shape {
        (**self).shape()
    }
}
