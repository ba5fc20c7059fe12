use crate::{Def, Reflect, Scalar};

impl Reflect for char {
    fn reflect(&self) -> Def<'_> {
        Def::Scalar(Scalar::Char(*self))
    }
}

impl Reflect for str {
    fn reflect(&self) -> Def<'_> {
        Def::Str(self)
    }
}
