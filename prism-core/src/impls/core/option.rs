use crate::{Def, Peek, Reflect};

impl<T: Reflect> Reflect for Option<T> {
    fn reflect(&self) -> Def<'_> {
        Def::Option(self.as_ref().map(Peek::new))
    }
}
