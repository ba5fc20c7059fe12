use crate::{Def, Peek, Reflect};

impl<T: Reflect> Reflect for [T] {
    fn reflect(&self) -> Def<'_> {
        Def::List(self.iter().map(Peek::new).collect())
    }
}
