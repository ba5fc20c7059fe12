use crate::{Def, Peek, Reflect};

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn reflect(&self) -> Def<'_> {
        Def::List(self.iter().map(Peek::new).collect())
    }
}
