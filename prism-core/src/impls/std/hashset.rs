use std::collections::HashSet;

use crate::{Def, Peek, Reflect};

impl<T: Reflect, S> Reflect for HashSet<T, S> {
    fn reflect(&self) -> Def<'_> {
        Def::Set(self.iter().map(Peek::new).collect())
    }
}
