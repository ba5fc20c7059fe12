use alloc::collections::BTreeSet;

use crate::{Def, Peek, Reflect};

impl<T: Reflect> Reflect for BTreeSet<T> {
    fn reflect(&self) -> Def<'_> {
        Def::Set(self.iter().map(Peek::new).collect())
    }
}
