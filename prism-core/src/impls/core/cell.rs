use core::cell::OnceCell;

use crate::{Def, Peek, Reflect};

/// An uninitialized cell reflects as an absent value.
impl<T: Reflect> Reflect for OnceCell<T> {
    fn reflect(&self) -> Def<'_> {
        Def::Option(self.get().map(Peek::new))
    }
}
