use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::{Def, Peek, Reflect};

impl<T: Reflect> Reflect for Vec<T> {
    fn reflect(&self) -> Def<'_> {
        Def::List(self.iter().map(Peek::new).collect())
    }
}

impl<T: Reflect> Reflect for VecDeque<T> {
    fn reflect(&self) -> Def<'_> {
        Def::List(self.iter().map(Peek::new).collect())
    }
}
