use alloc::borrow::Cow;

use crate::{Def, Reflect};

impl Reflect for Cow<'_, str> {
    fn reflect(&self) -> Def<'_> {
        Def::Str(self)
    }
}
