use alloc::string::String;

use crate::{Def, Reflect};

impl Reflect for String {
    fn reflect(&self) -> Def<'_> {
        Def::Str(self)
    }
}
