use alloc::borrow::Cow;
use core::time::Duration;

use crate::{Def, Reflect};

impl Reflect for Duration {
    fn reflect(&self) -> Def<'_> {
        Def::Description(Cow::Owned(format!("{self:?}")))
    }
}
