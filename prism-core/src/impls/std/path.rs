use std::path::{Path, PathBuf};

use crate::{Def, Peek, Reflect};

/// Paths compare and render as their (lossy) UTF-8 text.
impl Reflect for Path {
    fn reflect(&self) -> Def<'_> {
        Def::Proxy(Peek::owned(self.to_string_lossy().into_owned()))
    }
}

impl Reflect for PathBuf {
    fn reflect(&self) -> Def<'_> {
        self.as_path().reflect()
    }
}
