use std::collections::HashMap;

use crate::{Def, Peek, Reflect};

impl<K: Reflect, V: Reflect, S> Reflect for HashMap<K, V, S> {
    fn reflect(&self) -> Def<'_> {
        Def::Map(
            self.iter()
                .map(|(key, value)| (Peek::new(key), Peek::new(value)))
                .collect(),
        )
    }
}
