use alloc::collections::BTreeMap;

use crate::{Def, Peek, Reflect};

impl<K: Reflect, V: Reflect> Reflect for BTreeMap<K, V> {
    fn reflect(&self) -> Def<'_> {
        Def::Map(
            self.iter()
                .map(|(key, value)| (Peek::new(key), Peek::new(value)))
                .collect(),
        )
    }
}
