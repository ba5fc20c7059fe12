use indexmap::{IndexMap, IndexSet};

use crate::{Def, Peek, Reflect};

impl<K: Reflect, V: Reflect, S> Reflect for IndexMap<K, V, S> {
    fn reflect(&self) -> Def<'_> {
        Def::Map(
            self.iter()
                .map(|(key, value)| (Peek::new(key), Peek::new(value)))
                .collect(),
        )
    }
}

impl<T: Reflect, S> Reflect for IndexSet<T, S> {
    fn reflect(&self) -> Def<'_> {
        Def::Set(self.iter().map(Peek::new).collect())
    }
}
