use crate::{Child, Def, Reflect};

macro_rules! impl_reflect_for_tuple {
    ($($elems:ident.$idx:tt),+) => {
        impl<$($elems: Reflect),+> Reflect for ($($elems,)+) {
            fn reflect(&self) -> Def<'_> {
                Def::Tuple(vec![$(Child::positional($idx, &self.$idx)),+])
            }
        }
    };
}

impl_reflect_for_tuple!(T0.0);
impl_reflect_for_tuple!(T0.0, T1.1);
impl_reflect_for_tuple!(T0.0, T1.1, T2.2);
impl_reflect_for_tuple!(T0.0, T1.1, T2.2, T3.3);
impl_reflect_for_tuple!(T0.0, T1.1, T2.2, T3.3, T4.4);
impl_reflect_for_tuple!(T0.0, T1.1, T2.2, T3.3, T4.4, T5.5);
