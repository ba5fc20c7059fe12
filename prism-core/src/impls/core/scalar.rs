use crate::{Def, Reflect, Scalar};

macro_rules! impl_reflect_for_scalar {
    ($variant:ident as $wide:ty => $($ty:ty),+ $(,)?) => {
        $(
            impl Reflect for $ty {
                fn reflect(&self) -> Def<'_> {
                    Def::Scalar(Scalar::$variant(*self as $wide))
                }
            }
        )+
    };
}

impl_reflect_for_scalar!(Signed as i128 => i8, i16, i32, i64, i128, isize);
impl_reflect_for_scalar!(Unsigned as u128 => u8, u16, u32, u64, u128, usize);
impl_reflect_for_scalar!(F32 as f32 => f32);
impl_reflect_for_scalar!(F64 as f64 => f64);

impl Reflect for bool {
    fn reflect(&self) -> Def<'_> {
        Def::Scalar(Scalar::Bool(*self))
    }
}

impl Reflect for () {
    fn reflect(&self) -> Def<'_> {
        Def::Scalar(Scalar::Unit)
    }
}
