use crate::{Child, Def, Reflect};

impl<T: Reflect, E: Reflect> Reflect for Result<T, E> {
    fn reflect(&self) -> Def<'_> {
        match self {
            Ok(value) => Def::Enum {
                variant: "Ok",
                fields: vec![Child::positional(0, value)],
            },
            Err(error) => Def::Enum {
                variant: "Err",
                fields: vec![Child::positional(0, error)],
            },
        }
    }
}
