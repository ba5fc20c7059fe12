/// Implements [`Reflect`](crate::Reflect) for a non-generic struct.
///
/// Named fields reflect as labeled children, tuple-struct fields as
/// positional ones. Fields are listed in display order.
///
/// ```
/// use prism_core::reflect_struct;
///
/// struct User {
///     id: u32,
///     name: String,
/// }
/// reflect_struct!(User { id, name });
///
/// struct Meters(f64);
/// reflect_struct!(Meters(0));
/// ```
#[macro_export]
macro_rules! reflect_struct {
    ($ty:ident { $($field:ident),* $(,)? }) => {
        impl $crate::Reflect for $ty {
            fn reflect(&self) -> $crate::Def<'_> {
                $crate::Def::Struct(::std::vec![
                    $($crate::Child::named(::core::stringify!($field), &self.$field)),*
                ])
            }
        }
    };
    ($ty:ident ( $($index:tt),* $(,)? )) => {
        impl $crate::Reflect for $ty {
            fn reflect(&self) -> $crate::Def<'_> {
                $crate::Def::Struct(::std::vec![
                    $($crate::Child::positional($index, &self.$index)),*
                ])
            }
        }
    };
}

/// Implements [`Reflect`](crate::Reflect) for an enum whose variants carry
/// no data.
///
/// ```
/// use prism_core::reflect_unit_enum;
///
/// enum Color {
///     Red,
///     Green,
/// }
/// reflect_unit_enum!(Color { Red, Green });
/// ```
#[macro_export]
macro_rules! reflect_unit_enum {
    ($ty:ident { $($variant:ident),* $(,)? }) => {
        impl $crate::Reflect for $ty {
            fn reflect(&self) -> $crate::Def<'_> {
                match self {
                    $(Self::$variant => $crate::Def::Enum {
                        variant: ::core::stringify!($variant),
                        fields: ::std::vec::Vec::new(),
                    },)*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{Def, DisplayStyle, Peek, Reflect};
    use prism_testhelpers::test;

    struct User {
        id: u32,
        name: &'static str,
    }
    reflect_struct!(User { id, name });

    struct Pair(i32, i32);
    reflect_struct!(Pair(0, 1));

    enum Color {
        Red,
        #[allow(dead_code)]
        Green,
    }
    reflect_unit_enum!(Color { Red, Green });

    #[test]
    fn struct_fields_are_labeled() {
        let user = User { id: 1, name: "Blob" };
        let Def::Struct(fields) = user.reflect() else {
            panic!("expected a struct");
        };
        let labels: Vec<_> = fields.iter().map(|f| f.display_label()).collect();
        assert_eq!(labels, [Some("id"), Some("name")]);
        assert_eq!(Peek::new(&user).shape().name(), "User");
    }

    #[test]
    fn tuple_struct_fields_are_positional() {
        let pair = Pair(1, 2);
        let Def::Struct(fields) = pair.reflect() else {
            panic!("expected a struct");
        };
        assert!(fields.iter().all(|f| f.is_synthetic()));
        assert!(fields.iter().all(|f| f.display_label().is_none()));
    }

    #[test]
    fn unit_enums_have_no_payload() {
        let color = Color::Red;
        let Def::Enum { variant, fields } = color.reflect() else {
            panic!("expected an enum");
        };
        assert_eq!(variant, "Red");
        assert!(fields.is_empty());
        assert_eq!(Peek::new(&color).style(), DisplayStyle::Enum);
    }
}
