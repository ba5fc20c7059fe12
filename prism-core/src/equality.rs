use std::collections::HashSet;

use crate::{Child, Def, Peek, ValueId};

/// Compares two reflected values for deep structural equality.
///
/// Maps and sets compare without regard to order. Reference-like values with
/// the same identity are equal without looking inside them, and a pair of
/// identities that is already being compared further up is assumed equal, so
/// the comparison terminates on cyclic graphs.
pub fn structurally_equal(a: &Peek<'_>, b: &Peek<'_>) -> bool {
    Equality::default().eq(a, b)
}

/// Whether two reflected values are the same object.
///
/// Only reference-like values have an identity; for anything else this
/// returns `false`.
pub fn identical(a: &Peek<'_>, b: &Peek<'_>) -> bool {
    match (a.id(), b.id()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

#[derive(Default)]
struct Equality {
    in_progress: HashSet<(ValueId, ValueId)>,
}

impl Equality {
    fn eq(&mut self, a: &Peek<'_>, b: &Peek<'_>) -> bool {
        let (def_a, def_b) = (a.def(), b.def());
        if let Def::Proxy(proxy) = &def_a {
            return self.eq(proxy, b);
        }
        if let Def::Proxy(proxy) = &def_b {
            return self.eq(a, proxy);
        }

        if a.shape() != b.shape() {
            return false;
        }

        match (def_a, def_b) {
            (Def::Scalar(a), Def::Scalar(b)) => a == b,
            (Def::Str(a), Def::Str(b)) => a == b,
            (Def::Description(a), Def::Description(b)) => a == b,
            (Def::Struct(a), Def::Struct(b)) | (Def::Tuple(a), Def::Tuple(b)) => {
                self.children_eq(&a, &b)
            }
            (
                Def::Enum {
                    variant: variant_a,
                    fields: a,
                },
                Def::Enum {
                    variant: variant_b,
                    fields: b,
                },
            ) => variant_a == variant_b && self.children_eq(&a, &b),
            (Def::Option(a), Def::Option(b)) => match (a, b) {
                (None, None) => true,
                (Some(a), Some(b)) => self.eq(&a, &b),
                _ => false,
            },
            (Def::List(a), Def::List(b)) => {
                a.len() == b.len() && a.iter().zip(&b).all(|(a, b)| self.eq(a, b))
            }
            (Def::Map(a), Def::Map(b)) => {
                a.len() == b.len()
                    && a.iter().all(|(key_a, value_a)| {
                        b.iter()
                            .find(|(key_b, _)| self.eq(key_a, key_b))
                            .is_some_and(|(_, value_b)| self.eq(value_a, value_b))
                    })
            }
            (Def::Set(a), Def::Set(b)) => {
                a.len() == b.len() && a.iter().all(|a| b.iter().any(|b| self.eq(a, b)))
            }
            (
                Def::Object {
                    id: id_a,
                    fields: a,
                },
                Def::Object {
                    id: id_b,
                    fields: b,
                },
            ) => {
                if id_a == id_b || !self.in_progress.insert((id_a, id_b)) {
                    return true;
                }
                let equal = self.children_eq(&a, &b);
                self.in_progress.remove(&(id_a, id_b));
                equal
            }
            _ => false,
        }
    }

    fn children_eq(&mut self, a: &[Child<'_>], b: &[Child<'_>]) -> bool {
        a.len() == b.len()
            && a.iter()
                .zip(b)
                .all(|(a, b)| a.label == b.label && self.eq(&a.value, &b.value))
    }
}
