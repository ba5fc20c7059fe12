use alloc::borrow::Cow;
use core::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};

use crate::{Def, Reflect};

macro_rules! impl_reflect_for_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Reflect for $ty {
                fn reflect(&self) -> Def<'_> {
                    Def::Description(Cow::Owned(self.to_string()))
                }
            }
        )+
    };
}

impl_reflect_for_display!(IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6);
