mod array;
mod cell;
mod char_str;
mod duration;
mod net;
mod option;
mod reference;
mod result;
mod scalar;
mod slice;
mod tuple;
