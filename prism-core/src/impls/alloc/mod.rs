mod arc;
mod boxed;
mod btreemap;
mod btreeset;
mod cow;
mod rc;
mod string;
mod vec;
