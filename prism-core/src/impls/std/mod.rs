mod hashmap;
mod hashset;
mod path;
