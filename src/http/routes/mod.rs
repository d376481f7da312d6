pub mod todolists;
