//! Self-contained structures, free from any obligation to the rest of the library.

pub mod pcg;
