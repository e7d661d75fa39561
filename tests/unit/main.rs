//! Unit tests mirroring the `src/` layout, one file per source file

mod compose;
mod io;
mod pattern;
mod render;
