//! Document boundaries the passes run over.

pub mod pandoc;
