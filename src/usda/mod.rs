//! Scene description text format support. Export only.

mod writer;

pub(crate) use writer::write_layer;
