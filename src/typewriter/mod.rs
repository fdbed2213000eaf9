pub(crate) mod reveal;
