pub(crate) mod dialog;
pub(crate) mod feedback;
pub(crate) mod keys;
