pub(crate) mod parallax;
pub(crate) mod tracker;
