pub(crate) mod app;
pub(crate) mod form;
pub(crate) mod render;
pub(crate) mod theme;
pub(crate) mod util;
