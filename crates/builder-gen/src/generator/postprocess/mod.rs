pub(crate) mod formatter;
