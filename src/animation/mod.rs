pub(crate) mod ease;
