pub(crate) mod differ;
