pub(crate) mod lookup;
pub(crate) mod sequence;
pub(crate) mod transition;
