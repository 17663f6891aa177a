#[cfg(feature = "maud")]
pub(crate) mod maud_ext;
