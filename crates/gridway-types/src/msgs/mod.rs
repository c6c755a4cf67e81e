//! Message implementations shipped with the types crate

pub mod testdata;

pub use testdata::TestMsg;
