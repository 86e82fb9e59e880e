pub mod limits;
pub mod request;
pub mod status;

#[cfg(feature = "json")]
pub mod response;
