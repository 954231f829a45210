//! The image-carrying record pipeline shared by projects and blog posts.
//!
//! Uploads are buffered from multipart forms ([`form`]), checked against a
//! per-resource [`schema`], stored through the [`resource`] mapping and
//! transcoded to base64 whenever they are listed ([`listing`]).

pub mod form;
pub mod listing;
pub mod pipeline;
pub mod resource;
pub mod schema;

pub use form::{MediaForm, UploadedImage};
pub use listing::EncodedImage;
pub use resource::MediaResource;
pub use schema::ResourceSchema;
