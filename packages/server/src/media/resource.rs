use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DeleteMany, EntityTrait, IntoActiveModel, Select,
};
use serde::Serialize;

use crate::error::AppError;

use super::form::{MediaForm, UploadedImage};
use super::listing::EncodedImage;
use super::schema::ResourceSchema;

/// A record type that carries one stored image next to its scalar fields.
///
/// Implementors describe their field layout and how form values map onto
/// their columns; the create/list/update/delete pipeline is shared.
pub trait MediaResource: Send + Sync + 'static {
    type Entity: EntityTrait<Model = Self::Model>;
    type Model: IntoActiveModel<Self::ActiveModel> + Clone + Send + Sync;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send + Sync;
    /// JSON shape of one entry in the list response.
    type Listed: Serialize + Send;

    const SCHEMA: ResourceSchema;

    fn find_by_id(id: i32) -> Select<Self::Entity>;

    /// Delete record `id`. Affects zero rows when it does not exist.
    fn delete_by_id(id: i32) -> DeleteMany<Self::Entity>;

    /// Every record, in listing order.
    fn find_all() -> Select<Self::Entity>;

    fn id(model: &Self::Model) -> i32;

    fn version(model: &Self::Model) -> i32;

    /// Stored image bytes and content type.
    fn image(model: &Self::Model) -> (&[u8], &str);

    /// Build a new record from a form already checked against `SCHEMA.required`.
    fn new_record(
        form: &MediaForm,
        image: UploadedImage,
        now: DateTime<Utc>,
    ) -> Result<Self::ActiveModel, AppError>;

    /// Copy the updatable fields present in `form` onto `active`.
    /// Returns whether any field was set.
    fn apply_fields(active: &mut Self::ActiveModel, form: &MediaForm) -> Result<bool, AppError>;

    /// Join a stored record with its encoded image for the list response.
    fn listed(model: Self::Model, image: EncodedImage) -> Self::Listed;

    fn set_image(active: &mut Self::ActiveModel, image: UploadedImage);

    /// Record a successful update.
    fn touch(active: &mut Self::ActiveModel, version: i32, now: DateTime<Utc>);
}
