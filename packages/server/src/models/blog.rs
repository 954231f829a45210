use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{ColumnTrait, DeleteMany, EntityTrait, QueryFilter, QueryOrder, Select, Set};
use serde::Serialize;

use crate::entity::blog;
use crate::error::AppError;
use crate::media::{EncodedImage, MediaForm, MediaResource, ResourceSchema, UploadedImage};

use super::shared::{parse_date, validate_short_text};

pub const TITLE: &str = "title";
pub const AUTHOR: &str = "author";
pub const DATE_PUBLISHED: &str = "date_published";
pub const CONTENT: &str = "content";

/// A stored blog post.
#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Restoring the lamp room")]
    pub title: String,
    #[schema(example = "A. Keeper")]
    pub author: String,
    #[serde(rename = "date_published")]
    pub date_published: NaiveDate,
    /// Post body in Markdown.
    pub content: String,
    /// Raw image bytes.
    pub image: Vec<u8>,
    #[schema(example = "image/jpeg")]
    pub image_content_type: String,
    /// Current version; send it back as `version` to guard an update.
    #[schema(example = 1)]
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<blog::Model> for BlogResponse {
    fn from(m: blog::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            author: m.author,
            date_published: m.date_published,
            content: m.content,
            image: m.image,
            image_content_type: m.image_content_type,
            version: m.version,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// Create and update responses.
#[derive(Serialize, utoipa::ToSchema)]
pub struct BlogEnvelope {
    #[schema(example = "Blog created successfully")]
    pub message: String,
    pub blog: BlogResponse,
}

impl BlogEnvelope {
    pub fn new(message: &str, model: blog::Model) -> Self {
        Self {
            message: message.to_string(),
            blog: model.into(),
        }
    }
}

/// One entry of the list response: the stored blog post plus its encoded image.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ListedBlog {
    #[serde(flatten)]
    pub blog: BlogResponse,
    #[serde(flatten)]
    pub image: EncodedImage,
}

/// The blog resource: a dated, authored post with a cover image.
pub struct Blog;

impl MediaResource for Blog {
    type Entity = blog::Entity;
    type Model = blog::Model;
    type ActiveModel = blog::ActiveModel;
    type Listed = ListedBlog;

    const SCHEMA: ResourceSchema = ResourceSchema {
        name: "blog",
        label: "Blog",
        required: &[TITLE, AUTHOR, DATE_PUBLISHED, CONTENT],
        updatable: &[TITLE, AUTHOR, DATE_PUBLISHED, CONTENT],
    };

    fn find_by_id(id: i32) -> Select<blog::Entity> {
        blog::Entity::find_by_id(id)
    }

    fn delete_by_id(id: i32) -> DeleteMany<blog::Entity> {
        blog::Entity::delete_many().filter(blog::Column::Id.eq(id))
    }

    fn find_all() -> Select<blog::Entity> {
        blog::Entity::find().order_by_asc(blog::Column::Id)
    }

    fn id(model: &blog::Model) -> i32 {
        model.id
    }

    fn version(model: &blog::Model) -> i32 {
        model.version
    }

    fn image(model: &blog::Model) -> (&[u8], &str) {
        (&model.image, &model.image_content_type)
    }

    fn new_record(
        form: &MediaForm,
        image: UploadedImage,
        now: DateTime<Utc>,
    ) -> Result<blog::ActiveModel, AppError> {
        let title = form.require(TITLE)?;
        validate_short_text(TITLE, title)?;
        let author = form.require(AUTHOR)?;
        validate_short_text(AUTHOR, author)?;
        let date_published = parse_date(DATE_PUBLISHED, form.require(DATE_PUBLISHED)?)?;

        Ok(blog::ActiveModel {
            title: Set(title.to_string()),
            author: Set(author.to_string()),
            date_published: Set(date_published),
            content: Set(form.require(CONTENT)?.to_string()),
            image: Set(image.bytes),
            image_content_type: Set(image.content_type),
            version: Set(1),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        })
    }

    fn apply_fields(active: &mut blog::ActiveModel, form: &MediaForm) -> Result<bool, AppError> {
        let mut changed = false;
        if let Some(title) = form.text(TITLE) {
            validate_short_text(TITLE, title)?;
            active.title = Set(title.to_string());
            changed = true;
        }
        if let Some(author) = form.text(AUTHOR) {
            validate_short_text(AUTHOR, author)?;
            active.author = Set(author.to_string());
            changed = true;
        }
        if let Some(date) = form.text(DATE_PUBLISHED) {
            active.date_published = Set(parse_date(DATE_PUBLISHED, date)?);
            changed = true;
        }
        if let Some(content) = form.text(CONTENT) {
            active.content = Set(content.to_string());
            changed = true;
        }
        Ok(changed)
    }

    fn listed(model: blog::Model, image: EncodedImage) -> ListedBlog {
        ListedBlog {
            blog: model.into(),
            image,
        }
    }

    fn set_image(active: &mut blog::ActiveModel, image: UploadedImage) {
        active.image = Set(image.bytes);
        active.image_content_type = Set(image.content_type);
    }

    fn touch(active: &mut blog::ActiveModel, version: i32, now: DateTime<Utc>) {
        active.version = Set(version);
        active.updated_at = Set(now);
    }
}
