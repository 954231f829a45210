use chrono::{DateTime, Utc};
use common::ProjectType;
use sea_orm::{ColumnTrait, DeleteMany, EntityTrait, QueryFilter, QueryOrder, Select, Set};
use serde::Serialize;

use crate::entity::project;
use crate::error::AppError;
use crate::media::{EncodedImage, MediaForm, MediaResource, ResourceSchema, UploadedImage};

use super::shared::validate_short_text;

pub const PROJECT_NAME: &str = "projectName";
pub const DESCRIPTION: &str = "description";
pub const PROJECT_TYPE: &str = "projectType";

/// A stored project.
#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Lighthouse")]
    pub project_name: String,
    #[schema(example = "Coastal restoration of a 19th century lighthouse.")]
    pub description: String,
    pub project_type: ProjectType,
    /// Raw image bytes.
    pub image: Vec<u8>,
    #[schema(example = "image/png")]
    pub image_content_type: String,
    /// Current version; send it back as `version` to guard an update.
    #[schema(example = 1)]
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<project::Model> for ProjectResponse {
    fn from(m: project::Model) -> Self {
        Self {
            id: m.id,
            project_name: m.project_name,
            description: m.description,
            project_type: m.project_type,
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
pub struct ProjectEnvelope {
    #[schema(example = "Project created successfully")]
    pub message: String,
    pub project: ProjectResponse,
}

impl ProjectEnvelope {
    pub fn new(message: &str, model: project::Model) -> Self {
        Self {
            message: message.to_string(),
            project: model.into(),
        }
    }
}

/// One entry of the list response: the stored project plus its encoded image.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ListedProject {
    #[serde(flatten)]
    pub project: ProjectResponse,
    #[serde(flatten)]
    pub image: EncodedImage,
}

/// The project resource: name, description and type around one image.
pub struct Project;

fn parse_project_type(value: &str) -> Result<ProjectType, AppError> {
    value
        .parse::<ProjectType>()
        .map_err(|e| AppError::Validation(e.to_string()))
}

impl MediaResource for Project {
    type Entity = project::Entity;
    type Model = project::Model;
    type ActiveModel = project::ActiveModel;
    type Listed = ListedProject;

    // The name is fixed at creation.
    const SCHEMA: ResourceSchema = ResourceSchema {
        name: "project",
        label: "Project",
        required: &[PROJECT_NAME, DESCRIPTION, PROJECT_TYPE],
        updatable: &[DESCRIPTION, PROJECT_TYPE],
    };

    fn find_by_id(id: i32) -> Select<project::Entity> {
        project::Entity::find_by_id(id)
    }

    fn delete_by_id(id: i32) -> DeleteMany<project::Entity> {
        project::Entity::delete_many().filter(project::Column::Id.eq(id))
    }

    fn find_all() -> Select<project::Entity> {
        project::Entity::find().order_by_asc(project::Column::Id)
    }

    fn id(model: &project::Model) -> i32 {
        model.id
    }

    fn version(model: &project::Model) -> i32 {
        model.version
    }

    fn image(model: &project::Model) -> (&[u8], &str) {
        (&model.image, &model.image_content_type)
    }

    fn new_record(
        form: &MediaForm,
        image: UploadedImage,
        now: DateTime<Utc>,
    ) -> Result<project::ActiveModel, AppError> {
        let project_name = form.require(PROJECT_NAME)?;
        validate_short_text(PROJECT_NAME, project_name)?;
        let project_type = parse_project_type(form.require(PROJECT_TYPE)?)?;

        Ok(project::ActiveModel {
            project_name: Set(project_name.to_string()),
            description: Set(form.require(DESCRIPTION)?.to_string()),
            project_type: Set(project_type),
            image: Set(image.bytes),
            image_content_type: Set(image.content_type),
            version: Set(1),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        })
    }

    fn apply_fields(active: &mut project::ActiveModel, form: &MediaForm) -> Result<bool, AppError> {
        let mut changed = false;
        if let Some(description) = form.text(DESCRIPTION) {
            active.description = Set(description.to_string());
            changed = true;
        }
        if let Some(project_type) = form.text(PROJECT_TYPE) {
            active.project_type = Set(parse_project_type(project_type)?);
            changed = true;
        }
        Ok(changed)
    }

    fn listed(model: project::Model, image: EncodedImage) -> ListedProject {
        ListedProject {
            project: model.into(),
            image,
        }
    }

    fn set_image(active: &mut project::ActiveModel, image: UploadedImage) {
        active.image = Set(image.bytes);
        active.image_content_type = Set(image.content_type);
    }

    fn touch(active: &mut project::ActiveModel, version: i32, now: DateTime<Utc>) {
        active.version = Set(version);
        active.updated_at = Set(now);
    }
}
