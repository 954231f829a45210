//! Create, list, update and delete for any [`MediaResource`].

use chrono::Utc;
use sea_orm::sea_query::LockType;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, IntoActiveModel, QuerySelect, TransactionTrait,
};

use crate::error::AppError;

use super::form::MediaForm;
use super::listing::EncodedImage;
use super::resource::MediaResource;

/// Validate a complete form and persist it as a new record in one write.
pub async fn create<R: MediaResource>(
    db: &DatabaseConnection,
    mut form: MediaForm,
) -> Result<R::Model, AppError> {
    R::SCHEMA.ensure_complete(&form)?;
    let image = form
        .take_image()
        .ok_or_else(|| AppError::Validation("Missing required field(s): image".into()))?;

    let active = R::new_record(&form, image, Utc::now())?;
    let model = active.insert(db).await?;

    Ok(model)
}

/// Every record with its image freshly transcoded.
pub async fn list<R: MediaResource>(db: &DatabaseConnection) -> Result<Vec<R::Listed>, AppError> {
    let models = R::find_all().all(db).await?;

    Ok(models
        .into_iter()
        .map(|model| {
            let image = EncodedImage::of::<R>(&model);
            R::listed(model, image)
        })
        .collect())
}

/// Merge the fields present in `form` into record `id`.
///
/// The image is replaced only when the form carries one. If the form has a
/// `version` part it must match the stored version.
pub async fn update<R: MediaResource>(
    db: &DatabaseConnection,
    id: i32,
    mut form: MediaForm,
) -> Result<R::Model, AppError> {
    let expected_version = form.version()?;
    let image = form.take_image();

    let txn = db.begin().await?;

    let existing = R::find_by_id(id)
        .lock(LockType::Update)
        .one(&txn)
        .await?
        .ok_or_else(|| R::SCHEMA.not_found())?;

    let current_version = R::version(&existing);
    if let Some(expected) = expected_version
        && expected != current_version
    {
        return Err(AppError::Conflict(format!(
            "{} {id} is at version {current_version}, not {expected}",
            R::SCHEMA.label
        )));
    }

    let mut active = existing.clone().into_active_model();
    let fields_changed = R::apply_fields(&mut active, &form)?;

    if !fields_changed && image.is_none() {
        txn.commit().await?;
        return Ok(existing);
    }

    if let Some(image) = image {
        R::set_image(&mut active, image);
    }
    let next_version = current_version.checked_add(1).ok_or_else(|| {
        AppError::Internal(format!(
            "{} {id} cannot be updated past version {current_version}",
            R::SCHEMA.label
        ))
    })?;
    R::touch(&mut active, next_version, Utc::now());

    let model = active.update(&txn).await?;
    txn.commit().await?;

    Ok(model)
}

/// Hard-delete record `id`.
pub async fn delete<R: MediaResource>(db: &DatabaseConnection, id: i32) -> Result<(), AppError> {
    let result = R::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(R::SCHEMA.not_found());
    }
    Ok(())
}
