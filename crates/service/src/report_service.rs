use configs::ReportsConfig;
use models::user_report::{self, Entity as UserReportEntity, NewReport};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use tracing::{debug, info, instrument};

use crate::{errors::ServiceError, pagination::ListLimit};

/// Optional equality filters for listing. All present filters must match.
#[derive(Clone, Debug, Default)]
pub struct ReportFilter {
    pub tipo: Option<String>,
    pub alcaldia: Option<String>,
    pub colonia: Option<String>,
}

/// Empty strings mean "no filter".
fn active(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

/// Create a report and commit it; returns the stored row with `id` and `created_at`.
#[instrument(skip_all, fields(tipo = %input.tipo))]
pub async fn create_report(
    db: &DatabaseConnection,
    input: NewReport,
    cfg: &ReportsConfig,
) -> Result<user_report::Model, ServiceError> {
    let bounds = cfg.validate_coordinates.then_some(&cfg.bounds);
    user_report::validate_new(&input, bounds)?;

    let txn = db.begin().await?;
    let created = user_report::insert(&txn, input).await?;
    txn.commit().await?;
    info!(id = created.id, "report created");
    Ok(created)
}

/// List reports matching every supplied filter, newest first, at most `limit` rows.
pub async fn list_reports(
    db: &DatabaseConnection,
    filter: &ReportFilter,
    limit: ListLimit,
) -> Result<Vec<user_report::Model>, ServiceError> {
    let mut finder = UserReportEntity::find();
    if let Some(t) = active(&filter.tipo) { finder = finder.filter(user_report::Column::Tipo.eq(t)); }
    if let Some(a) = active(&filter.alcaldia) { finder = finder.filter(user_report::Column::Alcaldia.eq(a)); }
    if let Some(c) = active(&filter.colonia) { finder = finder.filter(user_report::Column::Colonia.eq(c)); }
    let rows = finder
        .order_by_desc(user_report::Column::CreatedAt)
        .order_by_desc(user_report::Column::Id)
        .limit(limit.get())
        .all(db)
        .await?;
    debug!(count = rows.len(), limit = limit.get(), "reports listed");
    Ok(rows)
}

/// Delete a report by id. Unknown ids fail with `NotFound` and change nothing.
#[instrument(skip(db))]
pub async fn delete_report(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let txn = db.begin().await?;
    let Some(existing) = UserReportEntity::find_by_id(id).one(&txn).await? else {
        return Err(ServiceError::report_not_found());
    };
    existing.delete(&txn).await?;
    txn.commit().await?;
    info!(id, "report deleted");
    Ok(())
}
