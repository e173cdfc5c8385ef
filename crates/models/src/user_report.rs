use chrono::Utc;
use configs::GeoBounds;
use sea_orm::{entity::prelude::*, ActiveValue::NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

pub const TIPO_MAX_LEN: usize = 64;
pub const PLACE_MAX_LEN: usize = 128;

/// A citizen incident report.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_reports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tipo: String,
    #[sea_orm(column_type = "Text")]
    pub descripcion: String,
    pub lat: f64,
    pub lon: f64,
    pub alcaldia: Option<String>,
    pub colonia: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match *self {}
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Payload accepted by `POST /reports`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewReport {
    pub tipo: String,
    pub descripcion: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub alcaldia: Option<String>,
    #[serde(default)]
    pub colonia: Option<String>,
}

pub fn validate_tipo(tipo: &str) -> Result<(), errors::ModelError> {
    if tipo.trim().is_empty() {
        return Err(errors::ModelError::invalid("tipo", "must not be empty"));
    }
    if tipo.chars().count() > TIPO_MAX_LEN {
        return Err(errors::ModelError::invalid("tipo", format!("must be at most {TIPO_MAX_LEN} characters")));
    }
    Ok(())
}

pub fn validate_descripcion(descripcion: &str) -> Result<(), errors::ModelError> {
    if descripcion.trim().is_empty() {
        return Err(errors::ModelError::invalid("descripcion", "must not be empty"));
    }
    Ok(())
}

fn validate_place(field: &str, value: Option<&str>) -> Result<(), errors::ModelError> {
    match value {
        Some(v) if v.chars().count() > PLACE_MAX_LEN => {
            Err(errors::ModelError::invalid(field, format!("must be at most {PLACE_MAX_LEN} characters")))
        }
        _ => Ok(()),
    }
}

/// Coordinates must be finite; with `bounds`, they must also fall inside the box.
pub fn validate_coordinates(lat: f64, lon: f64, bounds: Option<&GeoBounds>) -> Result<(), errors::ModelError> {
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(errors::ModelError::invalid("lat", "must be a valid latitude"));
    }
    if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
        return Err(errors::ModelError::invalid("lon", "must be a valid longitude"));
    }
    if let Some(b) = bounds {
        if !b.contains_lat(lat) {
            return Err(errors::ModelError::invalid("lat", format!("outside service area [{}, {}]", b.min_lat, b.max_lat)));
        }
        if !b.contains_lon(lon) {
            return Err(errors::ModelError::invalid("lon", format!("outside service area [{}, {}]", b.min_lon, b.max_lon)));
        }
    }
    Ok(())
}

pub fn validate_new(input: &NewReport, bounds: Option<&GeoBounds>) -> Result<(), errors::ModelError> {
    validate_tipo(&input.tipo)?;
    validate_descripcion(&input.descripcion)?;
    validate_coordinates(input.lat, input.lon, bounds)?;
    validate_place("alcaldia", input.alcaldia.as_deref())?;
    validate_place("colonia", input.colonia.as_deref())?;
    Ok(())
}

fn non_blank(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}

impl NewReport {
    /// Active model ready for insert; `id` is left to storage.
    pub fn into_insert_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            tipo: Set(self.tipo),
            descripcion: Set(self.descripcion),
            lat: Set(self.lat),
            lon: Set(self.lon),
            alcaldia: Set(non_blank(self.alcaldia)),
            colonia: Set(non_blank(self.colonia)),
            created_at: Set(Utc::now().into()),
        }
    }
}

/// Insert an already validated report on `db`, which may be a transaction.
pub async fn insert<C: ConnectionTrait>(db: &C, input: NewReport) -> Result<Model, errors::ModelError> {
    input.into_insert_model().insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
