use crate::storage::ThresholdStore;
use async_trait::async_trait;
use chrono::Utc;
use entity::color_settings;
use model::threshold::{ThresholdPair, ThresholdSetting};
use model::Result;
use sea_orm::sea_query::OnConflict;
use sea_orm::ActiveValue::Set;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct ColorSettingsDatabase {
    pub connection: Arc<DatabaseConnection>,
}

impl ColorSettingsDatabase {
    pub fn get_connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    pub fn new(connection: Arc<DatabaseConnection>) -> Self {
        ColorSettingsDatabase { connection }
    }
}

#[async_trait]
impl ThresholdStore for ColorSettingsDatabase {
    async fn get_threshold(&self, field_name: &str) -> Result<Option<ThresholdSetting>> {
        let model = color_settings::Entity::find_by_id(field_name.to_owned())
            .one(self.get_connection())
            .await?;
        Ok(model.map(ThresholdSetting::from))
    }

    async fn list_thresholds(&self) -> Result<Vec<ThresholdSetting>> {
        let models = color_settings::Entity::find()
            .order_by_asc(color_settings::Column::FieldName)
            .all(self.get_connection())
            .await?;
        Ok(models.into_iter().map(ThresholdSetting::from).collect())
    }

    async fn set_threshold(&self, field_name: &str, pair: ThresholdPair) -> Result<()> {
        let active_model = color_settings::ActiveModel {
            field_name: Set(field_name.to_owned()),
            high_threshold: Set(pair.high),
            low_threshold: Set(pair.low),
            updated_at: Set(Utc::now().naive_utc()),
        };

        // single statement upsert, last writer wins
        color_settings::Entity::insert(active_model)
            .on_conflict(
                OnConflict::column(color_settings::Column::FieldName)
                    .update_columns([
                        color_settings::Column::HighThreshold,
                        color_settings::Column::LowThreshold,
                        color_settings::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(self.get_connection())
            .await?;

        info!(
            "color setting {} saved: high= {}, low= {}",
            field_name, pair.high, pair.low
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    #[tokio::test]
    async fn test_set_threshold_is_an_upsert() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let store = ColorSettingsDatabase::new(Arc::new(db));
        store
            .set_threshold("finalScore", ThresholdPair { high: 85.0, low: 60.0 })
            .await
            .unwrap();

        let conn = Arc::try_unwrap(store.connection).ok().unwrap();
        let log = conn.into_transaction_log();
        let statements = log[0].statements();
        assert_eq!(statements.len(), 1);
        let sql = &statements[0].sql;
        assert!(sql.starts_with(r#"INSERT INTO "color_settings""#));
        assert!(sql.contains(r#"ON CONFLICT ("field_name") DO UPDATE"#));
        assert!(sql.contains(r#""high_threshold" = "excluded"."high_threshold""#));
        assert!(sql.contains(r#""updated_at" = "excluded"."updated_at""#));
        assert!(format!("{:?}", statements[0].values).contains("finalScore"));
    }

    #[tokio::test]
    async fn test_get_threshold_reads_naive_time_as_utc() {
        let updated_at = NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_micro_opt(9, 30, 0, 123456)
            .unwrap();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![color_settings::Model {
                field_name: "finalScore".to_owned(),
                high_threshold: 90.0,
                low_threshold: 70.0,
                updated_at,
            }]])
            .append_query_results([Vec::<color_settings::Model>::new()])
            .into_connection();
        let store = ColorSettingsDatabase::new(Arc::new(db));

        let setting = store.get_threshold("finalScore").await.unwrap().unwrap();
        assert_eq!(setting.pair, ThresholdPair { high: 90.0, low: 70.0 });
        assert_eq!(setting.updated_at, updated_at.and_utc());
        assert_eq!(setting.updated_at.to_rfc3339(), "2025-01-15T09:30:00.123456+00:00");

        assert!(store.get_threshold("elecPassRate").await.unwrap().is_none());
    }
}
