use crate::i18n::Language;
use crate::leads::{Lead, LeadIntent, LeadSource, LeadType};
use anyhow::{anyhow, bail, Context, Result};
use chrono::Utc;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

/// Lead queue backing the site's forms.
///
/// PostgreSQL in production; the in-memory store stands in for preview
/// deployments that have no database attached.
#[derive(Clone)]
pub enum LeadStore {
    Postgres(PgPool),
    Memory(Arc<RwLock<Vec<Lead>>>),
}

const LEAD_COLUMNS: &str = "id, source, lead_type, created_at, name, email, phone, language, \
     source_url, message, property_id, guide_id, intent, synced_to_crm, crm_sync_attempts";

impl LeadStore {
    /// Connect to PostgreSQL and create the leads table
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .context("Failed to connect to lead database")?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS leads (
                id UUID PRIMARY KEY,
                source TEXT NOT NULL,
                lead_type TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                phone TEXT,
                language TEXT NOT NULL,
                source_url TEXT NOT NULL,
                message TEXT,
                property_id TEXT,
                guide_id TEXT,
                intent TEXT,
                synced_to_crm BOOLEAN NOT NULL DEFAULT FALSE,
                crm_sync_attempts INTEGER NOT NULL DEFAULT 0
            )",
        )
        .execute(&pool)
        .await
        .context("Failed to create leads table")?;

        info!("✓ Lead store connected to PostgreSQL");
        Ok(LeadStore::Postgres(pool))
    }

    /// Create an empty in-memory store
    pub fn in_memory() -> Self {
        LeadStore::Memory(Arc::new(RwLock::new(Vec::new())))
    }

    /// Backend name reported by the storage health check
    pub fn backend(&self) -> &'static str {
        match self {
            LeadStore::Postgres(_) => "postgres",
            LeadStore::Memory(_) => "memory",
        }
    }

    pub async fn insert(&self, lead: &Lead) -> Result<()> {
        match self {
            LeadStore::Postgres(pool) => {
                sqlx::query(
                    "INSERT INTO leads (id, source, lead_type, created_at, name, email, phone, language,
                        source_url, message, property_id, guide_id, intent, synced_to_crm, crm_sync_attempts)
                     VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)",
                )
                .bind(lead.id)
                .bind(lead.source.as_str())
                .bind(lead.lead_type.as_str())
                .bind(lead.timestamp)
                .bind(&lead.name)
                .bind(&lead.email)
                .bind(&lead.phone)
                .bind(lead.language.code())
                .bind(&lead.source_url)
                .bind(&lead.message)
                .bind(&lead.property_id)
                .bind(&lead.guide_id)
                .bind(lead.intent.map(|i| i.as_str()))
                .bind(lead.synced_to_crm)
                .bind(lead.crm_sync_attempts)
                .execute(pool)
                .await
                .context("Failed to insert lead")?;
            }
            LeadStore::Memory(leads) => {
                let mut leads = leads.write().await;
                if leads.iter().any(|existing| existing.id == lead.id) {
                    bail!("Lead {} already exists", lead.id);
                }
                leads.push(lead.clone());
            }
        }
        debug!("Stored lead {} ({})", lead.id, lead.source.as_str());
        Ok(())
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Lead>> {
        match self {
            LeadStore::Postgres(pool) => {
                let sql = format!("SELECT {LEAD_COLUMNS} FROM leads WHERE id = $1");
                let row = sqlx::query(&sql)
                    .bind(id)
                    .fetch_optional(pool)
                    .await
                    .context("Failed to fetch lead")?;
                row.as_ref().map(lead_from_row).transpose()
            }
            LeadStore::Memory(leads) => Ok(leads
                .read()
                .await
                .iter()
                .find(|lead| lead.id == id)
                .cloned()),
        }
    }

    /// Most recent leads first
    pub async fn list(&self, limit: usize) -> Result<Vec<Lead>> {
        match self {
            LeadStore::Postgres(pool) => {
                let sql =
                    format!("SELECT {LEAD_COLUMNS} FROM leads ORDER BY created_at DESC LIMIT $1");
                let rows = sqlx::query(&sql)
                    .bind(i64::try_from(limit).unwrap_or(i64::MAX))
                    .fetch_all(pool)
                    .await
                    .context("Failed to list leads")?;
                rows.iter().map(lead_from_row).collect()
            }
            LeadStore::Memory(leads) => {
                let mut leads = leads.read().await.clone();
                leads.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
                leads.truncate(limit);
                Ok(leads)
            }
        }
    }

    /// Delete a lead, returning whether it existed
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        match self {
            LeadStore::Postgres(pool) => {
                let result = sqlx::query("DELETE FROM leads WHERE id = $1")
                    .bind(id)
                    .execute(pool)
                    .await
                    .context("Failed to delete lead")?;
                Ok(result.rows_affected() > 0)
            }
            LeadStore::Memory(leads) => {
                let mut leads = leads.write().await;
                let before = leads.len();
                leads.retain(|lead| lead.id != id);
                Ok(leads.len() < before)
            }
        }
    }

    /// Write, read back and delete a throwaway lead
    pub async fn probe(&self) -> Result<()> {
        let probe = Lead {
            id: Uuid::new_v4(),
            source: LeadSource::ContactForm,
            timestamp: Utc::now(),
            lead_type: LeadType::Contact,
            name: "storage-probe".to_string(),
            email: "probe@localhost.test".to_string(),
            phone: None,
            language: Language::En,
            source_url: "https://localhost/probe".to_string(),
            message: None,
            property_id: None,
            guide_id: None,
            intent: None,
            synced_to_crm: false,
            crm_sync_attempts: 0,
        };

        self.insert(&probe).await?;
        let read_back = self.get(probe.id).await?;
        let deleted = self.delete(probe.id).await?;

        match read_back {
            Some(lead) if lead.id == probe.id && lead.name == probe.name => {}
            Some(_) => bail!("Probe lead read back with different contents"),
            None => bail!("Probe lead write succeeded but read failed"),
        }
        if !deleted {
            bail!("Probe lead could not be deleted");
        }
        Ok(())
    }
}

fn lead_from_row(row: &PgRow) -> Result<Lead> {
    let source: String = row.try_get("source")?;
    let lead_type: String = row.try_get("lead_type")?;
    let language: String = row.try_get("language")?;
    let intent: Option<String> = row.try_get("intent")?;

    Ok(Lead {
        id: row.try_get("id")?,
        source: LeadSource::parse(&source)
            .ok_or_else(|| anyhow!("Unknown lead source in database: '{}'", source))?,
        timestamp: row.try_get("created_at")?,
        lead_type: LeadType::parse(&lead_type)
            .ok_or_else(|| anyhow!("Unknown lead type in database: '{}'", lead_type))?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
        language: Language::from_code(&language)?,
        source_url: row.try_get("source_url")?,
        message: row.try_get("message")?,
        property_id: row.try_get("property_id")?,
        guide_id: row.try_get("guide_id")?,
        intent: intent
            .map(|raw| {
                LeadIntent::parse(&raw)
                    .ok_or_else(|| anyhow!("Unknown lead intent in database: '{}'", raw))
            })
            .transpose()?,
        synced_to_crm: row.try_get("synced_to_crm")?,
        crm_sync_attempts: row.try_get("crm_sync_attempts")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn lead(name: &str, minutes_ago: i64) -> Lead {
        Lead {
            id: Uuid::new_v4(),
            source: LeadSource::GuideDownload,
            timestamp: Utc::now() - Duration::minutes(minutes_ago),
            lead_type: LeadType::GuideDownload,
            name: name.to_string(),
            email: format!("{}@example.com", name),
            phone: None,
            language: Language::Es,
            source_url: "https://ciararuiz.com/es/guias/".to_string(),
            message: None,
            property_id: None,
            guide_id: Some("first-time-buyers".to_string()),
            intent: None,
            synced_to_crm: false,
            crm_sync_attempts: 0,
        }
    }

    #[tokio::test]
    async fn test_memory_insert_and_get() {
        let store = LeadStore::in_memory();
        let stored = lead("ana", 0);

        store.insert(&stored).await.expect("insert");
        let fetched = store.get(stored.id).await.expect("get");
        assert_eq!(fetched, Some(stored));
    }

    #[tokio::test]
    async fn test_memory_rejects_duplicate_ids() {
        let store = LeadStore::in_memory();
        let stored = lead("ana", 0);

        store.insert(&stored).await.expect("insert");
        assert!(store.insert(&stored).await.is_err());
    }

    #[tokio::test]
    async fn test_memory_list_is_newest_first() {
        let store = LeadStore::in_memory();
        store.insert(&lead("old", 30)).await.unwrap();
        store.insert(&lead("new", 1)).await.unwrap();
        store.insert(&lead("mid", 10)).await.unwrap();

        let names: Vec<String> = store
            .list(2)
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(names, vec!["new", "mid"]);
    }

    #[tokio::test]
    async fn test_memory_delete() {
        let store = LeadStore::in_memory();
        let stored = lead("ana", 0);
        store.insert(&stored).await.unwrap();

        assert!(store.delete(stored.id).await.unwrap());
        assert!(!store.delete(stored.id).await.unwrap());
        assert!(store.get(stored.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_memory_probe_leaves_no_trace() {
        let store = LeadStore::in_memory();
        store.probe().await.expect("probe");
        assert!(store.list(10).await.unwrap().is_empty());
        assert_eq!(store.backend(), "memory");
    }
}
