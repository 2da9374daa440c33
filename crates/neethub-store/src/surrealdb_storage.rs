use crate::traits::*;
use async_trait::async_trait;
use neethub_core::{NeetHubError, Result, StoreConfig};
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use surrealdb::{engine::any::Any, opt::auth::Root, Surreal};
use tracing::{debug, info};

/// Field the application id is stored under. SurrealDB reserves `id` for the
/// record id.
const DOC_ID_FIELD: &str = "docId";
/// Insertion sequence, used to return documents in the order they were written.
const ORDER_FIELD: &str = "_order";

/// SurrealDB document store.
#[derive(Clone)]
pub struct SurrealDocumentStore {
    db: Arc<Surreal<Any>>,
    sequence: Arc<AtomicU64>,
}

#[derive(Debug, Deserialize)]
struct CountRow {
    total: usize,
}

fn db_err(context: &str) -> impl Fn(surrealdb::Error) -> NeetHubError + '_ {
    move |e| NeetHubError::Database(format!("{}: {}", context, e))
}

/// Field names are interpolated into queries, so only plain identifiers pass.
fn checked_field(field: &str) -> Result<&str> {
    let valid = !field.is_empty()
        && field
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(field)
    } else {
        Err(NeetHubError::InvalidOperation(format!(
            "invalid field name '{}'",
            field
        )))
    }
}

fn stored_field(field: &str) -> &str {
    if field == "id" {
        DOC_ID_FIELD
    } else {
        field
    }
}

impl SurrealDocumentStore {
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        let url = config
            .url
            .as_deref()
            .ok_or_else(|| NeetHubError::Configuration("store url is not set".into()))?;
        let database = config
            .name
            .as_deref()
            .ok_or_else(|| NeetHubError::Configuration("store name is not set".into()))?;

        info!("Connecting to SurrealDB at {}", url);
        let db: Surreal<Any> = Surreal::init();
        db.connect(url)
            .await
            .map_err(db_err("Failed to connect"))?;

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            db.signin(Root {
                username,
                password: password.expose_secret(),
            })
            .await
            .map_err(db_err("Authentication failed"))?;
        }

        db.use_ns(&config.namespace)
            .use_db(database)
            .await
            .map_err(db_err("Failed to select namespace/database"))?;

        info!(
            namespace = %config.namespace,
            database = %database,
            "SurrealDB document store ready"
        );
        Ok(Self {
            db: Arc::new(db),
            sequence: Arc::new(AtomicU64::new(0)),
        })
    }

    fn order_key(&self) -> String {
        let micros = chrono_micros();
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed) % 1_000_000;
        format!("{:020}-{:06}", micros, seq)
    }

    /// Move `id` to `docId` and stamp the insertion sequence.
    fn to_stored(&self, doc: Value) -> Result<Value> {
        let Value::Object(mut fields) = doc else {
            return Err(NeetHubError::InvalidOperation(
                "documents must be JSON objects".into(),
            ));
        };
        if let Some(id) = fields.remove("id") {
            fields.insert(DOC_ID_FIELD.to_string(), id);
        }
        fields.insert(ORDER_FIELD.to_string(), Value::String(self.order_key()));
        Ok(Value::Object(fields))
    }

    fn from_stored(doc: Value) -> Value {
        match doc {
            Value::Object(mut fields) => {
                fields.remove(ORDER_FIELD);
                if let Some(id) = fields.remove(DOC_ID_FIELD) {
                    fields.insert("id".to_string(), id);
                }
                Value::Object(fields)
            }
            other => other,
        }
    }

    fn where_clause(filter: &Filter) -> Result<(String, Vec<(String, Value)>)> {
        let mut clauses = Vec::new();
        let mut binds = Vec::new();
        for (i, condition) in filter.conditions().iter().enumerate() {
            let field = checked_field(stored_field(condition.field))?;
            let param = format!("p{}", i);
            let op = match condition.op {
                CompareOp::Eq => "=",
                CompareOp::Gte => ">=",
            };
            clauses.push(format!("{} {} ${}", field, op, param));
            binds.push((param, condition.value.clone()));
        }
        if clauses.is_empty() {
            Ok((String::new(), binds))
        } else {
            Ok((format!(" WHERE {}", clauses.join(" AND ")), binds))
        }
    }

    async fn select(
        &self,
        collection: Collection,
        filter: &Filter,
        options: &FindOptions,
    ) -> Result<Vec<Value>> {
        let (where_clause, binds) = Self::where_clause(filter)?;
        let order = match options.sort {
            Some((field, order)) => format!(
                " ORDER BY {} {}",
                checked_field(stored_field(field))?,
                match order {
                    SortOrder::Ascending => "ASC",
                    SortOrder::Descending => "DESC",
                }
            ),
            None => format!(" ORDER BY {} ASC", ORDER_FIELD),
        };
        let limit = options
            .limit
            .map(|n| format!(" LIMIT {}", n))
            .unwrap_or_default();

        let sql = format!(
            "SELECT * OMIT id FROM type::table($table){}{}{};",
            where_clause, order, limit
        );
        debug!(collection = %collection, %sql, "select");

        let mut query = self.db.query(sql).bind(("table", collection.as_str()));
        for bind in binds {
            query = query.bind(bind);
        }
        let mut response = query.await.map_err(db_err("Select failed"))?;
        let rows: Vec<Value> = response
            .take(0)
            .map_err(db_err("Failed to read select results"))?;
        Ok(rows.into_iter().map(Self::from_stored).collect())
    }
}

fn chrono_micros() -> i64 {
    neethub_core::now().timestamp_micros()
}

#[async_trait]
impl DocumentStore for SurrealDocumentStore {
    async fn insert(&self, collection: Collection, doc: Value) -> Result<()> {
        let stored = self.to_stored(doc)?;
        self.db
            .query("CREATE type::table($table) CONTENT $doc RETURN NONE;")
            .bind(("table", collection.as_str()))
            .bind(("doc", stored))
            .await
            .map_err(db_err("Insert failed"))?
            .check()
            .map_err(db_err("Insert rejected"))?;
        Ok(())
    }

    async fn insert_many(&self, collection: Collection, docs: Vec<Value>) -> Result<usize> {
        let stored = docs
            .into_iter()
            .map(|d| self.to_stored(d))
            .collect::<Result<Vec<_>>>()?;
        let written = stored.len();
        if written == 0 {
            return Ok(0);
        }
        self.db
            .query("INSERT INTO type::table($table) $docs RETURN NONE;")
            .bind(("table", collection.as_str()))
            .bind(("docs", stored))
            .await
            .map_err(db_err("Bulk insert failed"))?
            .check()
            .map_err(db_err("Bulk insert rejected"))?;
        Ok(written)
    }

    async fn find_one(&self, collection: Collection, filter: &Filter) -> Result<Option<Value>> {
        let mut rows = self
            .select(collection, filter, &FindOptions::limit(1))
            .await?;
        Ok(rows.pop())
    }

    async fn find(
        &self,
        collection: Collection,
        filter: &Filter,
        options: &FindOptions,
    ) -> Result<Vec<Value>> {
        self.select(collection, filter, options).await
    }

    async fn update_one(&self, collection: Collection, filter: &Filter, set: Value) -> Result<bool> {
        let Value::Object(mut fields) = set else {
            return Err(NeetHubError::InvalidOperation(
                "update must be a JSON object".into(),
            ));
        };
        fields.remove("id");

        let Some(existing) = self.find_one(collection, filter).await? else {
            return Ok(false);
        };
        let Some(doc_id) = existing.get("id").cloned() else {
            return Err(NeetHubError::Database(format!(
                "document in {} has no id",
                collection
            )));
        };

        self.db
            .query(format!(
                "UPDATE type::table($table) MERGE $set WHERE {} = $doc_id RETURN NONE;",
                DOC_ID_FIELD
            ))
            .bind(("table", collection.as_str()))
            .bind(("set", Value::Object(fields)))
            .bind(("doc_id", doc_id))
            .await
            .map_err(db_err("Update failed"))?
            .check()
            .map_err(db_err("Update rejected"))?;
        Ok(true)
    }

    async fn count(&self, collection: Collection, filter: &Filter) -> Result<usize> {
        let (where_clause, binds) = Self::where_clause(filter)?;
        let sql = format!(
            "SELECT count() AS total FROM type::table($table){} GROUP ALL;",
            where_clause
        );
        let mut query = self.db.query(sql).bind(("table", collection.as_str()));
        for bind in binds {
            query = query.bind(bind);
        }
        let mut response = query.await.map_err(db_err("Count failed"))?;
        let row: Option<CountRow> = response
            .take(0)
            .map_err(db_err("Failed to read count"))?;
        Ok(row.map(|r| r.total).unwrap_or(0))
    }

    async fn ping(&self) -> Result<()> {
        self.db.health().await.map_err(db_err("Health check failed"))
    }

    fn backend_name(&self) -> &str {
        "surrealdb"
    }
}
