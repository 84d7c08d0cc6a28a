use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, types::Json};
use uuid::Uuid;

use super::{
    Collection, Document, DocumentStore, FieldPath, Filter, Predicate, StoreResult,
    StoredDocument,
};

const RETURNING: &str = " RETURNING id, doc, created_at, updated_at";

/// Stores each collection as a table of JSONB documents.
#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

#[derive(FromRow)]
struct DocumentRow {
    id: Uuid,
    doc: Json<Document>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<DocumentRow> for StoredDocument {
    fn from(row: DocumentRow) -> Self {
        StoredDocument {
            id: row.id,
            body: row.doc.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn find(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> StoreResult<Vec<StoredDocument>> {
        let mut qb = QueryBuilder::<Postgres>::new(format!(
            "SELECT id, doc, created_at, updated_at FROM {} WHERE ",
            collection.as_table()
        ));
        push_filter(&mut qb, filter);
        qb.push(" ORDER BY seq");

        let rows = qb
            .build_query_as::<DocumentRow>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(StoredDocument::from).collect())
    }

    async fn find_by_id(
        &self,
        collection: Collection,
        id: Uuid,
    ) -> StoreResult<Option<StoredDocument>> {
        let row = sqlx::query_as::<_, DocumentRow>(&format!(
            "SELECT id, doc, created_at, updated_at FROM {} WHERE id = $1",
            collection.as_table()
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(StoredDocument::from))
    }

    async fn insert(&self, collection: Collection, body: Document) -> StoreResult<StoredDocument> {
        let row = sqlx::query_as::<_, DocumentRow>(&format!(
            "INSERT INTO {} (id, doc) VALUES ($1, $2){RETURNING}",
            collection.as_table()
        ))
        .bind(Uuid::new_v4())
        .bind(Json(body))
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }

    async fn insert_many(
        &self,
        collection: Collection,
        bodies: Vec<Document>,
    ) -> StoreResult<Vec<StoredDocument>> {
        let sql = format!(
            "INSERT INTO {} (id, doc) VALUES ($1, $2){RETURNING}",
            collection.as_table()
        );
        let mut tx = self.pool.begin().await?;
        let mut inserted = Vec::with_capacity(bodies.len());
        for body in bodies {
            let row = sqlx::query_as::<_, DocumentRow>(&sql)
                .bind(Uuid::new_v4())
                .bind(Json(body))
                .fetch_one(&mut *tx)
                .await?;
            inserted.push(row.into());
        }
        tx.commit().await?;
        Ok(inserted)
    }

    async fn update_by_id(
        &self,
        collection: Collection,
        id: Uuid,
        patch: Document,
    ) -> StoreResult<Option<StoredDocument>> {
        let row = sqlx::query_as::<_, DocumentRow>(&format!(
            "UPDATE {} SET doc = doc || $2, updated_at = now() WHERE id = $1{RETURNING}",
            collection.as_table()
        ))
        .bind(id)
        .bind(Json(patch))
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(StoredDocument::from))
    }

    async fn delete_by_id(
        &self,
        collection: Collection,
        id: Uuid,
    ) -> StoreResult<Option<StoredDocument>> {
        let row = sqlx::query_as::<_, DocumentRow>(&format!(
            "DELETE FROM {} WHERE id = $1{RETURNING}",
            collection.as_table()
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(StoredDocument::from))
    }

    async fn delete_all(&self, collection: Collection) -> StoreResult<u64> {
        let result = sqlx::query(&format!("DELETE FROM {}", collection.as_table()))
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn distinct(
        &self,
        collection: Collection,
        field: FieldPath,
        filter: &Filter,
    ) -> StoreResult<Vec<Value>> {
        let table = collection.as_table();
        let mut qb = QueryBuilder::<Postgres>::new(
            "SELECT DISTINCT value FROM (SELECT elem AS value FROM ",
        );
        qb.push(table);
        qb.push(", jsonb_array_elements(CASE WHEN jsonb_typeof(doc #> ");
        push_path(&mut qb, field);
        qb.push(") = 'array' THEN doc #> ");
        push_path(&mut qb, field);
        qb.push(" ELSE '[]'::jsonb END) AS elem WHERE jsonb_typeof(elem) <> 'null' AND ");
        push_filter(&mut qb, filter);
        qb.push(" UNION ALL SELECT doc #> ");
        push_path(&mut qb, field);
        qb.push(" AS value FROM ");
        qb.push(table);
        qb.push(" WHERE jsonb_typeof(doc #> ");
        push_path(&mut qb, field);
        qb.push(") NOT IN ('array', 'null') AND ");
        push_filter(&mut qb, filter);
        qb.push(") AS candidates ORDER BY value");

        let values: Vec<(Value,)> = qb.build_query_as().fetch_all(&self.pool).await?;
        Ok(values.into_iter().map(|(value,)| value).collect())
    }
}

fn push_path(qb: &mut QueryBuilder<'_, Postgres>, path: FieldPath) {
    let segments: Vec<String> = path.segments().map(str::to_owned).collect();
    qb.push_bind(segments);
    qb.push("::text[]");
}

/// `%text%` for ILIKE, with the pattern metacharacters escaped.
fn like_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn push_eq(qb: &mut QueryBuilder<'_, Postgres>, path: FieldPath, value: &Value) {
    qb.push("(doc #> ");
    push_path(qb, path);
    qb.push(" = ");
    qb.push_bind(Json(value.clone()));
    qb.push("::jsonb OR (jsonb_typeof(doc #> ");
    push_path(qb, path);
    qb.push(") = 'array' AND doc #> ");
    push_path(qb, path);
    qb.push(" @> jsonb_build_array(");
    qb.push_bind(Json(value.clone()));
    qb.push("::jsonb)))");
}

fn push_children(qb: &mut QueryBuilder<'_, Postgres>, children: &[Filter], joiner: &str, empty: &str) {
    if children.is_empty() {
        qb.push(empty);
        return;
    }
    qb.push("(");
    for (index, child) in children.iter().enumerate() {
        if index > 0 {
            qb.push(joiner);
        }
        push_filter(qb, child);
    }
    qb.push(")");
}

fn push_filter(qb: &mut QueryBuilder<'_, Postgres>, filter: &Filter) {
    match filter {
        Filter::All => {
            qb.push("TRUE");
        }
        Filter::And(children) => push_children(qb, children, " AND ", "TRUE"),
        Filter::Or(children) => push_children(qb, children, " OR ", "FALSE"),
        Filter::Field { path, predicate } => match predicate {
            Predicate::Eq(value) => push_eq(qb, *path, value),
            Predicate::In(values) => {
                if values.is_empty() {
                    qb.push("FALSE");
                    return;
                }
                qb.push("(");
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        qb.push(" OR ");
                    }
                    push_eq(qb, *path, value);
                }
                qb.push(")");
            }
            Predicate::Contains(text) => {
                qb.push("(jsonb_typeof(doc #> ");
                push_path(qb, *path);
                qb.push(") = 'string' AND doc #>> ");
                push_path(qb, *path);
                qb.push(" ILIKE ");
                qb.push_bind(like_pattern(text));
                qb.push(")");
            }
            Predicate::AnyElementContains(text) => {
                qb.push("EXISTS (SELECT 1 FROM jsonb_array_elements(CASE WHEN jsonb_typeof(doc #> ");
                push_path(qb, *path);
                qb.push(") = 'array' THEN doc #> ");
                push_path(qb, *path);
                qb.push(" ELSE '[]'::jsonb END) AS elem WHERE jsonb_typeof(elem) = 'string' AND elem #>> '{}' ILIKE ");
                qb.push_bind(like_pattern(text));
                qb.push(")");
            }
            Predicate::Gte(bound) => push_numeric(qb, *path, ">=", *bound),
            Predicate::Lte(bound) => push_numeric(qb, *path, "<=", *bound),
        },
    }
}

fn push_numeric(qb: &mut QueryBuilder<'_, Postgres>, path: FieldPath, op: &str, bound: f64) {
    qb.push("(CASE WHEN jsonb_typeof(doc #> ");
    push_path(qb, path);
    qb.push(") = 'number' THEN (doc #>> ");
    push_path(qb, path);
    qb.push(")::float8 ");
    qb.push(op);
    qb.push(" ");
    qb.push_bind(bound);
    qb.push(" ELSE FALSE END)");
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::store::filter::{MODEL_NAME, MRP};

    fn compile(filter: &Filter) -> String {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT 1 WHERE ");
        push_filter(&mut qb, filter);
        qb.sql().to_owned()
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("50%_off\\"), "%50\\%\\_off\\\\%");
    }

    #[test]
    fn empty_or_matches_nothing_and_empty_and_matches_everything() {
        assert_eq!(compile(&Filter::Or(Vec::new())), "SELECT 1 WHERE FALSE");
        assert_eq!(compile(&Filter::And(Vec::new())), "SELECT 1 WHERE TRUE");
        assert_eq!(compile(&Filter::All), "SELECT 1 WHERE TRUE");
    }

    #[test]
    fn user_text_is_bound_never_inlined() {
        let sql = compile(&Filter::Or(vec![
            Filter::contains(MODEL_NAME, "'; DROP TABLE products; --"),
            Filter::lte(MRP, 50000.0),
        ]));
        assert!(!sql.contains("DROP TABLE"));
        assert!(sql.contains(" OR "));
        assert!(sql.contains("ILIKE $3"));
        assert!(sql.contains("::float8 <= $6"));
    }

    #[test]
    fn in_expands_to_one_equality_per_value() {
        let sql = compile(&Filter::is_in(
            FieldPath::new("features.ram"),
            vec![json!(8), json!(16)],
        ));
        assert_eq!(sql.matches("@> jsonb_build_array(").count(), 2);
        assert_eq!(compile(&Filter::is_in(MRP, Vec::new())), "SELECT 1 WHERE FALSE");
    }
}
