use crate::models::upload_dao::{Upload, UploadQuery};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub async fn create_uploads_table(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS uploads (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            pathname TEXT NOT NULL,
            url TEXT NOT NULL,
            size INTEGER NOT NULL,
            content_type TEXT NOT NULL,
            filename TEXT NOT NULL,
            category TEXT NOT NULL,
            stop_name TEXT NOT NULL,
            attribution TEXT NOT NULL,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )
    "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

impl Upload {
    pub async fn add_to_db(&mut self, pool: &SqlitePool) -> Result<(), sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO uploads (pathname, url, size, content_type, filename, category, stop_name, attribution) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&self.pathname)
        .bind(&self.url)
        .bind(self.size)
        .bind(&self.content_type)
        .bind(&self.filename)
        .bind(&self.category)
        .bind(&self.stop_name)
        .bind(&self.attribution)
        .execute(pool)
        .await?;

        self.id = result.last_insert_rowid();

        Ok(())
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM uploads")
            .fetch_one(pool)
            .await?;
        Ok(row.get("total"))
    }

    /// Newest first, optionally narrowed to one category and/or station.
    pub async fn list(query: &UploadQuery, pool: &SqlitePool) -> Result<Vec<Upload>, sqlx::Error> {
        let rows = sqlx::query(
            "SELECT id, pathname, url, size, content_type, filename, category, stop_name, attribution, \
             CAST(created_at AS TEXT) AS created_at FROM uploads \
             WHERE (?1 IS NULL OR category = ?1) AND (?2 IS NULL OR stop_name = ?2) \
             ORDER BY id DESC",
        )
        .bind(&query.category)
        .bind(&query.stop_name)
        .fetch_all(pool)
        .await?;

        Ok(rows.iter().map(from_row).collect())
    }
}

fn from_row(row: &SqliteRow) -> Upload {
    Upload {
        id: row.get("id"),
        pathname: row.get("pathname"),
        url: row.get("url"),
        size: row.get("size"),
        content_type: row.get("content_type"),
        filename: row.get("filename"),
        category: row.get("category"),
        stop_name: row.get("stop_name"),
        attribution: row.get("attribution"),
        created_at: row.get("created_at"),
    }
}

#[cfg(test)]
mod test {

    use super::*;
    use crate::datasource::db::init_memory_db;

    fn upload(category: &str, stop_name: &str, filename: &str) -> Upload {
        Upload {
            id: 0,
            pathname: format!("{category}/{stop_name}/{filename}"),
            url: format!("http://localhost/blobs/{category}/{stop_name}/{filename}"),
            size: 10,
            content_type: "image/jpeg".to_string(),
            filename: filename.to_string(),
            category: category.to_string(),
            stop_name: stop_name.to_string(),
            attribution: "ANONYMOUS".to_string(),
            created_at: String::new(),
        }
    }

    #[tokio::test]
    async fn test_add_to_db() {
        let pool = init_memory_db().await;

        let mut record = upload("Fotos", "Colón", "ANONYMOUS_1.jpg");
        let result = record.add_to_db(&pool).await;

        assert!(result.is_ok());
        assert!(record.id > 0);
        assert_eq!(Upload::count(&pool).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_list_filters_and_orders() {
        let pool = init_memory_db().await;

        for (category, stop, name) in [
            ("Fotos", "Colón", "a_1.jpg"),
            ("Fotos", "Xàtiva", "b_2.jpg"),
            ("NaviLensGo", "Colón", "c_3.jpg"),
        ] {
            upload(category, stop, name).add_to_db(&pool).await.unwrap();
        }

        let all = Upload::list(&UploadQuery::default(), &pool).await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].filename, "c_3.jpg");
        assert!(!all[0].created_at.is_empty());

        let query = UploadQuery {
            category: Some("Fotos".to_string()),
            stop_name: None,
        };
        let fotos = Upload::list(&query, &pool).await.unwrap();
        assert_eq!(fotos.len(), 2);

        let query = UploadQuery {
            category: Some("Fotos".to_string()),
            stop_name: Some("Colón".to_string()),
        };
        let narrowed = Upload::list(&query, &pool).await.unwrap();
        assert_eq!(narrowed.len(), 1);
        assert_eq!(narrowed[0].pathname, "Fotos/Colón/a_1.jpg");
    }
}
