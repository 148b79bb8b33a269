use crate::db::course::CourseSummary;
use sqlx::PgConnection;

pub struct Course {
    name: String,
    slug: String,
    description: String,
    thumbnail: String,
    deleted: bool,
}

impl Course {
    pub fn new(name: &str, slug: &str) -> Self {
        Self {
            name: name.to_owned(),
            slug: slug.to_owned(),
            description: format!("Learn {}", name),
            thumbnail: format!("https://static.platziflix.com/thumbnails/{}.png", slug),
            deleted: false,
        }
    }

    pub fn deleted(self) -> Self {
        Self {
            deleted: true,
            ..self
        }
    }

    pub async fn insert(self, conn: &mut PgConnection) -> sqlx::Result<CourseSummary> {
        sqlx::query_as::<_, CourseSummary>(
            r#"
            INSERT INTO courses
                (name, description, thumbnail, slug, deleted_at)
            VALUES ($1, $2, $3, $4, CASE WHEN $5 THEN now() END)
            RETURNING id, name, description, thumbnail, slug
            "#,
        )
        .bind(self.name)
        .bind(self.description)
        .bind(self.thumbnail)
        .bind(self.slug)
        .bind(self.deleted)
        .fetch_one(conn)
        .await
    }
}
