use serde_derive::Serialize;
use sqlx::PgConnection;

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct CourseSummary {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub thumbnail: String,
    pub slug: String,
}

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct Teacher {
    pub id: i32,
    pub name: String,
    pub email: String,
}

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct Class {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub slug: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct CourseDetail {
    #[serde(flatten)]
    pub course: CourseSummary,
    pub teachers: Vec<Teacher>,
    pub classes: Vec<Class>,
}

/// Raw row count, soft-deleted courses included.
pub struct CourseCounter;

impl CourseCounter {
    pub async fn execute(&self, conn: &mut PgConnection) -> sqlx::Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM courses")
            .fetch_one(conn)
            .await
    }
}

pub struct CourseList;

impl CourseList {
    pub async fn execute(&self, conn: &mut PgConnection) -> sqlx::Result<Vec<CourseSummary>> {
        sqlx::query_as::<_, CourseSummary>(
            r#"
            SELECT id, name, description, thumbnail, slug
            FROM courses
            WHERE deleted_at IS NULL
            ORDER BY id
            "#,
        )
        .fetch_all(conn)
        .await
    }
}

pub struct FindBySlugQuery<'a> {
    slug: &'a str,
}

impl<'a> FindBySlugQuery<'a> {
    pub fn new(slug: &'a str) -> Self {
        Self { slug }
    }

    pub async fn execute(&self, conn: &mut PgConnection) -> sqlx::Result<Option<CourseDetail>> {
        let course = sqlx::query_as::<_, CourseSummary>(
            r#"
            SELECT id, name, description, thumbnail, slug
            FROM courses
            WHERE slug = $1
            AND deleted_at IS NULL
            "#,
        )
        .bind(self.slug)
        .fetch_optional(&mut *conn)
        .await?;

        let course = match course {
            Some(course) => course,
            None => return Ok(None),
        };

        let teachers = sqlx::query_as::<_, Teacher>(
            r#"
            SELECT t.id, t.name, t.email
            FROM teachers t
            INNER JOIN course_teachers ct ON ct.teacher_id = t.id
            WHERE ct.course_id = $1
            ORDER BY t.id
            "#,
        )
        .bind(course.id)
        .fetch_all(&mut *conn)
        .await?;

        let classes = sqlx::query_as::<_, Class>(
            r#"
            SELECT id, name, description, slug
            FROM classes
            WHERE course_id = $1
            AND deleted_at IS NULL
            ORDER BY id
            "#,
        )
        .bind(course.id)
        .fetch_all(&mut *conn)
        .await?;

        Ok(Some(CourseDetail {
            course,
            teachers,
            classes,
        }))
    }
}
