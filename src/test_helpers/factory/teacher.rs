use crate::db::course::Teacher as TeacherRow;
use sqlx::PgConnection;

pub struct Teacher {
    name: String,
    email: String,
}

impl Teacher {
    pub fn new(name: &str, email: &str) -> Self {
        Self {
            name: name.to_owned(),
            email: email.to_owned(),
        }
    }

    pub async fn insert(self, conn: &mut PgConnection) -> sqlx::Result<TeacherRow> {
        sqlx::query_as::<_, TeacherRow>(
            r#"
            INSERT INTO teachers (name, email)
            VALUES ($1, $2)
            RETURNING id, name, email
            "#,
        )
        .bind(self.name)
        .bind(self.email)
        .fetch_one(conn)
        .await
    }
}

pub async fn assign(conn: &mut PgConnection, course_id: i32, teacher_id: i32) -> sqlx::Result<()> {
    sqlx::query("INSERT INTO course_teachers (course_id, teacher_id) VALUES ($1, $2)")
        .bind(course_id)
        .bind(teacher_id)
        .execute(conn)
        .await?;

    Ok(())
}
