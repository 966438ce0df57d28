use {
    typed_builder::TypedBuilder,
    serde::Serialize,
    chrono::NaiveDate,
    crate::dump::{AuthorRecord, WorkRecord},
};

#[derive(TypedBuilder, Serialize, sqlx::FromRow, Clone, Debug, PartialEq)]
pub struct AuthorEntity {
    id: String,
    name: String,
    personal_name: String,
}

#[derive(TypedBuilder, Serialize, sqlx::FromRow, Clone, Debug, PartialEq)]
pub struct WorkEntity {
    id: String,
    title: String,
    description: Option<String>,
    publish_date: Option<NaiveDate>,
    cover_ids: Option<Vec<String>>,
    author_ids: Option<Vec<String>>,

    // resolved display names, same order as author_ids
    author_names: Option<Vec<String>>,
}

impl AuthorEntity {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn personal_name(&self) -> &str {
        &self.personal_name
    }
}

impl WorkEntity {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn publish_date(&self) -> Option<NaiveDate> {
        self.publish_date
    }

    pub fn cover_ids(&self) -> Option<&Vec<String>> {
        self.cover_ids.as_ref()
    }

    pub fn author_ids(&self) -> Option<&Vec<String>> {
        self.author_ids.as_ref()
    }

    pub fn author_names(&self) -> Option<&Vec<String>> {
        self.author_names.as_ref()
    }
}

pub fn into_author_entity(record: AuthorRecord) -> AuthorEntity {
    AuthorEntity::builder()
        .id(record.id)
        .name(record.name)
        .personal_name(record.personal_name)
        .build()
}

pub fn into_work_entity(record: WorkRecord, author_names: Option<Vec<String>>) -> WorkEntity {
    WorkEntity::builder()
        .id(record.id)
        .title(record.title)
        .description(record.description)
        .publish_date(record.publish_date)
        .cover_ids(record.cover_ids)
        .author_ids(record.author_ids)
        .author_names(author_names)
        .build()
}
