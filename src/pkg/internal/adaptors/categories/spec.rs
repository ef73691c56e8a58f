use sqlx::FromRow;

#[derive(FromRow, Debug, Clone)]
pub struct CategoryEntry {
    pub id: i32,
    pub category_name: String,
}

/// Outcome of a delete attempt; jobs referencing the category block it.
#[derive(Debug, PartialEq, Eq)]
pub enum CategoryDelete {
    Deleted,
    InUse,
}
