use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;
use utoipa::ToSchema;

#[derive(
    Clone,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    TypedBuilder,
    ToSchema,
)]
pub struct Venue {
    pub id: i64,
    #[builder(setter(into))]
    pub name: String,
    pub capacity: i64,
    #[builder(setter(into))]
    pub location: String,
}
