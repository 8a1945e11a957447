//! Property repository
//!
//! The search statement is assembled dynamically from whichever filters the
//! caller supplied; the insert names only the fields present on the input.
//! Both go through the builders in [`crate::db::query`], so placeholder
//! numbering is never tracked by hand here.

use sqlx::{FromRow, PgPool, Row};

use crate::db::query::{InsertBuilder, QueryBuilder, SqlValue};
use crate::error::DbResult;
use crate::models::{NewProperty, Property, PropertySearch};

/// Property row joined with its average review rating.
#[derive(Debug, Clone)]
pub struct PropertyWithRating {
    pub property: Property,
    pub average_rating: f64,
}

/// Property repository
pub struct PropertyRepo<'a> {
    pool: &'a PgPool,
}

/// Base statement for the search. Properties without reviews are excluded
/// by the inner join, matching the application's listing behavior.
const SEARCH_BASE: &str = "\
SELECT properties.*, AVG(property_reviews.rating)::float8 AS average_rating
FROM properties
JOIN property_reviews ON properties.id = property_reviews.property_id";

/// Assemble the search statement for a filter configuration.
///
/// Filters apply in fixed order: city, owner, minimum price, maximum price.
/// The rating threshold constrains the aggregated average, so it becomes a
/// HAVING condition after GROUP BY. The limit is always the last bound value.
fn build_search_query(filters: &PropertySearch, limit: i64) -> QueryBuilder {
    let mut query = QueryBuilder::new(SEARCH_BASE);

    if let Some(city) = filters.city.as_deref().filter(|city| !city.is_empty()) {
        query.filter(
            "properties.city LIKE",
            SqlValue::Text(format!("%{}%", city)),
        );
    }
    if let Some(owner_id) = filters.owner_id {
        query.filter("properties.owner_id =", SqlValue::Int(owner_id));
    }
    if let Some(min_price) = filters.minimum_price_per_night {
        query.filter(
            "properties.cost_per_night / 100.0 >=",
            SqlValue::Float(min_price),
        );
    }
    if let Some(max_price) = filters.maximum_price_per_night {
        query.filter(
            "properties.cost_per_night / 100.0 <=",
            SqlValue::Float(max_price),
        );
    }

    query.raw("GROUP BY properties.id");

    if let Some(min_rating) = filters.minimum_rating {
        query.clause(
            "HAVING AVG(property_reviews.rating) >=",
            SqlValue::Float(min_rating),
        );
    }

    query.raw("ORDER BY properties.cost_per_night");
    query.clause("LIMIT", SqlValue::Int(limit));

    query
}

/// Stage the dynamic insert for a new property.
///
/// Candidate columns are fixed; only the fields present on the input make it
/// into the statement.
fn build_insert(property: &NewProperty) -> InsertBuilder {
    let mut insert = InsertBuilder::new("properties");

    insert
        .column_opt("owner_id", property.owner_id.map(SqlValue::Int))
        .column_opt("title", property.title.clone().map(SqlValue::Text))
        .column_opt(
            "description",
            property.description.clone().map(SqlValue::Text),
        )
        .column_opt(
            "thumbnail_photo_url",
            property.thumbnail_photo_url.clone().map(SqlValue::Text),
        )
        .column_opt(
            "cover_photo_url",
            property.cover_photo_url.clone().map(SqlValue::Text),
        )
        .column_opt("cost_per_night", property.cost_per_night.map(SqlValue::Int))
        .column_opt("street", property.street.clone().map(SqlValue::Text))
        .column_opt("city", property.city.clone().map(SqlValue::Text))
        .column_opt("province", property.province.clone().map(SqlValue::Text))
        .column_opt("post_code", property.post_code.clone().map(SqlValue::Text))
        .column_opt("country", property.country.clone().map(SqlValue::Text))
        .column_opt(
            "parking_spaces",
            property.parking_spaces.map(|n| SqlValue::Int(n.into())),
        )
        .column_opt(
            "number_of_bathrooms",
            property.number_of_bathrooms.map(|n| SqlValue::Int(n.into())),
        )
        .column_opt(
            "number_of_bedrooms",
            property.number_of_bedrooms.map(|n| SqlValue::Int(n.into())),
        );

    insert
}

impl<'a> PropertyRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Search properties, each with its average review rating.
    ///
    /// Every supplied filter narrows the result; `limit` caps the row count
    /// and is honored as a bound parameter.
    pub async fn search(
        &self,
        filters: &PropertySearch,
        limit: i64,
    ) -> DbResult<Vec<PropertyWithRating>> {
        let query = build_search_query(filters, limit);
        let rows = query.fetch_all(self.pool).await?;

        rows.into_iter()
            .map(|row| {
                let average_rating: f64 = row.try_get("average_rating")?;
                let property = Property::from_row(&row)?;
                Ok(PropertyWithRating {
                    property,
                    average_rating,
                })
            })
            .collect()
    }

    /// Insert a property, naming only the supplied fields.
    ///
    /// Absent fields take the column defaults. An input with no fields at
    /// all is rejected before reaching the server.
    pub async fn create(&self, property: NewProperty) -> DbResult<Property> {
        let row = build_insert(&property).fetch_one(self.pool).await?;
        Ok(Property::from_row(&row)?)
    }
}
