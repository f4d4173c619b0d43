//! Product repository for catalog store operations.
//!
//! Every operation is an independent round-trip; single-document atomicity
//! comes from `PostgreSQL` itself. Required-field validation (name, price)
//! is the table schema's job - a NOT NULL violation surfaces as
//! [`RepositoryError::Validation`] carrying the store's own message.

use sqlx::{PgPool, Postgres, QueryBuilder, error::ErrorKind};

use hidestyle_core::{Product, ProductId, ProductInput, SortKey};

use super::RepositoryError;

/// Column list for `SELECT`/`RETURNING`, in `Product` field order.
const PRODUCT_COLUMNS: &str = "id, name, category, price, old_price, description, \
     stock, featured, images, sizes, colors, created_at, updated_at";

/// `ORDER BY` clause for a catalog sort key.
const fn order_by(sort: SortKey) -> &'static str {
    match sort {
        SortKey::Newest => "created_at DESC",
        SortKey::PriceAsc => "price ASC",
        SortKey::PriceDesc => "price DESC",
        SortKey::Featured => "featured DESC, created_at DESC",
    }
}

/// Map schema rejections (NOT NULL / CHECK) to validation errors, keeping
/// the database's message for the client.
fn map_write_error(err: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = err
        && matches!(
            db_err.kind(),
            ErrorKind::NotNullViolation | ErrorKind::CheckViolation
        )
    {
        return RepositoryError::Validation(db_err.message().to_string());
    }
    RepositoryError::Database(err)
}

/// Repository for product catalog operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List products, optionally restricted to an exact category match,
    /// sorted server-side. Returns the full matching set - no pagination.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(
        &self,
        category: Option<&str>,
        sort: SortKey,
    ) -> Result<Vec<Product>, RepositoryError> {
        let mut query: QueryBuilder<'_, Postgres> =
            QueryBuilder::new(format!("SELECT {PRODUCT_COLUMNS} FROM products"));

        if let Some(category) = category {
            query.push(" WHERE category = ").push_bind(category);
        }
        query.push(" ORDER BY ").push(order_by(sort));

        let products = query
            .build_query_as::<Product>()
            .fetch_all(self.pool)
            .await?;
        Ok(products)
    }

    /// Get a product by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;
        Ok(product)
    }

    /// Create a product from a (possibly partial) payload.
    ///
    /// The store assigns the identifier and both timestamps. Omitted
    /// optional fields take their column defaults; an omitted name or price
    /// reaches the schema as NULL and comes back as a validation error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Validation` if the schema rejects the
    /// payload, `RepositoryError::Database` for other failures.
    pub async fn create(&self, input: ProductInput) -> Result<Product, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "INSERT INTO products \
                 (name, category, price, old_price, description, stock, featured, \
                  images, sizes, colors) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(input.name)
        .bind(input.category)
        .bind(input.price)
        .bind(input.old_price)
        .bind(input.description)
        .bind(input.stock.unwrap_or(0))
        .bind(input.featured.unwrap_or(false))
        .bind(input.images.unwrap_or_default())
        .bind(input.sizes.unwrap_or_default())
        .bind(input.colors.unwrap_or_default())
        .fetch_one(self.pool)
        .await
        .map_err(map_write_error)?;
        Ok(product)
    }

    /// Update the provided fields of an existing product.
    ///
    /// Fields absent from the payload keep their stored values; the
    /// identifier is immutable and `updated_at` is refreshed. Returns `None`
    /// when the identifier does not resolve.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Validation` if the schema rejects the
    /// payload, `RepositoryError::Database` for other failures.
    pub async fn update(
        &self,
        id: ProductId,
        input: ProductInput,
    ) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "UPDATE products SET \
                 name = COALESCE($2, name), \
                 category = COALESCE($3, category), \
                 price = COALESCE($4, price), \
                 old_price = COALESCE($5, old_price), \
                 description = COALESCE($6, description), \
                 stock = COALESCE($7, stock), \
                 featured = COALESCE($8, featured), \
                 images = COALESCE($9, images), \
                 sizes = COALESCE($10, sizes), \
                 colors = COALESCE($11, colors), \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(id)
        .bind(input.name)
        .bind(input.category)
        .bind(input.price)
        .bind(input.old_price)
        .bind(input.description)
        .bind(input.stock)
        .bind(input.featured)
        .bind(input.images)
        .bind(input.sizes)
        .bind(input.colors)
        .fetch_optional(self.pool)
        .await
        .map_err(map_write_error)?;
        Ok(product)
    }

    /// Delete a product by its ID. Idempotent: deleting an identifier that
    /// no longer resolves is a success, not an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_by_clauses() {
        assert_eq!(order_by(SortKey::Newest), "created_at DESC");
        assert_eq!(order_by(SortKey::PriceAsc), "price ASC");
        assert_eq!(order_by(SortKey::PriceDesc), "price DESC");
        assert_eq!(order_by(SortKey::Featured), "featured DESC, created_at DESC");
    }
}
