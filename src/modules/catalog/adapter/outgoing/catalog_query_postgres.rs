use async_trait::async_trait;
use sea_orm::sea_query::{extension::postgres::PgExpr, Expr};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use uuid::Uuid;

use super::category_repository_postgres::model_to_record as category_to_record;
use super::product_repository_postgres::model_to_record as product_to_record;
use super::sea_orm_entity::{categories, products};
use crate::catalog::application::ports::outgoing::{
    CatalogQuery, CatalogQueryError, CatalogReader, CategoryRecord, ProductRecord,
};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Clone)]
pub struct CatalogQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CatalogQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn category_names(
        &self,
        ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, String>, CatalogQueryError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = categories::Entity::find()
            .filter(categories::Column::Id.is_in(ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(|c| (c.id, c.name)).collect())
    }
}

fn map_db_err(e: DbErr) -> CatalogQueryError {
    CatalogQueryError::DatabaseError(e.to_string())
}

/// Works on a plain connection or inside an open transaction.
pub async fn existing_product_ids<C>(conn: &C, ids: &[Uuid]) -> Result<HashSet<Uuid>, DbErr>
where
    C: ConnectionTrait,
{
    if ids.is_empty() {
        return Ok(HashSet::new());
    }

    let found = products::Entity::find()
        .filter(products::Column::Id.is_in(ids.to_vec()))
        .select_only()
        .column(products::Column::Id)
        .into_tuple::<Uuid>()
        .all(conn)
        .await?;

    Ok(found.into_iter().collect())
}

#[async_trait]
impl CatalogQuery for CatalogQueryPostgres {
    async fn list_categories(
        &self,
        name: Option<String>,
        page: PageRequest,
    ) -> Result<PageResult<CategoryRecord>, CatalogQueryError> {
        let mut query = categories::Entity::find();

        if let Some(ref name) = name {
            let pattern = format!("%{}%", name);
            query = query.filter(Expr::col(categories::Column::Name).ilike(&pattern));
        }

        let query = query.order_by_asc(categories::Column::Name);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;
        let rows = page.apply(query).all(&*self.db).await.map_err(map_db_err)?;

        Ok(PageResult {
            items: rows.into_iter().map(category_to_record).collect(),
            total,
        })
    }

    async fn list_products(
        &self,
        name: Option<String>,
        page: PageRequest,
    ) -> Result<PageResult<ProductRecord>, CatalogQueryError> {
        let mut query = products::Entity::find();

        if let Some(ref name) = name {
            let pattern = format!("%{}%", name);
            query = query.filter(Expr::col(products::Column::Name).ilike(&pattern));
        }

        let query = query.order_by_asc(products::Column::Name);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;
        let rows = page.apply(query).all(&*self.db).await.map_err(map_db_err)?;

        let mut category_ids: Vec<Uuid> = rows.iter().map(|p| p.category_id).collect();
        category_ids.sort();
        category_ids.dedup();
        let names = self.category_names(category_ids).await?;

        let items = rows
            .into_iter()
            .map(|p| {
                let category_name = names.get(&p.category_id).cloned();
                product_to_record(p, category_name)
            })
            .collect();

        Ok(PageResult { items, total })
    }

    async fn find_product(&self, id: Uuid) -> Result<Option<ProductRecord>, CatalogQueryError> {
        let row = products::Entity::find_by_id(id)
            .find_also_related(categories::Entity)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(|(product, category)| product_to_record(product, category.map(|c| c.name))))
    }
}

#[async_trait]
impl CatalogReader for CatalogQueryPostgres {
    async fn existing_product_ids(
        &self,
        ids: &[Uuid],
    ) -> Result<HashSet<Uuid>, CatalogQueryError> {
        existing_product_ids(&*self.db, ids)
            .await
            .map_err(map_db_err)
    }
}
