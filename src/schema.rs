// src/schema.rs
//! Explicit table definition for the products table, plus the maintenance
//! routines behind the `create-schema`, `drop-schema` and `seed` commands.

use sqlx::PgPool;

use crate::error::Result;
use crate::models::product::NewProduct;
use crate::queries;

pub struct ColumnDef {
    pub name: &'static str,
    pub sql_type: &'static str,
    pub nullable: bool,
    pub primary_key: bool,
}

pub struct TableDef {
    pub name: &'static str,
    pub columns: &'static [ColumnDef],
}

pub const PRODUCTS: TableDef = TableDef {
    name: "products",
    columns: &[
        ColumnDef {
            name: "id",
            sql_type: "SERIAL",
            nullable: false,
            primary_key: true,
        },
        ColumnDef {
            name: "name",
            sql_type: "VARCHAR(100)",
            nullable: false,
            primary_key: false,
        },
        ColumnDef {
            name: "description",
            sql_type: "VARCHAR(255)",
            nullable: true,
            primary_key: false,
        },
        ColumnDef {
            name: "price",
            sql_type: "DOUBLE PRECISION",
            nullable: true,
            primary_key: false,
        },
        ColumnDef {
            name: "stock",
            sql_type: "INTEGER",
            nullable: true,
            primary_key: false,
        },
    ],
};

impl TableDef {
    pub fn create_sql(&self) -> String {
        let columns: Vec<String> = self
            .columns
            .iter()
            .map(|column| {
                let mut definition = format!("{} {}", column.name, column.sql_type);
                if column.primary_key {
                    definition.push_str(" PRIMARY KEY");
                } else if !column.nullable {
                    definition.push_str(" NOT NULL");
                }
                definition
            })
            .collect();

        format!(
            "CREATE TABLE IF NOT EXISTS {} ({})",
            self.name,
            columns.join(", ")
        )
    }

    pub fn drop_sql(&self) -> String {
        format!("DROP TABLE IF EXISTS {}", self.name)
    }
}

pub async fn create_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(&PRODUCTS.create_sql()).execute(pool).await?;
    Ok(())
}

pub async fn drop_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(&PRODUCTS.drop_sql()).execute(pool).await?;
    Ok(())
}

pub async fn seed(pool: &PgPool) -> Result<()> {
    let demo_products = [
        NewProduct {
            name: "Product 1".to_string(),
            description: Some("New first product".to_string()),
            price: Some(12.99),
            stock: Some(15),
        },
        NewProduct {
            name: "Telephone".to_string(),
            description: None,
            price: None,
            stock: None,
        },
    ];

    for product in &demo_products {
        queries::products::insert(pool, product).await?;
    }

    Ok(())
}
