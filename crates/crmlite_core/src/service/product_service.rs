//! Product mutation operations.

use crate::model::product::{NewProduct, Product};
use crate::repo::product_repo::ProductRepository;
use crate::service::MutationResult;
use log::info;

const PRODUCT_CREATED: &str = "Product created successfully";

/// Result payload of a product creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedProduct {
    pub product: Product,
    pub message: String,
}

/// Use-case service for product writes.
pub struct ProductService<R: ProductRepository> {
    repo: R,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one product after the non-negativity checks (price first).
    pub fn create_product(&self, input: &NewProduct) -> MutationResult<CreatedProduct> {
        input.validate()?;

        let product = self.repo.create_product(input)?;
        info!(
            "event=product_created module=service status=ok product_id={}",
            product.id
        );

        Ok(CreatedProduct {
            product,
            message: PRODUCT_CREATED.to_string(),
        })
    }
}
