use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_category::{
    GetProductsByCategoryParams, GetProductsByCategoryUseCase,
};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::get_categories::GetCategoriesUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::ProductResponse;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    get_by_category_use_case: Arc<dyn GetProductsByCategoryUseCase>,
    get_categories_use_case: Arc<dyn GetCategoriesUseCase>,
}

impl ProductApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        get_by_category_use_case: Arc<dyn GetProductsByCategoryUseCase>,
        get_categories_use_case: Arc<dyn GetCategoriesUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
            get_by_category_use_case,
            get_categories_use_case,
        }
    }
}

/// Product catalog API
///
/// Read-only endpoints over the cached upstream catalog.
#[OpenApi]
impl ProductApi {
    /// List all products
    ///
    /// Returns the full catalog in upstream order.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all(&self) -> GetAllProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetAllProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::BadGateway(json)
            }
        }
    }

    /// List catalog categories
    ///
    /// Returns distinct category names in order of first appearance.
    #[oai(
        path = "/products/categories",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn get_categories(&self) -> GetCategoriesResponse {
        match self.get_categories_use_case.execute().await {
            Ok(categories) => GetCategoriesResponse::Ok(Json(categories)),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCategoriesResponse::BadGateway(json)
            }
        }
    }

    /// List products in a category
    ///
    /// Returns the catalog entries whose category matches exactly, preserving
    /// upstream order. An unknown category yields an empty list.
    #[oai(
        path = "/products/category/:name",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn get_by_category(&self, name: Path<String>) -> GetProductsByCategoryResponse {
        let params = GetProductsByCategoryParams { category: name.0 };

        match self.get_by_category_use_case.execute(params).await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetProductsByCategoryResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetProductsByCategoryResponse::BadGateway(json)
            }
        }
    }

    /// Get a product by id
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_by_id(&self, id: Path<u64>) -> GetProductByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: id.0 })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::BadGateway(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductsByCategoryResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCategoriesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<String>>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
