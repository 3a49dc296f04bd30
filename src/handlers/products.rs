use askama::Template;
use axum::{
    extract::{Form, Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_cookies::Cookies;
use uuid::Uuid;

use crate::{
    error::AppError,
    handlers::{render, url_with_query, Shell},
    middleware::{push_notice, Notice},
    models::{Product, ProductTab},
    search::derive_view,
    services::ScanStatus,
    state::AppState,
};

#[derive(Template)]
#[template(path = "products/list.html")]
struct ProductsTemplate<'a> {
    shell: Shell,
    query: String,
    tab: ProductTab,
    tabs: [ProductTab; 3],
    products: Vec<&'a Product>,
}

impl ProductsTemplate<'_> {
    fn tab_url(&self, tab: &ProductTab) -> String {
        url_with_query("/products", &[("q", &self.query), ("tab", tab.as_str())])
    }
}

#[derive(Template)]
#[template(path = "products/detail.html")]
struct ProductDetailTemplate {
    shell: Shell,
    product: Product,
}

#[derive(Template)]
#[template(path = "products/scan.html")]
struct ScanTemplate {
    shell: Shell,
    session: Uuid,
    poll_seconds: u64,
}

#[derive(Deserialize, Default)]
pub struct ProductFilters {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub tab: String,
}

impl ProductFilters {
    pub fn tab(&self) -> ProductTab {
        self.tab.parse().unwrap_or_default()
    }
}

#[derive(Deserialize)]
pub struct LookupForm {
    barcode: String,
}

pub async fn products_list(
    cookies: Cookies,
    State(state): State<AppState>,
    Query(filters): Query<ProductFilters>,
) -> Result<Html<String>, AppError> {
    let tab = filters.tab();
    let data = state.store().read().await;
    let in_tab = |p: &Product| tab.admits(p);
    let products = derive_view(data.products.all(), &filters.q, &[&in_tab]);

    let template = ProductsTemplate {
        shell: Shell::new("products", &cookies),
        query: filters.q,
        tab,
        tabs: ProductTab::ALL,
        products,
    };
    render(&template)
}

pub async fn product_detail(
    cookies: Cookies,
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let product = state
        .store()
        .find_product(&product_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("/products/{product_id}")))?;

    let template = ProductDetailTemplate {
        shell: Shell::new("products", &cookies),
        product,
    };
    render(&template)
}

pub async fn start_scan(State(state): State<AppState>) -> Redirect {
    let session = state.scanner().start().await;
    Redirect::to(&format!("/products/scan/{session}"))
}

/// The scanner view: keeps polling until the scan finishes, then opens the product.
pub async fn scan_view(
    cookies: Cookies,
    State(state): State<AppState>,
    Path(session): Path<Uuid>,
) -> Result<Response, AppError> {
    match state.scanner().status(session).await {
        None => Ok(Redirect::to("/products").into_response()),
        Some(ScanStatus::Scanning) => {
            let template = ScanTemplate {
                shell: Shell::new("products", &cookies),
                session,
                poll_seconds: 1,
            };
            Ok(render(&template)?.into_response())
        }
        Some(ScanStatus::Scanned(_)) => {
            let Some(barcode) = state.scanner().take(session).await else {
                return Ok(Redirect::to("/products").into_response());
            };
            push_notice(&cookies, Notice::info("Barcode scanned", format!("Product ID: {barcode}")));
            Ok(open_barcode(&state, &cookies, &barcode).await.into_response())
        }
    }
}

pub async fn cancel_scan(
    State(state): State<AppState>,
    Path(session): Path<Uuid>,
) -> Redirect {
    state.scanner().cancel(session).await;
    Redirect::to("/products")
}

pub async fn lookup_barcode(
    cookies: Cookies,
    State(state): State<AppState>,
    Form(form): Form<LookupForm>,
) -> Redirect {
    open_barcode(&state, &cookies, form.barcode.trim()).await
}

/// Opens the product with id `barcode`, or returns to the list with an error notice.
async fn open_barcode(state: &AppState, cookies: &Cookies, barcode: &str) -> Redirect {
    match state.store().find_product(barcode).await {
        Some(product) => Redirect::to(&format!("/products/{}", urlencoding::encode(&product.id))),
        None => {
            log::debug!("Barcode {barcode} matched no product");
            push_notice(
                cookies,
                Notice::error("Product not found", format!("No product found with ID: {barcode}")),
            );
            Redirect::to("/products")
        }
    }
}
