//! HTTP implementation of [`BridgeApi`] on top of gloo-net.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::*;
use crate::error::BridgeError;
use crate::models::{OpenOrdersResponse, ProductsResponse, StatusResponse, STATUS_SUCCESS};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpBridgeApi {
    base: String,
}

impl HttpBridgeApi {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self { base: base.trim_end_matches('/').to_string() }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> BridgeResult<T> {
        fetch_json(Request::get(&self.url(path)).header("Content-Type", "application/json")).await
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> BridgeResult<Response> {
        let response = Request::post(&self.url(path)).json(body)?.send().await?;
        ensure_ok(response)
    }
}

async fn fetch_json<T: DeserializeOwned>(request: RequestBuilder) -> BridgeResult<T> {
    let response = request.send().await?;
    read_json(ensure_ok(response)?).await
}

fn ensure_ok(response: Response) -> BridgeResult<Response> {
    if response.ok() {
        Ok(response)
    } else {
        Err(BridgeError::Status(response.status()))
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> BridgeResult<T> {
    response.json::<T>().await.map_err(|e| BridgeError::Decode(e.to_string()))
}

fn check_status(status: &str, message: Option<String>) -> BridgeResult<()> {
    if status == STATUS_SUCCESS {
        Ok(())
    } else {
        Err(BridgeError::Rejected(message.unwrap_or_else(|| status.to_string())))
    }
}

#[async_trait(?Send)]
impl BridgeApi for HttpBridgeApi {
    async fn fetch_category_tree(&self) -> BridgeResult<Vec<TreeNode>> {
        self.get(CATEGORY_TREE_PATH).await
    }

    async fn apply_move(&self, request: &MoveRequest) -> BridgeResult<()> {
        // Any 2xx counts, the body is not inspected
        self.post(SET_ASSOC_SORT_PATH, request).await.map(|_| ())
    }

    async fn fetch_category_products(&self, category_id: u32) -> BridgeResult<Vec<ProductSummary>> {
        let body: ProductsResponse = self.get(&category_products_path(category_id)).await?;
        check_status(&body.status, body.message)?;
        Ok(body.products)
    }

    async fn update_product_sort(&self, update: &SortUpdate) -> BridgeResult<()> {
        let response = self.post(PRODUCT_SORT_PATH, update).await?;
        let body: StatusResponse = read_json(response).await?;
        check_status(&body.status, body.message)
    }

    async fn start_backup(&self, kind: BackupKind) -> BridgeResult<serde_json::Value> {
        self.get(kind.path()).await
    }

    async fn fetch_open_order_ids(&self) -> BridgeResult<OpenOrdersResponse> {
        self.get(OPEN_ORDER_IDS_PATH).await
    }

    async fn sync_order_to_bridge(&self, order_id: &str) -> BridgeResult<StatusResponse> {
        fetch_json(Request::patch(&self.url(&sync_order_path(order_id)))).await
    }

    async fn run_product_action(&self, action: ProductAction, product_id: u32) -> BridgeResult<StatusResponse> {
        let url = self.url(&action.path(product_id));
        let request = match action {
            ProductAction::SyncToSw6 | ProductAction::SyncToErp => Request::get(&url),
            ProductAction::UpdateInBridge => Request::put(&url),
            ProductAction::DeleteInBridge => Request::delete(&url),
        };
        fetch_json(request).await
    }
}
