use dioxus::prelude::*;
use types::{
    Category, CategoryFields, CategoryId, ClientSession,
    form::{CategoryApi, RequestError},
};

#[post("/api/identity")]
pub async fn current_identity() -> ServerFnResult<Option<ClientSession>> {
    match server::get_session_from_cookie().await {
        Ok(session) => Ok(Some(ClientSession::from(&session))),
        Err(_) => Ok(None),
    }
}

#[post("/api/categories")]
pub async fn list_categories() -> ServerFnResult<Vec<Category>> {
    let session = server::require_session().await?;
    Ok(server::BACKEND_CLIENT
        .list_categories(&session.access_token)
        .await?)
}

#[post("/api/categories/create")]
pub async fn create_category(fields: CategoryFields) -> ServerFnResult<Category> {
    let session = server::require_session().await?;
    Ok(server::BACKEND_CLIENT
        .create_category(&session.access_token, &fields)
        .await?)
}

#[post("/api/categories/update")]
pub async fn update_category(id: CategoryId, fields: CategoryFields) -> ServerFnResult<Category> {
    let session = server::require_session().await?;
    Ok(server::BACKEND_CLIENT
        .update_category(&session.access_token, &id, &fields)
        .await?)
}

/// [`CategoryApi`] over the server functions above.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CategoryClient;

impl CategoryApi for CategoryClient {
    async fn create_category(&self, fields: CategoryFields) -> Result<Category, RequestError> {
        self::create_category(fields).await.map_err(Into::into)
    }

    async fn update_category(
        &self,
        id: &CategoryId,
        fields: CategoryFields,
    ) -> Result<Category, RequestError> {
        self::update_category(id.clone(), fields)
            .await
            .map_err(Into::into)
    }
}
