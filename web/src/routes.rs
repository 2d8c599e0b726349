use crate::context::Context;
use actix_web::{
    error::{InternalError, JsonPayloadError, PathError},
    http::StatusCode,
    web::{Data, Json, Path},
    HttpRequest, HttpResponse,
};
use serde::{Deserialize, Serialize};
use types::{
    client::{Client, ClientId},
    error::Error,
};

#[derive(Debug, Deserialize)]
pub struct ClientRequest {
    #[serde(default)]
    pub id: Option<ClientId>,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub membership_number: i32,
}

impl ClientRequest {
    fn into_client(self, id: Option<ClientId>) -> Result<Client, Error> {
        Client {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            membership_number: self.membership_number,
        }
        .validated()
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: String,
}

fn error_response(err: Error) -> HttpResponse {
    match &err {
        Error::Storage(source) => tracing::error!("Storage failure: {:?}", source),
        _ => tracing::debug!("Request rejected: {}", err),
    }
    let status = StatusCode::from_u16(err.http_status().as_u16())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status).json(ErrorResponse {
        code: err.code(),
        message: err.to_string(),
    })
}

pub(crate) fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!("Rejected request body: {}", err);
    let response = error_response(Error::invalid_input(
        "body",
        "must be a JSON client with first_name and an integer membership_number",
    ));
    InternalError::from_response(err, response).into()
}

pub(crate) fn path_error(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!("Rejected request path: {}", err);
    let response = error_response(Error::invalid_input("client_id", "must be a whole number"));
    InternalError::from_response(err, response).into()
}

pub(crate) async fn list_clients(ctx: Data<Context>) -> actix_web::Result<HttpResponse> {
    match ctx.directory.list_all().await {
        Ok(clients) => Ok(HttpResponse::Ok().json(clients)),
        Err(err) => Ok(error_response(err)),
    }
}

pub(crate) async fn get_client(
    ctx: Data<Context>,
    path: Path<ClientId>,
) -> actix_web::Result<HttpResponse> {
    let client_id = path.into_inner();
    match ctx.directory.find_by_id(client_id).await {
        Ok(Some(client)) => {
            tracing::debug!("Retrieved client: {:?}", client);
            Ok(HttpResponse::Ok().json(client))
        }
        Ok(None) => {
            tracing::debug!("Client {} not found", client_id);
            Ok(error_response(Error::NotFound(client_id)))
        }
        Err(err) => Ok(error_response(err)),
    }
}

/// Creates the client when the body carries no id, replaces it otherwise.
pub(crate) async fn save_client(
    ctx: Data<Context>,
    body: Json<ClientRequest>,
) -> actix_web::Result<HttpResponse> {
    tracing::debug!("Saving client: {:?}", body);
    let body = body.into_inner();
    let id = body.id;
    let client = match body.into_client(id) {
        Ok(client) => client,
        Err(err) => return Ok(error_response(err)),
    };

    match ctx.directory.upsert(client).await {
        Ok(stored) if id.is_none() => Ok(HttpResponse::Created().json(stored)),
        Ok(stored) => Ok(HttpResponse::Ok().json(stored)),
        Err(err) => Ok(error_response(err)),
    }
}

pub(crate) async fn replace_client(
    ctx: Data<Context>,
    path: Path<ClientId>,
    body: Json<ClientRequest>,
) -> actix_web::Result<HttpResponse> {
    let client_id = path.into_inner();
    tracing::debug!("Replacing client {}: {:?}", client_id, body);

    let client = match body.into_inner().into_client(Some(client_id)) {
        Ok(client) => client,
        Err(err) => return Ok(error_response(err)),
    };

    match ctx.directory.upsert(client).await {
        Ok(stored) => Ok(HttpResponse::Ok().json(stored)),
        Err(err) => Ok(error_response(err)),
    }
}

pub(crate) async fn delete_client(
    ctx: Data<Context>,
    path: Path<ClientId>,
) -> actix_web::Result<HttpResponse> {
    let client_id = path.into_inner();
    tracing::debug!("Deleting client {}", client_id);

    match ctx.directory.delete_by_id(client_id).await {
        Ok(_) => Ok(HttpResponse::NoContent().finish()),
        Err(err) => Ok(error_response(err)),
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        context::{Config, Context},
        server::configure,
    };
    use actix_web::{http::StatusCode, test, web::Data, App};
    use directory::storage::{Storage, StorageKind};
    use memory_database::MemoryStore;
    use serde_json::{json, Value};

    fn context() -> Data<Context> {
        let config = Config {
            rust_log: "debug".into(),
            port: 0,
            storage: StorageKind::Memory,
            database: None,
        };
        Data::new(Context::new(config, Storage::Memory(MemoryStore::new())))
    }

    #[actix_web::test]
    async fn create_find_replace_delete() {
        let app = test::init_service(App::new().app_data(context()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/clients")
            .set_json(json!({"first_name": "Ana", "last_name": "Lopez", "membership_number": 101}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;
        assert_eq!(
            created,
            json!({"id": 1, "first_name": "Ana", "last_name": "Lopez", "membership_number": 101})
        );

        let req = test::TestRequest::post()
            .uri("/clients")
            .set_json(json!({"id": 1, "first_name": "Ana", "last_name": "Lopez", "membership_number": 202}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/clients/1").to_request();
        let found: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(found["membership_number"], 202);

        let req = test::TestRequest::delete().uri("/clients/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get().uri("/clients/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::get().uri("/clients").to_request();
        let listed: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed, json!([]));
    }

    #[actix_web::test]
    async fn put_replaces_all_fields() {
        let app = test::init_service(App::new().app_data(context()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/clients")
            .set_json(json!({"first_name": "Ana", "last_name": "Lopez", "membership_number": 101}))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::put()
            .uri("/clients/1")
            .set_json(json!({"first_name": "Bea", "membership_number": 5}))
            .to_request();
        let replaced: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            replaced,
            json!({"id": 1, "first_name": "Bea", "last_name": "", "membership_number": 5})
        );
    }

    #[actix_web::test]
    async fn unknown_ids_are_not_found() {
        let app = test::init_service(App::new().app_data(context()).configure(configure)).await;

        let req = test::TestRequest::put()
            .uri("/clients/9")
            .set_json(json!({"first_name": "Ana", "membership_number": 1}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "ERR_CLIENT_NOT_FOUND");

        let req = test::TestRequest::delete().uri("/clients/9").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::get().uri("/clients").to_request();
        let listed: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed, json!([]));
    }

    #[actix_web::test]
    async fn blank_first_name_is_rejected() {
        let app = test::init_service(App::new().app_data(context()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/clients")
            .set_json(json!({"first_name": "  ", "membership_number": 101}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "ERR_INVALID_INPUT");
    }

    #[actix_web::test]
    async fn malformed_bodies_are_invalid_input() {
        let app = test::init_service(App::new().app_data(context()).configure(configure)).await;

        for body in [
            json!({"first_name": "Ana", "membership_number": "abc"}),
            json!({"last_name": "Lopez", "membership_number": 101}),
        ] {
            let req = test::TestRequest::post()
                .uri("/clients")
                .set_json(body)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["code"], "ERR_INVALID_INPUT");
        }

        let req = test::TestRequest::post()
            .uri("/clients")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "ERR_INVALID_INPUT");

        let req = test::TestRequest::get().uri("/clients").to_request();
        let listed: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed, json!([]));
    }

    #[actix_web::test]
    async fn non_numeric_client_id_is_invalid_input() {
        let app = test::init_service(App::new().app_data(context()).configure(configure)).await;

        let req = test::TestRequest::get().uri("/clients/abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "ERR_INVALID_INPUT");
        assert_eq!(body["message"], "invalid client_id: must be a whole number");
    }

    #[actix_web::test]
    async fn unknown_route_is_not_found() {
        let app = test::init_service(App::new().app_data(context()).configure(configure)).await;

        let req = test::TestRequest::get().uri("/members").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
