use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::ServiceError;
use crate::service::ApiClient;
use crate::types::{BetHistoryQuery, BetRecord, Envelope, NewUser, User, UserData, UserUpdate};

/// Decode a raw response body into the standard `{ success, message, data }`
/// envelope, enforcing the `success` flag.
fn decode_envelope<T: DeserializeOwned>(body: Value) -> Result<T, ServiceError> {
    let envelope: Envelope<T> = serde_json::from_value(body)
        .map_err(|e| ServiceError::MalformedResponse(e.to_string()))?;
    if !envelope.success {
        let message = if envelope.message.is_empty() {
            "Request failed".to_string()
        } else {
            envelope.message
        };
        return Err(ServiceError::Api(message));
    }
    envelope
        .data
        .ok_or_else(|| ServiceError::MalformedResponse("envelope has no data field".into()))
}

/// Fetch every registered user.
pub async fn fetch_all_users(client: &ApiClient) -> Result<Vec<User>, ServiceError> {
    let body = client.get("/api/user/allusers").await?;
    let users: Vec<User> = decode_envelope(body)?;
    debug!("Fetched {} users", users.len());
    Ok(users)
}

/// Create a user through the admin endpoint, returning the created record.
pub async fn create_user(client: &ApiClient, new_user: &NewUser) -> Result<User, ServiceError> {
    let payload = serde_json::to_value(new_user)
        .map_err(|e| ServiceError::MalformedResponse(e.to_string()))?;
    let body = client.post("/api/admin/user", &payload).await?;
    decode_envelope(body)
}

/// Apply a partial update to a user.
///
/// The backend answers with the full user-data object
/// (`{ user, wallet, referrals }`), not just the user record.
pub async fn update_user(
    client: &ApiClient,
    id: u64,
    update: &UserUpdate,
) -> Result<UserData, ServiceError> {
    let payload = serde_json::to_value(update)
        .map_err(|e| ServiceError::MalformedResponse(e.to_string()))?;
    let body = client
        .call(Method::PUT, &format!("/api/user/user/{id}"), Some(&payload))
        .await?;
    decode_envelope(body)
}

/// Delete a user. The envelope's `success` flag is the boolean result.
pub async fn delete_user(client: &ApiClient, id: u64) -> Result<bool, ServiceError> {
    let body = client.delete(&format!("/api/user/user/{id}")).await?;
    let envelope: Envelope<Value> = serde_json::from_value(body)
        .map_err(|e| ServiceError::MalformedResponse(e.to_string()))?;
    Ok(envelope.success)
}

/// Fetch settled color bets matching the given filter.
pub async fn fetch_bet_history(
    client: &ApiClient,
    query: &BetHistoryQuery,
) -> Result<Vec<BetRecord>, ServiceError> {
    let payload = serde_json::to_value(query)
        .map_err(|e| ServiceError::MalformedResponse(e.to_string()))?;
    let body = client.post("/api/color/bet-history", &payload).await?;
    let records: Vec<BetRecord> = decode_envelope(body)?;
    debug!("Fetched {} bet records", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn envelope_success_yields_data() {
        let users: Vec<User> = decode_envelope(json!({
            "success": true,
            "message": "ok",
            "data": [{ "id": 1, "name": "Asha", "phone": "9000000001" }]
        }))
        .expect("decodes");
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Asha");
    }

    #[test]
    fn envelope_failure_carries_server_message() {
        let result: Result<Vec<User>, _> = decode_envelope(json!({
            "success": false,
            "message": "invalid phone",
            "data": []
        }));
        assert_eq!(result.expect_err("must fail"), ServiceError::Api("invalid phone".into()));
    }

    #[test]
    fn envelope_failure_without_message_falls_back() {
        let result: Result<Vec<User>, _> = decode_envelope(json!({ "success": false }));
        assert_eq!(
            result.expect_err("must fail"),
            ServiceError::Api("Request failed".into())
        );
    }

    #[test]
    fn envelope_missing_data_is_malformed() {
        let result: Result<Vec<User>, _> = decode_envelope(json!({ "success": true }));
        assert_eq!(
            result.expect_err("must fail").kind(),
            ErrorKind::MalformedResponse
        );
    }

    #[test]
    fn envelope_with_wrong_data_shape_is_malformed() {
        let result: Result<Vec<User>, _> = decode_envelope(json!({
            "success": true,
            "data": { "unexpected": "object" }
        }));
        assert_eq!(
            result.expect_err("must fail").kind(),
            ErrorKind::MalformedResponse
        );
    }

    #[tokio::test]
    async fn endpoint_wrappers_against_a_mock_backend() {
        use axum::extract::Path;
        use axum::routing::{get, post, put};
        use axum::{Json, Router};
        use tokio::net::TcpListener;
        use url::Url;

        let router = Router::new()
            .route(
                "/api/user/allusers",
                get(|| async {
                    Json(json!({
                        "success": true,
                        "data": [
                            { "id": 1, "name": "Asha", "phone": "9000000001" },
                            { "id": 2, "name": "Ravi", "phone": "9000000002" }
                        ]
                    }))
                }),
            )
            .route(
                "/api/admin/user",
                post(|Json(body): Json<Value>| async move {
                    Json(json!({
                        "success": true,
                        "data": { "id": 9, "name": body["name"], "phone": body["phone"] }
                    }))
                }),
            )
            .route(
                "/api/user/user/{id}",
                put(|Path(id): Path<u64>| async move {
                    Json(json!({
                        "success": true,
                        "data": {
                            "user": { "id": id, "name": "Asha", "phone": "9000000001" },
                            "wallet": [{ "id": 11, "balance": 5400 }],
                            "referrals": []
                        }
                    }))
                })
                .delete(|Path(_id): Path<u64>| async {
                    Json(json!({ "success": true, "message": "deleted" }))
                }),
            )
            .route(
                "/api/color/bet-history",
                post(|| async {
                    Json(json!({
                        "success": true,
                        "data": [{
                            "id": 77,
                            "userName": "Meena",
                            "period": "20260115-042",
                            "color": "green",
                            "amount": 100,
                            "payout": 196,
                            "status": "won"
                        }]
                    }))
                }),
            );

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("serve");
        });
        let client = ApiClient::new(Url::parse(&format!("http://{addr}")).expect("valid URL"));

        let users = fetch_all_users(&client).await.expect("users");
        assert_eq!(users.len(), 2);

        let created = create_user(
            &client,
            &NewUser {
                name: "Meena".into(),
                phone: "9000000003".into(),
                password: "secret".into(),
                referral_code: None,
            },
        )
        .await
        .expect("created");
        assert_eq!(created.name, "Meena");

        let data = update_user(&client, 1, &UserUpdate::default())
            .await
            .expect("updated");
        assert_eq!(data.user.id, 1);
        assert_eq!(data.wallet.len(), 1);

        assert!(delete_user(&client, 1).await.expect("deleted"));

        let records = fetch_bet_history(&client, &BetHistoryQuery::default())
            .await
            .expect("records");
        assert_eq!(records.len(), 1);
        assert!(records[0].is_win());
    }

    #[test]
    fn user_data_envelope_decodes_wallet_and_referrals() {
        let data: UserData = decode_envelope(json!({
            "success": true,
            "data": {
                "user": { "id": 3, "name": "Ravi", "phone": "9000000003" },
                "wallet": [{ "id": 11, "balance": 5400, "bonus": 120 }],
                "referrals": [{ "id": 4, "name": "Meena" }]
            }
        }))
        .expect("decodes");
        assert_eq!(data.user.id, 3);
        assert_eq!(data.wallet.len(), 1);
        assert_eq!(data.referrals.len(), 1);
    }
}
