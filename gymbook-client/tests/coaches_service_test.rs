use gymbook_client::{
    coaches_service, ClientConfig, ClientError, CoachesClient, CoachesService, HttpCoachesService,
};

fn http_service(server: &mockito::ServerGuard) -> HttpCoachesService {
    let config = ClientConfig::new(server.url(), false);
    HttpCoachesService::new(&config).unwrap()
}

#[tokio::test]
async fn test_list_coaches_unwraps_envelope() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/coaches")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "message": "Coaches retrieved successfully",
                "data": [
                    {
                        "id": "64f1a0c2b7e4d11234567801",
                        "email": "maria.gomez@gymbook.dev",
                        "first_name": "Maria",
                        "last_name": "Gomez"
                    }
                ]
            }"#,
        )
        .create_async()
        .await;

    let coaches = http_service(&server).list_coaches().await.unwrap();

    mock.assert_async().await;
    assert_eq!(coaches.len(), 1);
    assert_eq!(coaches[0].first_name, "Maria");
    assert_eq!(coaches[0].id, "64f1a0c2b7e4d11234567801");
}

#[tokio::test]
async fn test_get_coach_maps_404_to_not_found() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/coaches/64f1a0c2b7e4d19999999999")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": "Not found", "message": "Coach not found"}"#)
        .create_async()
        .await;

    let result = http_service(&server)
        .get_coach("64f1a0c2b7e4d19999999999")
        .await;

    assert!(matches!(result, Err(ClientError::NotFound)));
}

#[tokio::test]
async fn test_server_error_surfaces_status_and_message() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/coaches")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": "Database error", "message": "Database error: timeout"}"#)
        .create_async()
        .await;

    let result = http_service(&server).list_coaches().await;

    match result {
        Err(ClientError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Database error: timeout");
        }
        other => panic!("expected Api error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_coach_feedback_passes_page() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/coaches/64f1a0c2b7e4d11234567801/feedback?page=2")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "message": "Feedback retrieved successfully",
                "data": {
                    "items": [
                        {
                            "user_id": "64f1a0c2b7e4d11234567810",
                            "booking_id": "64f1a0c2b7e4d11234567820",
                            "message": "Solid coaching",
                            "rating": 4
                        }
                    ],
                    "page": 2,
                    "page_size": 10,
                    "total": 11
                }
            }"#,
        )
        .create_async()
        .await;

    let page = http_service(&server)
        .coach_feedback("64f1a0c2b7e4d11234567801", 2)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(page.page, 2);
    assert_eq!(page.total, 11);
    assert_eq!(page.items[0].rating, 4);
}

// Both factory arms expose the identical trait surface; a caller holding the
// result cannot tell which one it got except by behavior.
#[tokio::test]
async fn test_factory_selection_is_config_driven() {
    let mock_client = coaches_service(&ClientConfig::new("http://localhost:3000", true)).unwrap();
    assert!(matches!(mock_client, CoachesClient::Mock(_)));

    let coaches = mock_client.list_coaches().await.unwrap();
    assert!(!coaches.is_empty());

    let http_client = coaches_service(&ClientConfig::new("http://localhost:3000", false)).unwrap();
    assert!(matches!(http_client, CoachesClient::Http(_)));
}
