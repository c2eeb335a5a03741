//! Drives every client operation against the live server over real HTTP.
//!
//! Starts the server on a random port, executes the client's requests with
//! ureq, and checks that request building and response parsing agree with
//! what the server actually sends.

use todo_core::{ApiError, HttpMethod, HttpResponse, Todo, TodoClient};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// 4xx/5xx come back as data rather than `Err` so the client does the status
/// interpretation.
fn execute(req: todo_core::HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Patch, Some(body)) => {
            agent.patch(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Patch, None) => agent.patch(&req.path).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

fn start_server() -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

#[test]
fn seeded_lifecycle() {
    let addr = start_server();
    let client = TodoClient::new(&format!("http://{addr}"));

    // Step 1: list — the three seed records.
    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert_eq!(todos.len(), 3);
    assert_eq!(todos[0].item, "Clean room");

    // Step 2: get 2.
    let fetched = client.parse_get_todo(execute(client.build_get_todo(2))).unwrap();
    assert_eq!(
        fetched,
        Todo {
            id: 2,
            item: "Pet dog".to_string(),
            completed: false,
        }
    );

    // Step 3: toggle 2.
    let toggled = client.parse_toggle_todo(execute(client.build_toggle_todo(2))).unwrap();
    assert_eq!(toggled.id, 2);
    assert!(toggled.completed);

    // Step 4: get 99 — not found for both get and toggle.
    let err = client.parse_get_todo(execute(client.build_get_todo(99))).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
    let err = client.parse_toggle_todo(execute(client.build_toggle_todo(99))).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 5: create 4.
    let new_todo = Todo {
        id: 4,
        item: "Buy milk".to_string(),
        completed: false,
    };
    let req = client.build_create_todo(&new_todo).unwrap();
    let created = client.parse_create_todo(execute(req)).unwrap();
    assert_eq!(created, new_todo);

    // Step 6: list — four records, new one last, toggle persisted.
    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert_eq!(todos.len(), 4);
    assert_eq!(todos[3], new_todo);
    assert!(todos[1].completed);

    // Step 7: toggle 2 again — back to open.
    let toggled = client.parse_toggle_todo(execute(client.build_toggle_todo(2))).unwrap();
    assert!(!toggled.completed);
}

#[test]
fn not_found_message_matches_server() {
    assert_eq!(todo_core::NOT_FOUND_MESSAGE, todo_server::error::NOT_FOUND_MESSAGE);
}

#[test]
fn malformed_body_is_bad_request() {
    let addr = start_server();
    let client = TodoClient::new(&format!("http://{addr}"));

    let mut req = client.build_list_todos();
    req.method = HttpMethod::Post;
    req.body = Some(r#"{"id":"four"}"#.to_string());

    let err = client.parse_create_todo(execute(req)).unwrap_err();
    assert!(
        matches!(&err, ApiError::BadRequest(m) if m.starts_with("invalid todo body: ")),
        "{err}"
    );
}
