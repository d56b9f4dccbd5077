use std::collections::HashMap;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

/// Canned response for one request path.
#[derive(Debug, Clone)]
pub struct Route {
    pub status: u16,
    pub body: String,
}

impl Route {
    pub fn json(body: serde_json::Value) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: "error".to_string(),
        }
    }
}

/// In-process TheMealDB stand-in serving canned routes under `/api`.
pub struct MealDbStub {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
    shutdown_tx: Option<mpsc::Sender<()>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl MealDbStub {
    pub fn spawn(routes: HashMap<String, Route>) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("start mealdb stub server");
        let addr = server.server_addr();
        let base_url = format!("http://{addr}/api");

        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            let request = match server.recv_timeout(Duration::from_millis(50)) {
                Ok(Some(req)) => req,
                Ok(None) => continue,
                Err(_) => break,
            };

            let path = request
                .url()
                .strip_prefix("/api/")
                .unwrap_or(request.url())
                .to_string();
            seen.lock().unwrap().push(path.clone());

            let response = match routes.get(&path) {
                Some(route) => tiny_http::Response::from_string(route.body.clone())
                    .with_status_code(route.status),
                None => tiny_http::Response::from_string("not found").with_status_code(404),
            };
            let _ = request.respond(response);
        });

        Self {
            base_url,
            requests,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        }
    }

    /// Number of requests received for `path` (relative to the base URL).
    #[allow(dead_code)]
    pub fn hits(&self, path: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.as_str() == path)
            .count()
    }
}

impl Drop for MealDbStub {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
