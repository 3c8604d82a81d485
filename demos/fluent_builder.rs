//! Builds a few requests with the fluent API and prints the descriptors a
//! transport would receive.
//!
//! Run with `RUST_LOG=debug` to see the builder's debug trace.

use reqforge::{BuilderConfig, ContentType, HttpMethod, RequestBuilder};
use serde::Serialize;

#[derive(Serialize, Debug)]
struct SerdeRequestType {
    message: String,
    data: Vec<String>,
}

fn main() -> reqforge::Result<()> {
    env_logger::init();

    let payload = SerdeRequestType {
        message: "Hello from reqforge".to_string(),
        data: vec!["item1".to_string(), "item2".to_string()],
    };

    let create = reqforge::post("https://api.example.com/teams/{team}/messages")
        .debug()
        .with_path_param("team", "core infra")?
        .with_query_param("notify", "true")?
        .with_bearer_auth("demo-token")?
        .accepts(ContentType::ApplicationJson)
        .with_json_body(&payload)?
        .build();
    println!("{create:#?}");

    let login = reqforge::post("https://auth.example.com/login")
        .with_form_params([("username", "alice"), ("password", "s3cr3t")])?
        .build();
    println!("{login:#?}");

    let config = BuilderConfig::new().debug(true).default_priority(1);
    let search_url = "https://api.example.com/search";
    let search = RequestBuilder::with_config(HttpMethod::Get, search_url, config)
        .with_query_values("tag", ["rust", "http"])?
        .declare_basic_auth()
        .build();
    println!(
        "{} {} (auth {:?}, priority {})",
        search.method(),
        search.url(),
        search.auth_type(),
        search.priority()
    );

    let transport_request = create.into_http_request()?;
    println!("transport sees {} {}", transport_request.method(), transport_request.uri());

    Ok(())
}
