use crate::movies::MovieStore;
use crate::routes::{get_reviews, get_search_results, health_check, movie_listings};
use actix_web::{
    dev::Server,
    web::{self, Data},
    App, HttpServer,
};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

use actix_cors::Cors;
use actix_web::http::header;
use dotenv::dotenv;
use std::env;

fn configure_cors(frontend_url: &str) -> Cors {
    let mut cors = Cors::default();
    cors = if frontend_url == "*" {
        cors.allow_any_origin()
    } else {
        cors.allowed_origin(frontend_url)
    };
    cors.allowed_methods(vec!["GET"])
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT])
        .allowed_header(header::CONTENT_TYPE)
        .max_age(3600)
}

pub fn run_server(listener: TcpListener, movie_store: MovieStore) -> Result<Server, std::io::Error> {
    dotenv().ok();
    let movie_store = Data::new(movie_store);
    let frontend_url = env::var("FRONTEND_URL").expect("FRONTEND_URL must be set");

    let server = HttpServer::new(move || {
        let cors = configure_cors(frontend_url.as_str());

        App::new()
            .wrap(cors)
            .wrap(TracingLogger::default())
            .route("/", web::get().to(health_check::handler))
            .route("/search", web::get().to(get_search_results))
            .route("/reviews", web::get().to(get_reviews))
            .service(movie_listings())
            .app_data(movie_store.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
