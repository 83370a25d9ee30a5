use seances_backend::configuration::get_configuration;
use seances_backend::movies::MovieStore;
use seances_backend::startup;
use seances_backend::store::firestore::FirestoreStore;
use seances_backend::telemetry::{get_subscriber, init_subscriber};
use std::net::TcpListener;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("seances_backend", "info", std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration("configuration").expect(
        "Failed to read `configuration.json`. Please make sure it exists and is valid JSON.",
    );
    let listener = TcpListener::bind(("0.0.0.0", configuration.application_port))
        .expect("Failed to bind");
    let store = Arc::new(FirestoreStore::new(&configuration.firestore));
    let movie_store = MovieStore::new(store, configuration.collections.screenings_base.clone());
    startup::run_server(listener, movie_store)?.await
}
