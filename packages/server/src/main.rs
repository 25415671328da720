#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Binary entry point for the accident map server.
//!
//! Pass `--interactive` to be prompted for the bind address and port;
//! otherwise configuration comes from `BIND_ADDR`, `PORT`, and
//! `DATASET_PATH`.

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let interactive = std::env::args().any(|arg| arg == "--interactive");

    if interactive {
        accident_map_server::interactive::run().await
    } else {
        accident_map_server::run_server().await
    }
}
