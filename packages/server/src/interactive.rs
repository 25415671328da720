//! Interactive mode for the server.
//!
//! Prompts the user for the dataset location and the listen address before
//! starting the server, so the dashboard can be pointed at a fresh CSV
//! snapshot without touching environment variables.

use std::path::Path;

use dialoguer::{Confirm, Input};

use crate::DEFAULT_DATASET_PATH;

/// Runs the server in interactive mode, prompting for configuration.
///
/// Asks for the dataset CSV path, bind address, and port, sets the
/// corresponding environment variables (`DATASET_PATH`, `BIND_ADDR`,
/// `PORT`), and delegates to [`super::run_server`]. The dataset path must
/// point at an existing file and the port must be numeric; invalid input
/// re-prompts instead of failing at startup.
///
/// # Errors
///
/// Returns an `std::io::Result` error if the underlying server fails to
/// start.
#[allow(clippy::future_not_send)]
pub async fn run() -> std::io::Result<()> {
    println!("Accident Map Server");
    println!();

    let dataset_path: String = Input::new()
        .with_prompt("Dataset CSV path")
        .default(DEFAULT_DATASET_PATH.to_string())
        .validate_with(|input: &String| {
            if Path::new(input.trim()).is_file() {
                Ok(())
            } else {
                Err(format!("No such file: {}", input.trim()))
            }
        })
        .interact_text()
        .unwrap_or_else(|_| DEFAULT_DATASET_PATH.to_string());

    let bind_addr: String = Input::new()
        .with_prompt("Bind address")
        .default("127.0.0.1".to_string())
        .interact_text()
        .unwrap_or_else(|_| "127.0.0.1".to_string());

    let port: u16 = Input::new()
        .with_prompt("Port")
        .default(8056)
        .validate_with(|input: &u16| {
            if *input == 0 {
                Err("Port must be non-zero")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .unwrap_or(8056);

    // SAFETY: We are single-threaded at this point (before server starts) and
    // these variables are only read once during server initialisation.
    unsafe {
        std::env::set_var("DATASET_PATH", dataset_path.trim());
        std::env::set_var("BIND_ADDR", &bind_addr);
        std::env::set_var("PORT", port.to_string());
    }

    if !Confirm::new()
        .with_prompt(format!(
            "Serve '{}' on {bind_addr}:{port}?",
            dataset_path.trim()
        ))
        .default(true)
        .interact()
        .unwrap_or(true)
    {
        println!("Cancelled.");
        return Ok(());
    }

    super::run_server().await
}
