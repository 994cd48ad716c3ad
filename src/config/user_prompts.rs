//! User prompts for first-time credential setup

use crate::error::AppError;
use tokio::io::{self, AsyncBufReadExt};

/// Prompts for the OAuth client id and secret and returns them trimmed.
///
/// Credentials are created at https://osu.ppy.sh/home/account/edit#oauth.
pub async fn prompt_for_credentials() -> Result<(String, String), AppError> {
    println!("OAuth client credentials are needed to query the osu! API.");
    println!("Create them at https://osu.ppy.sh/home/account/edit#oauth");

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin);

    println!("Client id: ");
    let mut client_id = String::new();
    reader.read_line(&mut client_id).await?;

    println!("Client secret: ");
    let mut client_secret = String::new();
    reader.read_line(&mut client_secret).await?;

    Ok((client_id.trim().to_string(), client_secret.trim().to_string()))
}
