use crate::client::Session;
use crate::error::ClientError;

/// Sends the session's composed request and prints the response view.
pub async fn run(session: &mut Session) -> Result<(), ClientError> {
    session.send().await?;
    println!("{}", session.view.render());
    Ok(())
}
