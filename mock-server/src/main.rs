use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    println!(
        "serving archive on http://{addr}/archive ({} available)",
        mock_server::SAMPLE_DATE
    );
    mock_server::run(listener).await
}
