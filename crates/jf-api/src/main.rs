#[tokio::main]
async fn main() {
    if let Err(err) = jf_api::run().await {
        tracing::error!(error = %err, "jf-api failed");
        std::process::exit(1);
    }
}
