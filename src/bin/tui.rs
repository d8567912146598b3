use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    cartui::tui::run().await
}
