#[tokio::main]
async fn main() -> anyhow::Result<()> {
    municipios_quiz::run().await
}
