#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
  zvonko_lib::run().await
}
